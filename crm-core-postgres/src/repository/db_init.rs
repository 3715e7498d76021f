//! Schema setup and teardown
//!
//! Executes the SQL files shipped in `migrations/` (ascending) and
//! `cleanup/` (descending). Migration files are idempotent, so
//! `init_database` can run on every start.

use sqlx::PgPool;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Create the CRM schema by executing migration files in ascending order
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use crm_core_postgres::repository::db_init::init_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    apply_scripts(pool, &script_dir("migrations"), Direction::Up).await
}

/// Drop the CRM schema by executing cleanup files in descending order
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    apply_scripts(pool, &script_dir("cleanup"), Direction::Down).await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

fn script_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(name)
}

/// `.sql` files of `dir`, ordered by file name (reversed for [`Direction::Down`]).
fn sql_scripts(dir: &Path, direction: Direction) -> io::Result<Vec<PathBuf>> {
    let mut scripts = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?;
    scripts.retain(|path| path.extension().is_some_and(|ext| ext == "sql"));
    scripts.sort();
    if direction == Direction::Down {
        scripts.reverse();
    }
    Ok(scripts)
}

/// Runs every script of `dir` inside one transaction, so a failing file
/// leaves the schema untouched.
async fn apply_scripts(pool: &PgPool, dir: &Path, direction: Direction) -> Result<(), sqlx::Error> {
    let scripts = sql_scripts(dir, direction)?;
    let mut tx = pool.begin().await?;
    for script in &scripts {
        let sql = fs::read_to_string(script)?;
        tracing::debug!(file = %script.display(), "Applying SQL script");
        sqlx::raw_sql(&sql).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!(count = scripts.len(), dir = %dir.display(), "Applied SQL scripts");
    Ok(())
}
