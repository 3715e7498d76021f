use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Repository trait for reading the most recent entities of a table
///
/// What "recent" means is entity specific: clients are ranked by descending id,
/// contracts by descending start date. Implementations must return at most
/// `limit` items, most recent first.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl FindRecent<Postgres, ContractModel> for ContractRepositoryImpl {
///     async fn find_recent(&self, limit: usize) -> Result<Vec<ContractModel>, Box<dyn Error + Send + Sync>> {
///         // SELECT ... ORDER BY start_date DESC LIMIT $1
///     }
/// }
/// ```
#[async_trait]
pub trait FindRecent<DB: Database, T: Identifiable>: Send + Sync {
    async fn find_recent(&self, limit: usize) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
