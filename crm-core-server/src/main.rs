use anyhow::Context;
use crm_core_postgres::repository::db_init::init_database;
use crm_core_postgres::PostgresRepositories;
use crm_core_server::logging::init_tracing;
use crm_core_server::{CrmServer, ServerConfig};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env().context("Invalid server configuration")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    if config.run_migrations {
        init_database(&pool).await.context("Failed to apply migrations")?;
        tracing::info!("Database schema is up to date");
    }

    let repos = PostgresRepositories::new(Arc::new(pool));
    CrmServer::from_repositories(config, &repos).serve().await
}
