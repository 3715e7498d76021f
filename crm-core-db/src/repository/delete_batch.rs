use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for deleting multiple entities by their IDs
#[async_trait]
pub trait DeleteBatch<DB: Database, T: Identifiable>: Send + Sync {
    /// Delete the entities with the given ids
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of rows actually deleted; unknown ids are skipped
    /// * `Err` - An error if the query could not be executed
    async fn delete_batch(&self, ids: &[i64]) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
