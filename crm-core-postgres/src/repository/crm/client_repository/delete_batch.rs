use async_trait::async_trait;
use crm_core_db::models::client::ClientModel;
use crm_core_db::repository::delete_batch::DeleteBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ClientRepositoryImpl;

impl ClientRepositoryImpl {
    pub(super) async fn delete_batch_impl(
        repo: &ClientRepositoryImpl,
        ids: &[i64],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        // Contracts of deleted clients go with them (ON DELETE CASCADE)
        let result = sqlx::query(r#"DELETE FROM client WHERE id = ANY($1)"#)
            .bind(ids)
            .execute(repo.pool.as_ref())
            .await?;

        Ok(result.rows_affected() as usize)
    }
}

#[async_trait]
impl DeleteBatch<Postgres, ClientModel> for ClientRepositoryImpl {
    async fn delete_batch(&self, ids: &[i64]) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_batch_impl(self, ids).await
    }
}
