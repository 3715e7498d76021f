use async_trait::async_trait;
use crm_core_db::models::contract::ContractModel;
use crm_core_db::repository::delete_batch::DeleteBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ContractRepositoryImpl;

impl ContractRepositoryImpl {
    pub(super) async fn delete_batch_impl(
        repo: &ContractRepositoryImpl,
        ids: &[i64],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query(r#"DELETE FROM contract WHERE id = ANY($1)"#)
            .bind(ids)
            .execute(repo.pool.as_ref())
            .await?;

        Ok(result.rows_affected() as usize)
    }
}

#[async_trait]
impl DeleteBatch<Postgres, ContractModel> for ContractRepositoryImpl {
    async fn delete_batch(&self, ids: &[i64]) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_batch_impl(self, ids).await
    }
}
