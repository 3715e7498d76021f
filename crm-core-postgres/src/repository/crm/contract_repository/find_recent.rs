use async_trait::async_trait;
use crm_core_db::models::contract::ContractModel;
use crm_core_db::repository::find_recent::FindRecent;
use crate::utils::{limit_as_i64, TryFromRow};
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{ContractRepositoryImpl, CONTRACT_COLUMNS};

impl ContractRepositoryImpl {
    /// Contracts with the latest start dates, newest first.
    /// Contracts starting on the same day are ordered by descending id.
    pub(super) async fn find_recent_impl(
        repo: &ContractRepositoryImpl,
        limit: usize,
    ) -> Result<Vec<ContractModel>, Box<dyn Error + Send + Sync>> {
        let query = format!(
            "SELECT {CONTRACT_COLUMNS} FROM contract ORDER BY start_date DESC, id DESC LIMIT $1"
        );
        let rows = sqlx::query(&query)
            .bind(limit_as_i64(limit)?)
            .fetch_all(repo.pool.as_ref())
            .await?;

        rows.iter().map(ContractModel::try_from_row).collect()
    }
}

#[async_trait]
impl FindRecent<Postgres, ContractModel> for ContractRepositoryImpl {
    async fn find_recent(&self, limit: usize) -> Result<Vec<ContractModel>, Box<dyn Error + Send + Sync>> {
        Self::find_recent_impl(self, limit).await
    }
}
