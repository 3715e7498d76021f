use async_trait::async_trait;
use crm_core_db::models::contract::ContractModel;
use crm_core_db::repository::load_batch::LoadBatch;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{ContractRepositoryImpl, CONTRACT_COLUMNS};

impl ContractRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &ContractRepositoryImpl,
        ids: &[i64],
    ) -> Result<Vec<Option<ContractModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!("SELECT {CONTRACT_COLUMNS} FROM contract WHERE id = ANY($1)");
        let rows = sqlx::query(&query)
            .bind(ids)
            .fetch_all(repo.pool.as_ref())
            .await?;

        let mut item_map = std::collections::HashMap::new();
        for row in rows {
            let item = ContractModel::try_from_row(&row)?;
            item_map.insert(item.id, item);
        }

        let mut result = Vec::with_capacity(ids.len());
        for id in ids {
            result.push(item_map.remove(id));
        }
        Ok(result)
    }
}

#[async_trait]
impl LoadBatch<Postgres, ContractModel> for ContractRepositoryImpl {
    async fn load_batch(
        &self,
        ids: &[i64],
    ) -> Result<Vec<Option<ContractModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}
