use async_trait::async_trait;
use crm_core_db::models::contract::ContractModel;
use crm_core_db::repository::{load::Load, load_batch::LoadBatch};
use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, PgPool, Postgres, Row};
use std::error::Error;
use std::sync::Arc;

/// Columns selected by every contract query, in `TryFromRow` order
pub(super) const CONTRACT_COLUMNS: &str =
    "id, title, amount, start_date, end_date, status, client_id";

pub struct ContractRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl ContractRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for ContractModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ContractModel {
            id: row.try_get("id")?,
            title: get_optional_heapless_string(row, "title")?,
            amount: row.try_get("amount")?,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
            status: get_heapless_string(row, "status")?,
            client_id: row.try_get("client_id")?,
        })
    }
}

#[async_trait]
impl Load<Postgres, ContractModel> for ContractRepositoryImpl {
    async fn load(&self, id: i64) -> Result<ContractModel, Box<dyn Error + Send + Sync>> {
        let results = self.load_batch(&[id]).await?;
        results
            .into_iter()
            .next()
            .flatten()
            .ok_or_else(|| format!("Contract {id} not found").into())
    }
}
