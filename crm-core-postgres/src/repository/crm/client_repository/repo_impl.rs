use async_trait::async_trait;
use crm_core_db::models::client::ClientModel;
use crm_core_db::repository::{load::Load, load_batch::LoadBatch};
use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, PgPool, Postgres, Row};
use std::error::Error;
use std::sync::Arc;

pub struct ClientRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl ClientRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for ClientModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ClientModel {
            id: row.try_get("id")?,
            name: get_heapless_string(row, "name")?,
            email: get_optional_heapless_string(row, "email")?,
            phone: get_optional_heapless_string(row, "phone")?,
        })
    }
}

#[async_trait]
impl Load<Postgres, ClientModel> for ClientRepositoryImpl {
    async fn load(&self, id: i64) -> Result<ClientModel, Box<dyn Error + Send + Sync>> {
        let results = self.load_batch(&[id]).await?;
        results
            .into_iter()
            .next()
            .flatten()
            .ok_or_else(|| format!("Client {id} not found").into())
    }
}
