use async_trait::async_trait;
use crm_core_db::models::client::ClientModel;
use crm_core_db::repository::find_recent::FindRecent;
use crate::utils::{limit_as_i64, TryFromRow};
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ClientRepositoryImpl;

impl ClientRepositoryImpl {
    /// Most recently inserted clients, newest first. The id sequence stands in
    /// for a creation time, which the table does not have.
    pub(super) async fn find_recent_impl(
        repo: &ClientRepositoryImpl,
        limit: usize,
    ) -> Result<Vec<ClientModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, phone
            FROM client
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(limit_as_i64(limit)?)
        .fetch_all(repo.pool.as_ref())
        .await?;

        rows.iter().map(ClientModel::try_from_row).collect()
    }
}

#[async_trait]
impl FindRecent<Postgres, ClientModel> for ClientRepositoryImpl {
    async fn find_recent(&self, limit: usize) -> Result<Vec<ClientModel>, Box<dyn Error + Send + Sync>> {
        Self::find_recent_impl(self, limit).await
    }
}
