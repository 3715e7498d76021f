use async_trait::async_trait;
use crm_core_db::models::client::ClientModel;
use crm_core_db::repository::load_batch::LoadBatch;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ClientRepositoryImpl;

impl ClientRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &ClientRepositoryImpl,
        ids: &[i64],
    ) -> Result<Vec<Option<ClientModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query(r#"SELECT id, name, email, phone FROM client WHERE id = ANY($1)"#)
            .bind(ids)
            .fetch_all(repo.pool.as_ref())
            .await?;

        let mut item_map = std::collections::HashMap::new();
        for row in rows {
            let item = ClientModel::try_from_row(&row)?;
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
impl LoadBatch<Postgres, ClientModel> for ClientRepositoryImpl {
    async fn load_batch(
        &self,
        ids: &[i64],
    ) -> Result<Vec<Option<ClientModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use crm_core_db::repository::create_batch::CreateBatch;
    use crm_core_db::repository::load::Load;
    use crm_core_db::repository::load_batch::LoadBatch;
    use super::super::test_utils::create_test_client;

    #[tokio::test]
    #[ignore]
    #[serial_test::serial]
    async fn test_load_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let client_repo = &ctx.crm_repos().client_repository;

        let saved = client_repo
            .create_batch(vec![create_test_client("Alpha"), create_test_client("Beta")])
            .await?;
        let missing_id = saved[1].id + 1000;

        let loaded = client_repo
            .load_batch(&[saved[1].id, missing_id, saved[0].id])
            .await?;

        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].as_ref().unwrap().name.as_str(), "Beta");
        assert!(loaded[1].is_none());
        assert_eq!(loaded[2].as_ref().unwrap().id, saved[0].id);

        Ok(())
    }

    #[tokio::test]
    #[ignore]
    #[serial_test::serial]
    async fn test_load_missing_client_is_error() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let client_repo = &ctx.crm_repos().client_repository;

        let saved = client_repo.create_batch(vec![create_test_client("Alpha")]).await?;

        assert_eq!(client_repo.load(saved[0].id).await?.name.as_str(), "Alpha");
        assert!(client_repo.load(saved[0].id + 1).await.is_err());

        Ok(())
    }
}
