use async_trait::async_trait;
use crm_core_db::models::client::ClientModel;
use crm_core_db::repository::create_batch::CreateBatch;
use sqlx::{Postgres, Row};
use std::error::Error;

use super::repo_impl::ClientRepositoryImpl;

impl ClientRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &ClientRepositoryImpl,
        items: Vec<ClientModel>,
    ) -> Result<Vec<ClientModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut saved_items = Vec::with_capacity(items.len());
        let mut tx = repo.pool.begin().await?;

        for mut item in items {
            let row = sqlx::query(
                r#"
                INSERT INTO client (name, email, phone)
                VALUES ($1, $2, $3)
                RETURNING id
                "#,
            )
            .bind(item.name.as_str())
            .bind(item.email.as_ref().map(|s| s.as_str()))
            .bind(item.phone.as_ref().map(|s| s.as_str()))
            .fetch_one(&mut *tx)
            .await?;

            item.id = row.try_get("id")?;
            saved_items.push(item);
        }

        tx.commit().await?;
        tracing::debug!(count = saved_items.len(), "Created clients");

        Ok(saved_items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, ClientModel> for ClientRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<ClientModel>,
    ) -> Result<Vec<ClientModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use crm_core_db::repository::create_batch::CreateBatch;
    use super::super::test_utils::{create_test_client, create_test_client_with_contact};

    #[tokio::test]
    #[ignore]
    #[serial_test::serial]
    async fn test_create_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let client_repo = &ctx.crm_repos().client_repository;

        let clients = vec![
            create_test_client("Dupont SARL"),
            create_test_client_with_contact("Martin & Fils", "contact@martin.fr", "0102030405"),
        ];
        let saved = client_repo.create_batch(clients).await?;

        assert_eq!(saved.len(), 2);
        assert!(saved[0].id > 0);
        assert!(saved[1].id > saved[0].id);
        assert_eq!(saved[1].email.as_ref().unwrap().as_str(), "contact@martin.fr");

        Ok(())
    }

    #[tokio::test]
    #[ignore]
    #[serial_test::serial]
    async fn test_create_batch_empty() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let client_repo = &ctx.crm_repos().client_repository;

        let saved = client_repo.create_batch(Vec::new()).await?;
        assert!(saved.is_empty());

        Ok(())
    }
}
