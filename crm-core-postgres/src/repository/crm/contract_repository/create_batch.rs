use async_trait::async_trait;
use crm_core_db::models::contract::ContractModel;
use crm_core_db::repository::create_batch::CreateBatch;
use sqlx::{Postgres, Row};
use std::error::Error;

use super::repo_impl::ContractRepositoryImpl;

impl ContractRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &ContractRepositoryImpl,
        items: Vec<ContractModel>,
    ) -> Result<Vec<ContractModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut saved_items = Vec::with_capacity(items.len());
        let mut tx = repo.pool.begin().await?;

        for mut item in items {
            let row = sqlx::query(
                r#"
                INSERT INTO contract (title, amount, start_date, end_date, status, client_id)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id
                "#,
            )
            .bind(item.title.as_ref().map(|s| s.as_str()))
            .bind(item.amount)
            .bind(item.start_date)
            .bind(item.end_date)
            .bind(item.status.as_str())
            .bind(item.client_id)
            .fetch_one(&mut *tx)
            .await?;

            item.id = row.try_get("id")?;
            saved_items.push(item);
        }

        tx.commit().await?;
        tracing::debug!(count = saved_items.len(), "Created contracts");

        Ok(saved_items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, ContractModel> for ContractRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<ContractModel>,
    ) -> Result<Vec<ContractModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::crm::client_repository::test_utils::create_test_client;
    use crate::test_helper::setup_test_context;
    use chrono::NaiveDate;
    use crm_core_db::repository::create_batch::CreateBatch;
    use crm_core_db::repository::load::Load;
    use rust_decimal::Decimal;
    use super::super::test_utils::create_test_contract;

    #[tokio::test]
    #[ignore]
    #[serial_test::serial]
    async fn test_create_batch_round_trips_fields() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let client_repo = &ctx.crm_repos().client_repository;
        let contract_repo = &ctx.crm_repos().contract_repository;

        let owner = client_repo.create_batch(vec![create_test_client("Alpha")]).await?;

        let mut contract = create_test_contract(
            owner[0].id,
            Some("Maintenance annuelle"),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        );
        contract.amount = Decimal::new(1_234_567, 2);
        contract.end_date = NaiveDate::from_ymd_opt(2025, 2, 28);

        let saved = contract_repo.create_batch(vec![contract.clone()]).await?;
        assert_eq!(saved.len(), 1);
        assert!(saved[0].id > 0);

        let loaded = contract_repo.load(saved[0].id).await?;
        assert_eq!(loaded.title, contract.title);
        assert_eq!(loaded.amount, Decimal::new(1_234_567, 2));
        assert_eq!(loaded.start_date, contract.start_date);
        assert_eq!(loaded.end_date, contract.end_date);
        assert_eq!(loaded.status.as_str(), "actif");
        assert_eq!(loaded.client_id, owner[0].id);

        Ok(())
    }

    #[tokio::test]
    #[ignore]
    #[serial_test::serial]
    async fn test_create_batch_rejects_unknown_client() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let contract_repo = &ctx.crm_repos().contract_repository;

        let result = contract_repo
            .create_batch(vec![create_test_contract(
                999_999,
                None,
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            )])
            .await;

        assert!(result.is_err());

        Ok(())
    }
}
