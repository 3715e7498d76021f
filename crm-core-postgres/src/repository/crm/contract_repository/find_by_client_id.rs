use crm_core_db::models::contract::ContractModel;
use crate::utils::TryFromRow;
use std::error::Error;

use super::repo_impl::{ContractRepositoryImpl, CONTRACT_COLUMNS};

impl ContractRepositoryImpl {
    /// All contracts of one client, latest start date first
    pub async fn find_by_client_id(
        &self,
        client_id: i64,
    ) -> Result<Vec<ContractModel>, Box<dyn Error + Send + Sync>> {
        let query = format!(
            "SELECT {CONTRACT_COLUMNS} FROM contract WHERE client_id = $1 ORDER BY start_date DESC, id DESC"
        );
        let rows = sqlx::query(&query)
            .bind(client_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.iter().map(ContractModel::try_from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::crm::client_repository::test_utils::create_test_client;
    use crate::test_helper::setup_test_context;
    use chrono::NaiveDate;
    use crm_core_db::repository::create_batch::CreateBatch;
    use super::super::test_utils::create_test_contract;

    #[tokio::test]
    #[ignore]
    #[serial_test::serial]
    async fn test_find_by_client_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let client_repo = &ctx.crm_repos().client_repository;
        let contract_repo = &ctx.crm_repos().contract_repository;

        let owners = client_repo
            .create_batch(vec![create_test_client("Alpha"), create_test_client("Beta")])
            .await?;
        let day = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        contract_repo
            .create_batch(vec![
                create_test_contract(owners[0].id, Some("A1"), day),
                create_test_contract(owners[1].id, Some("B1"), day),
                create_test_contract(owners[0].id, Some("A2"), day.succ_opt().unwrap()),
            ])
            .await?;

        let found = contract_repo.find_by_client_id(owners[0].id).await?;
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|c| c.client_id == owners[0].id));
        assert_eq!(found[0].display_title(), "A2");

        let none = contract_repo.find_by_client_id(owners[1].id + 1000).await?;
        assert!(none.is_empty());

        Ok(())
    }
}
