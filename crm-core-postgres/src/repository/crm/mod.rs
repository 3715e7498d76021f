pub mod client_repository;
pub mod contract_repository;

pub use client_repository::ClientRepositoryImpl;
pub use contract_repository::ContractRepositoryImpl;

use sqlx::PgPool;
use std::sync::Arc;

/// Client and contract repositories sharing one pool
pub struct CrmRepositories {
    pub client_repository: Arc<ClientRepositoryImpl>,
    pub contract_repository: Arc<ContractRepositoryImpl>,
}

impl CrmRepositories {
    pub fn new(pool: &Arc<PgPool>) -> Self {
        Self {
            client_repository: Arc::new(ClientRepositoryImpl::new(pool.clone())),
            contract_repository: Arc::new(ContractRepositoryImpl::new(pool.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::database_url;

    #[tokio::test]
    async fn test_repositories_share_one_pool() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let pool = Arc::new(PgPool::connect_lazy(&database_url())?);

        let repos = CrmRepositories::new(&pool);

        assert!(Arc::ptr_eq(&repos.client_repository.pool, &pool));
        assert!(Arc::ptr_eq(&repos.contract_repository.pool, &pool));

        Ok(())
    }
}
