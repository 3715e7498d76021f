use crm_core_db::services::{ActivityFeedAggregator, ActivityFeedConfig, Clock};
use sqlx::{PgPool, Postgres};
use std::sync::Arc;

use crate::repository::crm::CrmRepositories;

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    /// Create client and contract repositories sharing the pool
    pub fn create_crm_repositories(&self) -> CrmRepositories {
        CrmRepositories::new(&self.pool)
    }

    /// Build the recent activity aggregator over the client and contract tables
    ///
    /// Each repository checks out its own pooled connection, so the two reads of
    /// one aggregation run concurrently.
    pub fn create_activity_feed(
        &self,
        clock: Arc<dyn Clock>,
        config: ActivityFeedConfig,
    ) -> ActivityFeedAggregator<Postgres> {
        let repos = self.create_crm_repositories();
        ActivityFeedAggregator::new(
            repos.client_repository,
            repos.contract_repository,
            clock,
            config,
        )
    }
}
