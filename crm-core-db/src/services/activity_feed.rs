use async_trait::async_trait;
use crm_core_api::domain::{ActivityRecord, ActivityType};
use crm_core_api::error::{ApiError, ApiResult};
use crm_core_api::service::ActivityFeedService;
use sqlx::Database;
use std::sync::Arc;

use crate::models::activity_source::ActivitySource;
use crate::models::client::ClientModel;
use crate::models::contract::ContractModel;
use crate::repository::find_recent::FindRecent;
use crate::services::clock::Clock;

/// Limits applied by [`ActivityFeedAggregator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityFeedConfig {
    /// Number of most recent clients to read
    pub client_limit: usize,
    /// Number of most recent contracts to read
    pub contract_limit: usize,
    /// Maximum length of the merged feed
    pub top_n: usize,
}

impl Default for ActivityFeedConfig {
    fn default() -> Self {
        Self {
            client_limit: 5,
            contract_limit: 5,
            top_n: 10,
        }
    }
}

/// Builds the dashboard "recent activity" feed from the client and contract tables.
///
/// Both tables are read concurrently and the call waits for both. Clients have no
/// creation time and are stamped with the clock instant read at the start of the
/// call, so a batch of clients always shares one timestamp and ranks at or near the
/// top. Contracts are ranked by their start date. The merged list is sorted newest
/// first and cut to `top_n`.
///
/// If either read fails the whole call fails with [`ApiError::SourceFetchFailure`].
pub struct ActivityFeedAggregator<DB: Database> {
    clients: Arc<dyn FindRecent<DB, ClientModel>>,
    contracts: Arc<dyn FindRecent<DB, ContractModel>>,
    clock: Arc<dyn Clock>,
    config: ActivityFeedConfig,
}

impl<DB: Database> ActivityFeedAggregator<DB> {
    pub fn new(
        clients: Arc<dyn FindRecent<DB, ClientModel>>,
        contracts: Arc<dyn FindRecent<DB, ContractModel>>,
        clock: Arc<dyn Clock>,
        config: ActivityFeedConfig,
    ) -> Self {
        Self {
            clients,
            contracts,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &ActivityFeedConfig {
        &self.config
    }

    pub async fn aggregate(&self) -> ApiResult<Vec<ActivityRecord>> {
        let now = self.clock.now();
        let ActivityFeedConfig {
            client_limit,
            contract_limit,
            top_n,
        } = self.config;

        let fetch_clients = async {
            self.clients
                .find_recent(client_limit)
                .await
                .map_err(|e| fetch_failure(ActivityType::Client, e))
        };
        let fetch_contracts = async {
            self.contracts
                .find_recent(contract_limit)
                .await
                .map_err(|e| fetch_failure(ActivityType::Contract, e))
        };

        let (clients, contracts) = tokio::try_join!(fetch_clients, fetch_contracts)?;

        let mut records: Vec<ActivityRecord> = clients
            .into_iter()
            .take(client_limit)
            .map(ActivitySource::Client)
            .chain(
                contracts
                    .into_iter()
                    .take(contract_limit)
                    .map(ActivitySource::Contract),
            )
            .map(|source| source.into_record(now))
            .collect();

        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records.truncate(top_n);

        tracing::debug!(count = records.len(), "Built recent activity feed");
        Ok(records)
    }
}

fn fetch_failure(
    source_type: ActivityType,
    error: Box<dyn std::error::Error + Send + Sync>,
) -> ApiError {
    tracing::error!(source = %source_type, error = %error, "Failed to fetch recent activity source");
    ApiError::source_fetch_failure(source_type, error.to_string())
}

#[async_trait]
impl<DB: Database> ActivityFeedService for ActivityFeedAggregator<DB> {
    async fn recent_activity(&self) -> ApiResult<Vec<ActivityRecord>> {
        self.aggregate().await
    }
}
