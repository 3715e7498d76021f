use async_trait::async_trait;

use crate::domain::ActivityRecord;
use crate::error::ApiResult;

/// Service producing the dashboard "recent activity" feed.
///
/// Implementations read the current state of the data sources on every call and
/// return at most their configured number of records, most recent first.
/// Any source failure fails the whole call; no partial feed is ever returned.
#[async_trait]
pub trait ActivityFeedService: Send + Sync {
    async fn recent_activity(&self) -> ApiResult<Vec<ActivityRecord>>;
}
