//! Dashboard recent activity feed.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use crm_core_api::domain::ActivityRecord;
use crm_core_api::service::ActivityFeedService;

use crate::auth::AuthUser;
use crate::error::HttpError;
use crate::server::AppState;

/// GET /api/activities/recent
///
/// Latest clients and contracts merged into one list, newest first.
pub async fn recent_activities(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<ActivityRecord>>, HttpError> {
    tracing::debug!(user_id = user.id, "Fetching recent activity");
    let records = state.activity_feed.recent_activity().await?;
    Ok(Json(records))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/recent", get(recent_activities))
}
