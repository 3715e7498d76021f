pub mod activities;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::server::AppState;

/// All HTTP routes, without middleware.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .nest("/api/activities", activities::router())
}
