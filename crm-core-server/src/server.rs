//! Axum HTTP server for the CRM backend.

use anyhow::Context;
use axum::Router;
use crm_core_api::service::ActivityFeedService;
use crm_core_db::services::SystemClock;
use crm_core_postgres::PostgresRepositories;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::JwtVerifier;
use crate::config::ServerConfig;
use crate::routes;

/// Shared state accessible from Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Recent activity feed backing the dashboard.
    pub activity_feed: Arc<dyn ActivityFeedService>,
    /// Bearer token verifier.
    pub jwt: Arc<JwtVerifier>,
}

/// The CRM HTTP server.
pub struct CrmServer {
    config: ServerConfig,
    state: AppState,
}

impl CrmServer {
    pub fn new(config: ServerConfig, activity_feed: Arc<dyn ActivityFeedService>) -> Self {
        let jwt = Arc::new(JwtVerifier::new(&config.jwt_secret));
        Self {
            config,
            state: AppState { activity_feed, jwt },
        }
    }

    /// Wire the server to PostgreSQL-backed services using the wall clock.
    pub fn from_repositories(config: ServerConfig, repos: &PostgresRepositories) -> Self {
        let feed = repos.create_activity_feed(Arc::new(SystemClock), config.activity_feed);
        Self::new(config, Arc::new(feed))
    }

    /// Build the Axum router with all routes and middleware.
    pub fn router(&self) -> Router {
        routes::router()
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Bind and serve until Ctrl-C.
    pub async fn serve(self) -> anyhow::Result<()> {
        let address = self.config.bind_address();
        let listener = tokio::net::TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {address}"))?;

        tracing::info!(%address, "CRM server listening");
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        tracing::info!("CRM server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
