//! Server configuration, read from the process environment.

use crm_core_db::services::ActivityFeedConfig;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value {value:?} for environment variable {key}")]
    Invalid { key: &'static str, value: String },
}

/// Configuration for the CRM server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host to bind (`HOST`, default `"127.0.0.1"`).
    pub host: String,
    /// Port to bind (`PORT`, default `5000`).
    pub port: u16,
    /// PostgreSQL connection string (`DATABASE_URL`, required).
    pub database_url: String,
    /// Pool size (`DATABASE_MAX_CONNECTIONS`, default `5`).
    pub database_max_connections: u32,
    /// HS256 secret used to verify bearer tokens (`JWT_SECRET`, required).
    pub jwt_secret: String,
    /// Apply the SQL files in `migrations/` at startup (`RUN_MIGRATIONS`, default `false`).
    pub run_migrations: bool,
    /// `ACTIVITY_CLIENT_LIMIT`, `ACTIVITY_CONTRACT_LIMIT` and `ACTIVITY_TOP_N`.
    pub activity_feed: ActivityFeedConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ActivityFeedConfig::default();

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 5000)?,
            database_url: required(&lookup, "DATABASE_URL")?,
            database_max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            jwt_secret: required(&lookup, "JWT_SECRET")?,
            run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", false)?,
            activity_feed: ActivityFeedConfig {
                client_limit: parse_or(&lookup, "ACTIVITY_CLIENT_LIMIT", defaults.client_limit)?,
                contract_limit: parse_or(&lookup, "ACTIVITY_CONTRACT_LIMIT", defaults.contract_limit)?,
                top_n: parse_or(&lookup, "ACTIVITY_TOP_N", defaults.top_n)?,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
