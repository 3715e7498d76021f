pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use server::{AppState, CrmServer};
