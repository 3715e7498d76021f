pub mod models;
pub mod repository;
pub mod services;

pub use models::*;
pub use services::*;
