pub mod identifiable;
pub mod client;
pub mod contract;
pub mod activity_source;

// Re-exports
pub use identifiable::*;
pub use client::*;
pub use contract::*;
pub use activity_source::*;
