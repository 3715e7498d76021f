pub mod load;
pub mod load_batch;
pub mod create_batch;
pub mod delete_batch;
pub mod find_recent;

// Re-exports
pub use load::*;
pub use load_batch::*;
pub use create_batch::*;
pub use delete_batch::*;
pub use find_recent::*;
