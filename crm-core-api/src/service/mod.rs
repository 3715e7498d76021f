pub mod activity_feed;

pub use activity_feed::*;
