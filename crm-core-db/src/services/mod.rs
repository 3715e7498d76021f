pub mod clock;
pub mod activity_feed;

pub use clock::*;
pub use activity_feed::*;
