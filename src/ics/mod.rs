mod aggregator;
mod feed;
pub mod models;

pub use aggregator::collect_events;
pub use feed::{fetch_feed, parse_feed};
pub use models::Event;
