use reqwest::Client;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{info, warn};

use super::feed::fetch_feed;
use super::models::Event;

/// Fetch and parse a set of ICS feeds concurrently, collecting every event
///
/// One task per feed, scoped to this call: results are gathered by joining
/// the tasks, and whatever is still running when the deadline elapses is
/// aborted when the set drops. A failing feed is logged and skipped, it
/// never fails the whole aggregation.
pub async fn collect_events(client: &Client, urls: Vec<String>, deadline: Duration) -> Vec<Event> {
    let mut tasks = JoinSet::new();

    for url in urls {
        let client = client.clone();
        tasks.spawn(async move {
            let events = fetch_feed(&client, &url).await;
            (url, events)
        });
    }

    let mut events = Vec::new();
    let drain = async {
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((_, Ok(parsed))) => events.extend(parsed),
                Ok((url, Err(e))) => warn!(url, error = %e, "skipping calendar feed"),
                Err(e) => warn!(error = %e, "calendar feed task failed"),
            }
        }
    };

    if timeout(deadline, drain).await.is_err() {
        warn!(
            deadline_ms = deadline.as_millis() as u64,
            "calendar feed deadline elapsed, responding with partial results"
        );
    }

    info!(count = events.len(), "collected calendar feed events");
    events
}
