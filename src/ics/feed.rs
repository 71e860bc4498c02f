use crate::error::{feed_error, AppResult};
use ical::IcalParser;
use reqwest::Client;
use std::io::BufReader;
use tracing::debug;

use super::models::Event;

/// Fetch one ICS feed and parse its events
pub async fn fetch_feed(client: &Client, url: &str) -> AppResult<Vec<Event>> {
    debug!(url, "fetching calendar feed");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| feed_error(&format!("Failed to fetch {}: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(feed_error(&format!("Feed {} returned HTTP {}", url, status)));
    }

    let body = response
        .text()
        .await
        .map_err(|e| feed_error(&format!("Failed to read feed {}: {}", url, e)))?;

    parse_feed(&body)
}

/// Parse an ICS document into events
pub fn parse_feed(data: &str) -> AppResult<Vec<Event>> {
    let reader = BufReader::new(data.as_bytes());
    let mut events = Vec::new();

    for calendar in IcalParser::new(reader) {
        let calendar = calendar.map_err(|e| feed_error(&format!("Invalid calendar data: {}", e)))?;
        events.extend(calendar.events.iter().map(Event::from));
    }

    Ok(events)
}
