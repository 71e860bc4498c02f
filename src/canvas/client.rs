use crate::config::Config;
use crate::error::{upstream_error, AppResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::models::{Assignment, CalendarEvent, Course};

/// Client for the Canvas REST API
///
/// Holds the credentials loaded at startup; every request is a bearer-token
/// GET against `{base_url}/{path}`.
#[derive(Clone)]
pub struct CanvasClient {
    http: Client,
    base_url: String,
    token: String,
}

impl CanvasClient {
    /// Create a new client from the loaded configuration
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.clone(),
            token: config.canvas_token.clone(),
        }
    }

    /// The underlying HTTP client, shared with the ICS feed fetcher
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// List all courses visible to the token
    pub async fn courses(&self) -> AppResult<Vec<Course>> {
        self.get_list("api/v1/courses").await
    }

    /// List assignments for a single course
    pub async fn assignments(&self, course_id: &str) -> AppResult<Vec<Assignment>> {
        self.get_list(&format!("api/v1/courses/{}/assignments", course_id))
            .await
    }

    /// List calendar events matching a raw query string
    ///
    /// The query is passed through verbatim: Canvas expects repeated
    /// `context_codes[]` keys with literal brackets.
    pub async fn calendar_events(&self, query: &str) -> AppResult<Vec<CalendarEvent>> {
        self.get_list(&format!("api/v1/calendar_events?{}", query))
            .await
    }

    /// GET a relative API path and decode the response as a JSON array
    ///
    /// A non-200 status is treated as an empty list, matching what the
    /// dashboard has always shown for revoked tokens and unpublished
    /// courses. It is logged so the failure is at least visible.
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> AppResult<Vec<T>> {
        let url = Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|e| upstream_error(&format!("Invalid upstream URL: {}", e)))?;

        debug!(%url, "fetching from Canvas");

        let response = self
            .http
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await
            .map_err(|e| upstream_error(&format!("Request failed: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, path, "Canvas returned non-OK status, treating as empty");
            return Ok(Vec::new());
        }

        let body = response
            .text()
            .await
            .map_err(|e| upstream_error(&format!("Failed to read response body: {}", e)))?;

        Ok(serde_json::from_str(&body)?)
    }
}
