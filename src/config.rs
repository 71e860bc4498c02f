use crate::error::{env_error, AppResult};
use dotenvy::dotenv;
use std::env;

/// Default ICS aggregation deadline in milliseconds
pub const DEFAULT_FEED_TIMEOUT_MS: u64 = 1000;

/// Process-wide configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Canvas API bearer token
    pub canvas_token: String,
    /// Canvas tenant subdomain (`{school}.instructure.com`)
    pub canvas_school: String,
    /// Base URL for the Canvas API, derived from the school unless overridden
    pub base_url: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Directory served at the root path
    pub static_dir: String,
    /// Deadline for collecting per-course ICS feeds, in milliseconds
    pub feed_timeout_ms: u64,
}

impl Config {
    /// Load configuration from the environment
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Required environment variables
        let canvas_token = env::var("CANVAS_TOKEN").map_err(|_| env_error("CANVAS_TOKEN"))?;
        let canvas_school = env::var("CANVAS_SCHOOL").map_err(|_| env_error("CANVAS_SCHOOL"))?;

        // CANVAS_BASE_URL mainly exists so tests can point the client at a
        // local mock server
        let base_url = env::var("CANVAS_BASE_URL")
            .unwrap_or_else(|_| format!("https://{}.instructure.com", canvas_school))
            .trim_end_matches('/')
            .to_string();

        let port = env::var("PORT")
            .unwrap_or_else(|_| String::from("8080"))
            .parse::<u16>()
            .map_err(|_| env_error("Invalid PORT format"))?;

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| String::from("./static"));

        let feed_timeout_ms = env::var("FEED_TIMEOUT_MS")
            .unwrap_or_else(|_| DEFAULT_FEED_TIMEOUT_MS.to_string())
            .parse::<u64>()
            .map_err(|_| env_error("Invalid FEED_TIMEOUT_MS format"))?;

        Ok(Config {
            canvas_token,
            canvas_school,
            base_url,
            port,
            static_dir,
            feed_timeout_ms,
        })
    }
}
