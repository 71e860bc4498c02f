use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(canvas_dash::environment))]
    Environment(String),

    #[error("Canvas API error: {0}")]
    #[diagnostic(code(canvas_dash::upstream))]
    Upstream(String),

    #[error("JSON decode error: {0}")]
    #[diagnostic(code(canvas_dash::decode))]
    Decode(#[from] serde_json::Error),

    #[error("Calendar feed error: {0}")]
    #[diagnostic(code(canvas_dash::feed))]
    Feed(String),

    #[error(transparent)]
    #[diagnostic(code(canvas_dash::io))]
    Io(#[from] std::io::Error),
}

/// Errors reaching a route handler surface as a plain-text 500 with
/// the same opaque string the error would print locally.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create upstream API errors
pub fn upstream_error(message: &str) -> Error {
    Error::Upstream(message.to_string())
}

/// Helper to create calendar feed errors
pub fn feed_error(message: &str) -> Error {
    Error::Feed(message.to_string())
}
