use axum::routing::get;
use axum::Router;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::canvas::CanvasClient;
use crate::config::Config;
use crate::handlers;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Canvas API client
    pub canvas: CanvasClient,
    /// Deadline for collecting per-course ICS feeds
    pub feed_deadline: Duration,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            canvas: CanvasClient::new(config),
            feed_deadline: Duration::from_millis(config.feed_timeout_ms),
        }
    }
}

/// Build the application router
///
/// Anything that is not one of the JSON routes falls through to the
/// static dashboard files.
pub fn router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/courses.json", get(handlers::list_courses))
        .route("/courses/today.json", get(handlers::courses_today))
        .route("/courses/{id}/assignments.json", get(handlers::course_assignments))
        .route("/courses/{id}/today.json", get(handlers::merged_today))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
