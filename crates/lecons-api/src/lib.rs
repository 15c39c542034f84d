//! Lecons lesson server — HTTP layer.
//!
//! Serves the rendered lesson page, the lesson document as JSON, a health
//! check and the page's static assets.

use std::path::Path;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod views;

/// Builds the application router.
///
/// `static_dir` is served under `/static`.
pub fn build_app(app_state: state::AppState, static_dir: &Path) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::pages::router())
        .nest("/api", routes::content::router())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
