//! Routes for the lesson content API.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::{Json, Router, routing::get};
use tracing::{info, instrument};

use lecons_content::application::query_handlers;

use crate::state::AppState;

/// Response header naming where the served document came from.
pub const CONTENT_ORIGIN_HEADER: &str = "x-lecons-content-origin";

/// GET /content
///
/// Returns the lesson document exactly as loaded, or the fallback lesson.
#[instrument(skip(state))]
async fn get_content(State(state): State<AppState>) -> impl IntoResponse {
    let loaded = query_handlers::get_content(state.content_source.as_ref()).await;

    info!(origin = loaded.origin.as_str(), "serving lesson content");

    (
        [(CONTENT_ORIGIN_HEADER, loaded.origin.as_str())],
        Json(loaded.document),
    )
}

/// Returns the router for the content API.
pub fn router() -> Router<AppState> {
    Router::new().route("/content", get(get_content))
}
