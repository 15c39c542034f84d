//! HTML page routes.

use askama::Template;
use axum::extract::State;
use axum::response::Html;
use axum::{Router, routing::get};
use tracing::instrument;

use lecons_content::application::query_handlers;

use crate::error::ApiError;
use crate::state::AppState;
use crate::views::LessonPage;

/// GET /
#[instrument(skip(state))]
async fn lesson_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let lesson = query_handlers::get_lesson(state.content_source.as_ref()).await;
    let page = LessonPage::from_lesson(&lesson);

    Ok(Html(page.render()?))
}

/// Returns the router for HTML pages.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(lesson_page))
}
