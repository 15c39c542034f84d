//! Query handlers for lesson content.
//!
//! This module contains the read-side operations the page and API routes
//! call: fetch the raw document, or the typed lesson to render.

use lecons_core::source::ContentSource;
use tracing::warn;

use crate::application::loader::{self, LoadedContent};
use crate::domain::fallback::fallback_document;
use crate::domain::lesson::Lesson;

/// Retrieves the lesson document as served by the API.
pub async fn get_content(source: &dyn ContentSource) -> LoadedContent {
    loader::load_content(source).await
}

/// Retrieves the typed lesson to render as a page.
///
/// A document that parsed as JSON but is not an object is replaced by the
/// fallback lesson, so the page always has something to show.
pub async fn get_lesson(source: &dyn ContentSource) -> Lesson {
    let loaded = loader::load_content(source).await;
    lesson_for_page(&loaded)
}

/// Decodes the typed lesson from loaded content, falling back when the
/// document is not a JSON object.
#[must_use]
pub fn lesson_for_page(loaded: &LoadedContent) -> Lesson {
    match loaded.lesson() {
        Ok(lesson) => lesson,
        Err(error) => {
            warn!(%error, "lesson content is not a JSON object, rendering fallback");
            Lesson::from_document(&fallback_document()).unwrap_or_default()
        }
    }
}
