//! Shared application state.

use std::fmt;
use std::sync::Arc;

use lecons_core::source::ContentSource;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Where the lesson document is read from on every request.
    pub content_source: Arc<dyn ContentSource>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(content_source: Arc<dyn ContentSource>) -> Self {
        Self { content_source }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("content_source", &self.content_source.describe())
            .finish()
    }
}
