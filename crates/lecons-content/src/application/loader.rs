//! Lesson document loader.
//!
//! The loader never fails: any problem reading or parsing the document is
//! logged and answered with the fallback lesson.

use lecons_core::error::ContentError;
use lecons_core::source::ContentSource;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::fallback::fallback_document;
use crate::domain::lesson::Lesson;

/// Where a loaded document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentOrigin {
    /// Read and parsed from the configured source.
    Source,
    /// The source was unusable; the fallback lesson was substituted.
    Fallback,
}

impl ContentOrigin {
    /// Short lowercase name, used in logs and response headers.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Fallback => "fallback",
        }
    }
}

/// A lesson document ready to be served.
#[derive(Debug, Clone)]
pub struct LoadedContent {
    /// The document exactly as parsed.
    pub document: Value,
    /// Where the document came from.
    pub origin: ContentOrigin,
}

impl LoadedContent {
    /// The fallback lesson.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            document: fallback_document(),
            origin: ContentOrigin::Fallback,
        }
    }

    /// Decode the typed lesson view of the document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the document is not a JSON object.
    pub fn lesson(&self) -> Result<Lesson, serde_json::Error> {
        Lesson::from_document(&self.document)
    }
}

/// Reads and parses the raw document without any fallback.
///
/// # Errors
///
/// Returns `ContentError::NotFound` or `ContentError::Io` when the source
/// cannot be read, `ContentError::Empty` when it holds only whitespace and
/// `ContentError::Parse` when it is not valid JSON.
pub async fn try_load_content(source: &dyn ContentSource) -> Result<Value, ContentError> {
    let raw = source.read_raw().await?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ContentError::Empty);
    }
    Ok(serde_json::from_str(trimmed)?)
}

/// Loads the lesson document, substituting the fallback lesson on failure.
pub async fn load_content(source: &dyn ContentSource) -> LoadedContent {
    match try_load_content(source).await {
        Ok(document) => {
            debug!(source = %source.describe(), "loaded lesson content");
            LoadedContent {
                document,
                origin: ContentOrigin::Source,
            }
        }
        Err(error) => {
            warn!(
                source = %source.describe(),
                %error,
                "failed to load lesson content, serving fallback"
            );
            LoadedContent::fallback()
        }
    }
}
