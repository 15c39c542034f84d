//! Content source abstraction.

use async_trait::async_trait;

use crate::error::ContentError;

/// Where a lesson document comes from.
///
/// Implementations return the raw text exactly as stored; trimming and
/// parsing belong to the loader.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Read the raw document text.
    async fn read_raw(&self) -> Result<String, ContentError>;

    /// Human-readable description of the source, used in log fields.
    fn describe(&self) -> String;
}
