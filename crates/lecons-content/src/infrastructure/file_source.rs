//! File-backed content source.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use lecons_core::error::ContentError;
use lecons_core::source::ContentSource;

/// Reads the lesson document from a UTF-8 file on every call.
#[derive(Debug, Clone)]
pub struct FileContentSource {
    path: PathBuf,
}

impl FileContentSource {
    /// Create a source for the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ContentSource for FileContentSource {
    async fn read_raw(&self) -> Result<String, ContentError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => ContentError::NotFound {
                    path: self.path.clone(),
                },
                _ => ContentError::Io {
                    path: self.path.clone(),
                    source,
                },
            })
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
