//! Test sources — mock `ContentSource` implementations for tests.

use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use lecons_core::error::ContentError;
use lecons_core::source::ContentSource;

/// A content source that always returns the same raw text.
#[derive(Debug, Clone)]
pub struct StaticContentSource {
    raw: String,
}

impl StaticContentSource {
    /// Create a source returning `raw` on every read.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

#[async_trait]
impl ContentSource for StaticContentSource {
    async fn read_raw(&self) -> Result<String, ContentError> {
        Ok(self.raw.clone())
    }

    fn describe(&self) -> String {
        "static".to_owned()
    }
}

/// A content source whose reads always fail with the configured error kind.
#[derive(Debug, Clone)]
pub struct FailingContentSource {
    path: PathBuf,
    not_found: bool,
}

impl FailingContentSource {
    /// Fail every read with `ContentError::NotFound`.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            not_found: true,
        }
    }

    /// Fail every read with `ContentError::Io` (permission denied).
    #[must_use]
    pub fn io(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            not_found: false,
        }
    }
}

#[async_trait]
impl ContentSource for FailingContentSource {
    async fn read_raw(&self) -> Result<String, ContentError> {
        if self.not_found {
            Err(ContentError::NotFound {
                path: self.path.clone(),
            })
        } else {
            Err(ContentError::Io {
                path: self.path.clone(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            })
        }
    }

    fn describe(&self) -> String {
        format!("failing:{}", self.path.display())
    }
}

/// A content source that returns fixed text and counts how often it is read.
#[derive(Debug, Default)]
pub struct RecordingContentSource {
    raw: String,
    reads: AtomicUsize,
}

impl RecordingContentSource {
    /// Create a recording source returning `raw` on every read.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            reads: AtomicUsize::new(0),
        }
    }

    /// Number of reads performed so far.
    #[must_use]
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentSource for RecordingContentSource {
    async fn read_raw(&self) -> Result<String, ContentError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.raw.clone())
    }

    fn describe(&self) -> String {
        "recording".to_owned()
    }
}
