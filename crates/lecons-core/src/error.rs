//! Content loading error types.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a lesson document could not be loaded from its source.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The source file does not exist.
    #[error("content file not found: {}", path.display())]
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The source exists but could not be read as UTF-8 text.
    #[error("failed to read content file {}: {source}", path.display())]
    Io {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The source contained nothing but whitespace.
    #[error("content file is empty")]
    Empty,

    /// The source is not valid JSON.
    #[error("invalid content JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_includes_path() {
        let err = ContentError::NotFound {
            path: PathBuf::from("content/unit1.json"),
        };
        assert_eq!(err.to_string(), "content file not found: content/unit1.json");
    }

    #[test]
    fn test_parse_error_converts_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ContentError = parse_err.into();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(err.to_string().starts_with("invalid content JSON:"));
    }
}
