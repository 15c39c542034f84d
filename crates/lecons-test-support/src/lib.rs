//! Shared test mocks and utilities for the Lecons lesson server.

mod source;

pub use source::{FailingContentSource, RecordingContentSource, StaticContentSource};
