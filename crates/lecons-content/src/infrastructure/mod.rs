//! Infrastructure adapters for lesson content.

pub mod file_source;
