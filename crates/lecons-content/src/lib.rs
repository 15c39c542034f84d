//! Lecons — lesson content.
//!
//! Responsible for the lesson document model, the fallback lesson served
//! when the document cannot be used, and loading the document from its
//! source on every request.

pub mod application;
pub mod domain;
pub mod infrastructure;
