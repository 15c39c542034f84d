//! Application layer for lesson content.

pub mod loader;
pub mod query_handlers;
