//! Domain layer for lesson content.

pub mod fallback;
pub mod lesson;
