//! Route modules.

pub mod content;
pub mod health;
pub mod pages;
