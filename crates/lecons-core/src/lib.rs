//! Lecons Core — shared abstractions.
//!
//! This crate defines the content source trait and the error type that the
//! content and API crates depend on. It contains no infrastructure code.

pub mod error;
pub mod source;
