//! Common types and utilities.

/// Playwright runner error type.
pub use crate::error::Error;

/// Playwright runner result type.
pub type Result<T> = core::result::Result<T, Error>;
