//! Common types and utilities.

/// Process execution error type.
pub use crate::error::Error;

/// Process execution result type.
pub type Result<T> = core::result::Result<T, Error>;
