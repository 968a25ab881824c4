//! Scraper error types.

use std::path::PathBuf;

/// Artifact upload errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A directory handed to the scraper does not exist.
    #[error("artifact directory {0:?} does not exist")]
    MissingDirectory(PathBuf),

    /// The store could not be configured.
    #[error("invalid store configuration: {0}")]
    Config(String),

    /// Reading a local artifact or writing it to the store failed.
    #[error(transparent)]
    Store(#[from] object_store::Error),
}
