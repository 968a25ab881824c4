//! Error types for the Playwright runner.

use std::{io, path::PathBuf};

/// Playwright runner errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required `RUNNER_` variable is not set.
    #[error("Env Variable '{0}' missing")]
    MissingVar(String),

    /// A boolean `RUNNER_` variable could not be parsed.
    #[error("Env Variable '{var}' is not a valid boolean: {value:?}")]
    InvalidBool { var: String, value: String },

    /// Unknown package manager name.
    #[error("Unsupported package manager {0:?}. Expected npm or pnpm")]
    InvalidPackageManager(String),

    /// The artifact store could not be configured.
    #[error(transparent)]
    Scraper(#[from] runner_scraper::Error),

    /// The configured data directory does not exist.
    #[error("Datadir not exist: {path:?}: {source}")]
    MissingDataDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The resolved run path is missing or not a directory.
    #[error("Run path {0:?} is not a directory")]
    MissingRunPath(PathBuf),

    /// Dependency installation failed.
    #[error("{tool} install error: {source}\n\n{output}")]
    Install {
        tool: String,
        output: String,
        #[source]
        source: runner_io::Error,
    },

    /// The test runner failed or reported failing tests.
    #[error("playwright test error: {source}\n\n{output}")]
    TestRun {
        output: String,
        #[source]
        source: runner_io::Error,
    },

    /// The compressed report directory could not be created.
    #[error("mkdir error: {0}")]
    ArtifactDir(#[source] io::Error),

    /// Compressing the report failed.
    #[error("zip error: {source}\n\n{output}")]
    Zip {
        output: String,
        #[source]
        source: runner_io::Error,
    },

    /// Uploading the compressed report failed.
    #[error("scrape artifacts error: {0}")]
    Scrape(#[source] runner_scraper::Error),
}
