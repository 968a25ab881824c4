//! Process execution error types.

use std::{io, process::ExitStatus};

/// Process execution errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The program could not be launched.
    #[error("failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// Waiting for the child process failed.
    #[error("failed to wait for `{command}`: {source}")]
    Wait {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The program ran but did not exit successfully.
    #[error("`{command}` exited with {status}")]
    ExitStatus {
        command: String,
        status: ExitStatus,
        /// Combined stdout and stderr captured before the failure.
        output: String,
    },

    /// The task driving the process panicked or was cancelled.
    #[error(transparent)]
    Join(#[from] tokio::task::JoinError),
}

impl Error {
    /// Output captured before the failure, empty when nothing ran.
    pub fn output(&self) -> &str {
        match self {
            Error::ExitStatus { output, .. } => output,
            _ => "",
        }
    }
}
