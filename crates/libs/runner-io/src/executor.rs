//! Blocking-style execution of a single invocation.
//!
//! [`Executor`] is the seam the executors use to launch external tools.
//! [`ProcessExecutor`] spawns real processes; tests substitute their own
//! implementation to record invocations without launching anything.

use async_trait::async_trait;
use tokio::sync::mpsc::channel;
use tracing::{debug, error, info};

use crate::prelude::*;
use crate::runner::{Invocation, RunEvent};

/// Successful run of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Combined stdout and stderr, in arrival order.
    pub output: String,
}

/// Runs an invocation to completion and captures its output.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Run `invocation` and wait for it to exit.
    ///
    /// Returns the combined output when the program exits successfully.
    /// A non-zero exit yields [`Error::ExitStatus`], which still carries
    /// the output captured up to that point.
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutput>;
}

/// Executor backed by real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

#[async_trait]
impl Executor for ProcessExecutor {
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        let command = invocation.get_full_command();
        let (tx, mut rx) = channel(32);
        let runner = invocation.clone();
        let handle = tokio::spawn(async move { runner.run(tx).await });

        let mut output = Vec::new();
        while let Some(event) = rx.recv().await {
            match event {
                RunEvent::ProcessCreationFailed(err) => {
                    error!("Failed to run command {command} - {err}")
                }
                RunEvent::ProcessCreated => info!("Running {command}"),
                RunEvent::ProcessEnd(success) => {
                    debug!("{command} ended, success: {success}")
                }
                RunEvent::ProcessNewOutput(chunk) => output.extend_from_slice(&chunk),
            }
        }

        let exit_status = handle.await??;
        let output = String::from_utf8_lossy(&output).into_owned();
        if !exit_status.success() {
            error!("{command} exited with {exit_status}");
            return Err(Error::ExitStatus {
                command,
                status: exit_status,
                output,
            });
        }
        Ok(CommandOutput { output })
    }
}
