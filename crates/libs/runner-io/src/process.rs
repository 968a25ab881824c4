//! Low-level async process management utilities.

use std::{
    ffi::OsStr,
    io,
    process::{ExitStatus, Stdio},
};

use tokio::process::{Child, Command};

use crate::runner::Invocation;

/// Spawn a new async process with piped stdout and stderr.
///
/// The child runs in the invocation's working directory, inherits the
/// current environment extended with the invocation's overlay and gets a
/// closed stdin so it can never block waiting for input.
///
/// # Examples
///
/// ```rust
/// use runner_io::{Invocation, process::spawn_process};
///
/// #[tokio::main]
/// async fn main() {
///     let invocation = Invocation::new("echo", vec!["Hello"]);
///     let mut child = spawn_process(&invocation).unwrap();
///     let output = child.stdout.take().unwrap();
/// }
/// ```
pub fn spawn_process(invocation: &Invocation) -> Result<Child, io::Error> {
    let mut command = Command::new(OsStr::new(invocation.command()));
    command
        .args(invocation.args())
        .envs(
            invocation
                .get_envs()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        )
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    if let Some(dir) = invocation.get_working_dir() {
        command.current_dir(dir);
    }
    command.spawn()
}

/// Asynchronously capture the exit status of a child process.
///
/// Waits for the child process to complete and returns its exit status.
///
/// # Examples
///
/// ```rust
/// use runner_io::{Invocation, process::{spawn_process, capture_exit_status}};
///
/// #[tokio::main]
/// async fn main() {
///     let mut child = spawn_process(&Invocation::new("echo", vec!["done"])).unwrap();
///     let exit_status = capture_exit_status(&mut child).await.unwrap();
///     assert!(exit_status.success());
/// }
/// ```
pub async fn capture_exit_status(child: &mut Child) -> Result<ExitStatus, io::Error> {
    child.wait().await
}
