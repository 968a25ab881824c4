//! Process invocation with event handling.

use std::{
    path::{Path, PathBuf},
    process::ExitStatus,
};

use tokio::{
    io::{AsyncRead, AsyncReadExt},
    sync::mpsc::Sender,
    task::JoinHandle,
};

use crate::prelude::*;
use crate::process::{capture_exit_status, spawn_process};

/// Events emitted while an invocation runs.
#[derive(Debug, PartialEq)]
pub enum RunEvent {
    /// Process creation failed with error message.
    ProcessCreationFailed(String),
    /// Process was successfully created.
    ProcessCreated,
    /// Process ended (true = success, false = failure).
    ProcessEnd(bool),
    /// New chunk of stdout or stderr, in arrival order.
    ProcessNewOutput(Vec<u8>),
}

/// A single external program call.
///
/// Carries everything the child needs: program, arguments, working
/// directory and environment overlay. Nothing is read from global state
/// besides the inherited parent environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Command to execute.
    command: String,
    /// Command line arguments.
    args: Vec<String>,
    /// Directory the child runs in, inherited from the parent when unset.
    working_dir: Option<PathBuf>,
    /// Variables added on top of the inherited environment.
    envs: Vec<(String, String)>,
}

impl Invocation {
    /// Create a new invocation with command and arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runner_io::Invocation;
    ///
    /// let invocation = Invocation::new("ls", vec!["-la", "/tmp"]);
    /// ```
    pub fn new(command: impl Into<String>, args: Vec<impl Into<String>>) -> Self {
        Self {
            command: command.into(),
            args: args.into_iter().map(|a| a.into()).collect(),
            working_dir: None,
            envs: Vec::new(),
        }
    }

    /// Create a new invocation with just a command (no arguments).
    pub fn new_without_args(command: impl Into<String>) -> Self {
        Self::new(command, Vec::<String>::new())
    }

    /// Run the program from `dir`.
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Add a single variable to the environment overlay.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Add several variables to the environment overlay.
    pub fn envs<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.envs
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn get_working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    pub fn get_envs(&self) -> &[(String, String)] {
        &self.envs
    }

    /// Get the full command string with arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runner_io::Invocation;
    ///
    /// let invocation = Invocation::new("ls", vec!["-la"]);
    /// assert_eq!(invocation.get_full_command(), "ls -la");
    /// ```
    pub fn get_full_command(&self) -> String {
        if self.args.is_empty() {
            return self.command.clone();
        }
        format!("{} {}", &self.command, &self.args.join(" "))
    }

    async fn read_stream<T: AsyncRead + Unpin>(tx: Sender<RunEvent>, mut stream: T) {
        let mut buffer = [0; 1024];
        loop {
            match stream.read(&mut buffer).await {
                Ok(0) => break, // EOF
                Ok(n) => {
                    let _ = tx.send(RunEvent::ProcessNewOutput(buffer[..n].to_vec())).await;
                }
                Err(_) => break,
            }
        }
    }

    fn launch_stream_reader<T>(tx: Sender<RunEvent>, stream: T) -> JoinHandle<()>
    where
        T: AsyncRead + Unpin + Send + 'static,
    {
        tokio::spawn(Invocation::read_stream(tx, stream))
    }

    /// Run the process, sending events via the provided channel.
    ///
    /// Reads stdout and stderr until the process finishes. The channel must
    /// be drained concurrently, otherwise the readers stall once it fills.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runner_io::{Invocation, RunEvent};
    /// use tokio::sync::mpsc;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let invocation = Invocation::new("echo", vec!["Hello"]);
    ///     let (tx, mut rx) = mpsc::channel(16);
    ///     let handle = tokio::spawn(async move { invocation.run(tx).await });
    ///     while let Some(event) = rx.recv().await {
    ///         println!("{event:?}");
    ///     }
    ///     assert!(handle.await.unwrap().unwrap().success());
    /// }
    /// ```
    pub async fn run(&self, tx: Sender<RunEvent>) -> Result<ExitStatus> {
        let mut process = match spawn_process(self) {
            Ok(process) => process,
            Err(source) => {
                let _ = tx
                    .send(RunEvent::ProcessCreationFailed(source.to_string()))
                    .await;
                return Err(Error::Spawn {
                    command: self.get_full_command(),
                    source,
                });
            }
        };

        let _ = tx.send(RunEvent::ProcessCreated).await;

        // Take stdout and stderr and launch a stream reader for each
        let stdout_task = process
            .stdout
            .take()
            .map(|stdout| Invocation::launch_stream_reader(tx.clone(), stdout));
        let stderr_task = process
            .stderr
            .take()
            .map(|stderr| Invocation::launch_stream_reader(tx.clone(), stderr));

        let exit_status = capture_exit_status(&mut process).await;

        if let Some(task) = stdout_task {
            task.await?;
        }
        if let Some(task) = stderr_task {
            task.await?;
        }

        let exit_status = exit_status.map_err(|source| Error::Wait {
            command: self.get_full_command(),
            source,
        })?;
        let _ = tx.send(RunEvent::ProcessEnd(exit_status.success())).await;
        Ok(exit_status)
    }
}

#[cfg(test)]
mod test {
    use tokio::sync::mpsc::channel;

    use super::*;

    #[test]
    fn full_command() {
        assert_eq!(
            Invocation::new_without_args("pwd").get_full_command(),
            "pwd"
        );
        assert_eq!(
            Invocation::new("npx", vec!["playwright", "test"]).get_full_command(),
            "npx playwright test"
        );
    }

    #[test]
    fn builder_collects_overlay() {
        let invocation = Invocation::new_without_args("env")
            .working_dir("/tmp")
            .env("A", "1")
            .envs([("B", "2"), ("C", "3")]);
        assert_eq!(invocation.get_working_dir(), Some(Path::new("/tmp")));
        assert_eq!(invocation.get_envs().len(), 3);
        assert_eq!(invocation.get_envs()[1], ("B".to_string(), "2".to_string()));
    }

    #[tokio::test]
    async fn events_during_run() {
        let invocation = Invocation::new("sh", vec!["-c", "echo Hello"]);
        let (tx, mut rx) = channel(16);
        let handle = tokio::spawn(async move { invocation.run(tx).await });

        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        let exit_status = handle.await.unwrap().unwrap();

        assert!(exit_status.success());
        assert_eq!(events.first(), Some(&RunEvent::ProcessCreated));
        assert!(events.contains(&RunEvent::ProcessNewOutput(b"Hello\n".to_vec())));
        assert_eq!(events.last(), Some(&RunEvent::ProcessEnd(true)));
    }

    #[tokio::test]
    async fn creation_failure_is_reported() {
        let invocation = Invocation::new_without_args("definitely-not-a-real-binary-4821");
        let (tx, mut rx) = channel(16);
        let result = invocation.run(tx).await;

        assert!(matches!(result, Err(Error::Spawn { .. })));
        assert!(matches!(
            rx.recv().await,
            Some(RunEvent::ProcessCreationFailed(_))
        ));
    }
}
