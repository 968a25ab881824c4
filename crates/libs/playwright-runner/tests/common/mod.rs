#![allow(dead_code)]

use std::{
    os::unix::process::ExitStatusExt,
    path::{Path, PathBuf},
    process::ExitStatus,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use playwright_runner::{PackageManager, Params, PlaywrightRunner};
use runner_io::{CommandOutput, Executor, Invocation};
use runner_scraper::Scraper;

type Handler = Box<dyn Fn(&Invocation) -> runner_io::prelude::Result<CommandOutput> + Send + Sync>;

/// Executor that records every invocation instead of spawning it.
pub struct RecordingExecutor {
    calls: Mutex<Vec<Invocation>>,
    handler: Handler,
}

impl RecordingExecutor {
    pub fn new<F>(handler: F) -> Arc<Self>
    where
        F: Fn(&Invocation) -> runner_io::prelude::Result<CommandOutput> + Send + Sync + 'static,
    {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            handler: Box::new(handler),
        })
    }

    /// Every invocation succeeds with `output`.
    pub fn succeeding(output: &'static str) -> Arc<Self> {
        Self::new(move |_| ok(output))
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|invocation| invocation.get_full_command())
            .collect()
    }
}

#[async_trait]
impl Executor for RecordingExecutor {
    async fn run(&self, invocation: &Invocation) -> runner_io::prelude::Result<CommandOutput> {
        self.calls.lock().unwrap().push(invocation.clone());
        (self.handler)(invocation)
    }
}

pub fn ok(output: &str) -> runner_io::prelude::Result<CommandOutput> {
    Ok(CommandOutput {
        output: output.to_string(),
    })
}

/// Failure as reported for a program exiting with status 1.
pub fn exit_failure(
    invocation: &Invocation,
    output: &str,
) -> runner_io::prelude::Result<CommandOutput> {
    Err(runner_io::Error::ExitStatus {
        command: invocation.get_full_command(),
        status: ExitStatus::from_raw(1 << 8),
        output: output.to_string(),
    })
}

/// Scraper that records uploads and optionally fails them.
#[derive(Default)]
pub struct RecordingScraper {
    calls: Mutex<Vec<(String, Vec<PathBuf>)>>,
    fail: bool,
}

impl RecordingScraper {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Default::default()
        })
    }

    pub fn calls(&self) -> Vec<(String, Vec<PathBuf>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Scraper for RecordingScraper {
    async fn scrape(
        &self,
        execution_id: &str,
        directories: &[PathBuf],
    ) -> runner_scraper::prelude::Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((execution_id.to_string(), directories.to_vec()));
        if self.fail {
            return Err(runner_scraper::Error::Config(String::from(
                "bucket test-artifacts unreachable",
            )));
        }
        Ok(())
    }
}

pub fn params(datadir: &Path, scraper_enabled: bool) -> Params {
    Params {
        endpoint: String::from("minio:9000"),
        access_key_id: String::from("minio"),
        secret_access_key: String::from("minio123"),
        location: String::from("us-east-1"),
        token: String::new(),
        ssl: false,
        scraper_enabled,
        datadir: datadir.to_path_buf(),
        bucket: String::from("test-artifacts"),
    }
}

pub fn runner(
    params: Params,
    dependency: PackageManager,
    executor: Arc<RecordingExecutor>,
    scraper: Arc<RecordingScraper>,
) -> PlaywrightRunner {
    PlaywrightRunner::with_parts(params, dependency, executor, scraper)
}
