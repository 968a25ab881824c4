//! Playwright test execution.
//!
//! Runs a single execution against the local checkout:
//!
//! 1. Checks that the data directory and the resolved run path exist
//! 2. Installs dependencies when the run path holds a `package.json`
//! 3. Launches `playwright test` through the package manager shim
//! 4. Obfuscates secrets in the captured output and builds the result
//! 5. Optionally zips `playwright-report` and uploads it
//!
//! Steps run strictly one after the other. Failures in steps 1 to 3 abort
//! the execution; an artifact failure in step 5 is attached to the
//! otherwise successful result.

use std::{
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use runner_io::{Executor, Invocation, ProcessExecutor};
use runner_models::{Execution, ExecutionResult, RunnerType};
use runner_scraper::{ObjectStoreScraper, Scraper};
use runner_secret::EnvManager;
use tracing::{error, info, warn};

use crate::config::Params;
use crate::package_manager::PackageManager;
use crate::prelude::*;

/// File whose presence triggers a dependency install.
pub const MANIFEST_FILE: &str = "package.json";
/// Package binary launched through the shim.
pub const PLAYWRIGHT_BIN: &str = "playwright";
/// Report directory Playwright writes after a run.
pub const REPORT_DIR: &str = "playwright-report";
/// Media type of the reported output.
pub const OUTPUT_TYPE: &str = "text/plain";

/// Directory the compressed report is written to, relative to the run path.
pub fn compressed_report_dir() -> String {
    format!("{REPORT_DIR}-zip")
}

/// Executes Playwright suites for the host orchestrator.
pub struct PlaywrightRunner {
    params: Params,
    dependency: PackageManager,
    executor: Arc<dyn Executor>,
    scraper: Arc<dyn Scraper>,
}

impl PlaywrightRunner {
    /// Creates a runner from the `RUNNER_` environment.
    ///
    /// Processes are spawned for real and artifacts go to the configured
    /// S3 compatible store.
    pub fn new(dependency: PackageManager) -> Result<Self> {
        let params = Params::from_env()?;
        let scraper = ObjectStoreScraper::new(&params.store_params())?;
        Ok(Self::with_parts(
            params,
            dependency,
            Arc::new(ProcessExecutor),
            Arc::new(scraper),
        ))
    }

    /// Creates a runner from explicit collaborators.
    pub fn with_parts(
        params: Params,
        dependency: PackageManager,
        executor: Arc<dyn Executor>,
        scraper: Arc<dyn Scraper>,
    ) -> Self {
        Self {
            params,
            dependency,
            executor,
            scraper,
        }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn dependency(&self) -> PackageManager {
        self.dependency
    }

    /// Role of this runner inside the orchestrator.
    pub fn runner_type(&self) -> RunnerType {
        RunnerType::Main
    }

    /// Directory the execution runs from: `<datadir>/repo/<working dir or path>`.
    ///
    /// The repository directory is always resolved below `<datadir>/repo`,
    /// even when it is absolute or climbs with `..`.
    pub fn run_path(&self, execution: &Execution) -> PathBuf {
        let repo = self.params.datadir.join("repo");
        match execution.repository() {
            Some(repository) => repo.join(confine(Path::new(repository.run_dir()))),
            None => repo,
        }
    }

    /// Runs the execution and reports its result.
    pub async fn run(&self, execution: &Execution) -> Result<ExecutionResult> {
        info!("Running {execution}");

        if let Err(source) = tokio::fs::metadata(&self.params.datadir).await {
            error!("Datadir {:?} not available - {source}", self.params.datadir);
            return Err(Error::MissingDataDir {
                path: self.params.datadir.clone(),
                source,
            });
        }

        let run_path = self.run_path(execution);
        if !tokio::fs::metadata(&run_path)
            .await
            .is_ok_and(|meta| meta.is_dir())
        {
            error!("Run path {:?} is not a directory", run_path);
            return Err(Error::MissingRunPath(run_path));
        }

        if tokio::fs::try_exists(run_path.join(MANIFEST_FILE))
            .await
            .unwrap_or(false)
        {
            self.install(&run_path).await?;
        }

        let mut env_manager = EnvManager::new(execution.variables.clone());
        env_manager.resolve_secrets_from_env();

        let mut args = vec![PLAYWRIGHT_BIN.to_string(), String::from("test")];
        args.extend(execution.args.iter().cloned());
        let invocation = Invocation::new(self.dependency.shim(), args)
            .working_dir(&run_path)
            .envs(env_manager.envs());

        info!("Running {}", invocation.get_full_command());
        let output = self.executor.run(&invocation).await.map_err(|source| {
            error!("Playwright run failed for execution {}", execution.id);
            Error::TestRun {
                output: env_manager.obfuscate(source.output()),
                source,
            }
        })?;

        let mut result =
            ExecutionResult::passed(OUTPUT_TYPE, env_manager.obfuscate(&output.output));

        if self.params.scraper_enabled
            && let Err(err) = self.scrape_artifacts(&execution.id, &run_path).await
        {
            warn!(
                "Artifacts for execution {} not uploaded - {err}",
                execution.id
            );
            result.push_error(err.to_string());
        }

        info!("Execution {} {}", execution.id, result.status);
        Ok(result)
    }

    async fn install(&self, run_path: &Path) -> Result<()> {
        let tool = self.dependency.install_tool();
        info!("Installing dependencies with {tool} in {:?}", run_path);

        let invocation = Invocation::new(tool, vec!["install"]).working_dir(run_path);
        self.executor
            .run(&invocation)
            .await
            .map_err(|source| Error::Install {
                tool: tool.to_string(),
                output: source.output().to_string(),
                source,
            })?;
        Ok(())
    }

    async fn scrape_artifacts(&self, execution_id: &str, run_path: &Path) -> Result<()> {
        let compressed_name = compressed_report_dir();
        let compressed_path = run_path.join(&compressed_name);

        tokio::fs::create_dir_all(&compressed_path)
            .await
            .map_err(Error::ArtifactDir)?;

        let invocation = Invocation::new(
            "zip",
            vec![
                format!("{compressed_name}/{REPORT_DIR}.zip"),
                String::from("-r"),
                String::from(REPORT_DIR),
            ],
        )
        .working_dir(run_path);
        self.executor
            .run(&invocation)
            .await
            .map_err(|source| Error::Zip {
                output: source.output().to_string(),
                source,
            })?;

        self.scraper
            .scrape(execution_id, &[compressed_path])
            .await
            .map_err(Error::Scrape)
    }
}

/// Lexically normalizes `dir` into a relative path that cannot leave its base.
///
/// Root and prefix components are dropped and `..` never climbs above the
/// start.
fn confine(dir: &Path) -> PathBuf {
    let mut confined = PathBuf::new();
    for component in dir.components() {
        match component {
            Component::Normal(part) => confined.push(part),
            Component::ParentDir => {
                confined.pop();
            }
            Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
        }
    }
    confined
}
