//! Command-line interface for the Playwright executor.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use playwright_runner::PackageManager;
use runner_models::Execution;

/// Command-line interface for the Playwright executor.
#[derive(Parser, Debug)]
#[command(name = "playwright-executor")]
#[command(
    about = "Run a Playwright execution from the local checkout and print its result as JSON"
)]
pub struct Cli {
    /// Package manager used to install dependencies and launch Playwright (npm or pnpm)
    #[arg(short, long, env = "DEPENDENCY_MANAGER", default_value = "npm")]
    pub dependency_manager: PackageManager,

    /// Execution as JSON, or `@<path>` to read it from a file
    pub execution: String,
}

impl Cli {
    /// Parses the execution argument.
    pub fn execution(&self) -> Result<Execution> {
        let json = match self.execution.strip_prefix('@') {
            Some(path) => std::fs::read_to_string(Path::new(path))
                .with_context(|| format!("Failed to read execution file {path}"))?,
            None => self.execution.clone(),
        };
        serde_json::from_str(&json).context("Invalid execution JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_execution() -> Result<()> {
        let cli = Cli::try_parse_from([
            "playwright-executor",
            "--dependency-manager",
            "pnpm",
            r#"{"id": "exec-1", "args": ["--headed"]}"#,
        ])?;
        assert_eq!(cli.dependency_manager, PackageManager::Pnpm);

        let execution = cli.execution()?;
        assert_eq!(execution.id, "exec-1");
        assert_eq!(execution.args, vec!["--headed"]);
        Ok(())
    }

    #[test]
    fn execution_from_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("execution.json");
        std::fs::write(
            &path,
            r#"{"id": "exec-2", "content": {"repository": {"path": "e2e"}}}"#,
        )?;

        let arg = format!("@{}", path.display());
        let cli = Cli::try_parse_from([
            "playwright-executor",
            "--dependency-manager",
            "npm",
            arg.as_str(),
        ])?;
        let execution = cli.execution()?;
        assert_eq!(execution.repository().map(|r| r.path.as_str()), Some("e2e"));
        Ok(())
    }

    #[test]
    fn unknown_package_manager_is_rejected() {
        let parsed = Cli::try_parse_from([
            "playwright-executor",
            "--dependency-manager",
            "yarn",
            r#"{"id": "exec-1"}"#,
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn invalid_json_is_reported() {
        let cli = Cli {
            dependency_manager: PackageManager::Npm,
            execution: String::from("{not json"),
        };
        let err = cli.execution().unwrap_err();
        assert!(err.to_string().contains("Invalid execution JSON"));
    }
}
