//! Playwright test executor.
//!
//! Runs Playwright suites from a repository already checked out below the
//! configured data directory, then reports the obfuscated output and
//! optionally uploads the HTML report.
//!
//! # Usage
//!
//! ```rust,no_run
//! use playwright_runner::{PackageManager, PlaywrightRunner};
//! use runner_models::Execution;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads RUNNER_ENDPOINT, RUNNER_DATADIR, ...
//!     let runner = PlaywrightRunner::new(PackageManager::Npm)?;
//!
//!     let execution: Execution = serde_json::from_str(
//!         r#"{"id": "exec-1", "content": {"repository": {"path": "e2e"}}}"#,
//!     )?;
//!     let result = runner.run(&execution).await?;
//!     println!("{}", result.output);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod package_manager;
pub mod prelude;
pub mod runner;

pub use config::Params;
pub use error::Error;
pub use package_manager::PackageManager;
pub use runner::PlaywrightRunner;
