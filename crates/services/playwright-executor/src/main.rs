//! Playwright executor service.
//!
//! Host process around [`playwright_runner::PlaywrightRunner`]. It reads an
//! execution from the command line, configures the runner from the
//! `RUNNER_` environment, runs the execution and prints the result as JSON
//! on stdout. Logs go to stderr so stdout only ever carries the result.
//!
//! # Examples
//!
//! ```bash
//! RUNNER_DATADIR=/data RUNNER_SCRAPPERENABLED=false ... \
//!     playwright-executor '{"id": "exec-1", "content": {"repository": {"path": "e2e"}}}'
//!
//! DEPENDENCY_MANAGER=pnpm playwright-executor @/tmp/execution.json
//! ```

mod cli;

use anyhow::Result;
use clap::Parser;
use playwright_runner::PlaywrightRunner;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "playwright_executor=info,playwright_runner=info,runner_io=info,runner_scraper=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let execution = cli.execution()?;
    let runner = PlaywrightRunner::new(cli.dependency_manager)?;
    info!(
        "Starting {:?} runner with {}",
        runner.runner_type(),
        runner.dependency()
    );

    let result = runner.run(&execution).await?;
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
