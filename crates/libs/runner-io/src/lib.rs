//! Process execution for the test executors.
//!
//! Provides utilities for spawning external programs in a given working
//! directory with an optional environment overlay and capturing their
//! combined stdout and stderr.
//!
//! # Usage
//!
//! ```rust,no_run
//! use runner_io::{Executor, Invocation, ProcessExecutor};
//!
//! #[tokio::main]
//! async fn main() {
//!     let invocation = Invocation::new("npx", vec!["playwright", "test"])
//!         .working_dir("/data/repo/e2e")
//!         .env("BASE_URL", "http://localhost:3000");
//!
//!     match ProcessExecutor.run(&invocation).await {
//!         Ok(output) => println!("{}", output.output),
//!         Err(err) => eprintln!("{err}\n\n{}", err.output()),
//!     }
//! }
//! ```

pub mod error;
pub mod executor;
pub mod prelude;
pub mod process;
pub mod runner;

pub use error::Error;
pub use executor::{CommandOutput, Executor, ProcessExecutor};
pub use runner::{Invocation, RunEvent};
