//! Data model shared between the host process and the test executors.
//!
//! An [`Execution`] describes a single test run handed to an executor and
//! an [`ExecutionResult`] is what the executor reports back. Both travel as
//! camelCase JSON.
//!
//! # Usage
//!
//! ```rust
//! use runner_models::{Execution, ExecutionResult};
//!
//! let execution: Execution = serde_json::from_str(
//!     r#"{"id": "exec-1", "args": ["--project=chromium"]}"#,
//! ).unwrap();
//! assert_eq!(execution.id, "exec-1");
//!
//! let result = ExecutionResult::passed("text/plain", "1 passed");
//! assert!(result.is_passed());
//! ```

pub mod execution;
pub mod execution_result;
pub mod variable;

pub use execution::{Content, Execution, Repository, RunnerType};
pub use execution_result::{ExecutionResult, ExecutionStatus};
pub use variable::{Variable, VariableType};
