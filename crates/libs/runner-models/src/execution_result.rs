//! Execution result types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Final or intermediate state of an execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Queued,
    Running,
    Passed,
    Failed,
    Cancelled,
}

/// Outcome reported by an executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    /// Execution status.
    pub status: ExecutionStatus,
    /// Media type of `output`.
    pub output_type: String,
    /// Captured tool output with secrets already obfuscated.
    pub output: String,
    /// Non fatal errors collected after the tests themselves succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ExecutionResult {
    /// Successful result carrying the given output.
    pub fn passed(output_type: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            status: ExecutionStatus::Passed,
            output_type: output_type.into(),
            output: output.into(),
            errors: None,
        }
    }

    pub fn is_passed(&self) -> bool {
        self.status == ExecutionStatus::Passed
    }

    /// Records a non fatal error without touching status or output.
    pub fn push_error(&mut self, error: impl Into<String>) {
        self.errors.get_or_insert_with(Vec::new).push(error.into());
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            ExecutionStatus::Queued => "queued",
            ExecutionStatus::Running => "running",
            ExecutionStatus::Passed => "passed",
            ExecutionStatus::Failed => "failed",
            ExecutionStatus::Cancelled => "cancelled",
        };
        write!(f, "{status}")
    }
}
