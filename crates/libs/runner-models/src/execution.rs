//! Execution request types.

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

use crate::variable::Variable;

/// Test execution handed to an executor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    /// Unique execution identifier, used to tag uploaded artifacts.
    pub id: String,
    /// Human readable execution name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Where the test sources live.
    #[serde(default)]
    pub content: Content,
    /// Arguments forwarded verbatim to the test runner.
    #[serde(default)]
    pub args: Vec<String>,
    /// Variables exposed to the test process, keyed by name.
    #[serde(default)]
    pub variables: HashMap<String, Variable>,
}

/// Test content attached to an execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Checked out repository, if the content comes from git.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<Repository>,
}

/// Repository reference inside the local checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    /// Remote repository URI.
    #[serde(default)]
    pub uri: String,
    /// Branch that was checked out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Commit that was checked out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    /// Path of the test project inside the checkout.
    #[serde(default)]
    pub path: String,
    /// Overrides `path` as the directory the tests run from when not empty.
    #[serde(default)]
    pub working_dir: String,
}

impl Repository {
    /// Directory, relative to the checkout root, the tests run from.
    pub fn run_dir(&self) -> &str {
        if self.working_dir.is_empty() {
            &self.path
        } else {
            &self.working_dir
        }
    }
}

impl Execution {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Repository attached to the execution content, if any.
    pub fn repository(&self) -> Option<&Repository> {
        self.content.repository.as_ref()
    }
}

/// Role an executor plays inside the host orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunnerType {
    /// Prepares content before the main executor runs.
    Init,
    /// Runs the tests themselves.
    Main,
}

impl fmt::Display for Execution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, self.repository()) {
            (Some(name), Some(repo)) => {
                write!(f, "Execution {} ({}) from {}", self.id, name, repo.uri)
            }
            (Some(name), None) => write!(f, "Execution {} ({})", self.id, name),
            (None, Some(repo)) => write!(f, "Execution {} from {}", self.id, repo.uri),
            (None, None) => write!(f, "Execution {}", self.id),
        }
    }
}
