//! Execution variables and secret obfuscation.
//!
//! An [`EnvManager`] is built per execution from its variables. It exposes
//! them to the test process environment and masks every secret value in
//! text captured from that process.
//!
//! # Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use runner_models::Variable;
//! use runner_secret::{EnvManager, SECRET_PLACEHOLDER};
//!
//! let variables = HashMap::from([(
//!     "TOKEN".to_string(),
//!     Variable::secret("TOKEN", "s3cr3t"),
//! )]);
//! let manager = EnvManager::new(variables);
//!
//! let masked = manager.obfuscate("login with s3cr3t");
//! assert_eq!(masked, format!("login with {SECRET_PLACEHOLDER}"));
//! ```

use std::collections::HashMap;

use runner_models::Variable;
use tracing::debug;

/// Text every secret value is replaced with.
pub const SECRET_PLACEHOLDER: &str = "********";

/// Per-execution view of the execution variables.
#[derive(Debug, Clone, Default)]
pub struct EnvManager {
    variables: HashMap<String, Variable>,
}

impl EnvManager {
    pub fn new(variables: HashMap<String, Variable>) -> Self {
        Self { variables }
    }

    pub fn variables(&self) -> &HashMap<String, Variable> {
        &self.variables
    }

    /// Fill secret values that arrived empty from `lookup`.
    ///
    /// Secrets are usually injected into the executor's own environment
    /// under the variable name instead of travelling with the execution.
    /// Values already present are kept.
    pub fn resolve_secrets<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for (key, variable) in self.variables.iter_mut() {
            if !variable.is_secret() || !variable.value.is_empty() {
                continue;
            }
            if let Some(value) = lookup(&variable.name) {
                debug!("Resolved secret variable {key}");
                variable.value = value;
            }
        }
    }

    /// [`EnvManager::resolve_secrets`] against the current process environment.
    pub fn resolve_secrets_from_env(&mut self) {
        self.resolve_secrets(|name| std::env::var(name).ok());
    }

    /// Name/value pairs to overlay on the test process environment.
    pub fn envs(&self) -> Vec<(String, String)> {
        let mut envs: Vec<(String, String)> = self
            .variables
            .values()
            .filter(|variable| !variable.name.is_empty())
            .map(|variable| (variable.name.clone(), variable.value.clone()))
            .collect();
        envs.sort();
        envs
    }

    /// Replace every literal occurrence of a secret value in `text`.
    ///
    /// Empty secrets are ignored. Longer values are masked first so that a
    /// secret containing another one is masked as a whole.
    pub fn obfuscate(&self, text: &str) -> String {
        let mut secrets: Vec<&str> = self
            .variables
            .values()
            .filter(|variable| variable.is_secret() && !variable.value.is_empty())
            .map(|variable| variable.value.as_str())
            .collect();
        secrets.sort_by(|a, b| b.len().cmp(&a.len()));

        secrets
            .into_iter()
            .fold(text.to_string(), |text, secret| {
                text.replace(secret, SECRET_PLACEHOLDER)
            })
    }
}
