//! Named execution variables.

use serde::{Deserialize, Serialize};

/// Kind of an execution variable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    /// Plain value, safe to print.
    #[default]
    Basic,
    /// Value that must never appear in reported output.
    Secret,
}

/// A variable exposed to the test process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Environment variable name.
    pub name: String,
    /// Literal value. Secret variables may arrive empty and be resolved later.
    #[serde(default)]
    pub value: String,
    /// Variable kind.
    #[serde(rename = "type", default)]
    pub variable_type: VariableType,
}

impl Variable {
    pub fn basic(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            variable_type: VariableType::Basic,
        }
    }

    pub fn secret(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            variable_type: VariableType::Secret,
        }
    }

    pub fn is_secret(&self) -> bool {
        self.variable_type == VariableType::Secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_defaults_to_basic() {
        let variable: Variable = serde_json::from_str(r#"{"name": "BASE_URL"}"#).unwrap();
        assert_eq!(variable, Variable::basic("BASE_URL", ""));
        assert!(!variable.is_secret());
    }

    #[test]
    fn deserialize_secret() {
        let variable: Variable =
            serde_json::from_str(r#"{"name": "TOKEN", "value": "s3cr3t", "type": "secret"}"#)
                .unwrap();
        assert!(variable.is_secret());
        assert_eq!(variable.value, "s3cr3t");
    }
}
