//! Transformation records: one plugin operation and its ordered params.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::DEFAULT_PARAMETER_SEPARATOR;

/// Plugin id marking a preset reference (`p:<name>`).
pub const PRESET_PLUGIN: &str = "p";

/// One `key:value` pair. Duplicate keys are allowed; order is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformationParam {
    pub key: String,
    pub value: String,
}

impl TransformationParam {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for TransformationParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}

/// A single operation in the transformation chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transformation {
    /// Short plugin id (`t`, `erase`, ...) or `p` for a preset reference.
    pub plugin: String,
    pub operation: String,
    pub params: Vec<TransformationParam>,
}

impl Transformation {
    pub fn new(plugin: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            operation: operation.into(),
            params: Vec::new(),
        }
    }

    /// Reference to a named, server-stored preset.
    pub fn preset(name: impl Into<String>) -> Self {
        Self::new(PRESET_PLUGIN, name)
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(TransformationParam::new(key, value));
        self
    }

    pub fn is_preset(&self) -> bool {
        self.plugin == PRESET_PLUGIN
    }

    /// Token text for this transformation, params joined with `param_separator`.
    ///
    /// A preset without params is written bare (`p:name`); everything else
    /// always carries parentheses, even when empty.
    pub fn render(&self, param_separator: &str) -> String {
        let params = self
            .params
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(param_separator);

        if self.is_preset() {
            if params.is_empty() {
                format!("{}:{}", self.plugin, self.operation)
            } else {
                format!("{}:{}({})", self.plugin, self.operation, params)
            }
        } else {
            format!("{}.{}({})", self.plugin, self.operation, params)
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_PARAMETER_SEPARATOR))
    }
}
