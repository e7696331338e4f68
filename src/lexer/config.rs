//! Scanner configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What the scanner does with a character outside the arithmetic symbol set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCharPolicy {
    /// Consume the character and report end of input (default)
    #[default]
    EndOfInput,
    /// Consume the character and keep scanning
    Skip,
    /// Fail with [`Error::UnexpectedCharacter`](crate::Error::UnexpectedCharacter)
    Reject,
}

impl FromStr for UnknownCharPolicy {
    type Err = Error;

    /// Parses the serialized policy name, e.g. `"skip"`
    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_value(serde_json::Value::String(s.to_string()))
            .map_err(|_| Error::config(format!("unknown policy '{}'", s)))
    }
}

/// Configuration for a [`Scanner`](super::Scanner)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Handling of unrecognized characters (default: end of input)
    pub unknown_char: UnknownCharPolicy,
}

impl ScannerConfig {
    /// Load a configuration from JSON, e.g. `{"unknown_char": "skip"}`
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_unknown_char(mut self, policy: UnknownCharPolicy) -> Self {
        self.unknown_char = policy;
        self
    }
}
