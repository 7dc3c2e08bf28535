//! Run-time configuration for the application shell.
//!
//! Callers hand over a [`PartialConfig`] with any subset of the recognized
//! options. [`Config::normalize`] applies defaults exactly once and produces the
//! immutable [`Config`] the shell and its processor share.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Caller-supplied configuration; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialConfig {
    /// Input file path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    /// Output file path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Enable verbose (debug) logging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
    /// Unrecognized fields, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PartialConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the input path.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Sets the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Sets the verbose flag.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Shorthand for [`Config::normalize`].
    pub fn normalize(&self) -> Config {
        Config::normalize(self)
    }
}

/// Normalized configuration. Never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Input file path; stdin when absent.
    pub input: Option<PathBuf>,
    /// Output file path; stdout when absent.
    pub output: Option<PathBuf>,
    /// Whether debug logging was requested.
    pub verbose: bool,
    /// Unrecognized fields from the caller.
    pub extra: Map<String, Value>,
}

impl Config {
    /// Merges defaults under the explicit fields of `partial`.
    pub fn normalize(partial: &PartialConfig) -> Self {
        let defaults = Config::default();
        Self {
            input: partial.input.clone().or(defaults.input),
            output: partial.output.clone().or(defaults.output),
            verbose: partial.verbose.unwrap_or(defaults.verbose),
            extra: partial.extra.clone(),
        }
    }
}

impl From<PartialConfig> for Config {
    fn from(partial: PartialConfig) -> Self {
        Config::normalize(&partial)
    }
}
