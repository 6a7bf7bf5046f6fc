//! The run configuration collaborator. Searches only ever see a validated
//! [`Problem`]; this module is where the four integers come from before
//! validation: a TOML file, with built-in defaults for anything unspecified.

use crate::search::{Problem, ProblemError};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub start: i64,
    pub goal: i64,
    pub delta: i64,
    pub max_abs: i64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start: 0,
            goal: 3,
            delta: 1,
            max_abs: 20,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validate into a search instance. The only rejection point for bad
    /// configuration; nothing downstream can fail.
    pub fn to_problem(&self) -> Result<Problem, ProblemError> {
        Problem::new(self.start, self.goal, self.delta, self.max_abs)
    }
}
