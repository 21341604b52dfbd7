//! Configuration error types.

use crate::builder::BuildError;
use std::path::PathBuf;
use thiserror::Error;

/// A single problem found while validating a configuration
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("history_limit must be at least 1")]
    ZeroHistoryLimit,

    #[error("history_limit ({limit}) is set but record_history is false")]
    LimitWithoutHistory { limit: usize },
}

/// Errors that can occur when loading or applying configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),

    #[error("Failed to build store: {0}")]
    Build(#[from] BuildError),
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
