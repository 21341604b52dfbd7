//! Store configuration loaded from TOML.
//!
//! Validation collects every violation in one pass instead of stopping at
//! the first one, using Stillwater's `Validation`.
//!
//! # Example
//!
//! ```rust
//! use tally::config::StoreConfig;
//!
//! let config = StoreConfig::from_toml_str(
//!     r#"
//!     initial_value = 10
//!     history_limit = 100
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.initial_value, 10);
//! assert!(config.record_history);
//! assert_eq!(config.history_limit, Some(100));
//! ```

pub mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::core::DEFAULT_COUNTER_VALUE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Settings for a counter store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Starting counter value
    pub initial_value: i64,
    /// Whether applied actions are recorded
    pub record_history: bool,
    /// Maximum number of retained history records; unbounded when absent
    pub history_limit: Option<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_value: DEFAULT_COUNTER_VALUE,
            record_history: true,
            history_limit: None,
        }
    }
}

impl StoreConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Check all rules, accumulating every violation.
    pub fn check(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(match self.history_limit {
            Some(0) => Validation::fail(ConfigViolation::ZeroHistoryLimit),
            _ => Validation::success(()),
        });

        checks.push(match self.history_limit {
            Some(limit) if !self.record_history => {
                Validation::fail(ConfigViolation::LimitWithoutHistory { limit })
            }
            _ => Validation::success(()),
        });

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate, returning every violation in a single error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.check() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => {
                Err(ConfigError::Invalid(violations.iter().cloned().collect()))
            }
        }
    }
}
