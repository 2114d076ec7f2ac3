//! Configuration system for NurseForge.
//!
//! Load staffing constants and the staff roster from TOML or YAML files so
//! the scoring rules can be tuned without code changes.
//!
//! # Examples
//!
//! Load staffing constants from a TOML string:
//!
//! ```
//! use nurseforge_config::StaffingConfig;
//!
//! let config = StaffingConfig::from_toml_str(r#"
//!     min_per_shift = [3, 3, 2]
//!     max_shifts_per_week = 4
//!     weeks = 2
//! "#).unwrap();
//!
//! assert_eq!(config.min_per_shift, [3, 3, 2]);
//! assert_eq!(config.max_per_shift, [6, 5, 4]); // default
//! assert_eq!(config.weeks, 2);
//! ```
//!
//! Use default constants when the file is missing:
//!
//! ```
//! use nurseforge_config::StaffingConfig;
//!
//! let config = StaffingConfig::load("staffing.toml").unwrap_or_default();
//! assert_eq!(config.hard_penalty_weight, 2.13);
//! ```

use std::path::Path;

use nurseforge_core::NurseForgeError;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod roster;
mod staffing;


pub use roster::{RosterConfig, StaffMember};
pub use staffing::StaffingConfig;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for NurseForgeError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Invalid(message) => NurseForgeError::Config(message),
            other => NurseForgeError::Config(other.to_string()),
        }
    }
}

/// File formats understood by the loaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from a file extension: `.yaml`/`.yml` are YAML,
    /// everything else is TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Toml,
        }
    }
}

fn parse_str<T: DeserializeOwned>(s: &str, format: ConfigFormat) -> Result<T, ConfigError> {
    match format {
        ConfigFormat::Toml => Ok(toml::from_str(s)?),
        ConfigFormat::Yaml => Ok(serde_yaml::from_str(s)?),
    }
}

fn load_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    parse_str(&contents, ConfigFormat::from_path(path))
}
