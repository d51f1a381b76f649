//! Resolver configuration loaded from `keyfall.toml`.
//!
//! ```toml
//! log_level = "verbose"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::{ConfigError, LogLevel};

/// Settings a host applies to every resolver it builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub log_level: LogLevel,
}

impl ResolverConfig {
    /// Parses a config document, failing on malformed TOML or unknown levels.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads and parses a config file, propagating every failure.
    pub fn try_load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads config from `path` if it exists.
    /// Falls back to defaults with a warning on read or parse errors.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No resolver config found at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::try_load_from(path) {
            Ok(config) => {
                info!(log_level = %config.log_level, "Loaded resolver config from {:?}", path);
                config
            }
            Err(e) => {
                warn!(
                    "Failed to load resolver config {:?}: {}. Falling back to defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }
}
