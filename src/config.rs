//! Application configuration.
//!
//! The CLI reads an optional JSON file from
//! `$XDG_CONFIG_HOME/monplace/config.json`.  Every field is optional — a
//! minimal `{}` file is valid and all sections fall back to their
//! compiled-in defaults.
//!
//! # Example
//!
//! ```json
//! {
//!   "placement": {
//!     "x": 20,
//!     "y": 20,
//!     "size_to_monitor": false
//!   }
//! }
//! ```

use crate::placement::Placement;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default placement applied by `monplace move` when no placement
    /// flags are given on the command line.
    #[serde(default)]
    pub placement: Placement,
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
