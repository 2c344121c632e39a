//! Configuration file support for authmode.
//!
//! Loads optional `.authmode/config.toml` from the scan root.

use serde::Deserialize;
use std::path::Path;
use tracing::warn;

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AuthModeConfig {
    /// Extra path substrings to exclude. `LocalRunOutputs` always applies.
    /// Example: `["node_modules", "bin/Debug"]`
    pub exclude_markers: Vec<String>,
    /// Exit non-zero when any file fails, same as `--strict`.
    pub strict: bool,
}

impl AuthModeConfig {
    /// Load config from `.authmode/config.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".authmode").join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
