//! Database configuration via `rafdb.toml`
//!
//! On first open, a default `rafdb.toml` is created in the data directory.
//! To change settings, edit the file and restart.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use std::time::Duration;

use rafdb_core::{Error, Result};

/// Config file name placed in the database data directory.
pub const CONFIG_FILE_NAME: &str = "rafdb.toml";

/// Default snapshot file name.
pub const DEFAULT_SNAPSHOT_FILE: &str = "rafdb_data.json";

/// Longest accepted background snapshot interval (one year).
pub const MAX_SNAPSHOT_INTERVAL_SECS: u64 = 365 * 24 * 60 * 60;

/// Database configuration loaded from `rafdb.toml`.
///
/// # Example
///
/// ```toml
/// snapshot_file = "rafdb_data.json"
/// snapshot_interval_secs = 60
/// save_on_shutdown = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RafConfig {
    /// Snapshot file name, relative to the data directory.
    #[serde(default = "default_snapshot_file")]
    pub snapshot_file: String,
    /// Seconds between background snapshots; `0` disables them.
    #[serde(default)]
    pub snapshot_interval_secs: u64,
    /// Write a final snapshot when the database shuts down.
    #[serde(default = "default_true")]
    pub save_on_shutdown: bool,
}

fn default_snapshot_file() -> String {
    DEFAULT_SNAPSHOT_FILE.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for RafConfig {
    fn default() -> Self {
        Self {
            snapshot_file: default_snapshot_file(),
            snapshot_interval_secs: 0,
            save_on_shutdown: true,
        }
    }
}

impl RafConfig {
    /// Background snapshot interval, if enabled.
    pub fn snapshot_interval(&self) -> Option<Duration> {
        (self.snapshot_interval_secs > 0).then(|| Duration::from_secs(self.snapshot_interval_secs))
    }

    /// Check that the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the snapshot file name is empty, contains a
    /// path separator, or collides with the config file, or if the snapshot
    /// interval exceeds [`MAX_SNAPSHOT_INTERVAL_SECS`].
    pub fn validate(&self) -> Result<()> {
        if self.snapshot_interval_secs > MAX_SNAPSHOT_INTERVAL_SECS {
            return Err(Error::invalid_input(format!(
                "snapshot_interval_secs {} exceeds the maximum of {}",
                self.snapshot_interval_secs, MAX_SNAPSHOT_INTERVAL_SECS
            )));
        }

        let name = self.snapshot_file.as_str();
        if name.is_empty() || name == "." || name == ".." {
            return Err(Error::invalid_input(format!(
                "Invalid snapshot_file '{}' in rafdb.toml",
                name
            )));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(Error::invalid_input(format!(
                "snapshot_file '{}' must be a file name, not a path",
                name
            )));
        }
        if name == CONFIG_FILE_NAME {
            return Err(Error::invalid_input(
                "snapshot_file must not be the config file itself",
            ));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# RafDB database configuration
#
# Snapshot file, relative to this directory.
snapshot_file = "rafdb_data.json"

# Seconds between background snapshots (default: 0 = disabled).
snapshot_interval_secs = 0

# Write a snapshot when the database shuts down (default: true).
save_on_shutdown = true
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, `InvalidInput` if it cannot be
    /// parsed or holds invalid values.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config file '{}': {}", path.display(), e),
            ))
        })?;
        let config: RafConfig = toml::from_str(&content).map_err(|e| {
            Error::invalid_input(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::Io(io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to write default config file '{}': {}",
                        path.display(),
                        e
                    ),
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::invalid_input(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(path, content).map_err(|e| {
            Error::Io(io::Error::new(
                e.kind(),
                format!("Failed to write config file '{}': {}", path.display(), e),
            ))
        })
    }
}
