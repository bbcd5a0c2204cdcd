use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error_handler::MatrixError;

/// Workbook file name, always written relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "Lead-Management-Maturity-Matrix.xlsx";

// ---------------------------------------------------------------------------
// MatrixConfig
// ---------------------------------------------------------------------------

/// Logging settings, optionally read from `~/.maturity_matrix/config.json`.
///
/// Every field has a default, so a missing file (or a file that only sets a
/// subset of keys) is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    /// Fallback `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_level: String,
    /// Also write logs to a daily-rotated file under `logs_dir()`.
    pub file_logging: bool,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            file_logging: false,
        }
    }
}

impl MatrixConfig {
    /// Returns the base config directory: `~/.maturity_matrix/`
    pub fn base_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".maturity_matrix"))
    }

    /// Returns the config file path: `~/.maturity_matrix/config.json`
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.json"))
    }

    /// Returns the logs directory: `~/.maturity_matrix/logs/`
    pub fn logs_dir() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("logs"))
    }

    /// Loads config from the default location.
    ///
    /// Falls back to defaults when no home directory can be resolved.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Ok(path) => Self::load_from_path(&path),
            Err(e) => {
                debug!("No config location ({e}); using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from a specific file path.
    ///
    /// A missing file yields the defaults; nothing is written back.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}; using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| MatrixError::Config(format!("{}: {e}", path.display())))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
