//! Path management for FinFlow
//!
//! ## Path Resolution Order
//!
//! 1. `FINFLOW_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`$XDG_CONFIG_HOME/finflow` or
//!    `~/.config/finflow` on Linux, `%APPDATA%\finflow` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::FinflowError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FINFLOW_DATA_DIR";

/// Manages all paths used by FinFlow
#[derive(Debug, Clone)]
pub struct FinflowPaths {
    /// Base directory for all FinFlow data
    base_dir: PathBuf,
}

impl FinflowPaths {
    /// Create a new FinflowPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FinflowError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FinflowPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the path to budgets.json
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FinflowError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinflowError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FinflowError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, FinflowError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| FinflowError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("finflow"))
}
