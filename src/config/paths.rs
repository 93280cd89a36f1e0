//! Path management for the budget tracker
//!
//! Only configuration and logs live on disk; budget data is never persisted.
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_TRACKER_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/budget-tracker` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::TrackerError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "BUDGET_TRACKER_CONFIG_DIR";

/// Manages all paths used by the budget tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Base directory for config and logs
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, TrackerError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the TUI log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("budget-tracker.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            TrackerError::Io(format!("Failed to create config directory: {}", e))
        })
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, TrackerError> {
    ProjectDirs::from("", "", "budget-tracker")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TrackerError::Config("Could not determine home directory".into()))
}
