//! User settings for the budget tracker
//!
//! Preferences that shape validation and presentation. Settings are the only
//! thing read from disk; budget and expenses always start empty.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::AmountPolicy;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Whether zero budgets and expenses are accepted
    #[serde(default)]
    pub amount_policy: AmountPolicy,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Seconds before a validation message disappears in the TUI
    #[serde(default = "default_feedback_dismiss_secs")]
    pub feedback_dismiss_secs: u64,

    /// Show expense titles upper-cased in lists
    #[serde(default = "default_uppercase_titles")]
    pub uppercase_titles: bool,

    /// Default log filter when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_feedback_dismiss_secs() -> u64 {
    5
}

fn default_uppercase_titles() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            amount_policy: AmountPolicy::default(),
            currency_symbol: default_currency(),
            feedback_dismiss_secs: default_feedback_dismiss_secs(),
            uppercase_titles: default_uppercase_titles(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - `init` decides when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.amount_policy, AmountPolicy::StrictlyPositive);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.feedback_dismiss_secs, 5);
        assert!(settings.uppercase_titles);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.amount_policy = AmountPolicy::NonNegative;
        settings.currency_symbol = "€".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.amount_policy, AmountPolicy::NonNegative);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"amount_policy":"non-negative"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.amount_policy, AmountPolicy::NonNegative);
        assert_eq!(loaded.feedback_dismiss_secs, 5);
        assert_eq!(loaded.log_level, "warn");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }
}
