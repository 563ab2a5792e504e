//! User settings for the expense tracker
//!
//! Display preferences, the optional seed file and audit logging.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::DEFAULT_CURRENCY_SYMBOL;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency glyph shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Page title
    #[serde(default = "default_title")]
    pub title: String,

    /// Seed file to load instead of the built-in dataset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,

    /// Whether mutations are appended to the audit log file
    #[serde(default)]
    pub audit_log_enabled: bool,

    /// TUI tick interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Newest settings layout this build understands
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

fn default_currency() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_title() -> String {
    "TBC Rooftop Construction And Daily Expenses".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            title: default_title(),
            seed_file: None,
            audit_log_enabled: false,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if settings.schema_version > SCHEMA_VERSION {
                return Err(ExpenseError::Config(format!(
                    "{} uses settings schema {}, newer than the supported {}",
                    settings_path.display(),
                    settings.schema_version,
                    SCHEMA_VERSION
                )));
            }

            Ok(settings)
        } else {
            // Not persisted until the caller asks
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            ExpenseError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Tick interval for the TUI event loop
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "৳");
        assert!(settings.seed_file.is_none());
        assert!(!settings.audit_log_enabled);
        assert_eq!(settings.tick_rate(), Duration::from_millis(250));
    }

    #[test]
    fn test_missing_file_gives_defaults_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "Tk ".into();
        settings.seed_file = Some(PathBuf::from("/tmp/seed.yaml"));
        settings.audit_log_enabled = true;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "Tk ");
        assert_eq!(loaded.seed_file, Some(PathBuf::from("/tmp/seed.yaml")));
        assert!(loaded.audit_log_enabled);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"audit_log_enabled": true}"#).unwrap();
        assert!(settings.audit_log_enabled);
        assert_eq!(settings.tick_rate_ms, 250);
        assert_eq!(settings.title, "TBC Rooftop Construction And Daily Expenses");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }

    #[test]
    fn test_newer_schema_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"schema_version": 2}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
        assert!(err.to_string().contains("schema 2"));

        std::fs::write(paths.settings_file(), r#"{"schema_version": 1}"#).unwrap();
        assert!(Settings::load_or_create(&paths).is_ok());
    }
}
