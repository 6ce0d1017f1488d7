//! Configuration management for Paicheco.
//!
//! Handles loading configuration from a TOML file. Every field has a default,
//! so a missing file or an empty section is valid.

use crate::error::{ConsoleError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Storage key the history log is saved under.
pub const DEFAULT_HISTORY_KEY: &str = "terminal_history";

/// Label prefixed to every echoed input line.
pub const DEFAULT_PROMPT_LABEL: &str = "Paicheco";

/// Main configuration structure for Paicheco.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Console presentation settings.
    #[serde(default)]
    pub console: ConsoleConfig,

    /// History persistence settings.
    #[serde(default)]
    pub history: HistoryConfig,

    /// Log verbosity and destination.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Console presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Label used in echo lines (`<label>: <input>`).
    #[serde(default = "default_prompt_label")]
    pub prompt_label: String,
}

fn default_prompt_label() -> String {
    DEFAULT_PROMPT_LABEL.to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt_label: default_prompt_label(),
        }
    }
}

/// History persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Storage key for the serialized history log.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Directory holding the storage files. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,
}

fn default_storage_key() -> String {
    DEFAULT_HISTORY_KEY.to_string()
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            data_dir: None,
        }
    }
}

impl HistoryConfig {
    /// Returns the configured data directory, or the platform default.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    /// The storage key becomes a file name, so it must not leave the data dir.
    fn validate(&self) -> std::result::Result<(), String> {
        crate::persistence::validate_key(&self.storage_key).map_err(|e| match e {
            ConsoleError::Storage(msg) => format!("history.storage_key: {msg}"),
            other => other.to_string(),
        })
    }
}

/// Log settings. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive such as `debug` or `paicheco=trace`.
    pub level: Option<String>,

    /// Log file for interactive sessions. Defaults to the platform state dir.
    pub file: Option<PathBuf>,
}

/// Returns the platform data directory for Paicheco.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("paicheco")
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("paicheco")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConsoleError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            ConsoleError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })?;

        config.history.validate().map_err(|e| {
            ConsoleError::config(format!("Configuration error in {}:\n  {e}", path.display()))
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_config() {
        let toml = r#"
[console]
prompt_label = "guest"

[history]
storage_key = "my_history"
data_dir = "/tmp/paicheco"

[logging]
level = "debug"
file = "/tmp/paicheco.log"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.console.prompt_label, "guest");
        assert_eq!(config.history.storage_key, "my_history");
        assert_eq!(
            config.history.resolved_data_dir(),
            PathBuf::from("/tmp/paicheco")
        );
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/paicheco.log")));
    }

    #[test]
    fn test_missing_optional_fields() {
        let config: Config = toml::from_str("[history]\n").unwrap();

        assert_eq!(config.console.prompt_label, DEFAULT_PROMPT_LABEL);
        assert_eq!(config.history.storage_key, DEFAULT_HISTORY_KEY);
        assert_eq!(config.history.data_dir, None);
        assert_eq!(config.logging.level, None);
        assert_eq!(config.logging.file, None);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.console.prompt_label, "Paicheco");
        assert_eq!(config.history.storage_key, "terminal_history");
        assert!(config.history.resolved_data_dir().ends_with("paicheco"));
    }

    #[test]
    fn test_load_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.console.prompt_label, DEFAULT_PROMPT_LABEL);
    }

    #[test]
    fn test_load_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[console]\nprompt_label = 42\n").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConsoleError::Config(_)));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_storage_key_must_stay_in_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        for key in ["../x", "nested/history", ""] {
            std::fs::write(&path, format!("[history]\nstorage_key = \"{key}\"\n")).unwrap();
            let err = Config::load_from_file(&path).unwrap_err();
            assert!(matches!(err, ConsoleError::Config(_)), "accepted {key:?}");
            assert!(err.to_string().contains("storage_key"));
        }
    }
}
