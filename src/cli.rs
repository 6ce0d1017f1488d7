//! Command-line argument parsing for Paicheco.

use crate::surface::headless::OutputFormat;
use clap::Parser;
use std::path::{Path, PathBuf};

/// A small line-command console with persisted history and Tab completion.
#[derive(Parser, Debug)]
#[command(name = "paicheco")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the history file (overrides the config file)
    #[arg(long, value_name = "PATH", env = "PAICHECO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep history in memory only
    #[arg(long)]
    pub no_history: bool,

    // === Headless mode options ===
    /// Run in headless mode (no terminal, for testing/automation)
    #[arg(long)]
    pub headless: bool,

    /// Comma-separated events to execute in headless mode (e.g., "type:help,key:enter")
    #[arg(long, value_name = "EVENTS")]
    pub events: Option<String>,

    /// Path to script file with events (use "-" for stdin)
    #[arg(long, value_name = "PATH")]
    pub script: Option<String>,

    /// Output format for headless mode (text, json, frames)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub output: String,

    /// Write output to file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Stop on first assertion failure
    #[arg(long)]
    pub fail_fast: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_path)
    }

    /// Returns the data directory override, if any.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// Returns true if history should be read from and written to disk.
    ///
    /// Headless runs stay in memory unless a data directory is given, so
    /// scripts never touch the user's real history.
    pub fn persistent_history(&self) -> bool {
        if self.no_history {
            return false;
        }
        !self.headless || self.data_dir.is_some()
    }

    /// Parses the output format from the --output argument.
    pub fn parse_output_format(&self) -> std::result::Result<OutputFormat, String> {
        self.output.parse()
    }

    /// Validates headless mode arguments.
    /// Returns an error message if validation fails.
    pub fn validate_headless(&self) -> std::result::Result<(), String> {
        if !self.headless {
            return Ok(());
        }

        if self.events.is_none() && self.script.is_none() {
            return Err("--headless requires --events or --script".to_string());
        }

        self.parse_output_format()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> Cli {
        Cli::parse_from(args)
    }

    #[test]
    fn test_parse_config_path() {
        let cli = parse_args(&["paicheco", "--config", "/path/to/config.toml"]);
        assert_eq!(cli.config_path(), PathBuf::from("/path/to/config.toml"));
    }

    #[test]
    fn test_default_config_path() {
        let cli = parse_args(&["paicheco"]);
        assert!(cli.config_path().ends_with("config.toml"));
    }

    #[test]
    fn test_persistent_history_rules() {
        assert!(parse_args(&["paicheco"]).persistent_history());
        assert!(!parse_args(&["paicheco", "--no-history"]).persistent_history());
        assert!(!parse_args(&["paicheco", "--headless", "--events", "key:tab"])
            .persistent_history());
        assert!(parse_args(&[
            "paicheco",
            "--headless",
            "--events",
            "key:tab",
            "--data-dir",
            "/tmp/p"
        ])
        .persistent_history());
    }

    #[test]
    fn test_parse_headless_flag() {
        let cli = parse_args(&["paicheco", "--headless", "--events", "key:esc"]);
        assert!(cli.headless);
        assert_eq!(cli.events, Some("key:esc".to_string()));
    }

    #[test]
    fn test_parse_output_format() {
        let cli = parse_args(&["paicheco", "--output", "json"]);
        assert_eq!(cli.parse_output_format().unwrap(), OutputFormat::Json);

        let cli = parse_args(&["paicheco"]);
        assert_eq!(cli.parse_output_format().unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_validate_headless_requires_events_or_script() {
        let cli = parse_args(&["paicheco", "--headless"]);
        let result = cli.validate_headless();
        assert!(result
            .unwrap_err()
            .contains("requires --events or --script"));
    }

    #[test]
    fn test_validate_headless_rejects_bad_format() {
        let cli = parse_args(&["paicheco", "--headless", "--script", "-", "--output", "xml"]);
        assert!(cli.validate_headless().is_err());
    }

    #[test]
    fn test_headless_output_file_and_fail_fast() {
        let cli = parse_args(&[
            "paicheco",
            "--headless",
            "--events",
            "key:esc",
            "--output-file",
            "result.json",
            "--fail-fast",
        ]);
        assert_eq!(cli.output_file, Some(PathBuf::from("result.json")));
        assert!(cli.fail_fast);
        assert!(cli.validate_headless().is_ok());
    }
}
