//! Logging setup for Paicheco.
//!
//! The interactive surface draws on the terminal, so its logs go to a file.
//! Headless runs print their report on stdout and log to stderr.
//!
//! Filter precedence: `RUST_LOG`, then `[logging] level`, then the surface
//! default (`info` for the terminal, `warn` for headless).

use crate::config::LoggingConfig;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Where a session writes its logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Interactive terminal session: log file.
    File,
    /// Headless run: stderr.
    Stderr,
}

impl LogTarget {
    fn default_level(self) -> &'static str {
        match self {
            Self::File => "info",
            Self::Stderr => "warn",
        }
    }
}

/// Installs the global subscriber for `target`.
pub fn init(target: LogTarget, config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config_filter(target, config));

    match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
        LogTarget::File => {
            let Some(log_file) = open_log_file(&log_path(config)) else {
                return;
            };
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(log_file)
                .with_ansi(false)
                .init();
        }
    }
}

/// Returns the filter directive for `target` when `RUST_LOG` is unset.
pub fn filter_directive(target: LogTarget, config: &LoggingConfig) -> &str {
    config
        .level
        .as_deref()
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .unwrap_or(target.default_level())
}

fn config_filter(target: LogTarget, config: &LoggingConfig) -> EnvFilter {
    let directive = filter_directive(target, config);
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("Warning: invalid [logging] level '{directive}': {e}");
        EnvFilter::new(target.default_level())
    })
}

/// Returns the log file path: `[logging] file`, else the platform state dir.
///
/// `~/.local/state/paicheco/paicheco.log` on Linux.
pub fn log_path(config: &LoggingConfig) -> PathBuf {
    if let Some(file) = &config.file {
        return file.clone();
    }

    dirs::state_dir()
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("paicheco"))
        .unwrap_or_else(std::env::temp_dir)
        .join("paicheco.log")
}

/// Creates the log file, truncating the previous session's log.
fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Warning: Could not create log directory: {e}");
            return None;
        }
    }

    File::create(path)
        .map_err(|e| eprintln!("Warning: Could not create log file {}: {e}", path.display()))
        .ok()
}
