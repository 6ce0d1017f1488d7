//! Error types for Paicheco.
//!
//! Defines the application-level error enum. User-facing command errors
//! (bad arity, bad numbers, unknown commands) live in
//! [`crate::commands::CommandError`] and never reach this type.

use thiserror::Error;

/// Main error type for Paicheco operations.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Storage backend errors (unreadable data directory, failed writes, etc.)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration errors (invalid config file, bad CLI values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal errors (raw mode, event polling, writes to stdout)
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Headless script errors (bad event syntax, unreadable script file)
    #[error("Script error: {0}")]
    Script(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConsoleError {
    /// Creates a storage error with the given message.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a terminal error with the given message.
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Creates a script error with the given message.
    pub fn script(msg: impl Into<String>) -> Self {
        Self::Script(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Storage(_) => "Storage Error",
            Self::Config(_) => "Configuration Error",
            Self::Terminal(_) => "Terminal Error",
            Self::Script(_) => "Script Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using ConsoleError.
pub type Result<T> = std::result::Result<T, ConsoleError>;
