//! User-facing command errors.
//!
//! Each variant renders as exactly one error line in the output area. They
//! are handled inside the dispatcher and never abort the session.

use thiserror::Error;

/// Error produced while executing a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Too few arguments for a fixed-arity command.
    #[error("usage: {usage}")]
    Usage { usage: &'static str },

    /// An argument that must be numeric did not parse.
    #[error("use valid numbers")]
    InvalidNumber,

    /// The first token is not a registered command.
    #[error("command not found, type 'help'")]
    UnknownCommand(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CommandError::Usage {
                usage: "sum <a> <b>"
            }
            .to_string(),
            "usage: sum <a> <b>"
        );
        assert_eq!(CommandError::InvalidNumber.to_string(), "use valid numbers");
        assert_eq!(
            CommandError::UnknownCommand("foo".to_string()).to_string(),
            "command not found, type 'help'"
        );
    }
}
