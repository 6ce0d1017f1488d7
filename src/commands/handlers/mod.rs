//! Command handlers for Paicheco.
//!
//! Each handler is a pure function from arguments and context to a result.

pub mod arithmetic;
pub mod system;

use chrono::{DateTime, Local};
use tracing::debug;

use super::definitions::CommandKind;
use super::error::CommandError;
use super::output::CommandOutput;
use super::router::Command;

/// Result of executing a command.
pub type CommandResult = std::result::Result<CommandOutput, CommandError>;

/// Context provided to command handlers.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Wall-clock time the command runs at.
    pub now: DateTime<Local>,
}

impl CommandContext {
    /// Creates a context stamped with the current local time.
    pub fn current() -> Self {
        Self { now: Local::now() }
    }
}

/// Runs a resolved command.
pub fn dispatch(command: &Command, ctx: &CommandContext) -> CommandResult {
    match command {
        Command::Builtin { def, args } => {
            debug!(command = def.name, args = args.len(), "Dispatching command");
            match def.kind {
                CommandKind::Help => system::handle_help(),
                CommandKind::Clear => system::handle_clear(),
                CommandKind::Time => system::handle_time(&ctx.now),
                CommandKind::Arithmetic(op) => arithmetic::handle_arithmetic(op, def.usage, args),
            }
        }
        Command::Unknown(name) => {
            debug!(command = %name, "Unknown command");
            Err(CommandError::UnknownCommand(name.clone()))
        }
    }
}
