//! Command parsing and dispatch for Paicheco.
//!
//! Parsing, registry lookup and handlers are kept apart so each can be unit
//! tested without a console session.

pub mod definitions;
pub mod error;
pub mod handlers;
pub mod help;
pub mod output;
pub mod router;

pub use definitions::{find_command, ArithOp, CommandDef, CommandKind, COMMANDS};
pub use error::CommandError;
pub use handlers::{CommandContext, CommandResult};
pub use output::{CommandOutput, ControlAction};
pub use router::{Command, CommandRouter, ParsedCommand};
