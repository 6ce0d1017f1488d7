//! Command parsing and routing for Paicheco.
//!
//! Parses a raw input line into a command name plus arguments and resolves
//! the name against the registry.

use super::definitions::{find_command, CommandDef};

/// A raw line split into a command name and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// First token, lower-cased.
    pub name: String,
    /// Remaining tokens in order. Consecutive spaces yield empty tokens.
    pub args: Vec<String>,
}

/// A parsed command resolved against the registry.
#[derive(Debug, Clone)]
pub enum Command {
    /// A registered command with its arguments.
    Builtin {
        def: &'static CommandDef,
        args: Vec<String>,
    },
    /// Name not in the registry.
    Unknown(String),
}

/// Command router for parsing user input.
pub struct CommandRouter;

impl CommandRouter {
    /// Splits a raw line on single spaces.
    ///
    /// Returns `None` when the line is empty after trimming.
    pub fn parse(input: &str) -> Option<ParsedCommand> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let mut parts = input.split(' ');
        let name = parts.next().unwrap_or_default().to_lowercase();
        let args = parts.map(str::to_string).collect();

        Some(ParsedCommand { name, args })
    }

    /// Resolves a parsed command against the registry.
    pub fn resolve(parsed: ParsedCommand) -> Command {
        match find_command(&parsed.name) {
            Some(def) => Command::Builtin {
                def,
                args: parsed.args,
            },
            None => Command::Unknown(parsed.name),
        }
    }

    /// Parses and resolves in one step.
    pub fn route(input: &str) -> Option<Command> {
        Self::parse(input).map(Self::resolve)
    }
}
