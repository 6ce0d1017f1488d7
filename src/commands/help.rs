//! Help text for Paicheco commands.

use super::definitions::COMMANDS;

/// Header line of the help listing.
pub const HELP_HEADER: &str = "available commands:";

/// Generates the help listing from the command definitions, one line each.
pub fn help_lines() -> Vec<String> {
    std::iter::once(HELP_HEADER.to_string())
        .chain(
            COMMANDS
                .iter()
                .map(|cmd| format!("  {:<12} - {}", cmd.usage, cmd.description)),
        )
        .collect()
}
