//! System command handlers (help, clear, time).

use chrono::{DateTime, Local};

use super::CommandResult;
use crate::commands::help::help_lines;
use crate::commands::output::CommandOutput;

/// Handle `help`.
pub fn handle_help() -> CommandResult {
    Ok(CommandOutput::lines(help_lines()))
}

/// Handle `clear`.
pub fn handle_clear() -> CommandResult {
    Ok(CommandOutput::clear_output())
}

/// Handle `time`: calendar date then clock time, local timezone.
pub fn handle_time(now: &DateTime<Local>) -> CommandResult {
    Ok(CommandOutput::info(format!(
        "current time: {} {}",
        now.format("%d/%m/%Y"),
        now.format("%H:%M:%S")
    )))
}
