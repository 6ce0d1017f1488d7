//! Transport-agnostic command output types.
//!
//! Handlers return these; the console turns them into styled output lines
//! and the surfaces render those.

/// Output from a command handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// A single line of normal text.
    Info(String),

    /// Several outputs, rendered in order.
    Multiple(Vec<CommandOutput>),

    /// Console control action.
    Control(ControlAction),
}

/// Control actions that affect console state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// Discard every rendered output line.
    ClearOutput,
}

impl CommandOutput {
    /// Creates an info line.
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Creates a multi-line output, one info line per item.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Multiple(lines.into_iter().map(Self::info).collect())
    }

    /// Creates a clear-output control action.
    pub fn clear_output() -> Self {
        Self::Control(ControlAction::ClearOutput)
    }
}
