//! The console session.
//!
//! [`Console`] owns everything that outlives a single key press: the history
//! log, the output buffer and the live input line. Surfaces feed it
//! [`ConsoleEvent`]s and render the [`OutputUpdate`]s it emits.

pub mod completion;
pub mod history;
pub mod output;

pub use completion::{complete, Completion};
pub use history::HistoryLog;
pub use output::{LineStyle, OutputBuffer, OutputLine, OutputUpdate};

use crate::commands::handlers::{dispatch, CommandContext};
use crate::commands::{CommandOutput, CommandRouter, ControlAction};
use crate::config::{Config, DEFAULT_HISTORY_KEY, DEFAULT_PROMPT_LABEL};
use crate::error::Result;
use crate::persistence::Storage;
use tracing::{debug, info};

/// Direction of a history recall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Older entry (Up).
    Previous,
    /// Newer entry (Down).
    Next,
}

/// Input events delivered by a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    /// Enter or an explicit send action, with the input text.
    Submit(String),
    /// Tab, with the input text.
    Complete(String),
    /// Up or Down.
    Recall(Direction),
}

/// A console session over a storage backend.
#[derive(Debug)]
pub struct Console<S> {
    history: HistoryLog<S>,
    output: OutputBuffer,
    /// Live input line.
    input: String,
    prompt_label: String,
}

impl<S: Storage> Console<S> {
    /// Opens a session using the configured storage key and prompt label.
    pub fn open(storage: S, config: &Config) -> Self {
        Self::open_with(
            storage,
            &config.history.storage_key,
            &config.console.prompt_label,
        )
    }

    /// Opens a session with explicit storage key and prompt label.
    pub fn open_with(storage: S, storage_key: &str, prompt_label: &str) -> Self {
        let history = HistoryLog::load(storage, storage_key);
        info!(
            entries = history.len(),
            key = storage_key,
            "Console session opened"
        );
        Self {
            history,
            output: OutputBuffer::new(),
            input: String::new(),
            prompt_label: prompt_label.to_string(),
        }
    }

    /// Opens a session with the default key and label.
    pub fn with_defaults(storage: S) -> Self {
        Self::open_with(storage, DEFAULT_HISTORY_KEY, DEFAULT_PROMPT_LABEL)
    }

    /// Handles one input event.
    pub fn handle_event(&mut self, event: ConsoleEvent) {
        match event {
            ConsoleEvent::Submit(text) => self.submit(&text),
            ConsoleEvent::Complete(text) => self.complete(&text),
            ConsoleEvent::Recall(direction) => self.recall(direction),
        }
    }

    /// Submits a line: records it in history, then executes it.
    ///
    /// The input line is cleared even when `text` is blank; blank text
    /// leaves history and output untouched.
    pub fn submit(&mut self, text: &str) {
        self.input.clear();
        let line = text.trim();
        if line.is_empty() {
            return;
        }
        self.history.append(line);
        self.execute(line);
    }

    /// Submits the live input line.
    pub fn submit_input(&mut self) {
        let text = std::mem::take(&mut self.input);
        self.submit(&text);
    }

    /// Echoes and executes a line without touching history.
    pub fn execute(&mut self, raw: &str) {
        let line = raw.trim();
        let Some(command) = CommandRouter::route(line) else {
            return;
        };

        self.output
            .push(OutputLine::meta(format!("{}: {}", self.prompt_label, line)));

        match dispatch(&command, &CommandContext::current()) {
            Ok(output) => self.render(output),
            Err(e) => {
                debug!("Command failed: {e:?}");
                self.output.push(OutputLine::error(e.to_string()));
            }
        }
    }

    fn render(&mut self, output: CommandOutput) {
        match output {
            CommandOutput::Info(text) => self.output.push(OutputLine::normal(text)),
            CommandOutput::Multiple(outputs) => {
                for output in outputs {
                    self.render(output);
                }
            }
            CommandOutput::Control(ControlAction::ClearOutput) => self.output.clear(),
        }
    }

    /// Completes `text` against the command names.
    pub fn complete(&mut self, text: &str) {
        match complete(text) {
            Completion::Unchanged => {}
            Completion::Replace(name) => self.input = name.to_string(),
            Completion::Candidates(names) => {
                for line in completion::candidate_lines(&names) {
                    self.output.push(OutputLine::normal(line));
                }
            }
        }
    }

    /// Completes the live input line.
    pub fn complete_input(&mut self) {
        let text = self.input.clone();
        self.complete(&text);
    }

    /// Recalls a history entry into the input line.
    ///
    /// Previous at the oldest entry keeps the input; Next past the newest
    /// entry clears it.
    pub fn recall(&mut self, direction: Direction) {
        let recalled = match direction {
            Direction::Previous => self.history.recall_previous(),
            Direction::Next => self.history.recall_next().or(Some("")),
        };
        if let Some(line) = recalled {
            self.input = line.to_string();
        }
    }

    /// Returns the live input line.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the live input line.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Appends a character to the input line.
    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Appends text to the input line.
    pub fn insert_str(&mut self, text: &str) {
        self.input.push_str(text);
    }

    /// Removes the last character of the input line.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Empties the input line.
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Returns the rendered output lines.
    pub fn output(&self) -> &[OutputLine] {
        self.output.lines()
    }

    /// Takes the output updates emitted since the last call.
    pub fn drain_updates(&mut self) -> Vec<OutputUpdate> {
        self.output.drain_updates()
    }

    /// Returns the submitted lines, oldest first.
    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    /// Returns the history recall cursor.
    pub fn history_cursor(&self) -> usize {
        self.history.cursor()
    }

    /// Flushes history and ends the session, returning the storage backend.
    pub fn close(mut self) -> Result<S> {
        self.history.flush()?;
        info!(entries = self.history.len(), "Console session closed");
        Ok(self.history.into_storage())
    }
}
