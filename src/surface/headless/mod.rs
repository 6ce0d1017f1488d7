//! Headless mode for scripted testing and automation.
//!
//! Runs a console session without a terminal, executing scripted events and
//! capturing the output for verification.

mod events;
mod output;

pub use events::{Assertion, Event, EventParser};
pub use output::{HeadlessOutput, OutputFormat, ScreenRenderer};

use crate::cli::Cli;
use crate::console::{Console, OutputLine};
use crate::error::{ConsoleError, Result};
use crate::persistence::Storage;
use crate::surface::keymap::{handle_key, KeyOutcome};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Configuration for headless mode execution.
#[derive(Debug, Clone, Default)]
pub struct HeadlessConfig {
    /// Output format.
    pub output_format: OutputFormat,
    /// Whether to stop on first assertion failure.
    pub fail_fast: bool,
    /// Path to write output (None = stdout).
    pub output_file: Option<PathBuf>,
}

impl HeadlessConfig {
    /// Creates a HeadlessConfig from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let output_format = cli.output.parse().map_err(ConsoleError::config)?;

        Ok(Self {
            output_format,
            fail_fast: cli.fail_fast,
            output_file: cli.output_file.clone(),
        })
    }
}

/// Result of headless execution.
#[derive(Debug)]
pub struct HeadlessResult {
    /// Final screen content as text.
    pub screen: String,
    /// Final output lines with their styles.
    pub lines: Vec<OutputLine>,
    /// Number of events executed.
    pub events_executed: usize,
    /// Total execution duration.
    pub duration: Duration,
    /// Number of assertions passed.
    pub assertions_passed: usize,
    /// Number of assertions failed.
    pub assertions_failed: usize,
    /// Console state snapshot.
    pub state: HeadlessState,
    /// Frame captures (for frames output mode).
    pub frames: Vec<Frame>,
}

/// Snapshot of console state for JSON output.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HeadlessState {
    /// Current input text.
    pub input_text: String,
    /// Number of history entries.
    pub history_len: usize,
    /// History recall cursor.
    pub history_cursor: usize,
    /// Number of lines in the output area.
    pub output_len: usize,
    /// Whether the session is still running (no ctrl+c/ctrl+d seen).
    pub running: bool,
}

impl HeadlessState {
    fn from_console<S: Storage>(console: &Console<S>, running: bool) -> Self {
        Self {
            input_text: console.input().to_string(),
            history_len: console.history().len(),
            history_cursor: console.history_cursor(),
            output_len: console.output().len(),
            running,
        }
    }
}

/// A captured frame (screen state after an event).
#[derive(Debug, Clone)]
pub struct Frame {
    /// Frame number (0 = initial state).
    pub number: usize,
    /// Event that produced this frame (None for initial).
    pub event: Option<String>,
    /// Screen content.
    pub screen: String,
}

/// Runs a console session in headless mode.
pub struct HeadlessRunner<S> {
    config: HeadlessConfig,
    console: Console<S>,
    events: Vec<Event>,
    frames: Vec<Frame>,
    assertions_passed: usize,
    assertions_failed: usize,
}

impl<S: Storage> HeadlessRunner<S> {
    /// Creates a new headless runner over a console session.
    pub fn new(config: HeadlessConfig, console: Console<S>) -> Self {
        Self {
            config,
            console,
            events: Vec::new(),
            frames: Vec::new(),
            assertions_passed: 0,
            assertions_failed: 0,
        }
    }

    /// Loads events from a string (comma-separated or newline-separated).
    pub fn load_events(&mut self, input: &str) -> Result<()> {
        self.events = EventParser::new().parse_all(input)?;
        Ok(())
    }

    /// Loads events from a script file, or stdin when `path` is "-".
    pub fn load_script(&mut self, path: &str) -> Result<()> {
        let content = if path == "-" {
            use std::io::Read;
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| ConsoleError::script(format!("Failed to read stdin: {e}")))?;
            buffer
        } else {
            std::fs::read_to_string(path)
                .map_err(|e| ConsoleError::script(format!("Failed to read script file: {e}")))?
        };

        self.load_events(&content)
    }

    /// Runs the loaded events and returns the result.
    ///
    /// The console session is closed afterwards, flushing history.
    pub fn run(mut self) -> HeadlessResult {
        let start_time = Instant::now();
        let capture_frames = self.config.output_format == OutputFormat::Frames;

        if capture_frames {
            self.capture_frame(None);
        }

        let events = std::mem::take(&mut self.events);
        let mut events_executed = 0;
        let mut running = true;

        for event in events {
            debug!(event = %event, "Headless event");

            match &event {
                Event::Key(key) => {
                    if handle_key(&mut self.console, *key) == KeyOutcome::Exit {
                        running = false;
                    }
                }
                Event::Type(text) => self.console.insert_str(text),
                Event::Assert(assertion) => {
                    let screen = self.render_screen();
                    if assertion.check(&screen, &self.console) {
                        self.assertions_passed += 1;
                    } else {
                        warn!("Assertion failed: {event}");
                        self.assertions_failed += 1;
                        if self.config.fail_fast {
                            events_executed += 1;
                            break;
                        }
                    }
                }
            }

            // Headless has no incremental display; the buffer is the screen
            self.console.drain_updates();
            events_executed += 1;

            if capture_frames {
                self.capture_frame(Some(event.to_string()));
            }

            if !running {
                break;
            }
        }

        let screen = self.render_screen();
        let lines = self.console.output().to_vec();
        let state = HeadlessState::from_console(&self.console, running);

        if let Err(e) = self.console.close() {
            warn!("History not flushed: {e}");
        }

        HeadlessResult {
            screen,
            lines,
            events_executed,
            duration: start_time.elapsed(),
            assertions_passed: self.assertions_passed,
            assertions_failed: self.assertions_failed,
            state,
            frames: self.frames,
        }
    }

    fn render_screen(&self) -> String {
        ScreenRenderer::render(self.console.output(), self.console.input())
    }

    fn capture_frame(&mut self, event: Option<String>) {
        let screen = self.render_screen();
        let number = self.frames.len();
        self.frames.push(Frame {
            number,
            event,
            screen,
        });
    }
}

/// Runs headless mode from CLI arguments. Returns the process exit code.
pub fn run_headless<S: Storage>(cli: &Cli, console: Console<S>) -> Result<i32> {
    cli.validate_headless().map_err(ConsoleError::config)?;

    let config = HeadlessConfig::from_cli(cli)?;
    let mut runner = HeadlessRunner::new(config.clone(), console);

    if let Some(ref events_str) = cli.events {
        runner.load_events(events_str)?;
    } else if let Some(ref script_path) = cli.script {
        runner.load_script(script_path)?;
    }

    let result = runner.run();
    let output_str = HeadlessOutput::new(config.output_format).format(&result);

    if let Some(ref path) = config.output_file {
        std::fs::write(path, &output_str)
            .map_err(|e| ConsoleError::internal(format!("Failed to write output file: {e}")))?;
    } else {
        print!("{}", output_str);
    }

    if result.assertions_failed > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}
