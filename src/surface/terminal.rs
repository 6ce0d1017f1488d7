//! Interactive terminal surface.
//!
//! Puts the terminal in raw mode, forwards key presses to the console and
//! prints the output updates it emits above a `> ` prompt line.

use crate::console::{Console, LineStyle, OutputLine, OutputUpdate};
use crate::error::{ConsoleError, Result};
use crate::persistence::Storage;
use crate::surface::keymap::{handle_key, KeyOutcome};
use crate::surface::PROMPT;
use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyEventKind},
    queue,
    style::{Print, PrintStyledContent, Stylize},
    terminal::{self, disable_raw_mode, enable_raw_mode, ClearType},
};
use std::io::{self, Stdout, Write};
use tracing::{debug, info};

/// Raw-mode terminal that renders a console session.
pub struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    /// Enables raw mode. The terminal is restored on drop.
    pub fn new() -> Result<Self> {
        enable_raw_mode()
            .map_err(|e| ConsoleError::terminal(format!("Failed to enable raw mode: {e}")))?;
        Ok(Self {
            stdout: io::stdout(),
        })
    }

    /// Runs the event loop until ctrl+c or ctrl+d.
    pub fn run<S: Storage>(&mut self, console: &mut Console<S>) -> Result<()> {
        info!("Interactive session started");
        self.draw_prompt(console.input())?;

        loop {
            let event = event::read()
                .map_err(|e| ConsoleError::terminal(format!("Failed to read event: {e}")))?;

            let key = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => key,
                _ => continue,
            };

            if handle_key(console, key) == KeyOutcome::Exit {
                debug!("Exit requested");
                break;
            }

            let updates = console.drain_updates();
            self.render(&updates)?;
            self.draw_prompt(console.input())?;
        }

        self.write(|out| queue!(out, Print("\r\n")))
    }

    fn render(&mut self, updates: &[OutputUpdate]) -> Result<()> {
        for update in updates {
            match update {
                OutputUpdate::Line(line) => self.print_line(line)?,
                OutputUpdate::Clear => self.write(|out| {
                    queue!(out, terminal::Clear(ClearType::All), MoveTo(0, 0))
                })?,
            }
        }
        Ok(())
    }

    fn print_line(&mut self, line: &OutputLine) -> Result<()> {
        let text = line.text.as_str();
        self.write(|out| {
            queue!(out, Print("\r"), terminal::Clear(ClearType::CurrentLine))?;
            match line.style {
                LineStyle::Normal => queue!(out, Print(text))?,
                LineStyle::Meta => queue!(out, PrintStyledContent(text.dark_grey()))?,
                LineStyle::Error => queue!(out, PrintStyledContent(text.red()))?,
            }
            queue!(out, Print("\r\n"))
        })
    }

    fn draw_prompt(&mut self, input: &str) -> Result<()> {
        self.write(|out| {
            queue!(
                out,
                Print("\r"),
                terminal::Clear(ClearType::CurrentLine),
                Print(PROMPT),
                Print(input)
            )
        })?;
        self.stdout
            .flush()
            .map_err(|e| ConsoleError::terminal(format!("Failed to flush stdout: {e}")))
    }

    fn write<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Stdout) -> io::Result<()>,
    {
        f(&mut self.stdout)
            .map_err(|e| ConsoleError::terminal(format!("Failed to write to terminal: {e}")))
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Runs the interactive surface, closing the session on exit.
pub fn run<S: Storage>(mut console: Console<S>) -> Result<()> {
    let outcome = Terminal::new().and_then(|mut terminal| terminal.run(&mut console));
    console.close()?;
    outcome
}
