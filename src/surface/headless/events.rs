//! Event DSL parser for headless mode.
//!
//! Parses event strings like "type:sum 5 3", "key:enter" and
//! "assert:contains:5 + 3 = 8" into executable events.

use crate::console::Console;
use crate::error::{ConsoleError, Result};
use crate::persistence::Storage;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;

/// An assertion to check against the screen or console state.
#[derive(Debug, Clone)]
pub enum Assertion {
    /// Screen contains text (case-insensitive).
    Contains(String),
    /// Screen contains text (case-sensitive).
    ContainsExact(String),
    /// Screen does not contain text.
    NotContains(String),
    /// Screen matches regex pattern.
    Matches(String),
    /// State field equals value.
    StateEquals { field: String, value: String },
    /// State field comparison (>=, <=, >, <).
    StateCompare {
        field: String,
        op: String,
        value: String,
    },
}

impl Assertion {
    /// Checks the assertion against the screen and console state.
    pub fn check<S: Storage>(&self, screen: &str, console: &Console<S>) -> bool {
        match self {
            Self::Contains(text) => screen.to_lowercase().contains(&text.to_lowercase()),
            Self::ContainsExact(text) => screen.contains(text),
            Self::NotContains(text) => !screen.to_lowercase().contains(&text.to_lowercase()),
            Self::Matches(pattern) => regex::Regex::new(pattern)
                .map(|re| re.is_match(screen))
                .unwrap_or(false),
            Self::StateEquals { field, value } => {
                let actual = get_state_field(console, field);
                actual.as_deref() == Some(value.as_str())
            }
            Self::StateCompare { field, op, value } => {
                let actual = get_state_field(console, field);
                compare_values(actual.as_deref(), op, value)
            }
        }
    }
}

/// Gets a state field value from the console.
fn get_state_field<S: Storage>(console: &Console<S>, field: &str) -> Option<String> {
    match field {
        "input_text" => Some(console.input().to_string()),
        "history_len" => Some(console.history().len().to_string()),
        "history_cursor" => Some(console.history_cursor().to_string()),
        "output_len" => Some(console.output().len().to_string()),
        _ => None,
    }
}

/// Compares values using the given operator.
fn compare_values(actual: Option<&str>, op: &str, expected: &str) -> bool {
    let actual = match actual {
        Some(v) => v,
        None => return false,
    };

    if let (Ok(a), Ok(e)) = (actual.parse::<i64>(), expected.parse::<i64>()) {
        return match op {
            ">=" => a >= e,
            "<=" => a <= e,
            ">" => a > e,
            "<" => a < e,
            _ => false,
        };
    }

    false
}

/// A parsed event that can be executed.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key press event.
    Key(KeyEvent),
    /// Type text into the input line.
    Type(String),
    /// Assert something about the screen or state.
    Assert(Assertion),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => {
                let prefix = if key.modifiers.contains(KeyModifiers::CONTROL) {
                    "ctrl+"
                } else {
                    ""
                };
                write!(f, "key:{}{}", prefix, key_code_to_string(&key.code))
            }
            Self::Type(text) => write!(f, "type:{}", text),
            Self::Assert(a) => match a {
                Assertion::Contains(t) => write!(f, "assert:contains:{}", t),
                Assertion::ContainsExact(t) => write!(f, "assert:contains-exact:{}", t),
                Assertion::NotContains(t) => write!(f, "assert:not-contains:{}", t),
                Assertion::Matches(p) => write!(f, "assert:matches:{}", p),
                Assertion::StateEquals { field, value } => {
                    write!(f, "assert:state:{}={}", field, value)
                }
                Assertion::StateCompare { field, op, value } => {
                    write!(f, "assert:state:{}{}{}", field, op, value)
                }
            },
        }
    }
}

fn key_code_to_string(code: &KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        _ => "unknown".to_string(),
    }
}

/// Parser for the event DSL.
#[derive(Debug, Default)]
pub struct EventParser;

impl EventParser {
    /// Creates a new event parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses all events from an input string.
    /// Supports comma-separated and newline-separated events.
    pub fn parse_all(&self, input: &str) -> Result<Vec<Event>> {
        let mut events = Vec::new();

        for line in input.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            for part in line.split(',') {
                let part = part.trim();
                if part.is_empty() {
                    continue;
                }

                events.push(self.parse_one(part)?);
            }
        }

        Ok(events)
    }

    /// Parses a single event string.
    pub fn parse_one(&self, input: &str) -> Result<Event> {
        let input = input.trim();

        let (event_type, value) = match input.split_once(':') {
            Some((t, v)) => (t.trim().to_lowercase(), v.trim()),
            None => {
                return Err(ConsoleError::script(format!(
                    "Invalid event syntax: '{}'. Expected format: type:value",
                    input
                )));
            }
        };

        match event_type.as_str() {
            "key" => self.parse_key(value),
            "type" => Ok(Event::Type(value.to_string())),
            "assert" => self.parse_assert(value),
            _ => Err(ConsoleError::script(format!(
                "Unknown event type: '{}'. Valid types: key, type, assert",
                event_type
            ))),
        }
    }

    /// Parses a key event like "enter", "tab" or "ctrl+c".
    fn parse_key(&self, value: &str) -> Result<Event> {
        let (modifiers, key_str) = match value.split_once('+') {
            Some((modifier, key)) if !key.is_empty() => match modifier.to_lowercase().as_str() {
                "ctrl" | "control" => (KeyModifiers::CONTROL, key),
                _ => {
                    return Err(ConsoleError::script(format!(
                        "Unknown modifier: '{}'. Valid modifiers: ctrl",
                        modifier
                    )));
                }
            },
            _ => (KeyModifiers::NONE, value),
        };

        let code = self.parse_key_code(key_str)?;

        Ok(Event::Key(KeyEvent::new(code, modifiers)))
    }

    /// Parses a key code string into a KeyCode.
    fn parse_key_code(&self, s: &str) -> Result<KeyCode> {
        let code = match s.to_lowercase().as_str() {
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" | "bs" => KeyCode::Backspace,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "space" => KeyCode::Char(' '),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => {
                        return Err(ConsoleError::script(format!(
                            "Unknown key: '{}'. Use single characters or named keys like enter, tab, up, down.",
                            s
                        )));
                    }
                }
            }
        };

        Ok(code)
    }

    /// Parses an assertion like "contains:hello" or "state:history_len=2".
    fn parse_assert(&self, value: &str) -> Result<Event> {
        let (assert_type, rest) = match value.split_once(':') {
            Some((t, r)) => (t.trim().to_lowercase(), r.trim()),
            None => {
                return Err(ConsoleError::script(format!(
                    "Invalid assertion syntax: '{}'. Expected assert:type:value",
                    value
                )));
            }
        };

        let assertion = match assert_type.as_str() {
            "contains" => Assertion::Contains(rest.to_string()),
            "contains-exact" => Assertion::ContainsExact(rest.to_string()),
            "not-contains" => Assertion::NotContains(rest.to_string()),
            "matches" => Assertion::Matches(rest.to_string()),
            "state" => self.parse_state_assertion(rest)?,
            _ => {
                return Err(ConsoleError::script(format!(
                    "Unknown assertion type: '{}'. Valid types: contains, contains-exact, not-contains, matches, state",
                    assert_type
                )));
            }
        };

        Ok(Event::Assert(assertion))
    }

    /// Parses a state assertion like "input_text=sum" or "history_len>=2".
    fn parse_state_assertion(&self, value: &str) -> Result<Assertion> {
        for op in &[">=", "<=", ">", "<", "="] {
            if let Some(pos) = value.find(op) {
                let field = value[..pos].trim().to_string();
                let val = value[pos + op.len()..].trim().to_string();

                if *op == "=" {
                    return Ok(Assertion::StateEquals { field, value: val });
                } else {
                    return Ok(Assertion::StateCompare {
                        field,
                        op: op.to_string(),
                        value: val,
                    });
                }
            }
        }

        Err(ConsoleError::script(format!(
            "Invalid state assertion: '{}'. Expected field=value or field>=value",
            value
        )))
    }
}
