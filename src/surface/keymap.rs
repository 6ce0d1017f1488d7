//! Key bindings shared by the interactive and headless surfaces.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::console::{Console, Direction};
use crate::persistence::Storage;

/// What the surface should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Exit,
}

/// Applies a key press to the console.
pub fn handle_key<S: Storage>(console: &mut Console<S>, key: KeyEvent) -> KeyOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => KeyOutcome::Exit,
            _ => KeyOutcome::Continue,
        };
    }

    match key.code {
        KeyCode::Enter => console.submit_input(),
        KeyCode::Tab => console.complete_input(),
        KeyCode::Up => console.recall(Direction::Previous),
        KeyCode::Down => console.recall(Direction::Next),
        KeyCode::Backspace => console.backspace(),
        KeyCode::Esc => console.clear_input(),
        KeyCode::Char(c) => console.insert_char(c),
        _ => {}
    }
    KeyOutcome::Continue
}
