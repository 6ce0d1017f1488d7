//! Console surfaces: the interactive terminal and the scripted headless runner.
//!
//! Both are thin adapters. They translate key presses into console calls
//! through [`keymap`] and render what the console emits.

/// Drawn in front of the live input line.
pub const PROMPT: &str = "> ";

pub mod headless;
pub mod keymap;
pub mod terminal;
