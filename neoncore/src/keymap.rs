//! Keyboard shortcuts
//!
//! Digits, `.`, the operators and parentheses type themselves; Enter
//! evaluates and Backspace deletes. Nothing else is bound.

use crate::state::Command;

/// Characters that are appended to the expression when typed.
pub const TYPED_CHARS: &str = "0123456789.+-*/^()";

/// A key event reduced to what the calculator cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Enter,
    Backspace,
}

pub fn command_for(key: KeyInput) -> Option<Command> {
    match key {
        KeyInput::Char(c) if TYPED_CHARS.contains(c) => Some(Command::Press(c.to_string())),
        KeyInput::Char(_) => None,
        KeyInput::Enter => Some(Command::Evaluate),
        KeyInput::Backspace => Some(Command::Delete),
    }
}

/// Commands for a run of typed text, skipping unbound characters.
pub fn commands_for_text(text: &str) -> impl Iterator<Item = Command> + '_ {
    text.chars().filter_map(|c| command_for(KeyInput::Char(c)))
}
