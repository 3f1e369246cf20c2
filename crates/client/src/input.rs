//! Keyboard handling for the duel.
//!
//! This module owns the key-to-command mapping so the rest of the client
//! never looks at `crossterm` key codes.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use game_core::ActionKind;

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Play a turn with the given hero action.
    Submit(ActionKind),
    /// No meaningful command was produced.
    None,
}

/// Translates key events into commands.
///
/// Once locked (battle over) only quitting is possible.
#[derive(Debug, Default)]
pub struct InputHandler {
    locked: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops accepting action keys.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(ch) => self.handle_char(ch),
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        let action = match raw.to_ascii_lowercase() {
            'q' => return KeyAction::Quit,
            'a' => ActionKind::Attack,
            'd' => ActionKind::Defend,
            'h' => ActionKind::Heal,
            _ => return KeyAction::None,
        };

        if self.locked {
            KeyAction::None
        } else {
            KeyAction::Submit(action)
        }
    }
}
