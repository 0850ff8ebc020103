//! Key bindings
//!
//! Lookups return `None` for unbound keys; the caller treats that as a no-op.

use crate::engine::Algorithm;
use crate::session::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rustc_hash::FxHashMap;

/// What a bound key asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Session(Command),
    Quit,
}

#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: FxHashMap<KeyCode, KeyAction>,
}

impl KeyMap {
    pub fn new() -> Self {
        let mut bindings = FxHashMap::default();
        bindings.insert(KeyCode::Char('g'), KeyAction::Session(Command::Generate));
        bindings.insert(
            KeyCode::Char('b'),
            KeyAction::Session(Command::Sort(Algorithm::Bubble)),
        );
        bindings.insert(
            KeyCode::Char('s'),
            KeyAction::Session(Command::Sort(Algorithm::Selection)),
        );
        bindings.insert(
            KeyCode::Char('m'),
            KeyAction::Session(Command::Sort(Algorithm::Merge)),
        );
        bindings.insert(KeyCode::Char('q'), KeyAction::Quit);
        bindings.insert(KeyCode::Esc, KeyAction::Quit);
        KeyMap { bindings }
    }

    /// Resolve a key press. Letters match case-insensitively; Ctrl-C always quits.
    pub fn lookup(&self, key: &KeyEvent) -> Option<KeyAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(KeyAction::Quit),
                _ => None,
            };
        }

        let code = match key.code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        self.bindings.get(&code).copied()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}
