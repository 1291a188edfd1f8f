//! Keyboard bindings configuration.

use crate::model::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Text input on the focused form field is handled before this lookup, so
/// printable characters only reach the bindings when a select field or the
/// result list has focus.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Form field navigation
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::NextField,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::PrevField,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            KeyAction::PrevField,
        );

        // Select field cycling
        bindings.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            KeyAction::NextOption,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            KeyAction::PrevOption,
        );

        // Submit / open
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::Submit,
        );

        // Result list navigation
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::NextResult,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::PrevResult,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE),
            KeyAction::OpenDetail,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE),
            KeyAction::Summarize,
        );

        // Pagination
        bindings.insert(
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE),
            KeyAction::NextPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char(']'), KeyModifiers::NONE),
            KeyAction::NextPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE),
            KeyAction::PrevPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('['), KeyModifiers::NONE),
            KeyAction::PrevPage,
        );

        // Focus switching
        bindings.insert(
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::CycleFocus,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE),
            KeyAction::FocusForm,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE),
            KeyAction::FocusResults,
        );

        // Overlays
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::CloseOverlay,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            KeyAction::Help,
        );

        // Application controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}
