//! Keyboard bindings configuration.

use crate::model::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Terminals disagree on whether an uppercase letter carries SHIFT, so a
    /// character key is retried without it.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let key = KeyEvent::new(key.code, key.modifiers);
        self.bindings.get(&key).copied().or_else(|| match key.code {
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::SHIFT) => self
                .bindings
                .get(&KeyEvent::new(key.code, key.modifiers.difference(KeyModifiers::SHIFT)))
                .copied(),
            _ => None,
        })
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Tabs
        keys.bind(KeyCode::Tab, none, KeyAction::NextTab);
        keys.bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevTab);
        keys.bind(KeyCode::BackTab, none, KeyAction::PrevTab);
        for (n, c) in ['1', '2', '3', '4', '5'].into_iter().enumerate() {
            keys.bind(KeyCode::Char(c), none, KeyAction::SelectTab(n + 1));
        }

        // Columns
        keys.bind(KeyCode::Left, none, KeyAction::PrevColumn);
        keys.bind(KeyCode::Char('h'), none, KeyAction::PrevColumn);
        keys.bind(KeyCode::Right, none, KeyAction::NextColumn);
        keys.bind(KeyCode::Char('l'), none, KeyAction::NextColumn);

        // Filtering
        keys.bind(KeyCode::Char('/'), none, KeyAction::EditSearch);
        keys.bind(KeyCode::Char('f'), none, KeyAction::EditColumnFilter);
        keys.bind(KeyCode::Char('c'), none, KeyAction::ClearFilters);

        // Paging
        keys.bind(KeyCode::Char('n'), none, KeyAction::NextPage);
        keys.bind(KeyCode::PageDown, none, KeyAction::NextPage);
        keys.bind(KeyCode::Char('p'), none, KeyAction::PrevPage);
        keys.bind(KeyCode::PageUp, none, KeyAction::PrevPage);
        keys.bind(KeyCode::Char('g'), none, KeyAction::FirstPage);
        keys.bind(KeyCode::Home, none, KeyAction::FirstPage);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::LastPage);
        keys.bind(KeyCode::Char('G'), none, KeyAction::LastPage);
        keys.bind(KeyCode::End, none, KeyAction::LastPage);
        keys.bind(KeyCode::Char('+'), none, KeyAction::CycleRowsPerPage);

        // Application controls
        keys.bind(KeyCode::Char('r'), none, KeyAction::Reload);
        keys.bind(KeyCode::Char('?'), none, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
