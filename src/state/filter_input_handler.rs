//! Filter text input handling (pure state transitions).
//!
//! While [`InputMode::Editing`] is active, typed characters edit the
//! pattern of the edited field directly, so the table re-filters on every
//! keystroke. All functions are no-ops in normal mode.

use super::app_state::{AppState, FilterTarget, InputMode};
use super::grid::GridEvent;
use crate::model::Field;

/// Append `ch` to the edited pattern.
pub fn handle_char_input(state: AppState, ch: char) -> AppState {
    edit_pattern(state, |pattern| pattern.push(ch))
}

/// Delete the last character of the edited pattern.
pub fn handle_backspace(state: AppState) -> AppState {
    edit_pattern(state, |pattern| {
        pattern.pop();
    })
}

/// Empty the edited pattern, staying in editing mode.
pub fn handle_clear_input(state: AppState) -> AppState {
    edit_pattern(state, String::clear)
}

/// Leave editing mode. The pattern stays applied.
pub fn finish_editing(mut state: AppState) -> AppState {
    state.input = InputMode::Normal;
    state
}

fn edit_pattern(state: AppState, edit: impl FnOnce(&mut String)) -> AppState {
    let InputMode::Editing { target, field } = state.input else {
        return state;
    };

    let mut pattern = state.editing_pattern().unwrap_or("").to_string();
    edit(&mut pattern);
    state.apply_active(event_for(target, field, pattern))
}

fn event_for(target: FilterTarget, field: Field, pattern: String) -> GridEvent {
    match target {
        FilterTarget::Search => GridEvent::SetSearch { field, pattern },
        FilterTarget::Column => GridEvent::SetColumnFilter { field, pattern },
    }
}
