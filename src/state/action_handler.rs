//! Keyboard action handling (pure state transitions).
//!
//! Maps a [`KeyAction`] in normal mode to the matching [`AppState`]
//! transition. `Quit` is left to the event loop.

use super::app_state::{AppState, FilterTarget, InputMode};
use super::grid::GridEvent;
use crate::model::{KeyAction, TableKind};

/// Apply `action` to `state`.
pub fn handle_key_action(state: AppState, action: KeyAction) -> AppState {
    let active = state.active_kind();
    match action {
        KeyAction::NextTab => {
            let next = TableKind::ALL[(active.index() + 1) % TableKind::ALL.len()];
            state.activate(next)
        }
        KeyAction::PrevTab => {
            let len = TableKind::ALL.len();
            let prev = TableKind::ALL[(active.index() + len - 1) % len];
            state.activate(prev)
        }
        KeyAction::SelectTab(n) => match n.checked_sub(1).and_then(|i| TableKind::ALL.get(i)) {
            Some(kind) => state.activate(*kind),
            None => state,
        },

        KeyAction::NextColumn => {
            let next = state.active_grid().selected_column().saturating_add(1);
            state.apply_active(GridEvent::SelectColumn(next))
        }
        KeyAction::PrevColumn => {
            let prev = state.active_grid().selected_column().saturating_sub(1);
            state.apply_active(GridEvent::SelectColumn(prev))
        }

        KeyAction::EditSearch => {
            let field = state.active_grid().selected_field();
            if active.is_search_field(field) {
                start_editing(state, FilterTarget::Search)
            } else {
                state
            }
        }
        KeyAction::EditColumnFilter => start_editing(state, FilterTarget::Column),
        KeyAction::ClearFilters => state.apply_active(GridEvent::ClearFilters),

        KeyAction::NextPage => state.apply_active(GridEvent::NextPage),
        KeyAction::PrevPage => state.apply_active(GridEvent::PrevPage),
        KeyAction::FirstPage => state.apply_active(GridEvent::FirstPage),
        KeyAction::LastPage => state.apply_active(GridEvent::LastPage),
        KeyAction::CycleRowsPerPage => state.apply_active(GridEvent::CycleRowsPerPage),

        KeyAction::Reload => state.reload_active(),
        KeyAction::Help => {
            let mut state = state;
            state.help_visible = !state.help_visible;
            state
        }
        KeyAction::Quit => state,
    }
}

fn start_editing(mut state: AppState, target: FilterTarget) -> AppState {
    let field = state.active_grid().selected_field();
    state.input = InputMode::Editing { target, field };
    state
}

#[cfg(test)]
#[path = "action_handler_tests.rs"]
mod tests;
