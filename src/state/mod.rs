//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod action_handler;
pub mod app_state;
pub mod filter;
pub mod filter_input_handler;
pub mod grid;
pub mod pager;

// Re-export for convenience
pub use action_handler::handle_key_action;
pub use app_state::{AppState, FilterTarget, InputMode};
pub use filter::{apply_filters, contains_ignore_case, field_matches, FilterState};
pub use filter_input_handler::{
    finish_editing, handle_backspace, handle_char_input, handle_clear_input,
};
pub use grid::{GridEvent, GridState, GridView, LoadState};
pub use pager::{
    page_window, paginate, total_pages, InvalidRowsPerPage, Page, PageState, RowsPerPage,
};
