//! Screen layout.
//!
//! Tab bar on top, then the filter bar, the table of the visible tab, the
//! pager and summary lines and the status bar. The help overlay is drawn
//! last, over everything else.

use super::constants::{
    FILTER_BAR_HEIGHT, PAGER_HEIGHT, STATUS_BAR_HEIGHT, SUMMARY_HEIGHT, TAB_BAR_HEIGHT,
};
use super::filter_bar::render_filter_bar;
use super::footer::{render_pager, render_status_bar};
use super::help::render_help_overlay;
use super::styles::Palette;
use super::table::render_grid;
use super::tabs::render_tab_bar;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Render the whole dashboard for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Length(FILTER_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(PAGER_HEIGHT),
            Constraint::Length(SUMMARY_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    let grid = state.active_grid();
    let view = grid.view();

    render_tab_bar(frame, chunks[0], state.active_kind(), palette);
    render_filter_bar(frame, chunks[1], state, palette);
    render_grid(frame, chunks[2], grid, &view, palette);
    render_pager(frame, chunks[3], chunks[4], &view, palette);
    render_status_bar(frame, chunks[5], state, palette);

    if state.help_visible {
        render_help_overlay(frame, palette);
    }
}
