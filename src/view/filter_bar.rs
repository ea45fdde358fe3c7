//! Search and filter bar.
//!
//! Shows the pattern being edited, or a compact list of the active
//! constraints of the visible tab.

use super::styles::Palette;
use crate::model::{Field, MatchPolicy};
use crate::state::{AppState, FilterState, FilterTarget, InputMode};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CURSOR: &str = "█";

/// One-line description of the active constraints.
///
/// Searches read `Firm Name ~ "acme"`, column filters use `=~` for
/// substring, `≥`/`≤` for the date bounds.
pub fn describe_filters(filters: &FilterState) -> String {
    let searches = filters
        .searches()
        .map(|(field, pattern)| format!("{} ~ \"{}\"", field.label(), pattern));
    let columns = filters
        .columns()
        .map(|(field, pattern)| format!("{} {} \"{}\"", field.label(), operator(field), pattern));

    let parts: Vec<String> = searches.chain(columns).collect();
    if parts.is_empty() {
        "No filters".to_string()
    } else {
        parts.join(", ")
    }
}

fn operator(field: Field) -> &'static str {
    match field.match_policy() {
        MatchPolicy::Contains => "=~",
        MatchPolicy::OnOrAfter => "≥",
        MatchPolicy::OnOrBefore => "≤",
    }
}

/// Prompt for the field being edited, e.g. `Search Firm Name: `.
pub fn edit_prompt(target: FilterTarget, field: Field) -> String {
    let verb = match target {
        FilterTarget::Search => "Search",
        FilterTarget::Column => "Filter",
    };
    let hint = match field.match_policy() {
        MatchPolicy::Contains => "",
        MatchPolicy::OnOrAfter => " (on or after YYYY-MM-DD)",
        MatchPolicy::OnOrBefore => " (on or before YYYY-MM-DD)",
    };
    format!("{} {}{}: ", verb, field.label(), hint)
}

/// Render the filter bar for the visible tab.
pub fn render_filter_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let (line, border) = match state.input {
        InputMode::Editing { target, field } => {
            let pattern = state.editing_pattern().unwrap_or("").to_string();
            let line = Line::from(vec![
                Span::styled(edit_prompt(target, field), palette.key),
                Span::raw(pattern),
                Span::styled(CURSOR, palette.accent),
            ]);
            (line, palette.accent)
        }
        InputMode::Normal => {
            let filters = state.active_grid().filters();
            let style = if filters.is_empty() {
                palette.muted
            } else {
                palette.border
            };
            (Line::styled(describe_filters(filters), style), palette.border)
        }
    };

    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Filters "),
    );
    frame.render_widget(bar, area);
}
