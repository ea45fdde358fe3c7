//! Pager, summary and status lines beneath the table.

use super::styles::Palette;
use crate::model::{format_compact_currency, TableSummary};
use crate::state::{AppState, GridView, InputMode};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// `Showing 31 to 37 of 37 records`, page buttons and page size.
pub fn pager_line(view: &GridView<'_>) -> String {
    let buttons: Vec<String> = view
        .page_window
        .iter()
        .map(|page| {
            if *page == view.current_page {
                format!("[{}]", page)
            } else {
                page.to_string()
            }
        })
        .collect();

    let buttons = if buttons.is_empty() {
        "-".to_string()
    } else {
        buttons.join(" ")
    };

    format!(
        "Showing {} to {} of {} records  ‹ {} ›  Page {} of {}  {} rows/page",
        view.start_record,
        view.end_record,
        view.filtered_records(),
        buttons,
        view.current_page,
        view.total_pages.max(1),
        view.rows_per_page,
    )
}

/// Record counts and compact currency totals.
pub fn summary_line(summary: &TableSummary) -> String {
    let mut parts = vec![format!(
        "{} of {} records",
        summary.filtered_records, summary.total_records
    )];
    parts.extend(
        summary
            .currency_totals
            .iter()
            .map(|(field, total)| format!("{} {}", field.label(), format_compact_currency(*total))),
    );
    parts.join("  ·  ")
}

/// Render pager and summary lines.
pub fn render_pager(
    frame: &mut Frame,
    pager_area: Rect,
    summary_area: Rect,
    view: &GridView<'_>,
    palette: &Palette,
) {
    frame.render_widget(Paragraph::new(Line::from(pager_line(view))), pager_area);
    frame.render_widget(
        Paragraph::new(Line::styled(summary_line(&view.summary), palette.muted)),
        summary_area,
    );
}

/// Key hints for the current input mode.
pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let hints: &[(&str, &str)] = match state.input {
        InputMode::Editing { .. } => &[("Enter/Esc", "done"), ("Ctrl+u", "clear")],
        InputMode::Normal => &[
            ("1-5", "table"),
            ("←/→", "column"),
            ("/", "search"),
            ("f", "filter"),
            ("n/p", "page"),
            ("+", "rows"),
            ("c", "clear"),
            ("r", "reload"),
            ("?", "help"),
            ("q", "quit"),
        ],
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!(" {}", key), palette.key),
                Span::styled(format!(" {} ", action), palette.muted),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, DisplayRecord, Field, TableKind};
    use crate::state::{GridEvent, GridState, RowsPerPage};

    fn grid_with(count: usize, page: usize) -> GridState {
        let records = (0..count)
            .map(|_| {
                DisplayRecord::build(TableKind::Policies, |field| match field {
                    Field::AccountValue => Cell::Currency(100_000.0),
                    Field::ReinsuredAccountValue => Cell::Currency(25_000.0),
                    _ => Cell::Missing,
                })
            })
            .collect();
        GridState::new(TableKind::Policies, RowsPerPage::Fifteen)
            .apply(GridEvent::Loaded(records))
            .apply(GridEvent::SetPage(page))
    }

    #[test]
    fn pager_line_for_last_partial_page() {
        let grid = grid_with(37, 3);
        insta::assert_snapshot!(
            pager_line(&grid.view()),
            @"Showing 31 to 37 of 37 records  ‹ 1 2 [3] ›  Page 3 of 3  15 rows/page"
        );
    }

    #[test]
    fn pager_line_slides_window_over_many_pages() {
        let grid = grid_with(150, 6);
        insta::assert_snapshot!(
            pager_line(&grid.view()),
            @"Showing 76 to 90 of 150 records  ‹ 4 5 [6] 7 8 ›  Page 6 of 10  15 rows/page"
        );
    }

    #[test]
    fn pager_line_for_empty_table() {
        let grid = grid_with(0, 1);
        insta::assert_snapshot!(
            pager_line(&grid.view()),
            @"Showing 0 to 0 of 0 records  ‹ - ›  Page 1 of 1  15 rows/page"
        );
    }

    #[test]
    fn summary_line_uses_compact_currency() {
        let grid = grid_with(24, 1);
        insta::assert_snapshot!(
            summary_line(&grid.view().summary),
            @"24 of 24 records  ·  Account Value $2.4M  ·  Reinsured Account Value $600K"
        );
    }
}
