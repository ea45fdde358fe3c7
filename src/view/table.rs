//! Record table widget and the loading, error and empty panels.

use super::constants::MAX_COLUMN_WIDTH;
use super::styles::Palette;
use crate::model::{DisplayRecord, Field, ValueKind};
use crate::state::{GridState, GridView, LoadState};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Shown while a fetch is in flight.
pub const LOADING_MESSAGE: &str = "Loading records...";
/// Shown when the last fetch failed.
pub const FAILED_MESSAGE: &str = "Failed to fetch records. Press r to reload.";
/// Shown when the filtered set is empty.
pub const EMPTY_MESSAGE: &str = "No records found.";

const COLUMN_SPACING: u16 = 1;

/// Render the body of a tab: the table, or the panel for its load state.
pub fn render_grid(
    frame: &mut Frame,
    area: Rect,
    grid: &GridState,
    view: &GridView<'_>,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border)
        .title(format!(" {} ", grid.kind().title()));

    match grid.load() {
        LoadState::Idle | LoadState::Loading => {
            render_panel(frame, area, block, vec![Line::styled(LOADING_MESSAGE, palette.muted)]);
        }
        LoadState::Failed(reason) => {
            let lines = vec![
                Line::styled(FAILED_MESSAGE, palette.error),
                Line::from(""),
                Line::styled(reason.clone(), palette.muted),
            ];
            render_panel(frame, area, block, lines);
        }
        LoadState::Ready(_) if view.rows.is_empty() => {
            render_panel(frame, area, block, vec![Line::styled(EMPTY_MESSAGE, palette.muted)]);
        }
        LoadState::Ready(_) => {
            let inner_width = block.inner(area).width;
            let table = build_table(grid, view, inner_width, palette).block(block);
            frame.render_widget(table, area);
        }
    }
}

fn render_panel(frame: &mut Frame, area: Rect, block: Block<'_>, lines: Vec<Line<'_>>) {
    let panel = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(panel, area);
}

fn build_table<'a>(
    grid: &GridState,
    view: &GridView<'a>,
    available_width: u16,
    palette: &Palette,
) -> Table<'a> {
    let fields = grid.kind().fields();
    let widths = column_widths(fields, &view.rows);
    let visible = visible_columns(&widths, grid.selected_column(), available_width);
    let selected = grid.selected_column();

    let header = Row::new(visible.clone().map(|i| {
        let style = if i == selected {
            palette.header.patch(palette.selected_column)
        } else {
            palette.header
        };
        Cell::from(fields[i].label()).style(style)
    }));

    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|record| {
            Row::new(visible.clone().map(|i| {
                let text = cell_text(record, fields[i]);
                let line = match fields[i].value_kind() {
                    ValueKind::Currency | ValueKind::Percent | ValueKind::Integer => {
                        Line::from(text).alignment(Alignment::Right)
                    }
                    ValueKind::Text | ValueKind::Date => Line::from(text),
                };
                let cell = Cell::from(line);
                if i == selected {
                    cell.style(palette.selected_column)
                } else {
                    cell
                }
            }))
        })
        .collect();

    let constraints: Vec<Constraint> = widths[visible]
        .iter()
        .map(|w| Constraint::Length(*w))
        .collect();

    Table::new(rows, constraints)
        .header(header)
        .column_spacing(COLUMN_SPACING)
}

fn cell_text(record: &DisplayRecord, field: Field) -> String {
    record.get(field).map(ToString::to_string).unwrap_or_default()
}

/// Width of each column: the wider of its label and its widest cell on
/// this page, capped at [`MAX_COLUMN_WIDTH`].
pub fn column_widths(fields: &[Field], rows: &[&DisplayRecord]) -> Vec<u16> {
    fields
        .iter()
        .map(|field| {
            let widest_cell = rows
                .iter()
                .map(|record| cell_text(record, *field).width())
                .max()
                .unwrap_or(0);
            let width = field.label().width().max(widest_cell);
            u16::try_from(width)
                .unwrap_or(MAX_COLUMN_WIDTH)
                .min(MAX_COLUMN_WIDTH)
        })
        .collect()
}

/// Contiguous range of columns that fits in `available` cells and contains
/// `selected`.
///
/// Columns are dropped from the left only as far as needed to bring the
/// selected one into view, then filled to the right.
pub fn visible_columns(widths: &[u16], selected: usize, available: u16) -> Range<usize> {
    if widths.is_empty() {
        return 0..0;
    }
    let selected = selected.min(widths.len() - 1);
    let span = |range: Range<usize>| -> u32 {
        let count = range.len() as u32;
        let cells: u32 = widths[range].iter().map(|w| u32::from(*w)).sum();
        cells + count.saturating_sub(1) * u32::from(COLUMN_SPACING)
    };
    let available = u32::from(available);

    let mut start = 0;
    while start < selected && span(start..selected + 1) > available {
        start += 1;
    }

    let mut end = selected + 1;
    while end < widths.len() && span(start..end + 1) <= available {
        end += 1;
    }

    start..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell as Value, TableKind};
    use crate::state::{GridEvent, RowsPerPage};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(grid: &GridState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 12)).unwrap();
        let view = grid.view();
        terminal
            .draw(|frame| render_grid(frame, frame.area(), grid, &view, &Palette::default()))
            .unwrap();
        buffer_text(&terminal)
    }

    fn policy(number: &str, value: f64) -> DisplayRecord {
        DisplayRecord::build(TableKind::Policies, |field| match field {
            Field::PolicyNumber => Value::Text(number.into()),
            Field::FirmName => Value::Text("Acme Securities".into()),
            Field::AccountValue => Value::Currency(value),
            _ => Value::Missing,
        })
    }

    fn grid(load: Option<Result<Vec<DisplayRecord>, String>>) -> GridState {
        let grid = GridState::new(TableKind::Policies, RowsPerPage::Fifteen);
        match load {
            None => grid.apply(GridEvent::Reload),
            Some(Ok(records)) => grid.apply(GridEvent::Loaded(records)),
            Some(Err(reason)) => grid.apply(GridEvent::LoadFailed(reason)),
        }
    }

    #[test]
    fn loading_panel_is_shown_while_fetching() {
        assert!(render(&grid(None)).contains(LOADING_MESSAGE));
    }

    #[test]
    fn error_panel_offers_reload_and_shows_reason() {
        let text = render(&grid(Some(Err("HTTP 502".into()))));
        assert!(text.contains(FAILED_MESSAGE));
        assert!(text.contains("HTTP 502"));
    }

    #[test]
    fn empty_result_has_its_own_message() {
        let text = render(&grid(Some(Ok(Vec::new()))));
        assert!(text.contains(EMPTY_MESSAGE));
        assert!(!text.contains(LOADING_MESSAGE));
    }

    #[test]
    fn table_shows_headers_and_formatted_cells() {
        let text = render(&grid(Some(Ok(vec![policy("POL-1", 1234.5)]))));

        assert!(text.contains("Policy Number"));
        assert!(text.contains("POL-1"));
        assert!(text.contains("$1,234.50"));
        assert!(text.contains("N/A"));
    }

    #[test]
    fn column_widths_fit_label_or_content() {
        let record = policy("A-VERY-LONG-POLICY-NUMBER-THAT-OVERFLOWS", 1.0);
        let widths = column_widths(TableKind::Policies.fields(), &[&record]);

        assert_eq!(widths[0], MAX_COLUMN_WIDTH);
        assert_eq!(widths[2], "Acme Securities".len() as u16);
        assert_eq!(widths[3], "Application Sign Date".len() as u16);
    }

    #[test]
    fn visible_columns_keep_selection_in_view() {
        let widths = [10, 10, 10, 10];
        assert_eq!(visible_columns(&widths, 0, 100), 0..4);
        assert_eq!(visible_columns(&widths, 0, 21), 0..2);
        assert_eq!(visible_columns(&widths, 3, 21), 2..4);
        assert_eq!(visible_columns(&widths, 2, 5), 2..3);
        assert_eq!(visible_columns(&[], 0, 10), 0..0);
    }
}
