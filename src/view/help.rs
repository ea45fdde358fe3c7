//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Tables",
        &[
            ("Tab / Shift+Tab", "Next / previous table"),
            ("1-5", "Jump to table"),
            ("r", "Reload the visible table"),
        ],
    ),
    (
        "Columns",
        &[
            ("h/←", "Select previous column"),
            ("l/→", "Select next column"),
        ],
    ),
    (
        "Filtering",
        &[
            ("/", "Search the selected column"),
            ("f", "Filter the selected column"),
            ("Enter/Esc", "Finish editing"),
            ("Ctrl+u", "Clear the pattern being edited"),
            ("c", "Clear all filters"),
        ],
    ),
    (
        "Paging",
        &[
            ("n/Page Down", "Next page"),
            ("p/Page Up", "Previous page"),
            ("g/Home", "First page"),
            ("G/End", "Last page"),
            ("+", "Cycle rows per page (15, 25, 50, 100)"),
        ],
    ),
    (
        "Application",
        &[("?", "Toggle this help"), ("q / Ctrl+c", "Quit")],
    ),
];

const KEY_COLUMN_WIDTH: usize = 18;

/// Render the help overlay centered on the screen.
///
/// The overlay displays all keyboard shortcuts grouped by category:
/// - Tables
/// - Columns
/// - Filtering
/// - Paging
/// - Application
pub fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.accent),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        palette.muted.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Build the help content lines grouped by category.
fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, (category, shortcuts)) in SHORTCUTS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![Span::styled(*category, palette.header)]));
        lines.extend(shortcuts.iter().map(|(key, description)| {
            Line::from(vec![
                Span::styled(format!("  {:<width$}", key, width = KEY_COLUMN_WIDTH), palette.key),
                Span::raw(*description),
            ])
        }));
    }
    lines
}
