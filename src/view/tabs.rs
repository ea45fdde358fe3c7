//! Table tab bar widget.
//!
//! One tab per table kind, numbered like the `1`-`5` shortcuts.

use super::styles::Palette;
use crate::model::TableKind;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Tab titles in display order, e.g. `1 Policies`.
pub fn tab_titles() -> Vec<String> {
    TableKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| format!("{} {}", i + 1, kind.title()))
        .collect()
}

/// Render the tab bar with `active` highlighted.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, active: TableKind, palette: &Palette) {
    let titles: Vec<Line> = tab_titles().into_iter().map(Line::from).collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border)
                .title(" recap "),
        )
        .style(palette.border)
        .highlight_style(palette.accent)
        .select(active.index());

    frame.render_widget(tabs, area);
}
