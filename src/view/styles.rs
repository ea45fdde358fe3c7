//! Dashboard styling configuration.
//!
//! Colors can be disabled with `--no-color` or `NO_COLOR`; every style then
//! falls back to modifiers only, so selection stays visible.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles used across the dashboard widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Borders and titles of unfocused blocks.
    pub border: Style,
    /// Active tab and focused borders.
    pub accent: Style,
    /// Table header row.
    pub header: Style,
    /// Highlighted column (header and cells).
    pub selected_column: Style,
    /// Placeholder cells and hints.
    pub muted: Style,
    /// Error panel text.
    pub error: Style,
    /// Key names in the help overlay and status bar.
    pub key: Style,
}

impl Palette {
    /// Palette honoring `config`.
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                border: Style::default().fg(Color::Gray),
                accent: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                header: Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                selected_column: Style::default().fg(Color::Yellow),
                muted: Style::default().fg(Color::DarkGray),
                error: Style::default().fg(Color::Red),
                key: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                border: Style::default(),
                accent: Style::default().add_modifier(Modifier::BOLD),
                header: Style::default().add_modifier(Modifier::BOLD),
                selected_column: Style::default().add_modifier(Modifier::REVERSED),
                muted: Style::default().add_modifier(Modifier::DIM),
                error: Style::default().add_modifier(Modifier::BOLD),
                key: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
