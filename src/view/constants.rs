//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the tab bar in lines (border + content).
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Height of the filter bar in lines (border + content).
pub const FILTER_BAR_HEIGHT: u16 = 3;

/// Height of the pager footer in lines.
pub const PAGER_HEIGHT: u16 = 1;

/// Height of the summary line.
pub const SUMMARY_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Widest a table column may grow, in terminal cells.
pub const MAX_COLUMN_WIDTH: u16 = 28;

/// Event poll interval of the main loop.
///
/// Fetch outcomes are picked up at least this often.
pub const POLL_INTERVAL_MS: u64 = 100;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
