//! Domain-level keyboard actions independent of key bindings.

/// User intents that can be bound to keys.
///
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` lives in
/// `KeyBindings`. Text typed while editing a filter bypasses this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Tabs
    /// Switch to the next table. Default: Tab
    NextTab,
    /// Switch to the previous table. Default: Shift+Tab
    PrevTab,
    /// Switch to a table by 1-based number. Default: 1-5
    SelectTab(usize),

    // Columns
    /// Select the column to the right. Default: l/→
    NextColumn,
    /// Select the column to the left. Default: h/←
    PrevColumn,

    // Filtering
    /// Edit the free-text search of the selected column, if it is searchable. Default: /
    EditSearch,
    /// Edit the column filter of the selected column. Default: f
    EditColumnFilter,
    /// Clear every search and column filter. Default: c
    ClearFilters,

    // Paging
    /// Next page. Default: n/Page Down
    NextPage,
    /// Previous page. Default: p/Page Up
    PrevPage,
    /// First page. Default: g/Home
    FirstPage,
    /// Last page. Default: G/End
    LastPage,
    /// Cycle rows per page 15 → 25 → 50 → 100. Default: +
    CycleRowsPerPage,

    // Application
    /// Refetch the current table. Default: r
    Reload,
    /// Toggle the help overlay. Default: ?
    Help,
    /// Exit. Default: q/Ctrl+c
    Quit,
}
