//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. It owns one
//! [`GridState`] per table kind; tabs never share filter or page state.

use super::grid::{GridEvent, GridState, LoadState};
use super::pager::RowsPerPage;
use crate::model::{DisplayRecord, FetchError, Field, TableKind};

// ===== InputMode =====

/// Which filter map a text edit writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTarget {
    /// Free-text search of a search field.
    Search,
    /// Column filter.
    Column,
}

/// Whether keys are commands or typed into a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are looked up in the key bindings.
    #[default]
    Normal,
    /// Keys edit the pattern of `field`; every keystroke re-filters.
    Editing {
        /// Filter map being edited.
        target: FilterTarget,
        /// Field being edited.
        field: Field,
    },
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// Fetching is requested, not performed: transitions that need data queue
/// the table in `pending_fetches`, which the event loop drains with
/// [`AppState::take_fetch_requests`].
#[derive(Debug, Clone)]
pub struct AppState {
    tabs: Vec<GridState>,
    active: TableKind,
    pending_fetches: Vec<TableKind>,

    /// Normal or editing a filter.
    pub input: InputMode,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,
}

impl AppState {
    /// One idle tab per table kind, with `initial` active and queued for
    /// fetching.
    pub fn new(initial: TableKind, rows_per_page: RowsPerPage) -> Self {
        let state = Self {
            tabs: TableKind::ALL
                .iter()
                .map(|kind| GridState::new(*kind, rows_per_page))
                .collect(),
            active: initial,
            pending_fetches: Vec::new(),
            input: InputMode::Normal,
            help_visible: false,
        };
        state.activate(initial)
    }

    /// Kind of the visible tab.
    pub fn active_kind(&self) -> TableKind {
        self.active
    }

    /// The visible tab.
    pub fn active_grid(&self) -> &GridState {
        self.grid(self.active)
    }

    /// Tab of `kind`.
    pub fn grid(&self, kind: TableKind) -> &GridState {
        &self.tabs[kind.index()]
    }

    /// Show `kind`. The first activation of a tab queues its fetch.
    pub fn activate(mut self, kind: TableKind) -> Self {
        self.active = kind;
        self.input = InputMode::Normal;
        if matches!(self.grid(kind).load(), LoadState::Idle) {
            self.request_fetch(kind)
        } else {
            self
        }
    }

    /// Refetch the visible tab, keeping its filters.
    ///
    /// A fetch already in flight is not cancelled; whichever outcome
    /// arrives last wins.
    pub fn reload_active(self) -> Self {
        let kind = self.active;
        self.request_fetch(kind)
    }

    fn request_fetch(mut self, kind: TableKind) -> Self {
        self.pending_fetches.push(kind);
        self.apply_to(kind, GridEvent::Reload)
    }

    /// Drain queued fetch requests, oldest first.
    pub fn take_fetch_requests(&mut self) -> Vec<TableKind> {
        std::mem::take(&mut self.pending_fetches)
    }

    /// Apply an event to the tab of `kind`.
    pub fn apply_to(mut self, kind: TableKind, event: GridEvent) -> Self {
        let index = kind.index();
        let placeholder = GridState::new(kind, RowsPerPage::default());
        let grid = std::mem::replace(&mut self.tabs[index], placeholder);
        self.tabs[index] = grid.apply(event);
        self
    }

    /// Apply an event to the visible tab.
    pub fn apply_active(self, event: GridEvent) -> Self {
        let kind = self.active;
        self.apply_to(kind, event)
    }

    /// Store the result of a fetch of `kind`.
    pub fn receive(self, kind: TableKind, result: Result<Vec<DisplayRecord>, FetchError>) -> Self {
        let event = match result {
            Ok(records) => GridEvent::Loaded(records),
            Err(err) => GridEvent::LoadFailed(err.to_string()),
        };
        self.apply_to(kind, event)
    }

    /// Pattern currently being edited, if any.
    pub fn editing_pattern(&self) -> Option<&str> {
        match self.input {
            InputMode::Normal => None,
            InputMode::Editing { target, field } => {
                let filters = self.active_grid().filters();
                Some(match target {
                    FilterTarget::Search => filters.search(field),
                    FilterTarget::Column => filters.column(field),
                })
            }
        }
    }
}

impl Default for AppState {
    /// Every tab idle, Policies visible, nothing queued.
    fn default() -> Self {
        Self {
            tabs: TableKind::ALL
                .iter()
                .map(|kind| GridState::new(*kind, RowsPerPage::default()))
                .collect(),
            active: TableKind::Policies,
            pending_fetches: Vec::new(),
            input: InputMode::Normal,
            help_visible: false,
        }
    }
}
