//! Per-table grid state and its named transitions.
//!
//! [`GridState::apply`] is the only way a tab changes. Derived data (the
//! filtered rows, the current page, totals) is recomputed by
//! [`GridState::view`] from the immutable record snapshot.

use super::filter::{apply_filters, FilterState};
use super::pager::{page_window, paginate, total_pages, PageState, RowsPerPage};
use crate::model::{DisplayRecord, Field, TableKind, TableSummary};

// ===== LoadState =====

/// Where a tab's data stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// Never activated, nothing requested yet.
    #[default]
    Idle,
    /// Fetch in flight.
    Loading,
    /// Last fetch failed; holds the error message.
    Failed(String),
    /// Records of the last successful fetch.
    Ready(Vec<DisplayRecord>),
}

// ===== GridEvent =====

/// Named transitions of a [`GridState`].
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    /// Set the free-text search of a field.
    SetSearch {
        /// Searched field.
        field: Field,
        /// Substring pattern, empty to clear.
        pattern: String,
    },
    /// Set the column filter of a field.
    SetColumnFilter {
        /// Filtered field.
        field: Field,
        /// Pattern, empty to clear.
        pattern: String,
    },
    /// Drop every search and column filter.
    ClearFilters,
    /// Jump to a 1-based page.
    SetPage(usize),
    /// One page forward.
    NextPage,
    /// One page back.
    PrevPage,
    /// Page 1.
    FirstPage,
    /// Last page.
    LastPage,
    /// Change the page size.
    SetRowsPerPage(RowsPerPage),
    /// Step to the next page size.
    CycleRowsPerPage,
    /// Select a column by 0-based index.
    SelectColumn(usize),
    /// A fetch started.
    Reload,
    /// A fetch succeeded.
    Loaded(Vec<DisplayRecord>),
    /// A fetch failed.
    LoadFailed(String),
}

// ===== GridState =====

/// State of one table tab.
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    kind: TableKind,
    load: LoadState,
    filters: FilterState,
    page: PageState,
    selected_column: usize,
}

impl GridState {
    /// Fresh, not yet fetched tab.
    pub fn new(kind: TableKind, rows_per_page: RowsPerPage) -> Self {
        Self {
            kind,
            load: LoadState::Idle,
            filters: FilterState::default(),
            page: PageState::new(rows_per_page),
            selected_column: 0,
        }
    }

    /// Table shown by this tab.
    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// Load state.
    pub fn load(&self) -> &LoadState {
        &self.load
    }

    /// Active filters.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Page and page size.
    pub fn page(&self) -> PageState {
        self.page
    }

    /// 0-based index of the highlighted column.
    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    /// Field of the highlighted column.
    pub fn selected_field(&self) -> Field {
        let fields = self.kind.fields();
        fields[self.selected_column.min(fields.len() - 1)]
    }

    /// Fetched records, empty unless loaded.
    pub fn records(&self) -> &[DisplayRecord] {
        match &self.load {
            LoadState::Ready(records) => records,
            _ => &[],
        }
    }

    /// Pages of the current filtered set.
    pub fn total_pages(&self) -> usize {
        let filtered = apply_filters(self.records(), &self.filters).len();
        total_pages(filtered, self.page.rows_per_page)
    }

    /// Apply one transition.
    pub fn apply(self, event: GridEvent) -> Self {
        match event {
            GridEvent::SetSearch { field, pattern } => Self {
                filters: self.filters.with_search(field, pattern),
                page: self.page.first(),
                ..self
            },
            GridEvent::SetColumnFilter { field, pattern } => Self {
                filters: self.filters.with_column(field, pattern),
                page: self.page.first(),
                ..self
            },
            GridEvent::ClearFilters => Self {
                filters: self.filters.cleared(),
                page: self.page.first(),
                ..self
            },
            GridEvent::SetPage(page) => self.go_to(page),
            GridEvent::NextPage => {
                let next = self.page.current_page.saturating_add(1);
                self.go_to(next)
            }
            GridEvent::PrevPage => {
                let prev = self.page.current_page.saturating_sub(1);
                self.go_to(prev)
            }
            GridEvent::FirstPage => Self {
                page: self.page.first(),
                ..self
            },
            GridEvent::LastPage => {
                let last = self.total_pages();
                self.go_to(last)
            }
            GridEvent::SetRowsPerPage(rows) => Self {
                page: self.page.with_rows_per_page(rows),
                ..self
            },
            GridEvent::CycleRowsPerPage => Self {
                page: self.page.with_rows_per_page(self.page.rows_per_page.next()),
                ..self
            },
            GridEvent::SelectColumn(index) => Self {
                selected_column: index.min(self.kind.fields().len() - 1),
                ..self
            },
            GridEvent::Reload => Self {
                load: LoadState::Loading,
                ..self
            },
            GridEvent::Loaded(records) => Self {
                load: LoadState::Ready(records),
                page: self.page.first(),
                ..self
            },
            GridEvent::LoadFailed(message) => Self {
                load: LoadState::Failed(message),
                ..self
            },
        }
    }

    fn go_to(self, page: usize) -> Self {
        let total = self.total_pages();
        Self {
            page: self.page.with_page(page, total),
            ..self
        }
    }

    /// Derive what the table shows right now.
    pub fn view(&self) -> GridView<'_> {
        let records = self.records();
        let filtered = apply_filters(records, &self.filters);
        let page = paginate(&filtered, self.page.current_page, self.page.rows_per_page);

        GridView {
            kind: self.kind,
            rows: page.records.to_vec(),
            current_page: page.current_page,
            rows_per_page: self.page.rows_per_page,
            total_pages: page.total_pages,
            start_record: page.start_record,
            end_record: page.end_record,
            page_window: page_window(page.current_page, page.total_pages),
            summary: TableSummary::compute(self.kind, &filtered, records.len()),
        }
    }
}

// ===== GridView =====

/// Derived, render-ready snapshot of a [`GridState`].
#[derive(Debug, Clone, PartialEq)]
pub struct GridView<'a> {
    /// Table kind.
    pub kind: TableKind,
    /// Rows of the current page.
    pub rows: Vec<&'a DisplayRecord>,
    /// 1-based current page.
    pub current_page: usize,
    /// Page size.
    pub rows_per_page: RowsPerPage,
    /// Pages of the filtered set.
    pub total_pages: usize,
    /// First row number shown, 0 when nothing matches.
    pub start_record: usize,
    /// Last row number shown.
    pub end_record: usize,
    /// Page buttons to display.
    pub page_window: Vec<usize>,
    /// Totals over the filtered set.
    pub summary: TableSummary,
}

impl GridView<'_> {
    /// Records left after filtering.
    pub fn filtered_records(&self) -> usize {
        self.summary.filtered_records
    }
}
