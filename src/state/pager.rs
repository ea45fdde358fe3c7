//! Client-side pagination.

use std::fmt;
use thiserror::Error;

/// Number of buttons in the compact page selector.
pub const PAGE_WINDOW: usize = 5;

// ===== RowsPerPage =====

/// Supported page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum RowsPerPage {
    /// 15 rows.
    #[default]
    Fifteen,
    /// 25 rows.
    TwentyFive,
    /// 50 rows.
    Fifty,
    /// 100 rows.
    Hundred,
}

impl RowsPerPage {
    /// Every page size, smallest first.
    pub const ALL: [RowsPerPage; 4] = [
        RowsPerPage::Fifteen,
        RowsPerPage::TwentyFive,
        RowsPerPage::Fifty,
        RowsPerPage::Hundred,
    ];

    /// Row count.
    pub fn get(self) -> usize {
        match self {
            RowsPerPage::Fifteen => 15,
            RowsPerPage::TwentyFive => 25,
            RowsPerPage::Fifty => 50,
            RowsPerPage::Hundred => 100,
        }
    }

    /// Next larger size, wrapping from 100 back to 15.
    pub fn next(self) -> Self {
        match self {
            RowsPerPage::Fifteen => RowsPerPage::TwentyFive,
            RowsPerPage::TwentyFive => RowsPerPage::Fifty,
            RowsPerPage::Fifty => RowsPerPage::Hundred,
            RowsPerPage::Hundred => RowsPerPage::Fifteen,
        }
    }
}

/// A page size outside {15, 25, 50, 100}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rows per page must be one of 15, 25, 50 or 100, got {0}")]
pub struct InvalidRowsPerPage(pub usize);

impl TryFrom<usize> for RowsPerPage {
    type Error = InvalidRowsPerPage;

    fn try_from(rows: usize) -> Result<Self, Self::Error> {
        RowsPerPage::ALL
            .into_iter()
            .find(|size| size.get() == rows)
            .ok_or(InvalidRowsPerPage(rows))
    }
}

impl fmt::Display for RowsPerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

// ===== PageState =====

/// Current page (1-based) and page size of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 1-based page index.
    pub current_page: usize,
    /// Rows per page.
    pub rows_per_page: RowsPerPage,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(RowsPerPage::default())
    }
}

impl PageState {
    /// Page 1 with the given size.
    pub fn new(rows_per_page: RowsPerPage) -> Self {
        Self {
            current_page: 1,
            rows_per_page,
        }
    }

    /// Back to page 1, same size.
    pub fn first(self) -> Self {
        Self::new(self.rows_per_page)
    }

    /// New size; always resets to page 1.
    pub fn with_rows_per_page(self, rows_per_page: RowsPerPage) -> Self {
        Self::new(rows_per_page)
    }

    /// Jump to `page`, clamped to `[1, max(total_pages, 1)]`.
    pub fn with_page(self, page: usize, total_pages: usize) -> Self {
        Self {
            current_page: page,
            ..self
        }
        .clamp(total_pages)
    }

    /// Keep `current_page` within `[1, max(total_pages, 1)]`.
    pub fn clamp(self, total_pages: usize) -> Self {
        Self {
            current_page: self.current_page.clamp(1, total_pages.max(1)),
            ..self
        }
    }
}

// ===== Page =====

/// One page of a filtered sequence plus its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Rows on this page.
    pub records: &'a [T],
    /// Page these rows belong to (1-based).
    pub current_page: usize,
    /// `ceil(len / rows_per_page)`, 0 for an empty sequence.
    pub total_pages: usize,
    /// 1-based number of the first row shown, 0 for an empty sequence.
    pub start_record: usize,
    /// 1-based number of the last row shown.
    pub end_record: usize,
}

/// Pages needed for `len` rows.
pub fn total_pages(len: usize, rows_per_page: RowsPerPage) -> usize {
    len.div_ceil(rows_per_page.get())
}

/// Slice page `current_page` out of `records`.
///
/// Page 0 is treated as page 1. A page past the end yields no rows; its
/// start/end numbers follow the same arithmetic as any other page.
pub fn paginate<T>(records: &[T], current_page: usize, rows_per_page: RowsPerPage) -> Page<'_, T> {
    let len = records.len();
    let rows = rows_per_page.get();
    let current_page = current_page.max(1);

    let from = (current_page - 1).saturating_mul(rows);
    let to = current_page.saturating_mul(rows);
    let slice = if from >= len {
        &records[len..]
    } else {
        &records[from..to.min(len)]
    };

    Page {
        records: slice,
        current_page,
        total_pages: total_pages(len, rows_per_page),
        start_record: if len == 0 { 0 } else { from.saturating_add(1) },
        end_record: to.min(len),
    }
}

/// Page numbers to show as buttons.
///
/// All pages when there are at most five; otherwise a sliding window of
/// five that stays pinned to either end near the boundaries.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= PAGE_WINDOW {
        return (1..=total_pages).collect();
    }

    let first = if current_page <= 3 {
        1
    } else if current_page >= total_pages - 2 {
        total_pages - PAGE_WINDOW + 1
    } else {
        current_page - 2
    };

    (first..first + PAGE_WINDOW).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_per_page_accepts_only_supported_sizes() {
        assert_eq!(RowsPerPage::try_from(25), Ok(RowsPerPage::TwentyFive));
        assert_eq!(RowsPerPage::try_from(20), Err(InvalidRowsPerPage(20)));
        assert_eq!(
            InvalidRowsPerPage(0).to_string(),
            "rows per page must be one of 15, 25, 50 or 100, got 0"
        );
    }

    #[test]
    fn rows_per_page_cycles_through_all_sizes() {
        let mut size = RowsPerPage::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(size.get());
            size = size.next();
        }
        assert_eq!(seen, vec![15, 25, 50, 100]);
        assert_eq!(size, RowsPerPage::Fifteen);
    }

    #[test]
    fn third_page_of_thirty_seven() {
        let rows: Vec<u32> = (1..=37).collect();
        let page = paginate(&rows, 3, RowsPerPage::Fifteen);

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.start_record, 31);
        assert_eq!(page.end_record, 37);
        assert_eq!(page.records, &rows[30..]);
    }

    #[test]
    fn short_list_fits_on_one_page() {
        let rows: Vec<u32> = (1..=8).collect();
        let page = paginate(&rows, 1, RowsPerPage::Fifteen);

        assert_eq!(page.total_pages, 1);
        assert_eq!(page.records.len(), 8);
        assert_eq!((page.start_record, page.end_record), (1, 8));
    }

    #[test]
    fn empty_list_has_zero_pages() {
        let rows: Vec<u32> = Vec::new();
        let page = paginate(&rows, 1, RowsPerPage::Fifty);

        assert_eq!(page.total_pages, 0);
        assert_eq!((page.start_record, page.end_record), (0, 0));
        assert!(page.records.is_empty());
    }

    #[test]
    fn page_past_end_is_empty() {
        let rows: Vec<u32> = (1..=10).collect();
        assert!(paginate(&rows, 2, RowsPerPage::Fifteen).records.is_empty());
        assert!(paginate(&rows, usize::MAX, RowsPerPage::Hundred)
            .records
            .is_empty());
    }

    #[test]
    fn page_zero_is_first_page() {
        let rows: Vec<u32> = (1..=20).collect();
        assert_eq!(
            paginate(&rows, 0, RowsPerPage::Fifteen),
            paginate(&rows, 1, RowsPerPage::Fifteen)
        );
    }

    #[test]
    fn window_lists_every_page_when_few() {
        assert_eq!(page_window(1, 0), Vec::<usize>::new());
        assert_eq!(page_window(2, 3), vec![1, 2, 3]);
        assert_eq!(page_window(5, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_slides_and_pins_to_edges() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(3, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(4, 10), vec![2, 3, 4, 5, 6]);
        assert_eq!(page_window(7, 10), vec![5, 6, 7, 8, 9]);
        assert_eq!(page_window(8, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(4, 6), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn page_state_clamps_into_range() {
        let state = PageState::default();
        assert_eq!(state.with_page(9, 3).current_page, 3);
        assert_eq!(state.with_page(0, 3).current_page, 1);
        assert_eq!(state.with_page(4, 0).current_page, 1);
    }

    #[test]
    fn changing_rows_per_page_resets_to_first_page() {
        let state = PageState::default().with_page(3, 10);
        let resized = state.with_rows_per_page(RowsPerPage::Fifty);
        assert_eq!(resized.current_page, 1);
        assert_eq!(resized.rows_per_page, RowsPerPage::Fifty);
    }
}
