//! Property-based tests for filter and pager invariants.
//!
//! Tests validate:
//! 1. An empty filter state matches every record
//! 2. Substring filters retain records containing the pattern and exclude the rest
//! 3. `paginate` is deterministic and never reads past the end
//! 4. Page metadata for the worked examples

use proptest::prelude::*;
use recap::model::{Cell, DisplayRecord, Field, TableKind};
use recap::state::{
    apply_filters, page_window, paginate, total_pages, FilterState, GridEvent, GridState,
    RowsPerPage,
};

// ===== Strategies =====

fn rows_per_page() -> impl Strategy<Value = RowsPerPage> {
    prop::sample::select(RowsPerPage::ALL.to_vec())
}

fn reinsurer(name: String, treaty: String) -> DisplayRecord {
    DisplayRecord::build(TableKind::Reinsurers, |field| match field {
        Field::ReinsurerName => Cell::Text(name.clone()),
        Field::TreatyId => Cell::Text(treaty.clone()),
        Field::QuotaShare => Cell::Percent(35.0),
        _ => Cell::Missing,
    })
}

prop_compose! {
    fn arb_reinsurer()(name in "[A-Za-z ]{0,16}", treaty in "T-[0-9]{1,4}") -> DisplayRecord {
        reinsurer(name, treaty)
    }
}

// ===== Property 1: Empty filter matches all =====

proptest! {
    #[test]
    fn empty_filter_matches_every_record(records in prop::collection::vec(arb_reinsurer(), 0..40)) {
        let filtered = apply_filters(&records, &FilterState::default());
        prop_assert_eq!(filtered.len(), records.len());
    }
}

// ===== Property 2: Substring filters =====

proptest! {
    #[test]
    fn substring_of_field_retains_record(
        name in "[a-z]{1,20}",
        start in 0usize..20,
        len in 1usize..20,
    ) {
        let start = start.min(name.len() - 1);
        let end = (start + len).min(name.len());
        let pattern = name[start..end].to_uppercase();
        let records = vec![reinsurer(name.clone(), "T-1".into())];

        let by_search = FilterState::default().with_search(Field::ReinsurerName, pattern.clone());
        let by_column = FilterState::default().with_column(Field::ReinsurerName, pattern);

        prop_assert_eq!(apply_filters(&records, &by_search).len(), 1);
        prop_assert_eq!(apply_filters(&records, &by_column).len(), 1);
    }

    #[test]
    fn absent_pattern_excludes_record(name in "[a-z]{0,20}") {
        // Digits never occur in the generated names.
        let records = vec![reinsurer(name, "T-1".into())];
        let filters = FilterState::default().with_search(Field::ReinsurerName, "42");

        prop_assert!(apply_filters(&records, &filters).is_empty());
    }

    #[test]
    fn filtered_set_is_subset_in_original_order(
        records in prop::collection::vec(arb_reinsurer(), 0..40),
        pattern in "[a-z]{0,2}",
    ) {
        let filters = FilterState::default().with_search(Field::ReinsurerName, pattern);
        let filtered = apply_filters(&records, &filters);

        let mut remaining = records.iter();
        for kept in filtered {
            prop_assert!(remaining.any(|r| std::ptr::eq(r, kept)));
        }
    }
}

// ===== Property 3: Pagination =====

proptest! {
    #[test]
    fn paginate_is_idempotent(
        len in 0usize..500,
        page in 0usize..50,
        rows in rows_per_page(),
    ) {
        let records: Vec<usize> = (0..len).collect();
        prop_assert_eq!(paginate(&records, page, rows), paginate(&records, page, rows));
    }

    #[test]
    fn page_past_the_end_is_empty(
        len in 0usize..500,
        extra in 1usize..20,
        rows in rows_per_page(),
    ) {
        let records: Vec<usize> = (0..len).collect();
        let total = total_pages(len, rows);
        let page = paginate(&records, total + extra, rows);
        prop_assert!(page.records.is_empty());
    }

    #[test]
    fn pages_partition_the_records(len in 0usize..300, rows in rows_per_page()) {
        let records: Vec<usize> = (0..len).collect();
        let total = total_pages(len, rows);

        let joined: Vec<usize> = (1..=total)
            .flat_map(|p| paginate(&records, p, rows).records.to_vec())
            .collect();

        prop_assert_eq!(joined, records);
    }

    #[test]
    fn page_window_contains_current_page(total in 1usize..200, page in 1usize..200) {
        let page = page.min(total);
        let window = page_window(page, total);

        prop_assert!(window.contains(&page));
        prop_assert!(window.len() <= 5);
        prop_assert!(window.iter().all(|p| (1..=total).contains(p)));
    }
}

// ===== Property 4: Worked examples =====

#[test]
fn third_page_of_37_records() {
    let records: Vec<usize> = (0..37).collect();
    let page = paginate(&records, 3, RowsPerPage::Fifteen);

    assert_eq!(page.total_pages, 3);
    assert_eq!(page.start_record, 31);
    assert_eq!(page.end_record, 37);
    assert_eq!(page.records.len(), 7);
}

#[test]
fn eight_records_fit_on_one_page() {
    let records: Vec<usize> = (0..8).collect();
    let page = paginate(&records, 1, RowsPerPage::Fifteen);

    assert_eq!(page.total_pages, 1);
    assert_eq!(page.records.len(), 8);
    assert_eq!(page.start_record, 1);
    assert_eq!(page.end_record, 8);
}

#[test]
fn changing_rows_per_page_resets_to_first_page() {
    let records = (0..100)
        .map(|i| reinsurer(format!("Reinsurer {}", i), "T-1".into()))
        .collect();
    let grid = GridState::new(TableKind::Reinsurers, RowsPerPage::Fifteen)
        .apply(GridEvent::Loaded(records))
        .apply(GridEvent::SetPage(3));
    assert_eq!(grid.page().current_page, 3);

    let grid = grid.apply(GridEvent::SetRowsPerPage(RowsPerPage::Fifty));

    assert_eq!(grid.page().current_page, 1);
    assert_eq!(grid.page().rows_per_page, RowsPerPage::Fifty);
}
