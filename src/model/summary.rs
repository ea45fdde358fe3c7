//! Aggregates over the filtered rows of a table.

use super::field::{Field, TableKind};
use super::cell::round_half_away;
use super::record::DisplayRecord;

/// Totals shown beneath a table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableSummary {
    /// Records fetched for the table.
    pub total_records: usize,
    /// Records left after filtering.
    pub filtered_records: usize,
    /// Sum of each currency column over the filtered records.
    ///
    /// Missing cells are skipped.
    pub currency_totals: Vec<(Field, f64)>,
}

impl TableSummary {
    /// Summarize `filtered` out of `total_records` fetched rows of `kind`.
    pub fn compute(kind: TableKind, filtered: &[&DisplayRecord], total_records: usize) -> Self {
        let currency_totals = kind
            .currency_fields()
            .map(|field| {
                let total = filtered
                    .iter()
                    .filter_map(|record| record.get(field).and_then(|cell| cell.as_currency()))
                    .sum();
                (field, total)
            })
            .collect();

        Self {
            total_records,
            filtered_records: filtered.len(),
            currency_totals,
        }
    }
}

/// Abbreviated dollar amount for summary lines.
///
/// - `format_compact_currency(2_400_000.0)` → `"$2.4M"`
/// - `format_compact_currency(350_000.0)` → `"$350K"`
/// - `format_compact_currency(999.5)` → `"$999.5"`
///
/// Amounts under a thousand are shown as-is, without rounding.
pub fn format_compact_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        let (whole, tenths) = round_half_away(magnitude / 1_000_000.0, 1);
        format!("{}${}.{}M", sign, whole, tenths)
    } else if magnitude >= 1_000.0 {
        let (thousands, _) = round_half_away(magnitude / 1_000.0, 0);
        format!("{}${}K", sign, thousands)
    } else {
        format!("{}${}", sign, magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cell::Cell;

    fn policy(account_value: Cell) -> DisplayRecord {
        DisplayRecord::build(TableKind::Policies, |field| match field {
            Field::AccountValue => account_value.clone(),
            Field::ReinsuredAccountValue => match &account_value {
                Cell::Currency(v) => Cell::Currency(v * 0.25),
                _ => Cell::Missing,
            },
            _ => Cell::Text("x".into()),
        })
    }

    #[test]
    fn compact_currency_scales() {
        assert_eq!(format_compact_currency(2_400_000.0), "$2.4M");
        assert_eq!(format_compact_currency(15_400_000.0), "$15.4M");
        assert_eq!(format_compact_currency(350_000.0), "$350K");
        assert_eq!(format_compact_currency(1_000.0), "$1K");
        assert_eq!(format_compact_currency(999.0), "$999");
        assert_eq!(format_compact_currency(0.0), "$0");
    }

    #[test]
    fn compact_currency_does_not_round_small_amounts() {
        assert_eq!(format_compact_currency(999.5), "$999.5");
        assert_eq!(format_compact_currency(12.25), "$12.25");
        assert_eq!(format_compact_currency(-0.5), "-$0.5");
    }

    #[test]
    fn compact_currency_ties_round_up() {
        assert_eq!(format_compact_currency(2_250_000.0), "$2.3M");
        assert_eq!(format_compact_currency(349_500.0), "$350K");
        assert_eq!(format_compact_currency(999_999.0), "$1000K");
    }

    #[test]
    fn compact_currency_keeps_sign_in_front() {
        assert_eq!(format_compact_currency(-2_500_000.0), "-$2.5M");
        assert_eq!(format_compact_currency(-420.0), "-$420");
    }

    #[test]
    fn summary_sums_currency_columns_skipping_missing() {
        let a = policy(Cell::Currency(100.0));
        let b = policy(Cell::Missing);
        let c = policy(Cell::Currency(300.0));
        let filtered = vec![&a, &b, &c];

        let summary = TableSummary::compute(TableKind::Policies, &filtered, 10);

        assert_eq!(summary.total_records, 10);
        assert_eq!(summary.filtered_records, 3);
        assert_eq!(
            summary.currency_totals,
            vec![
                (Field::AccountValue, 400.0),
                (Field::ReinsuredAccountValue, 100.0)
            ]
        );
    }

    #[test]
    fn summary_of_empty_set_has_zero_totals() {
        let summary = TableSummary::compute(TableKind::Policies, &[], 0);
        assert_eq!(summary.filtered_records, 0);
        assert!(summary.currency_totals.iter().all(|(_, total)| *total == 0.0));
    }
}
