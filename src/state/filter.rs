//! Filter predicate engine.
//!
//! A record is retained iff every free-text search and every column filter
//! holds. Both maps only store non-empty patterns, so an empty
//! [`FilterState`] matches everything.

use crate::model::{DisplayRecord, Field, MatchPolicy};
use std::collections::BTreeMap;

// ===== FilterState =====

/// Free-text searches and column filters of one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search: BTreeMap<Field, String>,
    columns: BTreeMap<Field, String>,
}

impl FilterState {
    /// Set the free-text search of `field`. An empty pattern removes it.
    pub fn with_search(mut self, field: Field, pattern: impl Into<String>) -> Self {
        set_or_remove(&mut self.search, field, pattern.into());
        self
    }

    /// Set the column filter of `field`. An empty pattern removes it.
    pub fn with_column(mut self, field: Field, pattern: impl Into<String>) -> Self {
        set_or_remove(&mut self.columns, field, pattern.into());
        self
    }

    /// Drop every constraint.
    pub fn cleared(self) -> Self {
        Self::default()
    }

    /// Current search pattern of `field`, empty if none.
    pub fn search(&self, field: Field) -> &str {
        self.search.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Current column filter of `field`, empty if none.
    pub fn column(&self, field: Field) -> &str {
        self.columns.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Whether no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.columns.is_empty()
    }

    /// Active free-text searches, in field order.
    pub fn searches(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.search.iter().map(|(f, p)| (*f, p.as_str()))
    }

    /// Active column filters, in field order.
    pub fn columns(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.columns.iter().map(|(f, p)| (*f, p.as_str()))
    }

    /// Whether `record` satisfies every search and column filter.
    pub fn matches(&self, record: &DisplayRecord) -> bool {
        let searches_hold = self.search.iter().all(|(field, pattern)| {
            cell_text(record, *field).is_some_and(|value| contains_ignore_case(&value, pattern))
        });

        searches_hold
            && self.columns.iter().all(|(field, pattern)| {
                cell_text(record, *field)
                    .is_some_and(|value| field_matches(*field, &value, pattern))
            })
    }
}

fn set_or_remove(map: &mut BTreeMap<Field, String>, field: Field, pattern: String) {
    if pattern.is_empty() {
        map.remove(&field);
    } else {
        map.insert(field, pattern);
    }
}

fn cell_text(record: &DisplayRecord, field: Field) -> Option<String> {
    record.get(field).map(ToString::to_string)
}

// ===== Predicates =====

/// Whether a column filter `pattern` accepts the display `value` of `field`.
///
/// Date-range fields compare the `YYYY-MM-DD` strings lexicographically;
/// everything else is a case-insensitive substring test. An empty pattern
/// always matches.
pub fn field_matches(field: Field, value: &str, pattern: &str) -> bool {
    if pattern.is_empty() {
        return true;
    }
    match field.match_policy() {
        MatchPolicy::Contains => contains_ignore_case(value, pattern),
        MatchPolicy::OnOrAfter => value >= pattern,
        MatchPolicy::OnOrBefore => value <= pattern,
    }
}

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Records of `records` that `filters` retains, in their original order.
pub fn apply_filters<'a>(records: &'a [DisplayRecord], filters: &FilterState) -> Vec<&'a DisplayRecord> {
    records.iter().filter(|r| filters.matches(r)).collect()
}
