//! Per-table endpoint paths.

use crate::model::TableKind;
use std::collections::BTreeMap;

/// Endpoint path for each table, relative to the API base URL.
///
/// Tables without an override use [`TableKind::default_endpoint`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoints {
    overrides: BTreeMap<TableKind, String>,
}

impl Endpoints {
    /// Replace the path for one table.
    pub fn with_override(mut self, kind: TableKind, path: impl Into<String>) -> Self {
        self.overrides.insert(kind, path.into());
        self
    }

    /// Path used for `kind`.
    pub fn path(&self, kind: TableKind) -> &str {
        self.overrides
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_endpoint())
    }
}
