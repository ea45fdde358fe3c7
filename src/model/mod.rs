//! Domain model types (pure).
//!
//! All types in this module are plain data; the only I/O-flavoured item is
//! the [`FetchError`] taxonomy.

pub mod cell;
pub mod error;
pub mod field;
pub mod key_action;
pub mod record;
pub mod summary;

// Re-export for convenience
pub use cell::{format_currency, format_percent, Cell, MISSING};
pub use error::{AppError, FetchError};
pub use field::{Field, MatchPolicy, TableKind, ValueKind};
pub use key_action::KeyAction;
pub use record::{
    DisplayRecord, PolicyRecord, PolicyTransactionRecord, ReinsurerLevelRecord, ReinsurerRecord,
    ReinsurerTransactionRecord,
};
pub use summary::{format_compact_currency, TableSummary};
