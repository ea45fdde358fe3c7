//! Record sources.
//!
//! A [`RecordSource`] performs the single, unparameterized fetch behind a
//! table and returns its raw records. [`spawn_fetch`] runs a fetch plus
//! normalization on a background thread so the event loop can keep drawing
//! the loading state; the outcome arrives on a channel.

use crate::model::{DisplayRecord, FetchError, TableKind};
use crate::normalizer;
use serde_json::Value;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use tracing::{info, warn};

pub mod http;

pub use http::HttpSource;

/// Untyped record as returned by the API.
pub type RawRecord = Value;

/// Something that can retrieve the raw records of a table.
pub trait RecordSource: Send + Sync {
    /// Fetch every record of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    fn fetch(&self, kind: TableKind) -> Result<Vec<RawRecord>, FetchError>;
}

/// Result of one background fetch.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Table that was fetched.
    pub kind: TableKind,
    /// Normalized records, or why the fetch failed.
    pub result: Result<Vec<DisplayRecord>, FetchError>,
}

/// Turn a decoded response body into raw records.
///
/// A body that is not a JSON array is treated as an empty result.
pub fn records_from_body(body: Value, url: &str) -> Vec<RawRecord> {
    match body {
        Value::Array(records) => records,
        other => {
            warn!(
                url,
                body_type = json_type_name(&other),
                "Response body is not an array, treating as empty"
            );
            Vec::new()
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Fetch and normalize `kind` synchronously.
///
/// # Errors
///
/// Propagates the source's [`FetchError`].
pub fn load_table(source: &dyn RecordSource, kind: TableKind) -> Result<Vec<DisplayRecord>, FetchError> {
    let raw = source.fetch(kind)?;
    let records = normalizer::normalize(kind, &raw);
    info!(table = kind.key(), count = records.len(), "Loaded records");
    Ok(records)
}

/// Load `kind` on a background thread and send the outcome to `outcomes`.
///
/// Nothing deduplicates or cancels overlapping fetches of the same table;
/// whichever outcome the receiver handles last wins.
pub fn spawn_fetch(
    source: Arc<dyn RecordSource>,
    kind: TableKind,
    outcomes: Sender<FetchOutcome>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let result = load_table(source.as_ref(), kind);
        if let Err(err) = &result {
            warn!(table = kind.key(), error = %err, "Fetch failed");
        }
        // Receiver gone means the app is shutting down.
        let _ = outcomes.send(FetchOutcome { kind, result });
    })
}
