//! Error types for the dashboard.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level failures that end the program
//!   - [`ConfigError`] - config file unreadable, unparseable or invalid
//!   - [`LoggingError`] - tracing subscriber could not be installed
//!   - [`FetchError`] - HTTP client could not be built
//!   - `std::io::Error` - terminal setup or rendering failures, also
//!     reached through `TuiError`
//!
//! # Recovery Strategy
//!
//! A [`FetchError`] raised while loading a table is **not** fatal: it becomes
//! the tab's failed state and the user reloads manually. Malformed records
//! never raise an error at all; the normalizer substitutes placeholders.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Top-level application error.
///
/// Every failure that stops `recap` before or during the TUI ends up here.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Record fetcher could not be constructed.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failure to retrieve the raw records of a table.
///
/// Each variant carries the URL so the log file shows which endpoint failed;
/// the user only ever sees the generic "failed to fetch" panel.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered with a non-2xx status.
    ///
    /// # Examples
    ///
    /// ```
    /// use recap::model::FetchError;
    ///
    /// let err = FetchError::Status { url: "http://api/x".into(), status: 503 };
    /// assert!(err.to_string().contains("failed to fetch"));
    /// assert!(err.to_string().contains("503"));
    /// ```
    #[error("failed to fetch {url}: HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Request never produced a response (DNS, TLS, timeout, ...).
    #[error("failed to fetch {url}: {source}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// Response body was not valid JSON.
    #[error("failed to decode response from {url}: {reason}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// HTTP client construction failed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
