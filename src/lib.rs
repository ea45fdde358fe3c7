//! Reinsurance Capital Dashboard (recap)
//!
//! Terminal dashboard over five reinsurance tables: policies, reinsurers,
//! policy transactions, reinsurer transactions and reinsurer levels.
//!
//! Follows a Pure Core / Impure Shell layout:
//! - [`model`], [`normalizer`] and [`state`] are pure data and transitions
//! - [`source`], [`view`], [`config`] and [`logging`] talk to the outside world

pub mod config;
pub mod logging;
pub mod model;
pub mod normalizer;
pub mod source;
pub mod state;
pub mod view;
