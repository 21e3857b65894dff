//! metrio core: the metrics data model, update protocol, and in-memory store.
//!
//! This crate defines the gauge/counter value types, the parse-and-validate
//! step shared by the server and the agent, and the store that applies
//! updates under concurrency. It intentionally carries no transport or
//! runtime dependencies so it can be reused on both sides of the wire.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `MetrioError`/`Result` so production
//! processes do not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metric;
pub mod store;

/// Shared result type.
pub use error::{MetrioError, Result};
pub use metric::{MetricKind, MetricUpdate, MetricValue};
pub use store::{MetricStore, Snapshot};
