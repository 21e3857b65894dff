//! metrio server library entry.
//!
//! This crate wires the metric store, the HTTP update/query handlers, and the
//! startup configuration into the server process. It is intended to be
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod router;
