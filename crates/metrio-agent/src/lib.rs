//! metrio agent library entry.
//!
//! This crate samples host statistics on a poll timer and pushes them to a
//! metrio server on a report timer. It is consumed by the binary (`main.rs`)
//! and by integration tests.

pub mod agent;
pub mod client;
pub mod config;
pub mod sampler;

pub use agent::Agent;
pub use client::MetricClient;
pub use config::AgentConfig;
pub use sampler::Sampler;
