//! Shared application state for the metrio server.
//!
//! The only shared mutable resource is the metric store; handlers reach it
//! through this state and never touch the tables directly.

use std::sync::Arc;

use metrio_core::MetricStore;

#[derive(Clone, Default)]
pub struct AppState {
    store: Arc<MetricStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &MetricStore {
        &self.store
    }
}
