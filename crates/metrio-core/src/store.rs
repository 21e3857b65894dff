//! In-memory metric store.
//!
//! Keying scheme: two per-kind tables keyed by name, so a gauge and a counter
//! may share a name without colliding. Both tables live behind one `RwLock`,
//! which makes every operation linearizable and lets [`MetricStore::snapshot`]
//! copy a consistent view of the whole store in a single critical section.
//! No I/O happens while the lock is held.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock};

use serde::Serialize;

use crate::metric::{MetricUpdate, MetricValue};

#[derive(Debug, Default)]
struct Tables {
    gauges: HashMap<String, f64>,
    counters: HashMap<String, i64>,
}

/// Point-in-time copy of all metrics, serialized as
/// `{"gauge": {...}, "counter": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub gauge: BTreeMap<String, f64>,
    pub counter: BTreeMap<String, i64>,
}

/// Shared metric state for the server process lifetime.
///
/// All mutation goes through the update operations below; the raw tables are
/// never exposed.
#[derive(Debug, Default)]
pub struct MetricStore {
    tables: RwLock<Tables>,
}

impl MetricStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the stored gauge value (last-write-wins).
    pub fn update_gauge(&self, name: &str, value: f64) {
        let mut t = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        t.gauges.insert(name.to_string(), value);
    }

    /// Add `delta` to the stored counter, creating the entry at `delta` if
    /// absent. Saturates instead of wrapping at the i64 boundary.
    pub fn update_counter(&self, name: &str, delta: i64) {
        let mut t = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        let slot = t.counters.entry(name.to_string()).or_insert(0);
        *slot = slot.saturating_add(delta);
    }

    /// Apply one validated update, dispatching on its kind.
    pub fn apply(&self, update: &MetricUpdate) {
        match update.value {
            MetricValue::Gauge(v) => self.update_gauge(&update.name, v),
            MetricValue::Counter(d) => self.update_counter(&update.name, d),
        }
    }

    /// Point lookup; `None` means the name was never set as a gauge.
    pub fn gauge(&self, name: &str) -> Option<f64> {
        let t = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        t.gauges.get(name).copied()
    }

    /// Point lookup; `None` means the name was never set as a counter.
    pub fn counter(&self, name: &str) -> Option<i64> {
        let t = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        t.counters.get(name).copied()
    }

    /// Consistent copy of both tables. Never torn: taken under the read lock,
    /// so a racing write lands either fully before or fully after.
    pub fn snapshot(&self) -> Snapshot {
        let t = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        Snapshot {
            gauge: t.gauges.iter().map(|(k, v)| (k.clone(), *v)).collect(),
            counter: t.counters.iter().map(|(k, v)| (k.clone(), *v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::metric::MetricUpdate;

    #[test]
    fn gauge_last_write_wins() {
        let store = MetricStore::new();
        store.update_gauge("Alloc", 1.5);
        store.update_gauge("Alloc", 2.5);
        assert_eq!(store.gauge("Alloc"), Some(2.5));
    }

    #[test]
    fn counter_accumulates() {
        let store = MetricStore::new();
        store.update_counter("Hits", 10);
        store.update_counter("Hits", 5);
        assert_eq!(store.counter("Hits"), Some(15));
    }

    #[test]
    fn counter_starts_at_delta() {
        let store = MetricStore::new();
        store.update_counter("Hits", -3);
        assert_eq!(store.counter("Hits"), Some(-3));
    }

    #[test]
    fn counter_saturates_at_bounds() {
        let store = MetricStore::new();
        store.update_counter("Big", i64::MAX);
        store.update_counter("Big", 1);
        assert_eq!(store.counter("Big"), Some(i64::MAX));
    }

    #[test]
    fn unknown_names_are_absent() {
        let store = MetricStore::new();
        assert_eq!(store.gauge("nope"), None);
        assert_eq!(store.counter("nope"), None);
    }

    #[test]
    fn kinds_do_not_collide_on_name() {
        let store = MetricStore::new();
        store.update_gauge("x", 1.0);
        store.update_counter("x", 2);
        assert_eq!(store.gauge("x"), Some(1.0));
        assert_eq!(store.counter("x"), Some(2));
    }

    #[test]
    fn apply_dispatches_on_kind() {
        let store = MetricStore::new();
        store.apply(&MetricUpdate::parse("gauge", "Temp", "36.6").unwrap());
        store.apply(&MetricUpdate::parse("counter", "Hits", "5").unwrap());
        store.apply(&MetricUpdate::parse("counter", "Hits", "5").unwrap());
        assert_eq!(store.gauge("Temp"), Some(36.6));
        assert_eq!(store.counter("Hits"), Some(10));
    }

    #[test]
    fn snapshot_contains_exactly_current_state() {
        let store = MetricStore::new();
        store.update_gauge("a", 1.0);
        store.update_gauge("b", 2.0);
        store.update_counter("c", 3);
        store.update_counter("d", 4);

        let snap = store.snapshot();
        assert_eq!(snap.gauge.len(), 2);
        assert_eq!(snap.counter.len(), 2);
        assert_eq!(snap.gauge["a"], 1.0);
        assert_eq!(snap.gauge["b"], 2.0);
        assert_eq!(snap.counter["c"], 3);
        assert_eq!(snap.counter["d"], 4);
    }

    #[test]
    fn snapshot_serializes_nested_shape() {
        let store = MetricStore::new();
        store.update_gauge("Temp", 36.6);
        store.update_counter("Hits", 10);
        let json = serde_json::to_value(store.snapshot()).unwrap();
        assert_eq!(json["gauge"]["Temp"], 36.6);
        assert_eq!(json["counter"]["Hits"], 10);
    }
}
