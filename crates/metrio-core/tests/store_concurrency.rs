#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use metrio_core::{MetricStore, MetricUpdate};

/// N concurrent increments of one counter must leave exactly N.
#[test]
fn concurrent_counter_increments_are_never_lost() {
    for n in [10usize, 100, 1000] {
        let store = Arc::new(MetricStore::new());
        let handles: Vec<_> = (0..n)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.update_counter("x", 1))
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.counter("x"), Some(n as i64), "lost updates at n={n}");
    }
}

/// Racing gauge writers: the final value is one of the written values, never
/// a torn intermediate.
#[test]
fn concurrent_gauge_writes_end_on_a_written_value() {
    let store = Arc::new(MetricStore::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..100 {
                    store.update_gauge("g", i as f64);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    let v = store.gauge("g").unwrap();
    assert!((0..8).any(|i| v == i as f64), "unexpected gauge value {v}");
}

/// Snapshots taken while writers run must reflect a prefix of the applied
/// increments: monotone, never ahead of the writer total.
#[test]
fn snapshot_is_consistent_under_concurrent_writes() {
    let store = Arc::new(MetricStore::new());
    let total = 2000i64;

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for _ in 0..total {
                store.update_counter("ticks", 1);
            }
        })
    };

    let reader = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            let mut last = 0i64;
            for _ in 0..200 {
                let snap = store.snapshot();
                let seen = snap.counter.get("ticks").copied().unwrap_or(0);
                assert!(seen >= last, "snapshot went backwards: {last} -> {seen}");
                assert!(seen <= total, "snapshot ahead of writer: {seen}");
                last = seen;
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();
    assert_eq!(store.counter("ticks"), Some(total));
}

/// Known hazard: redelivering the same update is idempotent for gauges but
/// double-counts for counters. Retry layers must not re-send counter deltas.
#[test]
fn duplicate_delivery_semantics() {
    let store = MetricStore::new();

    let gauge = MetricUpdate::parse("gauge", "Temp", "36.6").unwrap();
    store.apply(&gauge);
    store.apply(&gauge);
    assert_eq!(store.gauge("Temp"), Some(36.6));

    let counter = MetricUpdate::parse("counter", "Hits", "5").unwrap();
    store.apply(&counter);
    store.apply(&counter);
    assert_eq!(store.counter("Hits"), Some(10));
}
