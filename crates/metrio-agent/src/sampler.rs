//! Host statistics sampling.
//!
//! One mutable observation buffer shared by the two timers: the sample tick
//! overwrites the gauge entries and bumps the pending counter, the push tick
//! drains them. Gauge readings are arbitrary named floats; only `PollCount`
//! is a counter.

use std::collections::BTreeMap;

use rand::Rng;
use sysinfo::System;

/// Counter metric name for the self-tracking sample count.
pub const POLL_COUNT: &str = "PollCount";

pub struct Sampler {
    sys: System,
    gauges: BTreeMap<String, f64>,
    pending_polls: i64,
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler {
    pub fn new() -> Self {
        Self {
            sys: System::new(),
            gauges: BTreeMap::new(),
            pending_polls: 0,
        }
    }

    /// One sample tick: refresh host readings, overwrite the gauge buffer,
    /// and count the poll.
    pub fn sample(&mut self) {
        self.sys.refresh_memory();
        self.sys.refresh_cpu_usage();

        self.set_gauge("TotalMemory", self.sys.total_memory() as f64);
        self.set_gauge("UsedMemory", self.sys.used_memory() as f64);
        self.set_gauge("FreeMemory", self.sys.free_memory() as f64);
        self.set_gauge("AvailableMemory", self.sys.available_memory() as f64);
        self.set_gauge("TotalSwap", self.sys.total_swap() as f64);
        self.set_gauge("UsedSwap", self.sys.used_swap() as f64);
        self.set_gauge("CpuUsage", f64::from(self.sys.global_cpu_info().cpu_usage()));
        self.set_gauge("RandomValue", rand::thread_rng().gen::<f64>());

        self.pending_polls += 1;
    }

    fn set_gauge(&mut self, name: &str, value: f64) {
        // sysinfo readings are finite; guard anyway so the wire never sees NaN.
        if value.is_finite() {
            self.gauges.insert(name.to_string(), value);
        }
    }

    /// Current gauge buffer, in push order.
    pub fn gauges(&self) -> &BTreeMap<String, f64> {
        &self.gauges
    }

    /// Take the counter delta accumulated since the last successful push.
    /// The agent pushes this delta, not the cumulative count, so overlapping
    /// push/sample cadences cannot double-count on the server.
    pub fn take_poll_delta(&mut self) -> i64 {
        std::mem::take(&mut self.pending_polls)
    }

    /// Return a delta whose push failed, so it rides along with the next one.
    pub fn restore_poll_delta(&mut self, delta: i64) {
        self.pending_polls = self.pending_polls.saturating_add(delta);
    }
}
