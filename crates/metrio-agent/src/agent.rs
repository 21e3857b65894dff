//! The sample/push loop.
//!
//! Two independent tickers over one observation buffer. A failed push is
//! logged and skipped; it never aborts the rest of the cycle or the loop.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

use metrio_core::MetricKind;

use crate::client::MetricClient;
use crate::config::AgentConfig;
use crate::sampler::{Sampler, POLL_COUNT};

pub struct Agent {
    sampler: Sampler,
    client: MetricClient,
    poll_interval: Duration,
    report_interval: Duration,
}

impl Agent {
    pub fn new(cfg: &AgentConfig) -> Self {
        Self {
            sampler: Sampler::new(),
            client: MetricClient::new(&cfg.address),
            poll_interval: Duration::from_secs(cfg.poll_interval),
            report_interval: Duration::from_secs(cfg.report_interval),
        }
    }

    /// One sample tick.
    pub fn sample(&mut self) {
        self.sampler.sample();
    }

    /// One push tick: every gauge entry, then the poll-count delta.
    /// Returns how many individual pushes failed this cycle.
    pub async fn push_cycle(&mut self) -> usize {
        let mut failed = 0;

        // Clone out so the buffer is not borrowed across awaits.
        let gauges: Vec<(String, f64)> = self
            .sampler
            .gauges()
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();

        for (name, value) in gauges {
            let raw = value.to_string();
            if let Err(e) = self.client.push(MetricKind::Gauge, &name, &raw).await {
                tracing::warn!(name = %name, %e, "gauge push failed, skipping");
                failed += 1;
            } else {
                tracing::debug!(name = %name, value = %raw, "gauge pushed");
            }
        }

        let delta = self.sampler.take_poll_delta();
        if delta != 0 {
            let raw = delta.to_string();
            if let Err(e) = self.client.push(MetricKind::Counter, POLL_COUNT, &raw).await {
                tracing::warn!(%e, delta, "poll count push failed, delta kept for next cycle");
                self.sampler.restore_poll_delta(delta);
                failed += 1;
            } else {
                tracing::debug!(delta, "poll count pushed");
            }
        }

        failed
    }

    /// Run the two tickers forever. No normal exit path; the process is
    /// stopped externally.
    pub async fn run(&mut self) {
        let mut poll = interval(self.poll_interval);
        let mut report = interval(self.report_interval);
        poll.set_missed_tick_behavior(MissedTickBehavior::Skip);
        report.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // An interval's first tick fires immediately; consume both so the
        // tickers behave like fixed-period clocks from the start.
        poll.tick().await;
        report.tick().await;

        loop {
            tokio::select! {
                _ = poll.tick() => self.sample(),
                _ = report.tick() => {
                    let failed = self.push_cycle().await;
                    if failed > 0 {
                        tracing::warn!(failed, "push cycle completed with failures");
                    }
                }
            }
        }
    }
}
