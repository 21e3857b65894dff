//! Metric kinds, values, and the shared update protocol.
//!
//! A `MetricUpdate` is the validated form of one wire update
//! (`kind`, `name`, `raw value`). Both the server handler and the agent's
//! push path go through [`MetricUpdate::parse`], so the two processes can
//! never disagree on what a well-formed update is.

use crate::error::{MetrioError, Result};

/// The two metric kinds on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Instantaneous value, last-write-wins.
    Gauge,
    /// Monotonic accumulator, updates carry deltas.
    Counter,
}

impl MetricKind {
    /// Wire spelling of the kind. Exact match only; anything else is rejected.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "gauge" => Ok(MetricKind::Gauge),
            "counter" => Ok(MetricKind::Counter),
            other => Err(MetrioError::InvalidMetricType(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Counter => "counter",
        }
    }
}

/// Tagged metric value. Gauges overwrite, counters accumulate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Gauge(f64),
    Counter(i64),
}

impl MetricValue {
    pub fn kind(self) -> MetricKind {
        match self {
            MetricValue::Gauge(_) => MetricKind::Gauge,
            MetricValue::Counter(_) => MetricKind::Counter,
        }
    }
}

/// One validated update: the unit of the wire contract.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricUpdate {
    pub name: String,
    pub value: MetricValue,
}

impl MetricUpdate {
    /// Validate and parse one wire update.
    ///
    /// - `kind` must be exactly `"gauge"` or `"counter"`.
    /// - `name` must be non-empty.
    /// - gauge values parse as base-10 floats; NaN and infinities are rejected.
    /// - counter values parse as base-10 signed 64-bit integers.
    pub fn parse(kind: &str, name: &str, raw_value: &str) -> Result<Self> {
        let kind = MetricKind::parse(kind)?;
        if name.is_empty() {
            return Err(MetrioError::InvalidMetricName);
        }

        let value = match kind {
            MetricKind::Gauge => {
                let v: f64 = raw_value.parse().map_err(|_| MetrioError::InvalidMetricValue {
                    kind: "gauge",
                    raw: raw_value.to_string(),
                })?;
                if !v.is_finite() {
                    return Err(MetrioError::InvalidMetricValue {
                        kind: "gauge",
                        raw: raw_value.to_string(),
                    });
                }
                MetricValue::Gauge(v)
            }
            MetricKind::Counter => {
                let d: i64 = raw_value.parse().map_err(|_| MetrioError::InvalidMetricValue {
                    kind: "counter",
                    raw: raw_value.to_string(),
                })?;
                MetricValue::Counter(d)
            }
        };

        Ok(MetricUpdate {
            name: name.to_string(),
            value,
        })
    }
}
