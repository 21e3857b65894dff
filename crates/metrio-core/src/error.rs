//! Shared error type across metrio crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Metric type is neither `gauge` nor `counter`.
    InvalidMetricType,
    /// Metric name is empty.
    InvalidMetricName,
    /// Raw value does not parse for the given metric type.
    InvalidMetricValue,
    /// Query for a name never set under that type.
    MetricNotFound,
    /// Agent-side network/HTTP failure while pushing an update.
    Transport,
    /// Internal server error.
    Internal,
}

impl ErrorCode {
    /// String representation used in JSON error bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidMetricType => "INVALID_METRIC_TYPE",
            ErrorCode::InvalidMetricName => "INVALID_METRIC_NAME",
            ErrorCode::InvalidMetricValue => "INVALID_METRIC_VALUE",
            ErrorCode::MetricNotFound => "METRIC_NOT_FOUND",
            ErrorCode::Transport => "TRANSPORT",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetrioError>;

/// Unified error type used by the core, server, and agent.
#[derive(Debug, Error)]
pub enum MetrioError {
    #[error("invalid metric type: {0}")]
    InvalidMetricType(String),
    #[error("metric name must not be empty")]
    InvalidMetricName,
    #[error("invalid {kind} value: {raw}")]
    InvalidMetricValue { kind: &'static str, raw: String },
    #[error("metric not found: {0}")]
    MetricNotFound(String),
    #[error("transport: {0}")]
    Transport(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MetrioError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ErrorCode {
        match self {
            MetrioError::InvalidMetricType(_) => ErrorCode::InvalidMetricType,
            MetrioError::InvalidMetricName => ErrorCode::InvalidMetricName,
            MetrioError::InvalidMetricValue { .. } => ErrorCode::InvalidMetricValue,
            MetrioError::MetricNotFound(_) => ErrorCode::MetricNotFound,
            MetrioError::Transport(_) => ErrorCode::Transport,
            MetrioError::Internal(_) => ErrorCode::Internal,
        }
    }
}
