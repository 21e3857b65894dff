//! Agent startup configuration.
//!
//! Same layering as the server: explicit flag > environment variable >
//! default, validated once before the loop starts.

use clap::Parser;
use metrio_core::{MetrioError, Result};

#[derive(Debug, Parser)]
#[command(name = "metrio-agent", about = "Host metrics sampling and push agent")]
pub struct AgentConfig {
    /// Server address as host:port (scheme optional).
    #[arg(short = 'a', long = "address", env = "ADDRESS", default_value = "localhost:8080")]
    pub address: String,

    /// Seconds between host samples.
    #[arg(short = 'p', long = "poll-interval", env = "POLL_INTERVAL", default_value_t = 2)]
    pub poll_interval: u64,

    /// Seconds between pushes to the server.
    #[arg(short = 'r', long = "report-interval", env = "REPORT_INTERVAL", default_value_t = 10)]
    pub report_interval: u64,
}

impl AgentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.address.is_empty() {
            return Err(MetrioError::Internal("address must not be empty".into()));
        }
        if self.poll_interval == 0 {
            return Err(MetrioError::Internal("poll interval must be > 0".into()));
        }
        if self.report_interval == 0 {
            return Err(MetrioError::Internal("report interval must be > 0".into()));
        }
        Ok(())
    }
}
