//! metrio agent binary.
//!
//! Samples host statistics on the poll interval and pushes them to the
//! server on the report interval, forever.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use metrio_agent::{Agent, AgentConfig};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = AgentConfig::parse();
    if let Err(e) = cfg.validate() {
        tracing::error!(%e, "invalid configuration");
        std::process::exit(1);
    }

    tracing::info!(
        address = %cfg.address,
        poll_interval = cfg.poll_interval,
        report_interval = cfg.report_interval,
        "metrio-agent starting"
    );

    Agent::new(&cfg).run().await;
}
