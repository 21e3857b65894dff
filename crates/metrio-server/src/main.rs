//! metrio server binary.
//!
//! - In-memory gauge/counter store, created once at startup
//! - HTTP surface: POST /update, GET /value, GET /
//! - Config: flag > env > default, validated before bind

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use metrio_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::ServerConfig::parse();
    if let Err(e) = cfg.validate() {
        tracing::error!(%e, "invalid configuration");
        std::process::exit(1);
    }

    let state = app_state::AppState::new();
    let app = router::build_router(state);

    tracing::info!(address = %cfg.address, "metrio-server starting");
    let listener = match tokio::net::TcpListener::bind(cfg.address.as_str()).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(address = %cfg.address, %e, "failed to bind");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(%e, "server failed");
        std::process::exit(1);
    }
}
