//! Server startup configuration.
//!
//! Layered resolution, highest wins: explicit flag > environment variable >
//! default. clap's `env` attribute implements the env layer, so precedence
//! holds without hand-rolled merging. Validated once before the listener
//! binds.

use clap::Parser;
use metrio_core::{MetrioError, Result};

#[derive(Debug, Parser)]
#[command(name = "metrio-server", about = "In-memory metrics collection server")]
pub struct ServerConfig {
    /// Listen address as host:port.
    #[arg(short = 'a', long = "address", env = "ADDRESS", default_value = "localhost:8080")]
    pub address: String,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        validate_address(&self.address)
    }
}

pub(crate) fn validate_address(address: &str) -> Result<()> {
    match address.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => Ok(()),
        _ => Err(MetrioError::Internal(format!(
            "address must be host:port, got {address:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn default_address() {
        let cfg = ServerConfig::try_parse_from(["metrio-server"]).unwrap();
        assert_eq!(cfg.address, "localhost:8080");
        cfg.validate().unwrap();
    }

    #[test]
    fn flag_overrides_default() {
        let cfg = ServerConfig::try_parse_from(["metrio-server", "-a", "0.0.0.0:9090"]).unwrap();
        assert_eq!(cfg.address, "0.0.0.0:9090");
        cfg.validate().unwrap();
    }

    #[test]
    fn rejects_malformed_address() {
        for bad in ["nocolon", ":8080", "localhost:notaport", "localhost:99999"] {
            let cfg = ServerConfig::try_parse_from(["metrio-server", "-a", bad]).unwrap();
            assert!(cfg.validate().is_err(), "{bad} should fail validation");
        }
    }
}
