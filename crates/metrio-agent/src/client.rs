//! HTTP client side of the update protocol.

use metrio_core::{MetricKind, MetrioError, Result};

/// Pushes single updates as `POST /update/{kind}/{name}/{value}`.
pub struct MetricClient {
    http: reqwest::Client,
    base: String,
}

impl MetricClient {
    /// `address` is host:port; a scheme is prepended when missing.
    pub fn new(address: &str) -> Self {
        let base = if address.starts_with("http://") || address.starts_with("https://") {
            address.trim_end_matches('/').to_string()
        } else {
            format!("http://{address}")
        };
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Send one update. Any network error or non-2xx response surfaces as
    /// `MetrioError::Transport`; the caller decides whether to keep going.
    pub async fn push(&self, kind: MetricKind, name: &str, value: &str) -> Result<()> {
        let url = format!("{}/update/{}/{}/{}", self.base, kind.as_str(), name, value);
        let resp = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .send()
            .await
            .map_err(|e| MetrioError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(MetrioError::Transport(format!(
                "server returned {} for {url}",
                resp.status()
            )));
        }
        Ok(())
    }
}
