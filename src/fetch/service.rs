//! The fetch-and-normalize pipeline.
//!
//! # Responsibilities
//! - Validate the URL before touching the network
//! - Build one outbound client per call and drop it on every exit path
//! - Turn 4xx/5xx answers into [`FetchError::UpstreamStatus`]
//! - Collapse transport failures into [`FetchError::Transport`]
//!
//! # Design Decisions
//! - No retries and no caching; one outbound GET per accepted call
//! - The client is a local value, so cancellation of the call (the future
//!   being dropped) releases it as well

use std::net::SocketAddr;
use std::time::Duration;

use reqwest::redirect::Policy;
use serde::{Deserialize, Serialize};

use crate::config::UpstreamConfig;
use crate::fetch::{normalize, validate_url, FetchError, FetchResult};

/// Query parameters of an inbound fetch call.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchRequest {
    pub url: String,
}

/// A successfully fetched and normalized document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchedHtml {
    pub html: String,
}

/// Validates, fetches and normalizes documents.
#[derive(Debug, Clone)]
pub struct FetchService {
    upstream: UpstreamConfig,
}

impl FetchService {
    pub fn new(upstream: UpstreamConfig) -> Self {
        Self { upstream }
    }

    /// Run the whole pipeline for one URL.
    pub async fn fetch(&self, url: &str) -> FetchResult {
        validate_url(url)?;

        let client = self.build_client()?;

        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transport(&e))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            tracing::debug!(url = %url, status = %status, "Upstream returned error status");
            return Err(FetchError::UpstreamStatus(status));
        }

        let body = response.text().await.map_err(|e| FetchError::transport(&e))?;

        tracing::debug!(url = %url, status = %status, bytes = body.len(), "Fetched document");

        Ok(FetchedHtml {
            html: normalize(&body),
        })
    }

    /// Build the client owned by a single call.
    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        let cfg = &self.upstream;

        let redirect = if cfg.follow_redirects {
            Policy::limited(cfg.max_redirects)
        } else {
            Policy::none()
        };

        let mut builder = reqwest::Client::builder().redirect(redirect);

        if cfg.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(cfg.timeout_secs));
        }
        if let Some(agent) = &cfg.user_agent {
            builder = builder.user_agent(agent.as_str());
        }
        if !cfg.use_env_proxy {
            builder = builder.no_proxy();
        }
        for (host, ip) in &cfg.host_overrides {
            // port is ignored by reqwest; the URL's port is used
            builder = builder.resolve(host, SocketAddr::new(*ip, 0));
        }

        builder.build().map_err(|e| FetchError::transport(&e))
    }
}
