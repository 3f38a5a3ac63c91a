//! Operator Backend Client - Pool Statistics
//!
//! Reads `GET {base}/pool/stats` from the pool operator's backend.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use tracing::instrument;

use crate::adapters::http;
use crate::config::EndpointConfig;
use crate::ports::staking_api::{PoolStats, StakingApi};

/// HTTP client for the operator backend.
pub struct BackendClient {
    /// Underlying HTTP client.
    http: Client,
    /// Base URL without trailing slash.
    base_url: String,
}

impl BackendClient {
    /// Create a client for `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: http::build_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from endpoint configuration.
    pub fn from_config(config: &EndpointConfig) -> Result<Self> {
        Self::new(&config.api_base_url, config.timeout())
    }

    /// Full URL of the pool statistics endpoint.
    pub fn stats_url(&self) -> String {
        format!("{}/pool/stats", self.base_url)
    }
}

#[async_trait]
impl StakingApi for BackendClient {
    #[instrument(skip(self), fields(base = %self.base_url))]
    async fn pool_stats(&self) -> Result<PoolStats> {
        http::get_json(&self.http, &self.stats_url()).await
    }
}
