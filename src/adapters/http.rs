//! Shared HTTP plumbing for the outbound adapters.
//!
//! Every adapter owns one pooled `reqwest::Client` built here. Requests
//! are sent once: no retries and no rate limiting.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Build a pooled client with a per-request timeout.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(5)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")
}

/// Reject non-success responses, keeping the body for diagnostics.
pub async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(anyhow::anyhow!("HTTP error {status}: {body}"))
}

/// GET `url` and decode the JSON body into `T`.
pub async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    let response = client
        .get(url)
        .header("accept", "application/json")
        .send()
        .await
        .with_context(|| format!("GET {url} failed"))?;

    let response = ensure_success(response).await?;
    debug!(url, status = %response.status(), "HTTP response received");

    response
        .json::<T>()
        .await
        .with_context(|| format!("Invalid JSON from {url}"))
}
