//! Sui Fullnode Reader - JSON-RPC over HTTP
//!
//! Implements the `ChainReader` port with `sui_getObject` and
//! `suix_queryEvents`. Event queries are paged because the fullnode
//! caps a single page well below the requested limits.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, instrument, warn};

use super::rpc::{EventPage, ObjectResponse, RpcRequest, RpcResponse};
use crate::adapters::http;
use crate::config::AppConfig;
use crate::ports::chain_reader::{ChainReader, ModuleEvent, ModuleEventQuery, ObjectFields};

/// Largest page the fullnode serves for `suix_queryEvents`.
pub const MAX_EVENT_PAGE: usize = 50;

/// Read-only Sui JSON-RPC client.
pub struct SuiRpcReader {
    http: Client,
    rpc_url: String,
    /// Object read by health checks.
    system_state_id: String,
    next_id: AtomicU64,
}

impl SuiRpcReader {
    /// Create a reader from adapter configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            http: http::build_client(config.endpoints.timeout())?,
            rpc_url: config.endpoints.rpc_url.clone(),
            system_state_id: config.pool.system_state_id.clone(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Issue one JSON-RPC call and unwrap the envelope.
    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(id, method, params);

        let response = self
            .http
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("{method} request failed"))?;
        let response = http::ensure_success(response).await?;

        let envelope: RpcResponse<T> = response
            .json()
            .await
            .with_context(|| format!("Invalid {method} response"))?;

        if let Some(err) = envelope.error {
            anyhow::bail!("{method} RPC error {}: {}", err.code, err.message);
        }
        envelope
            .result
            .with_context(|| format!("{method} response has no result"))
    }
}

#[async_trait]
impl ChainReader for SuiRpcReader {
    #[instrument(skip(self))]
    async fn object_fields(&self, object_id: &str) -> Result<Option<ObjectFields>> {
        let result: ObjectResponse = self
            .call("sui_getObject", json!([object_id, { "showContent": true }]))
            .await?;

        if let Some(err) = result.error {
            warn!(object_id, error = %err, "Object lookup returned an error");
            return Ok(None);
        }

        let fields = result
            .data
            .and_then(|d| d.content)
            .and_then(|c| c.fields);
        debug!(object_id, has_fields = fields.is_some(), "Object fetched");
        Ok(fields)
    }

    #[instrument(skip(self), fields(package = %query.package, module = %query.module))]
    async fn module_events(&self, query: &ModuleEventQuery) -> Result<Vec<ModuleEvent>> {
        let filter = json!({
            "MoveModule": { "package": query.package, "module": query.module }
        });

        let mut events = Vec::with_capacity(query.limit.min(MAX_EVENT_PAGE));
        let mut cursor = Value::Null;

        while events.len() < query.limit {
            let page_size = (query.limit - events.len()).min(MAX_EVENT_PAGE);
            let page: EventPage = self
                .call(
                    "suix_queryEvents",
                    json!([filter, cursor, page_size, query.order.is_descending()]),
                )
                .await?;

            let received = page.data.len();
            events.extend(page.data);

            match page.next_cursor {
                Some(next) if page.has_next_page && received > 0 => cursor = next,
                _ => break,
            }
        }

        events.truncate(query.limit);
        debug!(count = events.len(), "Module events fetched");
        Ok(events)
    }

    async fn is_healthy(&self) -> bool {
        self.object_fields(&self.system_state_id).await.is_ok()
    }
}
