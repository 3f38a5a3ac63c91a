//! Chain Reader Port - Sui Fullnode Read Interface
//!
//! Read-only access to the Sui blockchain: object content lookups and
//! Move module event queries. No signing, no transactions.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Content fields of a Move object, as rendered by the fullnode.
pub type ObjectFields = Map<String, Value>;

/// Sort order for event queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOrder {
  /// Oldest first.
  Ascending,
  /// Newest first.
  Descending,
}

impl EventOrder {
  /// Whether the fullnode should return events newest first.
  pub const fn is_descending(self) -> bool {
    matches!(self, Self::Descending)
  }
}

/// Event query scoped to one Move module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEventQuery {
  /// Package that defines the module.
  pub package: String,
  /// Module name inside the package.
  pub module: String,
  /// Maximum number of events to return.
  pub limit: usize,
  /// Result ordering.
  pub order: EventOrder,
}

/// A single emitted Move event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleEvent {
  /// Fully-qualified Move event type.
  #[serde(rename = "type")]
  pub event_type: String,
  /// Event payload as JSON.
  #[serde(default)]
  pub parsed_json: Value,
  /// Emission time in Unix milliseconds (string-encoded by the node).
  #[serde(default)]
  pub timestamp_ms: Option<String>,
}

/// Trait for Sui read access.
#[async_trait]
pub trait ChainReader: Send + Sync + 'static {
  /// Fetch the content fields of an object.
  ///
  /// Returns `Ok(None)` when the object exists but carries no Move
  /// content (e.g. a package) or when the node reports it missing.
  async fn object_fields(&self, object_id: &str) -> anyhow::Result<Option<ObjectFields>>;

  /// Query events emitted by a Move module.
  async fn module_events(&self, query: &ModuleEventQuery) -> anyhow::Result<Vec<ModuleEvent>>;

  /// Check if the fullnode answers read requests.
  async fn is_healthy(&self) -> bool;
}
