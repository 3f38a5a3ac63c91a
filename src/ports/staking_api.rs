//! Staking API Port - Operator Backend Interface
//!
//! The pool operator runs a backend that publishes pre-aggregated
//! pool statistics. Only `totalStaked` is consumed; it is already
//! expressed in whole SUI.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Response body of `GET {base}/pool/stats`.
///
/// `totalStaked` is usually a decimal string but is kept as raw JSON
/// so a numeric encoding is tolerated too.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PoolStats {
  /// Total staked amount in whole SUI.
  #[serde(rename = "totalStaked", default)]
  pub total_staked: Option<Value>,
}

/// Trait for the operator backend.
#[async_trait]
pub trait StakingApi: Send + Sync + 'static {
  /// Fetch the current pool statistics.
  async fn pool_stats(&self) -> anyhow::Result<PoolStats>;
}
