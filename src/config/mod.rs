//! Configuration Module - TOML-based Adapter Configuration
//!
//! Holds every identifier and endpoint the TVL strategies consume.
//! Defaults reproduce the deployed Siamese pool so the adapter runs
//! without a config file; `config.toml` overrides any field.
//! Nothing here is read again after startup.

pub mod loader;

use std::time::Duration;

use serde::Deserialize;

/// Placeholder left in unconfigured deployments for the pool object id.
pub const POOL_ID_PLACEHOLDER: &str = "YOUR_POOL_ID_HERE";

/// Top-level adapter configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Adapter identity and logging.
  #[serde(default)]
  pub adapter: AdapterConfig,
  /// On-chain identifiers.
  #[serde(default)]
  pub pool: PoolConfig,
  /// Outbound HTTP endpoints.
  #[serde(default)]
  pub endpoints: EndpointConfig,
}

/// Adapter identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AdapterConfig {
  /// Human-readable adapter name.
  #[serde(default = "default_name")]
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

impl Default for AdapterConfig {
  fn default() -> Self {
    Self {
      name: default_name(),
      log_level: default_log_level(),
    }
  }
}

/// Sui object and package identifiers.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolConfig {
  /// Move package that defines the staking pool.
  #[serde(default = "default_package_id")]
  pub package_id: String,
  /// Shared staking pool object.
  #[serde(default = "default_staking_pool_id")]
  pub staking_pool_id: String,
  /// Sui system state object (0x5).
  #[serde(default = "default_system_state_id")]
  pub system_state_id: String,
  /// Module whose events record deposits and withdrawals.
  #[serde(default = "default_module")]
  pub module: String,
}

impl PoolConfig {
  /// Whether the pool object id is set to something real.
  pub fn has_pool_id(&self) -> bool {
    let id = self.staking_pool_id.trim();
    !id.is_empty() && id != POOL_ID_PLACEHOLDER
  }
}

impl Default for PoolConfig {
  fn default() -> Self {
    Self {
      package_id: default_package_id(),
      staking_pool_id: default_staking_pool_id(),
      system_state_id: default_system_state_id(),
      module: default_module(),
    }
  }
}

/// Outbound endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
  /// Operator backend base URL (`/pool/stats` is appended).
  #[serde(default = "default_api_base_url")]
  pub api_base_url: String,
  /// Full price oracle URL returning `{ "sui": { "usd": .. } }`.
  #[serde(default = "default_price_url")]
  pub price_url: String,
  /// Sui fullnode JSON-RPC URL.
  #[serde(default = "default_rpc_url")]
  pub rpc_url: String,
  /// Per-request HTTP timeout (milliseconds).
  #[serde(default = "default_timeout_ms")]
  pub timeout_ms: u64,
}

impl EndpointConfig {
  /// Per-request timeout as a `Duration`.
  pub const fn timeout(&self) -> Duration {
    Duration::from_millis(self.timeout_ms)
  }
}

impl Default for EndpointConfig {
  fn default() -> Self {
    Self {
      api_base_url: default_api_base_url(),
      price_url: default_price_url(),
      rpc_url: default_rpc_url(),
      timeout_ms: default_timeout_ms(),
    }
  }
}

// Default value functions for serde

fn default_name() -> String {
  "siamese-tvl".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_package_id() -> String {
  "0x7ca0d6c4ab8189b5bc47b3826bbb5f345999f990c9e41711934cddea6eb4648b".to_string()
}

fn default_staking_pool_id() -> String {
  "0x28580c0858af4b903bcd6190c30202c7f38e71cdb80089619627dc2d4e66aceb".to_string()
}

fn default_system_state_id() -> String {
  "0x0000000000000000000000000000000000000000000000000000000000000005".to_string()
}

fn default_module() -> String {
  "staking_pool".to_string()
}

fn default_api_base_url() -> String {
  // Operator backend not published yet
  "YOUR_API_BASE_URL".to_string()
}

fn default_price_url() -> String {
  "https://api.coingecko.com/api/v3/simple/price?ids=sui&vs_currencies=usd".to_string()
}

fn default_rpc_url() -> String {
  "https://fullnode.mainnet.sui.io:443".to_string()
}

fn default_timeout_ms() -> u64 {
  30_000
}
