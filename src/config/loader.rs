//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)?;

  info!(
    path = %path.display(),
    pool = %config.pool.staking_pool_id,
    api = %config.endpoints.api_base_url,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Load `path` if it exists, otherwise fall back to built-in defaults.
///
/// A file that exists but fails to parse or validate is still an error.
pub fn load_or_default(path: &str) -> Result<AppConfig> {
  if Path::new(path).exists() {
    load_config(path)
  } else {
    let config = AppConfig::default();
    validate_config(&config)?;
    Ok(config)
  }
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig =
    toml::from_str(content).with_context(|| "Failed to parse config.toml")?;

  validate_config(&config)?;

  Ok(config)
}

/// Validate all configuration parameters.
///
/// The pool object id is not checked here. A placeholder id only
/// disables the contract strategy at call time.
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.pool.package_id.trim().is_empty(),
    "pool.package_id must not be empty"
  );
  anyhow::ensure!(
    !config.pool.module.trim().is_empty(),
    "pool.module must not be empty"
  );
  anyhow::ensure!(
    !config.pool.system_state_id.trim().is_empty(),
    "pool.system_state_id must not be empty"
  );

  anyhow::ensure!(
    !config.endpoints.api_base_url.trim().is_empty(),
    "Backend API base URL must not be empty"
  );
  anyhow::ensure!(
    !config.endpoints.price_url.trim().is_empty(),
    "Price oracle URL must not be empty"
  );
  anyhow::ensure!(
    !config.endpoints.rpc_url.trim().is_empty(),
    "Sui RPC URL must not be empty"
  );
  anyhow::ensure!(
    config.endpoints.timeout_ms > 0,
    "endpoints.timeout_ms must be positive, got {}",
    config.endpoints.timeout_ms
  );

  Ok(())
}
