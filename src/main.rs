//! Siamese TVL Adapter — Entry Point
//!
//! One-shot runner: computes the staking pool TVL once and prints the
//! report the aggregation index consumes.
//!
//! Wiring sequence:
//! 1. Load config.toml (or built-in defaults) + validate
//! 2. Init tracing (JSON structured logging on stderr)
//! 3. Create backend, Sui RPC and CoinGecko clients
//! 4. Build the default strategy chain (API → contract)
//! 5. Run `tvl()` and print `{ metadata, tvl }` as JSON on stdout

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use siamese_tvl::adapters::api::BackendClient;
use siamese_tvl::adapters::chain::SuiRpcReader;
use siamese_tvl::adapters::price::CoinGeckoOracle;
use siamese_tvl::config;
use siamese_tvl::domain::tvl::{AdapterMetadata, TvlBalances};
use siamese_tvl::ports::chain_reader::ChainReader;
use siamese_tvl::usecases::aggregator::TvlAggregator;

/// Environment variable overriding the config file path.
const CONFIG_PATH_ENV: &str = "SIAMESE_TVL_CONFIG";

/// Printed report.
#[derive(Serialize)]
struct Report {
    metadata: AdapterMetadata,
    tvl: TvlBalances,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let config_path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config.toml".to_string());
    let config = config::loader::load_or_default(&config_path)
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.adapter.log_level)
                }),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let metadata = AdapterMetadata::siamese();
    info!(
        name = %config.adapter.name,
        version = env!("CARGO_PKG_VERSION"),
        pool = %config.pool.staking_pool_id,
        tracking_since = ?metadata.start_date(),
        "Starting Siamese TVL adapter"
    );

    // ── 3. Outbound clients ─────────────────────────────────
    let api = Arc::new(
        BackendClient::from_config(&config.endpoints)
            .context("Failed to create backend client")?,
    );
    let chain = Arc::new(
        SuiRpcReader::from_config(&config).context("Failed to create Sui RPC client")?,
    );
    let oracle = Arc::new(
        CoinGeckoOracle::from_config(&config.endpoints)
            .context("Failed to create price oracle client")?,
    );

    if !chain.is_healthy().await {
        warn!(rpc = %config.endpoints.rpc_url, "Sui fullnode not reachable, contract strategy will fail");
    }

    // ── 4. Strategy chain ───────────────────────────────────
    let aggregator = TvlAggregator::standard(&config, api, chain, oracle);
    info!(strategies = ?aggregator.strategy_names(), "Strategy chain ready");

    // ── 5. Compute and print ────────────────────────────────
    let report = Report {
        metadata,
        tvl: aggregator.tvl().await,
    };
    let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
    println!("{json}");

    Ok(())
}
