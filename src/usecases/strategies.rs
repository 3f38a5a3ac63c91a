//! TVL Strategies - Independent Ways to Price the Pool
//!
//! Each strategy computes the pool's USD value from one data source
//! and reports either a value or the reason it could not:
//! - `ApiStrategy`: operator backend `totalStaked` (whole SUI)
//! - `ContractStrategy`: `total_staked` field of the pool object (MIST)
//! - `EventScanStrategy`: deposit/withdraw replay (not implemented)
//!
//! Strategies never panic and never retry. Price lookups are issued
//! fresh inside each strategy.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, error, instrument, warn};

use crate::config::PoolConfig;
use crate::domain::units::{mist_to_sui, parse_mist, parse_sui_value, usd_value};
use crate::ports::chain_reader::{ChainReader, EventOrder, ModuleEventQuery};
use crate::ports::price_oracle::PriceOracle;
use crate::ports::staking_api::StakingApi;

/// Number of most recent module events the event scan requests.
pub const EVENT_SCAN_LIMIT: usize = 1000;

/// Why a strategy produced no value.
#[derive(Debug, Error)]
pub enum StrategyError {
  /// Transport, HTTP status, RPC or decoding failure.
  #[error("fetch failed: {0:#}")]
  Fetch(#[from] anyhow::Error),

  /// The response lacks a field the strategy needs.
  #[error("missing field `{0}`")]
  MissingField(&'static str),

  /// A field is present but not a valid amount.
  #[error("invalid amount in `{field}`: {value}")]
  InvalidAmount {
    /// Field name.
    field: &'static str,
    /// Raw value as received.
    value: String,
  },

  /// A required identifier is absent or still a placeholder.
  #[error("not configured: {0}")]
  NotConfigured(&'static str),

  /// The strategy has no computation behind it yet.
  #[error("strategy not implemented: {0}")]
  Unimplemented(&'static str),
}

/// Result of one strategy run: USD value or failure reason.
pub type StrategyOutcome = Result<f64, StrategyError>;

/// A single way of computing pool TVL in USD.
#[async_trait]
pub trait TvlStrategy: Send + Sync {
  /// Short name used in logs.
  fn name(&self) -> &'static str;

  /// Compute the pool value in USD.
  async fn total_usd(&self) -> StrategyOutcome;
}

/// Fetch the SUI price and value `quantity` with it.
async fn price_quantity<P: PriceOracle>(
  oracle: &P,
  quantity: Decimal,
  strategy: &'static str,
) -> StrategyOutcome {
  let price = oracle.sui_usd_price().await?;
  if price <= 0.0 {
    // Indistinguishable from an empty pool in the final report.
    warn!(strategy, price, "Price oracle returned no usable SUI price");
  }
  Ok(usd_value(quantity, price))
}

/// TVL from the operator backend's pre-aggregated total.
pub struct ApiStrategy<A: StakingApi, P: PriceOracle> {
  api: Arc<A>,
  oracle: Arc<P>,
}

impl<A: StakingApi, P: PriceOracle> ApiStrategy<A, P> {
  /// Create the strategy over a backend and a price oracle.
  pub fn new(api: Arc<A>, oracle: Arc<P>) -> Self {
    Self { api, oracle }
  }
}

#[async_trait]
impl<A: StakingApi, P: PriceOracle> TvlStrategy for ApiStrategy<A, P> {
  fn name(&self) -> &'static str {
    "api"
  }

  #[instrument(skip(self))]
  async fn total_usd(&self) -> StrategyOutcome {
    let stats = self.api.pool_stats().await?;

    let raw = stats
      .total_staked
      .ok_or(StrategyError::MissingField("totalStaked"))?;
    let quantity = parse_sui_value(&raw).ok_or_else(|| StrategyError::InvalidAmount {
      field: "totalStaked",
      value: raw.to_string(),
    })?;
    debug!(total_staked_sui = %quantity, "Backend pool stats read");

    price_quantity(self.oracle.as_ref(), quantity, self.name()).await
  }
}

/// TVL from the staking pool object's `total_staked` counter.
pub struct ContractStrategy<C: ChainReader, P: PriceOracle> {
  chain: Arc<C>,
  oracle: Arc<P>,
  pool: Arc<PoolConfig>,
}

impl<C: ChainReader, P: PriceOracle> ContractStrategy<C, P> {
  /// Create the strategy over a chain reader and a price oracle.
  pub fn new(chain: Arc<C>, oracle: Arc<P>, pool: Arc<PoolConfig>) -> Self {
    Self {
      chain,
      oracle,
      pool,
    }
  }
}

#[async_trait]
impl<C: ChainReader, P: PriceOracle> TvlStrategy for ContractStrategy<C, P> {
  fn name(&self) -> &'static str {
    "contract"
  }

  #[instrument(skip(self), fields(pool = %self.pool.staking_pool_id))]
  async fn total_usd(&self) -> StrategyOutcome {
    if !self.pool.has_pool_id() {
      error!("Staking pool object id not configured");
      return Err(StrategyError::NotConfigured("pool.staking_pool_id"));
    }

    let Some(fields) = self.chain.object_fields(&self.pool.staking_pool_id).await? else {
      debug!("Pool object has no content fields");
      return Ok(0.0);
    };

    // An absent counter means nothing has been staked yet.
    let mist = match fields.get("total_staked") {
      None => 0,
      Some(raw) => parse_mist(raw).ok_or_else(|| StrategyError::InvalidAmount {
        field: "total_staked",
        value: raw.to_string(),
      })?,
    };
    let quantity = mist_to_sui(mist);
    debug!(total_staked_mist = mist, total_staked_sui = %quantity, "Pool object read");

    price_quantity(self.oracle.as_ref(), quantity, self.name()).await
  }
}

/// TVL from replaying the pool module's deposit and withdraw events.
///
/// Only the event query is wired up. Netting deposits against
/// withdrawals depends on event layouts that are not defined yet, so
/// every successful scan reports `Unimplemented`.
pub struct EventScanStrategy<C: ChainReader> {
  chain: Arc<C>,
  pool: Arc<PoolConfig>,
}

impl<C: ChainReader> EventScanStrategy<C> {
  /// Create the strategy over a chain reader.
  pub fn new(chain: Arc<C>, pool: Arc<PoolConfig>) -> Self {
    Self { chain, pool }
  }

  /// Query issued for the scan.
  pub fn query(&self) -> ModuleEventQuery {
    ModuleEventQuery {
      package: self.pool.package_id.clone(),
      module: self.pool.module.clone(),
      limit: EVENT_SCAN_LIMIT,
      order: EventOrder::Descending,
    }
  }
}

#[async_trait]
impl<C: ChainReader> TvlStrategy for EventScanStrategy<C> {
  fn name(&self) -> &'static str {
    "event_scan"
  }

  #[instrument(skip(self))]
  async fn total_usd(&self) -> StrategyOutcome {
    let events = self.chain.module_events(&self.query()).await?;
    debug!(events = events.len(), "Pool module events fetched");
    Err(StrategyError::Unimplemented("deposit/withdraw event replay"))
  }
}
