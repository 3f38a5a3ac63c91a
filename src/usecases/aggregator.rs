//! TVL Aggregator - Priority Fallback Over Strategies
//!
//! Runs strategies in a fixed order and reports the first strictly
//! positive value. Failures and zero values fall through to the next
//! strategy; when none succeeds the report is zero. `tvl()` cannot
//! fail.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::config::AppConfig;
use crate::domain::tvl::{Asset, TvlBalances};
use crate::ports::chain_reader::ChainReader;
use crate::ports::price_oracle::PriceOracle;
use crate::ports::staking_api::StakingApi;

use super::strategies::{ApiStrategy, ContractStrategy, TvlStrategy};

/// Orchestrates TVL strategies in priority order.
pub struct TvlAggregator {
  /// Strategies, highest priority first.
  strategies: Vec<Arc<dyn TvlStrategy>>,
  /// Asset reported in the balances.
  asset: Asset,
}

impl TvlAggregator {
  /// Create an aggregator over an explicit strategy order.
  pub fn new(strategies: Vec<Arc<dyn TvlStrategy>>) -> Self {
    Self {
      strategies,
      asset: Asset::Sui,
    }
  }

  /// Default chain: backend API first, then the pool object.
  ///
  /// The event scan is left out until its replay exists.
  pub fn standard<A, C, P>(config: &AppConfig, api: Arc<A>, chain: Arc<C>, oracle: Arc<P>) -> Self
  where
    A: StakingApi,
    C: ChainReader,
    P: PriceOracle,
  {
    let pool = Arc::new(config.pool.clone());
    Self::new(vec![
      Arc::new(ApiStrategy::new(api, Arc::clone(&oracle))),
      Arc::new(ContractStrategy::new(chain, oracle, pool)),
    ])
  }

  /// Names of the configured strategies, in order.
  pub fn strategy_names(&self) -> Vec<&'static str> {
    self.strategies.iter().map(|s| s.name()).collect()
  }

  /// Compute TVL. Each strategy runs at most once.
  #[instrument(skip(self))]
  pub async fn tvl(&self) -> TvlBalances {
    for strategy in &self.strategies {
      match strategy.total_usd().await {
        Ok(usd) if usd > 0.0 => {
          info!(strategy = strategy.name(), tvl_usd = %format!("{usd:.2}"), "TVL resolved");
          return TvlBalances::single(self.asset, usd);
        }
        Ok(usd) => {
          warn!(strategy = strategy.name(), tvl_usd = usd, "Strategy reported no value, falling back");
        }
        Err(e) => {
          warn!(strategy = strategy.name(), error = %e, "Strategy failed, falling back");
        }
      }
    }

    info!(tvl_usd = "0.00", "No strategy reported a positive TVL");
    TvlBalances::zero(self.asset)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use std::sync::atomic::{AtomicUsize, Ordering};

  use async_trait::async_trait;

  use crate::usecases::strategies::{StrategyError, StrategyOutcome};

  /// Strategy returning a canned outcome and counting calls.
  struct Fixed {
    name: &'static str,
    outcome: fn() -> StrategyOutcome,
    calls: AtomicUsize,
  }

  impl Fixed {
    fn new(name: &'static str, outcome: fn() -> StrategyOutcome) -> Arc<Self> {
      Arc::new(Self {
        name,
        outcome,
        calls: AtomicUsize::new(0),
      })
    }
  }

  #[async_trait]
  impl TvlStrategy for Fixed {
    fn name(&self) -> &'static str {
      self.name
    }

    async fn total_usd(&self) -> StrategyOutcome {
      self.calls.fetch_add(1, Ordering::SeqCst);
      (self.outcome)()
    }
  }

  #[tokio::test]
  async fn test_first_positive_wins_and_stops() {
    let first = Fixed::new("first", || Ok(42.0));
    let second = Fixed::new("second", || Ok(99.0));
    let agg = TvlAggregator::new(vec![first.clone(), second.clone()]);

    assert_eq!(agg.tvl().await.get(Asset::Sui), Some(42.0));
    assert_eq!(first.calls.load(Ordering::SeqCst), 1);
    assert_eq!(second.calls.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn test_error_and_zero_fall_through() {
    let failing = Fixed::new("failing", || Err(StrategyError::MissingField("totalStaked")));
    let empty = Fixed::new("empty", || Ok(0.0));
    let last = Fixed::new("last", || Ok(7.5));
    let agg = TvlAggregator::new(vec![failing.clone(), empty.clone(), last.clone()]);

    assert_eq!(agg.tvl().await.get(Asset::Sui), Some(7.5));
    assert_eq!(failing.calls.load(Ordering::SeqCst), 1);
    assert_eq!(empty.calls.load(Ordering::SeqCst), 1);
  }

  #[tokio::test]
  async fn test_negative_value_is_not_accepted() {
    let negative = Fixed::new("negative", || Ok(-3.0));
    let agg = TvlAggregator::new(vec![negative]);
    assert_eq!(agg.tvl().await, TvlBalances::zero(Asset::Sui));
  }

  #[tokio::test]
  async fn test_no_strategies_reports_zero() {
    let agg = TvlAggregator::new(Vec::new());
    let balances = agg.tvl().await;
    assert_eq!(balances.len(), 1);
    assert_eq!(balances.get(Asset::Sui), Some(0.0));
  }
}
