//! Price Oracle Port - Spot USD Pricing
//!
//! Supplies the USD price of one SUI. A missing quote is reported
//! as `0.0`, not as an error; callers end up reporting zero value.

use async_trait::async_trait;

/// Trait for spot price providers.
#[async_trait]
pub trait PriceOracle: Send + Sync + 'static {
  /// Current USD price of one SUI, or `0.0` when the oracle has none.
  async fn sui_usd_price(&self) -> anyhow::Result<f64>;
}
