//! Price Oracle Adapters
//!
//! Implements the `PriceOracle` port against CoinGecko.

pub mod coingecko;

pub use coingecko::CoinGeckoOracle;
