//! Use Cases Layer - TVL Computation
//!
//! Combines the ports into the adapter's one business operation.
//!
//! Use cases:
//! - `strategies`: API, contract and event-scan TVL strategies
//! - `TvlAggregator`: priority fallback across strategies

pub mod aggregator;
pub mod strategies;

pub use aggregator::TvlAggregator;
