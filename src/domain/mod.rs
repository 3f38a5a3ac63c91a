//! Domain layer - TVL report types and unit conversion.
//!
//! Pure logic with no I/O (hexagonal architecture inner ring).

pub mod tvl;
pub mod units;

pub use tvl::{AdapterMetadata, Asset, TvlBalances};
