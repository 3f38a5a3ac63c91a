//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! HTTP clients.
//!
//! Adapter categories:
//! - `api`: Operator backend pool statistics
//! - `chain`: Sui fullnode JSON-RPC reads
//! - `price`: CoinGecko SUI/USD price
//! - `http`: Shared reqwest client construction

pub mod api;
pub mod chain;
pub mod http;
pub mod price;
