//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer requires
//! from the outside world. Adapters implement these traits and tests
//! substitute deterministic fakes.
//!
//! Port categories:
//! - `StakingApi`: Operator backend pool statistics
//! - `ChainReader`: Sui fullnode object reads and event queries
//! - `PriceOracle`: Spot SUI/USD price

pub mod chain_reader;
pub mod price_oracle;
pub mod staking_api;
