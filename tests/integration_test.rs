//! Integration Tests - Strategy Chain End to End
//!
//! Drives the default aggregator through mocked ports.
//! Uses mockall for trait mocking and tokio::test for async tests.

use std::sync::Arc;

use mockall::mock;
use serde_json::json;

use siamese_tvl::config::{AppConfig, POOL_ID_PLACEHOLDER};
use siamese_tvl::domain::tvl::Asset;
use siamese_tvl::ports::chain_reader::{ModuleEvent, ModuleEventQuery, ObjectFields};
use siamese_tvl::ports::staking_api::PoolStats;
use siamese_tvl::usecases::aggregator::TvlAggregator;

// ---- Mock Definitions ----

mock! {
    pub Api {}

    #[async_trait::async_trait]
    impl siamese_tvl::ports::staking_api::StakingApi for Api {
        async fn pool_stats(&self) -> anyhow::Result<PoolStats>;
    }
}

mock! {
    pub Chain {}

    #[async_trait::async_trait]
    impl siamese_tvl::ports::chain_reader::ChainReader for Chain {
        async fn object_fields(&self, object_id: &str) -> anyhow::Result<Option<ObjectFields>>;
        async fn module_events(&self, query: &ModuleEventQuery) -> anyhow::Result<Vec<ModuleEvent>>;
        async fn is_healthy(&self) -> bool;
    }
}

mock! {
    pub Oracle {}

    #[async_trait::async_trait]
    impl siamese_tvl::ports::price_oracle::PriceOracle for Oracle {
        async fn sui_usd_price(&self) -> anyhow::Result<f64>;
    }
}

// ---- Helpers ----

fn api_total(total: &'static str) -> MockApi {
    let mut api = MockApi::new();
    api.expect_pool_stats().times(1).returning(move || {
        Ok(PoolStats {
            total_staked: Some(json!(total)),
        })
    });
    api
}

fn api_down() -> MockApi {
    let mut api = MockApi::new();
    api.expect_pool_stats()
        .times(1)
        .returning(|| Err(anyhow::anyhow!("error sending request: connection refused")));
    api
}

fn chain_total(mist: &'static str) -> MockChain {
    let mut chain = MockChain::new();
    chain.expect_object_fields().times(1).returning(move |_| {
        Ok(json!({ "id": { "id": "0x28" }, "total_staked": mist })
            .as_object()
            .cloned())
    });
    chain
}

fn oracle_price(price: f64) -> MockOracle {
    let mut oracle = MockOracle::new();
    oracle.expect_sui_usd_price().returning(move || Ok(price));
    oracle
}

fn aggregator(api: MockApi, chain: MockChain, oracle: MockOracle) -> TvlAggregator {
    TvlAggregator::standard(
        &AppConfig::default(),
        Arc::new(api),
        Arc::new(chain),
        Arc::new(oracle),
    )
}

// ---- Integration Tests ----

#[tokio::test]
async fn test_api_total_priced_in_usd() {
    let mut chain = MockChain::new();
    chain.expect_object_fields().never();

    let agg = aggregator(api_total("1000000"), chain, oracle_price(1.5));
    let tvl = agg.tvl().await;

    assert_eq!(tvl.len(), 1);
    assert!((tvl.get(Asset::Sui).unwrap() - 1_500_000.0).abs() < 1e-6);
    assert_eq!(serde_json::to_value(&tvl).unwrap(), json!({ "sui": 1_500_000.0 }));
}

#[tokio::test]
async fn test_api_failure_falls_back_to_contract() {
    let agg = aggregator(api_down(), chain_total("5000000000"), oracle_price(2.0));
    let tvl = agg.tvl().await;

    assert!((tvl.get(Asset::Sui).unwrap() - 10.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_api_zero_falls_back_to_contract() {
    let agg = aggregator(api_total("0"), chain_total("2500000000"), oracle_price(4.0));
    let tvl = agg.tvl().await;

    assert!((tvl.get(Asset::Sui).unwrap() - 10.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_api_missing_field_falls_back_to_contract() {
    let mut api = MockApi::new();
    api.expect_pool_stats().returning(|| Ok(PoolStats::default()));

    let agg = aggregator(api, chain_total("1000000000"), oracle_price(3.0));
    assert!((agg.tvl().await.get(Asset::Sui).unwrap() - 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_both_strategies_zero_reports_zero() {
    let agg = aggregator(api_total("0"), chain_total("0"), oracle_price(2.0));
    let tvl = agg.tvl().await;

    assert_eq!(serde_json::to_value(&tvl).unwrap(), json!({ "sui": 0.0 }));
}

#[tokio::test]
async fn test_everything_down_reports_zero() {
    let mut chain = MockChain::new();
    chain
        .expect_object_fields()
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("sui_getObject request failed")));
    let mut oracle = MockOracle::new();
    oracle.expect_sui_usd_price().never();

    let agg = aggregator(api_down(), chain, oracle);
    assert_eq!(agg.tvl().await.get(Asset::Sui), Some(0.0));
}

#[tokio::test]
async fn test_price_outage_degrades_to_zero() {
    let mut oracle = MockOracle::new();
    oracle
        .expect_sui_usd_price()
        .times(2)
        .returning(|| Err(anyhow::anyhow!("HTTP error 429 Too Many Requests")));

    let agg = aggregator(api_total("1000000"), chain_total("5000000000"), oracle);
    assert_eq!(agg.tvl().await.get(Asset::Sui), Some(0.0));
}

#[tokio::test]
async fn test_placeholder_pool_id_never_hits_rpc() {
    let mut chain = MockChain::new();
    chain.expect_object_fields().never();

    let mut config = AppConfig::default();
    config.pool.staking_pool_id = POOL_ID_PLACEHOLDER.to_string();

    let agg = TvlAggregator::standard(
        &config,
        Arc::new(api_down()),
        Arc::new(chain),
        Arc::new(oracle_price(2.0)),
    );
    assert_eq!(agg.tvl().await.get(Asset::Sui), Some(0.0));
}

#[tokio::test]
async fn test_price_fetched_per_strategy() {
    let mut oracle = MockOracle::new();
    oracle.expect_sui_usd_price().times(2).returning(|| Ok(0.0));

    // Zero price makes the API value zero, so the contract strategy
    // runs and asks the oracle again.
    let agg = aggregator(api_total("100"), chain_total("1000000000"), oracle);
    assert_eq!(agg.tvl().await.get(Asset::Sui), Some(0.0));
}

#[tokio::test]
async fn test_standard_chain_order() {
    let agg = aggregator(MockApi::new(), MockChain::new(), MockOracle::new());
    assert_eq!(agg.strategy_names(), vec!["api", "contract"]);
}
