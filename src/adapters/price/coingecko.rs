//! CoinGecko Price Oracle - SUI/USD Spot Price
//!
//! Queries the `/simple/price` endpoint for SUI in USD. A response
//! without a `sui.usd` entry is read as a zero price.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::adapters::http;
use crate::config::EndpointConfig;
use crate::ports::price_oracle::PriceOracle;

/// `/simple/price` response restricted to the fields we read.
#[derive(Debug, Default, Deserialize)]
struct SimplePriceResponse {
    #[serde(default)]
    sui: Option<UsdQuote>,
}

#[derive(Debug, Default, Deserialize)]
struct UsdQuote {
    #[serde(default)]
    usd: Option<f64>,
}

impl SimplePriceResponse {
    fn sui_usd(&self) -> f64 {
        self.sui.as_ref().and_then(|q| q.usd).unwrap_or(0.0)
    }
}

/// CoinGecko-backed SUI price oracle.
pub struct CoinGeckoOracle {
    http: Client,
    url: String,
}

impl CoinGeckoOracle {
    /// Create an oracle reading from `url`.
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: http::build_client(timeout)?,
            url: url.to_string(),
        })
    }

    /// Create an oracle from endpoint configuration.
    pub fn from_config(config: &EndpointConfig) -> Result<Self> {
        Self::new(&config.price_url, config.timeout())
    }
}

#[async_trait]
impl PriceOracle for CoinGeckoOracle {
    #[instrument(skip(self))]
    async fn sui_usd_price(&self) -> Result<f64> {
        let body: SimplePriceResponse = http::get_json(&self.http, &self.url).await?;
        let price = body.sui_usd();
        debug!(price, "SUI price fetched");
        Ok(price)
    }
}
