//! TVL report types handed to the aggregation index.
//!
//! The index consumes a balances object keyed by asset symbol plus a small
//! block of static adapter metadata. Both serialize to the JSON shape the
//! index expects.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Assets this adapter can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Asset {
    /// Native Sui token.
    Sui,
}

impl Asset {
    /// Symbol used as the balances key.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Sui => "sui",
        }
    }
}

impl std::fmt::Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// USD value locked, keyed by asset symbol.
///
/// Always holds exactly one entry and the value is never negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TvlBalances(BTreeMap<String, f64>);

impl TvlBalances {
    /// Single-asset balances. Negative or non-finite values become zero.
    pub fn single(asset: Asset, usd: f64) -> Self {
        let usd = if usd.is_finite() && usd > 0.0 { usd } else { 0.0 };
        let mut map = BTreeMap::new();
        map.insert(asset.symbol().to_string(), usd);
        Self(map)
    }

    /// Balances reporting nothing locked.
    pub fn zero(asset: Asset) -> Self {
        Self::single(asset, 0.0)
    }

    /// USD value for `asset`, if it is the reported asset.
    pub fn get(&self, asset: Asset) -> Option<f64> {
        self.0.get(asset.symbol()).copied()
    }

    /// Iterate over `(symbol, usd)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of entries (always one).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the raw map.
    pub fn into_inner(self) -> BTreeMap<String, f64> {
        self.0
    }
}

/// Static metadata the aggregation index reads alongside the TVL call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterMetadata {
    /// Whether historical queries are supported.
    pub timetravel: bool,
    /// Whether the reported token misrepresents the locked asset.
    pub misrepresented_tokens: bool,
    /// Free-text methodology shown by the index.
    pub methodology: &'static str,
    /// Unix timestamp (seconds) when tracking starts.
    pub start: i64,
}

impl AdapterMetadata {
    /// Metadata for the Siamese staking pool.
    pub const fn siamese() -> Self {
        Self {
            timetravel: false,
            misrepresented_tokens: false,
            methodology: "Counts the total amount of SUI staked in the Siamese staking pool",
            start: 1_672_531_200,
        }
    }

    /// Tracking start as a UTC datetime.
    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.start, 0)
    }
}

impl Default for AdapterMetadata {
    fn default() -> Self {
        Self::siamese()
    }
}
