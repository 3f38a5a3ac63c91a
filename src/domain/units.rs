//! SUI unit conversion.
//!
//! On-chain amounts are counted in MIST (10^9 MIST = 1 SUI). The backend
//! API already reports whole SUI as a decimal string. Both paths go through
//! `rust_decimal` so the division is exact before the USD multiplication
//! drops to `f64`.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde_json::Value;

/// Number of MIST in one SUI.
pub const MIST_PER_SUI: u64 = 1_000_000_000;

/// Convert a raw MIST counter into whole SUI.
pub fn mist_to_sui(mist: u128) -> Decimal {
    // Decimal holds 96 bits of mantissa; anything larger saturates.
    let raw = Decimal::from_u128(mist).unwrap_or(Decimal::MAX);
    raw / Decimal::from(MIST_PER_SUI)
}

/// Parse a human-readable SUI quantity such as `"1000000"` or `"12.5"`.
///
/// Returns `None` for empty, malformed or negative input.
pub fn parse_sui_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()?;
    (amount >= dec!(0)).then_some(amount)
}

/// Parse a MIST counter from its Move JSON encoding.
///
/// Sui renders `u64` fields as strings, but a plain JSON number is accepted
/// too.
pub fn parse_mist(value: &Value) -> Option<u128> {
    match value {
        Value::String(s) => s.trim().parse::<u128>().ok(),
        Value::Number(n) => n.as_u64().map(u128::from),
        _ => None,
    }
}

/// Parse a SUI quantity that may arrive as a string or a JSON number.
pub fn parse_sui_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => parse_sui_amount(s),
        Value::Number(n) => parse_sui_amount(&n.to_string()),
        _ => None,
    }
}

/// USD value of `quantity` SUI at `price` USD per SUI.
///
/// Never negative; a non-finite product collapses to zero.
pub fn usd_value(quantity: Decimal, price: f64) -> f64 {
    let value = quantity.to_f64().unwrap_or(0.0) * price;
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
