//! Deterministic identity computation for negotiation deduplication.
//!
//! Overlapping fetch windows report the same logical trade more than once,
//! so the identity must come out the same on every run. It is a fingerprint
//! of the trade's semantic content, excluding quantity: entries that differ
//! only in quantity are partial fills of the same order and are meant to
//! collide so the merge step can sum them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sha2::{Digest, Sha256};

use super::TradeSide;

/// Computes the stable identity of a negotiation.
///
/// The id is a SHA-256 hash over:
/// - symbol
/// - trade side
/// - trade date (calendar day only)
/// - unit price
/// - source tag
/// - account
///
/// Quantity is deliberately excluded.
pub fn compute_negotiation_id(
    symbol: &str,
    side: TradeSide,
    trade_date: NaiveDate,
    price: Decimal,
    source: &str,
    account: &str,
) -> String {
    let mut hasher = Sha256::new();

    hasher.update(symbol.as_bytes());
    hasher.update(b"|");
    hasher.update(side.as_str().as_bytes());
    hasher.update(b"|");

    let date_str = trade_date.format("%Y-%m-%d").to_string();
    hasher.update(date_str.as_bytes());
    hasher.update(b"|");

    hasher.update(normalize_decimal(price).as_bytes());
    hasher.update(b"|");

    hasher.update(source.as_bytes());
    hasher.update(b"|");

    hasher.update(account.as_bytes());

    hex::encode(hasher.finalize())
}

/// Normalize decimal to a trailing-zero-free string for consistent hashing.
fn normalize_decimal(d: Decimal) -> String {
    d.normalize().to_string()
}
