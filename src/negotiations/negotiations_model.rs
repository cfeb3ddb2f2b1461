//! Negotiation domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::identity::compute_negotiation_id;
use crate::constants::SOURCE_CEI;

/// Side of a trade as reported by the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }
}

/// A raw trade entry as returned by the data source for one account.
///
/// Ephemeral: raw entries only live long enough to be normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNegotiation {
    pub symbol: String,
    pub side: TradeSide,
    /// Trade timestamp as reported; time-of-day is discarded on normalization.
    pub trade_date: NaiveDateTime,
    pub quantity: Decimal,
    pub price: Decimal,
    /// Source tag claimed by the provider. Overridden during normalization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Raw trade history for a single account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRawHistory {
    pub account: String,
    pub entries: Vec<RawNegotiation>,
}

/// A normalized trade record with a deterministic identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Negotiation {
    pub id: String,
    pub symbol: String,
    pub side: TradeSide,
    pub trade_date: NaiveDate,
    pub quantity: Decimal,
    pub price: Decimal,
    pub source: String,
}

impl Negotiation {
    /// Normalizes a raw entry for the given account.
    ///
    /// The source tag is forced to [`SOURCE_CEI`] regardless of what the
    /// provider claimed, and the trade date keeps only its calendar day so
    /// identity and window comparisons work at day granularity.
    pub fn from_raw(raw: &RawNegotiation, account: &str) -> Self {
        let trade_date = raw.trade_date.date();
        let id = compute_negotiation_id(
            &raw.symbol,
            raw.side,
            trade_date,
            raw.price,
            SOURCE_CEI,
            account,
        );
        Self {
            id,
            symbol: raw.symbol.clone(),
            side: raw.side,
            trade_date,
            quantity: raw.quantity,
            price: raw.price,
            source: SOURCE_CEI.to_string(),
        }
    }
}

/// The per-account batch handed to the store after merging.
///
/// Transient: one per account per run, dropped after persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountNegotiations {
    pub account: String,
    pub negotiations: Vec<Negotiation>,
}
