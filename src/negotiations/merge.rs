//! Identity-keyed merging of normalized negotiations.

use std::collections::HashMap;

use super::Negotiation;

/// Collapses records that share an identity, summing their quantities.
///
/// The first record seen for an id is kept as the template; only its
/// quantity changes on collision. Every field other than quantity is part
/// of the identity, so colliding records cannot disagree on them. Output
/// order is unspecified.
///
/// Merging an already-merged sequence is a no-op, which keeps overlapping
/// re-fetches safe to apply repeatedly.
pub fn merge_duplicates(negotiations: Vec<Negotiation>) -> Vec<Negotiation> {
    let mut by_id: HashMap<String, Negotiation> = HashMap::with_capacity(negotiations.len());

    for negotiation in negotiations {
        match by_id.get_mut(&negotiation.id) {
            Some(existing) => existing.quantity += negotiation.quantity,
            None => {
                by_id.insert(negotiation.id.clone(), negotiation);
            }
        }
    }

    by_id.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::negotiations::{RawNegotiation, TradeSide};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn raw(symbol: &str, side: TradeSide, day: u32, quantity: Decimal) -> RawNegotiation {
        RawNegotiation {
            symbol: symbol.to_string(),
            side,
            trade_date: NaiveDate::from_ymd_opt(2024, 1, day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            quantity,
            price: dec!(30.0),
            source: None,
        }
    }

    fn sorted_by_id(mut negotiations: Vec<Negotiation>) -> Vec<Negotiation> {
        negotiations.sort_by(|a, b| a.id.cmp(&b.id));
        negotiations
    }

    #[test]
    fn test_colliding_records_sum_quantities() {
        let records = vec![
            Negotiation::from_raw(&raw("PETR4", TradeSide::Buy, 10, dec!(100)), "12345-6"),
            Negotiation::from_raw(&raw("PETR4", TradeSide::Buy, 10, dec!(50)), "12345-6"),
        ];

        let merged = merge_duplicates(records);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].quantity, dec!(150));
        assert_eq!(merged[0].symbol, "PETR4");
        assert_eq!(merged[0].price, dec!(30.0));
    }

    #[test]
    fn test_distinct_records_pass_through() {
        let records = vec![
            Negotiation::from_raw(&raw("PETR4", TradeSide::Buy, 10, dec!(100)), "12345-6"),
            Negotiation::from_raw(&raw("VALE3", TradeSide::Buy, 10, dec!(100)), "12345-6"),
            Negotiation::from_raw(&raw("PETR4", TradeSide::Sell, 11, dec!(100)), "12345-6"),
        ];

        let merged = merge_duplicates(records.clone());

        assert_eq!(sorted_by_id(merged), sorted_by_id(records));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let records = vec![
            Negotiation::from_raw(&raw("PETR4", TradeSide::Buy, 10, dec!(100)), "12345-6"),
            Negotiation::from_raw(&raw("PETR4", TradeSide::Buy, 10, dec!(50)), "12345-6"),
            Negotiation::from_raw(&raw("VALE3", TradeSide::Sell, 12, dec!(7)), "12345-6"),
        ];

        let once = merge_duplicates(records);
        let twice = merge_duplicates(once.clone());

        assert_eq!(sorted_by_id(once), sorted_by_id(twice));
    }

    #[test]
    fn test_merge_preserves_total_quantity() {
        let records = vec![
            Negotiation::from_raw(&raw("PETR4", TradeSide::Buy, 10, dec!(100)), "12345-6"),
            Negotiation::from_raw(&raw("PETR4", TradeSide::Buy, 10, dec!(50)), "12345-6"),
            Negotiation::from_raw(&raw("PETR4", TradeSide::Buy, 10, dec!(25)), "12345-6"),
            Negotiation::from_raw(&raw("VALE3", TradeSide::Buy, 10, dec!(10)), "12345-6"),
        ];
        let input_total: Decimal = records.iter().map(|n| n.quantity).sum();

        let merged = merge_duplicates(records);
        let merged_total: Decimal = merged.iter().map(|n| n.quantity).sum();

        assert_eq!(merged.len(), 2);
        assert_eq!(input_total, merged_total);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(merge_duplicates(Vec::new()).is_empty());
    }
}
