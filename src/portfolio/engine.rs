//! Portfolio valuation engine
//!
//! Pure functions over in-memory data: join holdings with a price
//! snapshot, reduce to aggregate totals, and apply validated add/remove
//! edits. No IO, no hidden state; callers re-invoke `enrich`/`summarize`
//! whenever holdings or prices change.

use rust_decimal::Decimal;

use crate::errors::ValidationError;
use crate::portfolio::types::{EnrichedHolding, Holding, PortfolioSummary, PriceMap};

/// Parse a user-supplied decimal amount that must be strictly positive
pub fn parse_amount(field: &'static str, text: &str) -> Result<Decimal, ValidationError> {
    let value: Decimal = text.trim().parse().map_err(|_| ValidationError::NotANumber {
        field,
        value: text.to_string(),
    })?;
    if value <= Decimal::ZERO {
        return Err(ValidationError::NotPositive { field });
    }
    Ok(value)
}

/// Join each holding with the price snapshot
///
/// Output preserves input order, one entry per holding. A coin id absent
/// from `prices` yields `None` for the live-derived fields; invested
/// value is always computable from the holding itself.
pub fn enrich(holdings: &[Holding], prices: &PriceMap) -> Vec<EnrichedHolding> {
    holdings
        .iter()
        .map(|h| {
            let current_price = prices.get(&h.id).copied();
            let invested_value = h.quantity * h.avg_buy_price;
            let current_value = current_price.map(|price| price * h.quantity);
            let pnl = current_value.map(|value| value - invested_value);
            let pnl_pct = pnl.and_then(|pnl| {
                if invested_value.is_zero() {
                    None
                } else {
                    Some(pnl / invested_value * Decimal::ONE_HUNDRED)
                }
            });
            EnrichedHolding {
                holding: h.clone(),
                current_price,
                invested_value,
                current_value,
                pnl,
                pnl_pct,
            }
        })
        .collect()
}

/// Reduce enriched holdings to portfolio totals
///
/// Holdings without a live price contribute their invested value to
/// `total_current`, so an unpriced position reads as flat rather than as
/// a total loss.
pub fn summarize(enriched: &[EnrichedHolding]) -> PortfolioSummary {
    let total_invested: Decimal = enriched.iter().map(|e| e.invested_value).sum();
    let total_current: Decimal = enriched
        .iter()
        .map(|e| e.current_value.unwrap_or(e.invested_value))
        .sum();
    let total_pnl = total_current - total_invested;
    let total_pnl_pct = if total_invested > Decimal::ZERO {
        total_pnl / total_invested * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    PortfolioSummary {
        total_invested,
        total_current,
        total_pnl,
        total_pnl_pct,
    }
}

/// Append a validated holding to the set
///
/// Rejects non-positive quantity or buy price, and rejects an id that is
/// already present: one holding per coin, remove-then-add to change a
/// position. The existing sequence is never modified; on success a new
/// sequence with the candidate appended is returned.
pub fn add_holding(
    existing: &[Holding],
    candidate: Holding,
) -> Result<Vec<Holding>, ValidationError> {
    if candidate.quantity <= Decimal::ZERO {
        return Err(ValidationError::NotPositive { field: "quantity" });
    }
    if candidate.avg_buy_price <= Decimal::ZERO {
        return Err(ValidationError::NotPositive { field: "buy price" });
    }
    if existing.iter().any(|h| h.id == candidate.id) {
        return Err(ValidationError::DuplicateHolding {
            id: candidate.id.clone(),
        });
    }
    let mut next = existing.to_vec();
    next.push(candidate);
    Ok(next)
}

/// Remove the holding with the given id, if present
///
/// Removing an unknown id is a no-op, not an error.
pub fn remove_holding(existing: &[Holding], id: &str) -> Vec<Holding> {
    existing.iter().filter(|h| h.id != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn holding(id: &str, quantity: Decimal, avg_buy_price: Decimal) -> Holding {
        Holding {
            id: id.to_string(),
            name: id.to_string(),
            symbol: id[..3.min(id.len())].to_uppercase(),
            image: None,
            quantity,
            avg_buy_price,
        }
    }

    #[test]
    fn test_enrich_without_prices_leaves_live_fields_absent() {
        let holdings = vec![holding("bitcoin", dec!(2), dec!(40000))];
        let enriched = enrich(&holdings, &PriceMap::new());

        assert_eq!(enriched.len(), 1);
        assert_eq!(enriched[0].current_price, None);
        assert_eq!(enriched[0].current_value, None);
        assert_eq!(enriched[0].pnl, None);
        assert_eq!(enriched[0].pnl_pct, None);
        assert_eq!(enriched[0].invested_value, dec!(80000));
    }

    #[test]
    fn test_enrich_with_price_computes_pnl() {
        let holdings = vec![holding("bitcoin", dec!(2), dec!(40000))];
        let prices = PriceMap::from([("bitcoin".to_string(), dec!(45000))]);
        let enriched = enrich(&holdings, &prices);

        assert_eq!(enriched[0].current_price, Some(dec!(45000)));
        assert_eq!(enriched[0].invested_value, dec!(80000));
        assert_eq!(enriched[0].current_value, Some(dec!(90000)));
        assert_eq!(enriched[0].pnl, Some(dec!(10000)));
        assert_eq!(enriched[0].pnl_pct, Some(dec!(12.5)));
    }

    #[test]
    fn test_enrich_accepts_zero_price() {
        let holdings = vec![holding("luna", dec!(100), dec!(80))];
        let prices = PriceMap::from([("luna".to_string(), dec!(0))]);
        let enriched = enrich(&holdings, &prices);

        assert_eq!(enriched[0].current_value, Some(dec!(0)));
        assert_eq!(enriched[0].pnl, Some(dec!(-8000)));
        assert_eq!(enriched[0].pnl_pct, Some(dec!(-100)));
    }

    #[test]
    fn test_enrich_preserves_input_order() {
        let holdings = vec![
            holding("ethereum", dec!(1), dec!(2000)),
            holding("bitcoin", dec!(1), dec!(40000)),
        ];
        let enriched = enrich(&holdings, &PriceMap::new());
        assert_eq!(enriched[0].holding.id, "ethereum");
        assert_eq!(enriched[1].holding.id, "bitcoin");
    }

    #[test]
    fn test_enrich_is_pure() {
        let holdings = vec![holding("bitcoin", dec!(2), dec!(40000))];
        let prices = PriceMap::from([("bitcoin".to_string(), dec!(45000))]);
        assert_eq!(enrich(&holdings, &prices), enrich(&holdings, &prices));
    }

    #[test]
    fn test_summarize_empty_is_all_zeros() {
        let summary = summarize(&[]);
        assert_eq!(summary, PortfolioSummary::default());
    }

    #[test]
    fn test_summarize_matches_worked_example() {
        let holdings = vec![holding("btc", dec!(2), dec!(40000))];
        let prices = PriceMap::from([("btc".to_string(), dec!(45000))]);
        let summary = summarize(&enrich(&holdings, &prices));

        assert_eq!(summary.total_invested, dec!(80000));
        assert_eq!(summary.total_current, dec!(90000));
        assert_eq!(summary.total_pnl, dec!(10000));
        assert_eq!(summary.total_pnl_pct, dec!(12.5));
    }

    #[test]
    fn test_summarize_falls_back_to_invested_for_unpriced_holdings() {
        let holdings = vec![holding("eth", dec!(1), dec!(2000))];
        let summary = summarize(&enrich(&holdings, &PriceMap::new()));

        assert_eq!(summary.total_invested, dec!(2000));
        assert_eq!(summary.total_current, dec!(2000));
        assert_eq!(summary.total_pnl, dec!(0));
        assert_eq!(summary.total_pnl_pct, dec!(0));
    }

    #[test]
    fn test_summarize_mixed_priced_and_unpriced() {
        let holdings = vec![
            holding("btc", dec!(1), dec!(40000)),
            holding("eth", dec!(2), dec!(2000)),
        ];
        let prices = PriceMap::from([("btc".to_string(), dec!(50000))]);
        let summary = summarize(&enrich(&holdings, &prices));

        // btc contributes live value, eth falls back to cost basis
        assert_eq!(summary.total_invested, dec!(44000));
        assert_eq!(summary.total_current, dec!(54000));
        assert_eq!(summary.total_pnl, dec!(10000));
    }

    #[test]
    fn test_add_holding_rejects_zero_quantity() {
        let existing = vec![holding("btc", dec!(1), dec!(40000))];
        let err = add_holding(&existing, holding("eth", dec!(0), dec!(2000))).unwrap_err();
        assert_eq!(err, ValidationError::NotPositive { field: "quantity" });
        // existing sequence untouched
        assert_eq!(existing.len(), 1);
    }

    #[test]
    fn test_add_holding_rejects_negative_price() {
        let err = add_holding(&[], holding("eth", dec!(1), dec!(-5))).unwrap_err();
        assert_eq!(err, ValidationError::NotPositive { field: "buy price" });
    }

    #[test]
    fn test_add_holding_rejects_duplicate_id() {
        let existing = vec![holding("btc", dec!(1), dec!(40000))];
        let err = add_holding(&existing, holding("btc", dec!(2), dec!(30000))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateHolding {
                id: "btc".to_string()
            }
        );
    }

    #[test]
    fn test_add_holding_appends_in_order() {
        let existing = vec![holding("btc", dec!(1), dec!(40000))];
        let next = add_holding(&existing, holding("eth", dec!(1), dec!(2000))).unwrap();
        assert_eq!(next.len(), 2);
        assert_eq!(next[0].id, "btc");
        assert_eq!(next[1].id, "eth");
    }

    #[test]
    fn test_remove_holding_unknown_id_is_noop() {
        let existing = vec![holding("btc", dec!(1), dec!(40000))];
        let next = remove_holding(&existing, "nonexistent");
        assert_eq!(next, existing);
    }

    #[test]
    fn test_remove_holding_drops_the_match() {
        let existing = vec![
            holding("btc", dec!(1), dec!(40000)),
            holding("eth", dec!(1), dec!(2000)),
        ];
        let next = remove_holding(&existing, "btc");
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, "eth");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("quantity", "0.5").unwrap(), dec!(0.5));
        assert_eq!(parse_amount("quantity", " 2 ").unwrap(), dec!(2));
        assert!(matches!(
            parse_amount("quantity", "abc"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_amount("quantity", "0"),
            Err(ValidationError::NotPositive { .. })
        ));
        assert!(matches!(
            parse_amount("buy price", "-5"),
            Err(ValidationError::NotPositive { field: "buy price" })
        ));
    }
}
