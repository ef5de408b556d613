//! Portfolio tracking: holdings, valuation, persistence, display

pub mod display;
pub mod engine;
pub mod store;
pub mod types;

pub use types::{EnrichedHolding, Holding, PortfolioSummary, PriceMap};

use chrono::{DateTime, Utc};

use crate::errors::ValidationError;

/// Explicit state container for the holdings set and the live price
/// snapshot
///
/// All mutation goes through [`Portfolio::add`] and [`Portfolio::remove`]
/// (which delegate to the engine's validated operations); replacing the
/// price snapshot is a whole-value swap, so a valuation pass always sees
/// the most recently completed fetch.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    holdings: Vec<Holding>,
    prices: PriceMap,
    last_refreshed: Option<DateTime<Utc>>,
}

impl Portfolio {
    pub fn new(holdings: Vec<Holding>) -> Self {
        Self {
            holdings,
            prices: PriceMap::new(),
            last_refreshed: None,
        }
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed
    }

    /// Swap in a freshly fetched price snapshot
    pub fn set_prices(&mut self, prices: PriceMap, fetched_at: DateTime<Utc>) {
        self.prices = prices;
        self.last_refreshed = Some(fetched_at);
    }

    /// Add a holding; on validation failure the state is left unchanged
    pub fn add(&mut self, candidate: Holding) -> Result<(), ValidationError> {
        self.holdings = engine::add_holding(&self.holdings, candidate)?;
        Ok(())
    }

    /// Remove a holding by id; returns whether anything was removed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.holdings.len();
        self.holdings = engine::remove_holding(&self.holdings, id);
        self.holdings.len() != before
    }

    /// Run a full valuation pass over the current state
    pub fn valuation(&self) -> (Vec<EnrichedHolding>, PortfolioSummary) {
        let enriched = engine::enrich(&self.holdings, &self.prices);
        let summary = engine::summarize(&enriched);
        (enriched, summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn btc() -> Holding {
        Holding {
            id: "bitcoin".to_string(),
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            image: None,
            quantity: dec!(2),
            avg_buy_price: dec!(40000),
        }
    }

    #[test]
    fn test_mutation_goes_through_engine_validation() {
        let mut portfolio = Portfolio::default();
        portfolio.add(btc()).unwrap();

        // duplicate rejected, state unchanged
        assert!(portfolio.add(btc()).is_err());
        assert_eq!(portfolio.holdings().len(), 1);

        assert!(!portfolio.remove("nonexistent"));
        assert!(portfolio.remove("bitcoin"));
        assert!(portfolio.holdings().is_empty());
    }

    #[test]
    fn test_valuation_uses_latest_snapshot() {
        let mut portfolio = Portfolio::new(vec![btc()]);

        let (enriched, summary) = portfolio.valuation();
        assert_eq!(enriched[0].current_value, None);
        assert_eq!(summary.total_current, dec!(80000));

        portfolio.set_prices(
            PriceMap::from([("bitcoin".to_string(), dec!(45000))]),
            Utc::now(),
        );
        let (enriched, summary) = portfolio.valuation();
        assert_eq!(enriched[0].current_value, Some(dec!(90000)));
        assert_eq!(summary.total_pnl, dec!(10000));
        assert!(portfolio.last_refreshed().is_some());
    }
}
