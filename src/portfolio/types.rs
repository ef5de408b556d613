//! Portfolio type definitions with strong typing

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Point-in-time snapshot of live USD prices, keyed by coin id
pub type PriceMap = HashMap<String, Decimal>;

/// A user's recorded position in one coin
///
/// Invariant (enforced by `engine::add_holding`): `quantity > 0` and
/// `avg_buy_price > 0`, with `id` unique across the holdings set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Stable coin identifier, e.g. "bitcoin"
    pub id: String,
    pub name: String,
    pub symbol: String,
    /// Optional icon URL, display metadata only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Amount of coin held
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    /// Average cost basis per unit in USD
    #[serde(with = "rust_decimal::serde::float")]
    pub avg_buy_price: Decimal,
}

/// A holding joined with live price data, recomputed on every valuation
/// pass and never persisted
///
/// `current_price` is `None` when the price feed has no entry for the
/// coin (feed not loaded yet, or unknown id). That is a valid state, not
/// an error, and it propagates: no price means no current value and no
/// P&L for the position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedHolding {
    pub holding: Holding,
    pub current_price: Option<Decimal>,
    pub invested_value: Decimal,
    pub current_value: Option<Decimal>,
    pub pnl: Option<Decimal>,
    pub pnl_pct: Option<Decimal>,
}

impl EnrichedHolding {
    /// Whether the position is flat or in profit (unknown P&L counts as flat)
    pub fn is_profit(&self) -> bool {
        self.pnl.unwrap_or(Decimal::ZERO) >= Decimal::ZERO
    }
}

/// Aggregate totals over all enriched holdings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub total_invested: Decimal,
    /// Live value; holdings without a known price contribute their
    /// invested value instead
    pub total_current: Decimal,
    pub total_pnl: Decimal,
    /// Percent return over cost basis; zero when nothing is invested
    pub total_pnl_pct: Decimal,
}

impl Default for PortfolioSummary {
    fn default() -> Self {
        Self {
            total_invested: Decimal::ZERO,
            total_current: Decimal::ZERO,
            total_pnl: Decimal::ZERO,
            total_pnl_pct: Decimal::ZERO,
        }
    }
}

impl PortfolioSummary {
    pub fn is_profit(&self) -> bool {
        self.total_pnl >= Decimal::ZERO
    }
}
