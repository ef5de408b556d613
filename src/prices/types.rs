//! Price feed type definitions
//!
//! Rows from a CoinGecko-compatible `/coins/markets` endpoint, plus the
//! locally cached snapshot the rest of the app reads prices from.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::PriceMap;

/// One coin row from the markets endpoint
///
/// The feed serves JSON floats; decimals are converted at the serde
/// boundary so all downstream arithmetic stays exact. Any field the feed
/// omits (or nulls, as it does for delisted coins) is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinMarket {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub current_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub market_cap: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price_change_percentage_24h: Option<Decimal>,
}

/// The last completed fetch, persisted between runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinSnapshot {
    pub fetched_at: DateTime<Utc>,
    pub coins: Vec<CoinMarket>,
}

impl CoinSnapshot {
    pub fn new(coins: Vec<CoinMarket>) -> Self {
        Self {
            fetched_at: Utc::now(),
            coins,
        }
    }

    /// Build the id → current price map for the valuation engine
    ///
    /// Coins without a price are left out entirely: the engine models
    /// a missing entry as "unknown", never as zero.
    pub fn price_map(&self) -> PriceMap {
        self.coins
            .iter()
            .filter_map(|c| c.current_price.map(|p| (c.id.clone(), p)))
            .collect()
    }

    /// Look up a coin by exact id
    pub fn find(&self, id: &str) -> Option<&CoinMarket> {
        self.coins.iter().find(|c| c.id == id)
    }

    /// Case-insensitive substring search over name and symbol
    pub fn search(&self, query: &str, limit: usize) -> Vec<&CoinMarket> {
        let query = query.to_lowercase();
        self.coins
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&query) || c.symbol.to_lowercase().contains(&query)
            })
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn coin(id: &str, symbol: &str, name: &str, price: Option<Decimal>) -> CoinMarket {
        CoinMarket {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            image: None,
            current_price: price,
            market_cap: None,
            price_change_percentage_24h: None,
        }
    }

    fn snapshot() -> CoinSnapshot {
        CoinSnapshot::new(vec![
            coin("bitcoin", "btc", "Bitcoin", Some(dec!(45000))),
            coin("ethereum", "eth", "Ethereum", Some(dec!(2400))),
            coin("bitcoin-cash", "bch", "Bitcoin Cash", None),
        ])
    }

    #[test]
    fn test_price_map_skips_unpriced_coins() {
        let map = snapshot().price_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("bitcoin"), Some(&dec!(45000)));
        assert!(!map.contains_key("bitcoin-cash"));
    }

    #[test]
    fn test_search_matches_name_and_symbol() {
        let snap = snapshot();
        let by_name: Vec<_> = snap.search("bitcoin", 8).iter().map(|c| &c.id).collect();
        assert_eq!(by_name.len(), 2);

        let by_symbol = snap.search("ETH", 8);
        assert_eq!(by_symbol.len(), 1);
        assert_eq!(by_symbol[0].id, "ethereum");
    }

    #[test]
    fn test_search_respects_limit() {
        let snap = snapshot();
        assert_eq!(snap.search("b", 1).len(), 1);
    }

    #[test]
    fn test_deserialize_feed_row_with_nulls() {
        let json = r#"{
            "id": "terra-luna",
            "symbol": "luna",
            "name": "Terra",
            "image": null,
            "current_price": null,
            "market_cap": null,
            "price_change_percentage_24h": null
        }"#;
        let coin: CoinMarket = serde_json::from_str(json).unwrap();
        assert_eq!(coin.current_price, None);
        assert_eq!(coin.image, None);
    }
}
