//! Live price feed: HTTP client, cached snapshot, coin lookup

pub mod cache;
pub mod client;
pub mod types;

pub use cache::PriceCache;
pub use client::{CoinGeckoClient, DEFAULT_API_URL};
pub use types::{CoinMarket, CoinSnapshot};
