//! CoinGecko-compatible markets API client
//!
//! Fetches pages of coin market data (id, name, symbol, icon, current
//! USD price, market cap). The base URL is overridable so commands can
//! point at a sandbox or a test server.

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use super::types::CoinMarket;

/// Public CoinGecko v3 API
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

pub struct CoinGeckoClient {
    client: Client,
    base_url: Url,
}

impl CoinGeckoClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid price feed URL: {}", base_url))?;
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Fetch one page of coin markets ordered by market cap (descending)
    pub async fn fetch_markets(&self, page: u32, per_page: u32) -> Result<Vec<CoinMarket>> {
        let url = format!(
            "{}/coins/markets",
            self.base_url.as_str().trim_end_matches('/')
        );

        debug!("Fetching coin markets: {} page={} per_page={}", url, page, per_page);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("vs_currency", "usd".to_string()),
                ("order", "market_cap_desc".to_string()),
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
                ("sparkline", "false".to_string()),
            ])
            .send()
            .await
            .context("Failed to reach the price feed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Price feed returned {}: {}", status, body);
        }

        let coins: Vec<CoinMarket> = response
            .json()
            .await
            .context("Failed to parse price feed response")?;

        info!("Fetched {} coins from price feed", coins.len());
        Ok(coins)
    }
}
