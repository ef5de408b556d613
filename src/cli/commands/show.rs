//! Show command: render the portfolio with live valuation

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::warn;

use crate::data_paths::DataPaths;
use crate::portfolio::store::HoldingsStore;
use crate::portfolio::{display, Portfolio};
use crate::prices::PriceCache;

use super::refresh::{fetch_snapshot, DEFAULT_PAGE, DEFAULT_PER_PAGE};

#[derive(Args, Clone)]
pub struct ShowArgs {
    /// Fetch fresh prices before rendering
    #[arg(long, short = 'r')]
    pub refresh: bool,
}

pub struct ShowCommand {
    args: ShowArgs,
}

impl ShowCommand {
    pub fn new(args: ShowArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, api_url: &str, data_paths: DataPaths) -> Result<()> {
        let holdings = HoldingsStore::new(&data_paths).load().await?;

        if holdings.is_empty() {
            display::print_empty_state();
            return Ok(());
        }

        let mut portfolio = Portfolio::new(holdings);

        // Prefer a fresh fetch when asked, but degrade to the cached
        // snapshot rather than failing the whole view
        let snapshot = if self.args.refresh {
            match fetch_snapshot(api_url, &data_paths, DEFAULT_PAGE, DEFAULT_PER_PAGE).await {
                Ok(snapshot) => Some(snapshot),
                Err(e) => {
                    warn!("Price refresh failed: {}", e);
                    println!(
                        "{}",
                        "⚠ Price refresh failed, showing cached prices".bright_yellow()
                    );
                    PriceCache::new(&data_paths).load().await?
                }
            }
        } else {
            PriceCache::new(&data_paths).load().await?
        };

        if let Some(snapshot) = snapshot {
            portfolio.set_prices(snapshot.price_map(), snapshot.fetched_at);
        }

        let (enriched, summary) = portfolio.valuation();
        display::print_portfolio(&enriched, &summary, portfolio.last_refreshed());
        Ok(())
    }
}
