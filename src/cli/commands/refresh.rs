//! Refresh command: fetch live prices and update the local snapshot

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

use crate::data_paths::DataPaths;
use crate::prices::{CoinGeckoClient, CoinSnapshot, PriceCache};

/// One page of the top coins by market cap, matching the page the
/// original dashboard pulled on load
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 100;

#[derive(Args, Clone)]
pub struct RefreshArgs {
    /// Feed page to fetch
    #[arg(long, default_value_t = DEFAULT_PAGE)]
    pub page: u32,

    /// Coins per page
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u32,
}

pub struct RefreshCommand {
    args: RefreshArgs,
}

impl RefreshCommand {
    pub fn new(args: RefreshArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, api_url: &str, data_paths: DataPaths) -> Result<()> {
        let snapshot =
            fetch_snapshot(api_url, &data_paths, self.args.page, self.args.per_page).await?;

        println!(
            "{} {} coins at {}",
            "✅ Prices refreshed:".bright_green(),
            snapshot.coins.len().to_string().bright_white(),
            snapshot.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        Ok(())
    }
}

/// Fetch one page of coin markets and replace the cached snapshot
///
/// Shared by every command that needs fresh (or any) price data.
pub async fn fetch_snapshot(
    api_url: &str,
    data_paths: &DataPaths,
    page: u32,
    per_page: u32,
) -> Result<CoinSnapshot> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Fetching live prices...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let client = CoinGeckoClient::new(api_url)?;
    let result = client.fetch_markets(page, per_page).await;

    spinner.finish_and_clear();

    let coins = result?;
    let snapshot = CoinSnapshot::new(coins);
    PriceCache::new(data_paths).save(&snapshot).await?;
    Ok(snapshot)
}

/// Load the cached snapshot, fetching one first if the cache is empty
pub async fn snapshot_or_fetch(api_url: &str, data_paths: &DataPaths) -> Result<CoinSnapshot> {
    match PriceCache::new(data_paths).load().await? {
        Some(snapshot) => Ok(snapshot),
        None => {
            tracing::info!("No cached coin snapshot, fetching one");
            fetch_snapshot(api_url, data_paths, DEFAULT_PAGE, DEFAULT_PER_PAGE).await
        }
    }
}
