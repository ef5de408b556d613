//! Remove command: drop a holding by coin id

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::data_paths::DataPaths;
use crate::portfolio::store::HoldingsStore;
use crate::portfolio::Portfolio;

#[derive(Args, Clone)]
pub struct RemoveArgs {
    /// Coin id of the holding to remove, e.g. "bitcoin"
    pub coin_id: String,
}

pub struct RemoveCommand {
    args: RemoveArgs,
}

impl RemoveCommand {
    pub fn new(args: RemoveArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, _api_url: &str, data_paths: DataPaths) -> Result<()> {
        let store = HoldingsStore::new(&data_paths);
        let mut portfolio = Portfolio::new(store.load().await?);

        // Removing an unknown id is a no-op, not an error
        if portfolio.remove(&self.args.coin_id) {
            store.save(portfolio.holdings()).await?;
            println!(
                "{} {}",
                "🗑 Removed from portfolio:".bright_green(),
                self.args.coin_id.bright_white()
            );
        } else {
            println!(
                "No holding for '{}', nothing to remove",
                self.args.coin_id.bright_yellow()
            );
        }
        Ok(())
    }
}
