//! Search command: find coins by name or symbol

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::data_paths::DataPaths;
use crate::portfolio::display::format_price;

use super::refresh::snapshot_or_fetch;

/// Match cap used by the original add dialog's search dropdown
const SEARCH_LIMIT: usize = 8;

#[derive(Args, Clone)]
pub struct SearchArgs {
    /// Search term, matched against coin names and symbols
    pub query: String,
}

pub struct SearchCommand {
    args: SearchArgs,
}

impl SearchCommand {
    pub fn new(args: SearchArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, api_url: &str, data_paths: DataPaths) -> Result<()> {
        let snapshot = snapshot_or_fetch(api_url, &data_paths).await?;
        let matches = snapshot.search(&self.args.query, SEARCH_LIMIT);

        if matches.is_empty() {
            println!("No coins found for '{}'", self.args.query.bright_yellow());
            return Ok(());
        }

        for (idx, coin) in matches.iter().enumerate() {
            let price = coin
                .current_price
                .map(format_price)
                .unwrap_or_else(|| "N/A".to_string());
            println!(
                "{} {} {} {} {}",
                format!("{}.", idx + 1).bright_black(),
                coin.name.bright_white(),
                format!("({})", coin.symbol.to_uppercase()).bright_cyan(),
                "Price:".bright_black(),
                price.bright_yellow()
            );
            println!("   {} {}", "Coin ID:".bright_black(), coin.id);
        }
        Ok(())
    }
}
