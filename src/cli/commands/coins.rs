//! Coins command: top coins by market cap from the snapshot

use anyhow::Result;
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use owo_colors::OwoColorize;

use crate::data_paths::DataPaths;
use crate::portfolio::display::{format_price, format_signed_pct, format_usd};

use super::refresh::snapshot_or_fetch;

#[derive(Args, Clone)]
pub struct CoinsArgs {
    /// Maximum number of coins to display
    #[arg(long, short = 'n', default_value = "20")]
    pub limit: usize,
}

pub struct CoinsCommand {
    args: CoinsArgs,
}

impl CoinsCommand {
    pub fn new(args: CoinsArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, api_url: &str, data_paths: DataPaths) -> Result<()> {
        let snapshot = snapshot_or_fetch(api_url, &data_paths).await?;

        println!(
            "{} (as of {})",
            "🪙 TOP COINS BY MARKET CAP".bright_white().bold(),
            snapshot.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
        );

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["#", "Coin", "Symbol", "Price", "24h", "Market Cap"]);

        for (idx, coin) in snapshot.coins.iter().take(self.args.limit).enumerate() {
            let change = match coin.price_change_percentage_24h {
                Some(pct) if pct >= rust_decimal::Decimal::ZERO => {
                    format_signed_pct(pct).bright_green().to_string()
                }
                Some(pct) => format_signed_pct(pct).bright_red().to_string(),
                None => "—".to_string(),
            };

            table.add_row(vec![
                Cell::new(idx + 1).set_alignment(CellAlignment::Right),
                Cell::new(&coin.name),
                Cell::new(coin.symbol.to_uppercase()),
                Cell::new(
                    coin.current_price
                        .map(format_price)
                        .unwrap_or_else(|| "—".to_string()),
                )
                .set_alignment(CellAlignment::Right),
                Cell::new(change).set_alignment(CellAlignment::Right),
                Cell::new(
                    coin.market_cap
                        .map(format_usd)
                        .unwrap_or_else(|| "—".to_string()),
                )
                .set_alignment(CellAlignment::Right),
            ]);
        }

        println!("{}", table);
        Ok(())
    }
}
