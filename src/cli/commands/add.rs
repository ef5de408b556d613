//! Add command: record a new holding

use anyhow::{anyhow, Result};
use clap::Args;
use owo_colors::OwoColorize;
use rust_decimal::Decimal;

use crate::data_paths::DataPaths;
use crate::portfolio::display::format_price;
use crate::portfolio::engine::parse_amount;
use crate::portfolio::store::HoldingsStore;
use crate::portfolio::{Holding, Portfolio};

use super::refresh::snapshot_or_fetch;

#[derive(Args, Clone)]
pub struct AddArgs {
    /// Coin id as known to the price feed, e.g. "bitcoin"
    pub coin_id: String,

    /// Amount of coin held, e.g. 0.5
    #[arg(long, short = 'q')]
    pub quantity: String,

    /// Average buy price in USD per coin; defaults to the coin's live price
    #[arg(long, short = 'p')]
    pub price: Option<String>,
}

pub struct AddCommand {
    args: AddArgs,
}

impl AddCommand {
    pub fn new(args: AddArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, api_url: &str, data_paths: DataPaths) -> Result<()> {
        // Quantity and price arrive as user-typed decimal text; a bad
        // value is a user-facing rejection, not a crash, and nothing is
        // persisted when validation fails.
        let quantity = parse_amount("quantity", &self.args.quantity)?;

        let snapshot = snapshot_or_fetch(api_url, &data_paths).await?;
        let coin = snapshot.find(&self.args.coin_id);

        let avg_buy_price: Decimal = match &self.args.price {
            Some(text) => parse_amount("buy price", text)?,
            // The original add dialog prefills the buy price with the
            // live price; mirror that when the flag is omitted
            None => coin.and_then(|c| c.current_price).ok_or_else(|| {
                anyhow!(
                    "no live price known for '{}'; pass --price or run 'coinlens refresh'",
                    self.args.coin_id
                )
            })?,
        };

        let candidate = match coin {
            Some(coin) => Holding {
                id: coin.id.clone(),
                name: coin.name.clone(),
                symbol: coin.symbol.to_uppercase(),
                image: coin.image.clone(),
                quantity,
                avg_buy_price,
            },
            None => {
                // Unknown to the snapshot (small-cap coin, or stale
                // cache); track it anyway with bare metadata
                tracing::warn!("Coin '{}' not in snapshot, adding without metadata", self.args.coin_id);
                Holding {
                    id: self.args.coin_id.clone(),
                    name: self.args.coin_id.clone(),
                    symbol: self.args.coin_id.to_uppercase(),
                    image: None,
                    quantity,
                    avg_buy_price,
                }
            }
        };

        let store = HoldingsStore::new(&data_paths);
        let mut portfolio = Portfolio::new(store.load().await?);

        let name = candidate.name.clone();
        portfolio.add(candidate)?;
        store.save(portfolio.holdings()).await?;

        println!(
            "{} {} ({} @ {})",
            "✅ Added to portfolio:".bright_green(),
            name.bright_white(),
            quantity,
            format_price(avg_buy_price)
        );
        Ok(())
    }
}
