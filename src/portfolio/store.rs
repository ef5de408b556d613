//! Holdings persistence layer
//!
//! Stores the holdings set as pretty-printed JSON at:
//! data/portfolio/holdings.json
//!
//! The file carries a `saved_at` timestamp and the ordered holdings list.
//! A missing file reads as an empty portfolio (first run).

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info};

use crate::data_paths::DataPaths;
use crate::portfolio::types::Holding;

/// Persisted holdings document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldingsFile {
    pub saved_at: DateTime<Utc>,
    pub holdings: Vec<Holding>,
}

/// Holdings storage manager
#[derive(Clone)]
pub struct HoldingsStore {
    path: PathBuf,
}

impl HoldingsStore {
    pub fn new(data_paths: &DataPaths) -> Self {
        Self {
            path: data_paths.holdings_file(),
        }
    }

    /// Load the holdings set; a missing file is an empty portfolio
    pub async fn load(&self) -> Result<Vec<Holding>> {
        if !self.path.exists() {
            debug!("No holdings file at {:?}, starting empty", self.path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .context("Failed to read holdings file")?;
        let file: HoldingsFile =
            serde_json::from_str(&content).context("Failed to parse holdings file")?;

        debug!(
            "Loaded {} holdings (saved at {})",
            file.holdings.len(),
            file.saved_at
        );
        Ok(file.holdings)
    }

    /// Persist the holdings set, creating parent directories as needed
    pub async fn save(&self, holdings: &[Holding]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .context("Failed to create portfolio directory")?;
        }

        let file = HoldingsFile {
            saved_at: Utc::now(),
            holdings: holdings.to_vec(),
        };
        let json = serde_json::to_string_pretty(&file)?;

        fs::write(&self.path, json)
            .await
            .context("Failed to write holdings file")?;

        info!("Saved {} holdings to {:?}", holdings.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn sample_holdings() -> Vec<Holding> {
        vec![
            Holding {
                id: "bitcoin".to_string(),
                name: "Bitcoin".to_string(),
                symbol: "BTC".to_string(),
                image: Some("https://example.com/btc.png".to_string()),
                quantity: dec!(0.5),
                avg_buy_price: dec!(42000),
            },
            Holding {
                id: "ethereum".to_string(),
                name: "Ethereum".to_string(),
                symbol: "ETH".to_string(),
                image: None,
                quantity: dec!(3),
                avg_buy_price: dec!(2500),
            },
        ]
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = HoldingsStore::new(&DataPaths::new(dir.path()));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_preserves_order_and_values() {
        let dir = TempDir::new().unwrap();
        let store = HoldingsStore::new(&DataPaths::new(dir.path()));

        let holdings = sample_holdings();
        store.save(&holdings).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, holdings);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_state() {
        let dir = TempDir::new().unwrap();
        let store = HoldingsStore::new(&DataPaths::new(dir.path()));

        store.save(&sample_holdings()).await.unwrap();
        store.save(&sample_holdings()[..1]).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "bitcoin");
    }
}
