//! Coin snapshot cache
//!
//! Persists the last completed price fetch at data/cache/coins.json so
//! the portfolio view, coin search, and add-holding metadata lookup work
//! between refreshes (stale prices beat no prices; staleness is visible
//! through the snapshot's `fetched_at`).

use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info};

use super::types::CoinSnapshot;
use crate::data_paths::DataPaths;

#[derive(Clone)]
pub struct PriceCache {
    path: PathBuf,
}

impl PriceCache {
    pub fn new(data_paths: &DataPaths) -> Self {
        Self {
            path: data_paths.coins_file(),
        }
    }

    /// Load the cached snapshot, if one has been saved
    pub async fn load(&self) -> Result<Option<CoinSnapshot>> {
        if !self.path.exists() {
            debug!("No coin snapshot at {:?}", self.path);
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .await
            .context("Failed to read coin snapshot")?;
        let snapshot: CoinSnapshot =
            serde_json::from_str(&content).context("Failed to parse coin snapshot")?;

        debug!(
            "Loaded snapshot of {} coins fetched at {}",
            snapshot.coins.len(),
            snapshot.fetched_at
        );
        Ok(Some(snapshot))
    }

    /// Replace the cached snapshot with a freshly fetched one
    pub async fn save(&self, snapshot: &CoinSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .context("Failed to create cache directory")?;
        }

        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, json)
            .await
            .context("Failed to write coin snapshot")?;

        info!("Cached {} coins at {:?}", snapshot.coins.len(), self.path);
        Ok(())
    }
}
