//! CLI module for coinlens
//!
//! Command-line interface for the portfolio tracker. Uses clap for
//! argument parsing and a structured command pattern: one args/command
//! pair per subcommand, dispatched from `Cli::execute`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::data_paths::{DataPaths, DEFAULT_DATA_DIR};
use crate::logging::{init_logging, LoggingConfig};
use crate::prices::DEFAULT_API_URL;

use commands::add::{AddArgs, AddCommand};
use commands::coins::{CoinsArgs, CoinsCommand};
use commands::refresh::{RefreshArgs, RefreshCommand};
use commands::remove::{RemoveArgs, RemoveCommand};
use commands::search::{SearchArgs, SearchCommand};
use commands::show::{ShowArgs, ShowCommand};
use commands::version::{VersionArgs, VersionCommand};

#[derive(Parser)]
#[command(name = "coinlens")]
#[command(version)]
#[command(about = "CLI crypto portfolio tracker with live P&L", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Price feed base URL (CoinGecko-compatible); overrides COINLENS_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Data directory path (default: ./data)
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the portfolio with live valuation and P&L
    Show(ShowArgs),

    /// Add a holding (quantity + average buy price) for a coin
    Add(AddArgs),

    /// Remove a holding by coin id
    Remove(RemoveArgs),

    /// Search the coin list by name or symbol
    Search(SearchArgs),

    /// List top coins by market cap from the latest snapshot
    Coins(CoinsArgs),

    /// Fetch live prices and update the local snapshot
    Refresh(RefreshArgs),

    /// Show version information
    Version(VersionArgs),
}

impl Cli {
    /// Resolve the price feed base URL: flag, then env, then default
    pub fn get_api_url(&self) -> String {
        if let Some(url) = &self.api_url {
            url.clone()
        } else if let Ok(url) = std::env::var("COINLENS_API_URL") {
            url
        } else {
            DEFAULT_API_URL.to_string()
        }
    }

    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let api_url = self.get_api_url();
        let data_paths = DataPaths::new(&self.data_dir);

        // Ensure all directories exist
        data_paths.ensure_directories()?;

        init_logging(LoggingConfig::new(data_paths.clone(), self.verbose > 0))?;

        match self.command {
            Commands::Show(args) => ShowCommand::new(args).execute(&api_url, data_paths).await,
            Commands::Add(args) => AddCommand::new(args).execute(&api_url, data_paths).await,
            Commands::Remove(args) => RemoveCommand::new(args).execute(&api_url, data_paths).await,
            Commands::Search(args) => SearchCommand::new(args).execute(&api_url, data_paths).await,
            Commands::Coins(args) => CoinsCommand::new(args).execute(&api_url, data_paths).await,
            Commands::Refresh(args) => {
                RefreshCommand::new(args).execute(&api_url, data_paths).await
            }
            Commands::Version(args) => {
                VersionCommand::new(args).execute(&api_url, data_paths).await
            }
        }
    }
}
