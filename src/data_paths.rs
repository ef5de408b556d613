use std::path::{Path, PathBuf};

/// Default data directory (relative to current working directory)
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Subdirectory paths relative to the data directory
pub const PORTFOLIO_DIR: &str = "portfolio";
pub const CACHE_DIR: &str = "cache";
pub const LOGS_DIR: &str = "logs";

/// Helper struct to manage data paths
#[derive(Clone, Debug)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    /// Create a new DataPaths instance with the given root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root data directory
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Get the portfolio directory (holdings file lives here)
    pub fn portfolio(&self) -> PathBuf {
        self.root.join(PORTFOLIO_DIR)
    }

    /// Get the cache directory (coin snapshot lives here)
    pub fn cache(&self) -> PathBuf {
        self.root.join(CACHE_DIR)
    }

    /// Get the logs directory
    pub fn logs(&self) -> PathBuf {
        self.root.join(LOGS_DIR)
    }

    /// Path to the persisted holdings file
    pub fn holdings_file(&self) -> PathBuf {
        self.portfolio().join("holdings.json")
    }

    /// Path to the cached coin market snapshot
    pub fn coins_file(&self) -> PathBuf {
        self.cache().join("coins.json")
    }

    /// Ensure all directories exist
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::create_dir_all(self.portfolio())?;
        std::fs::create_dir_all(self.cache())?;
        std::fs::create_dir_all(self.logs())?;
        Ok(())
    }
}
