//! Where the config and log files live.
//!
//! | Platform | Config | Log |
//! |----------|--------|-----|
//! | Linux | `~/.config/nftgallery/config.json` | `~/.local/share/nftgallery/nftgallery.log` |
//! | macOS | `~/Library/Application Support/nftgallery/config.json` | same directory |
//! | Windows | `%APPDATA%\nftgallery\config.json` | same directory |

use std::fs;
use std::path::PathBuf;

use color_eyre::{Result, eyre::eyre};

pub const APP_NAME: &str = "nftgallery";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "nftgallery.log";

/// Per-user application directories, created on first use.
#[derive(Debug, Clone)]
pub struct AppPaths {
    app_name: String,
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl AppPaths {
    #[must_use]
    pub fn new() -> Self {
        Self {
            app_name: APP_NAME.to_owned(),
        }
    }

    /// Joins the app name onto a platform base directory and creates it.
    fn app_dir(&self, base: Option<PathBuf>, kind: &str) -> Result<PathBuf> {
        let dir = base
            .ok_or_else(|| eyre!("Could not determine the {kind} directory for this platform"))?
            .join(&self.app_name);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// # Errors
    ///
    /// Fails when the platform config directory is unknown or not writable.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self
            .app_dir(dirs::config_dir(), "config")?
            .join(CONFIG_FILE_NAME))
    }

    /// # Errors
    ///
    /// Fails when the platform data directory is unknown or not writable.
    pub fn log_file(&self) -> Result<PathBuf> {
        Ok(self.app_dir(dirs::data_dir(), "data")?.join(LOG_FILE_NAME))
    }
}
