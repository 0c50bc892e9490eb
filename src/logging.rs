//! Structured logging to a file.
//!
//! The terminal belongs to the TUI, so log output goes to
//! `nftgallery.log` in the platform data directory. The filter comes from
//! `RUST_LOG` and defaults to `nftgallery=info`.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::platform::AppPaths;

const DEFAULT_FILTER: &str = "nftgallery=info";

/// Installs the global subscriber and returns the log file location.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init() -> Result<PathBuf> {
    let path = AppPaths::new().log_file()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::registry()
        .with(filter_from_env())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;

    Ok(path)
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
