//! Application configuration with persistence.
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/nftgallery/config.json`
//! - macOS: `~/Library/Application Support/nftgallery/config.json`
//! - Windows: `%APPDATA%/nftgallery/config.json`
//!
//! # Example
//!
//! ```ignore
//! use crate::state::AppConfig;
//!
//! let mut config = AppConfig::load();
//! config.page_size = 50;
//! config.save()?;
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::platform::AppPaths;
use crate::client::alchemy::{DEFAULT_PAGE_SIZE, clamp_page_size};
use crate::domain::{GalleryError, Network};

// ============================================================================
// AppConfig
// ============================================================================

/// Persisted settings.
///
/// The API key may be stored here, but the command line and the
/// `ALCHEMY_API_KEY` environment variable take precedence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Chain to query.
    #[serde(default)]
    pub network: Network,
    /// Results requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Alchemy API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: Network::EthMainnet,
            page_size: DEFAULT_PAGE_SIZE,
            api_key: None,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        AppPaths::new().config_file()
    }

    /// Loads the configuration from disk.
    ///
    /// If the configuration file doesn't exist or cannot be parsed,
    /// returns the default configuration.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::info!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the file cannot be
    /// read, or the JSON content cannot be parsed.
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        Self::from_json(&content)
    }

    /// Parses configuration JSON, normalizing out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(content: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(content)?;
        config.page_size = clamp_page_size(config.page_size);
        Ok(config)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the configuration
    /// cannot be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Picks the API key: explicit value first, then the stored one.
    ///
    /// # Errors
    ///
    /// Returns `GalleryError::MissingApiKey` when neither is set or both are blank.
    pub fn resolve_api_key(&self, explicit: Option<&str>) -> Result<String, GalleryError> {
        explicit
            .into_iter()
            .chain(self.api_key.as_deref())
            .map(str::trim)
            .find(|key| !key.is_empty())
            .map(String::from)
            .ok_or(GalleryError::MissingApiKey)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.network, Network::EthMainnet);
        assert_eq!(config.page_size, 100);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = AppConfig {
            network: Network::BaseMainnet,
            page_size: 40,
            api_key: Some("key".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized = AppConfig::from_json(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_out_of_range_page_size_is_clamped() {
        let config = AppConfig::from_json(r#"{"page_size": 1000}"#).unwrap();
        assert_eq!(config.page_size, 100);
    }

    #[test]
    fn test_api_key_not_written_when_absent() {
        let json = serde_json::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(json.contains("network"));
        assert!(json.contains("page_size"));
        assert!(!json.contains("api_key"));
    }

    #[rstest]
    #[case::explicit_wins(Some("cli"), Some("stored"), Some("cli"))]
    #[case::falls_back_to_stored(None, Some("stored"), Some("stored"))]
    #[case::blank_explicit_ignored(Some("  "), Some("stored"), Some("stored"))]
    #[case::trimmed(Some(" cli \n"), None, Some("cli"))]
    #[case::none(None, None, None)]
    #[case::all_blank(Some(""), Some(" "), None)]
    fn test_resolve_api_key(
        #[case] explicit: Option<&str>,
        #[case] stored: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let config = AppConfig {
            api_key: stored.map(String::from),
            ..AppConfig::default()
        };
        let resolved = config.resolve_api_key(explicit);
        match expected {
            Some(key) => assert_eq!(resolved.unwrap(), key),
            None => assert!(matches!(resolved, Err(GalleryError::MissingApiKey))),
        }
    }

    #[test]
    fn test_load_never_panics() {
        let config = AppConfig::load();
        assert!(config.page_size >= 1 && config.page_size <= 100);
    }
}
