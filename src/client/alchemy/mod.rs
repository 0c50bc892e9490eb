//! Alchemy NFT API client.
//!
//! The v2 API authenticates by putting the key in the URL path:
//! `https://{network}.g.alchemy.com/v2/{api_key}/{method}/`. The key is only
//! ever supplied at runtime and is redacted from every logged URL.

use url::Url;

use super::http::{HttpClient, HttpConfig};
use crate::domain::{GalleryError, Network, NftQuery};

mod nfts;


// ============================================================================
// Constants
// ============================================================================

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Largest page the API accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Placeholder written in place of the API key in logs.
const REDACTED: &str = "***";

// ============================================================================
// Alchemy Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct AlchemyClient {
    http: HttpClient,
    network: Network,
    api_key: String,
    page_size: u32,
}

impl AlchemyClient {
    /// Creates a client for `network` with the default HTTP configuration.
    ///
    /// # Errors
    ///
    /// Returns `GalleryError::MissingApiKey` for a blank key,
    /// `GalleryError::InvalidInput` for a key with characters outside
    /// `[A-Za-z0-9_-]` and `GalleryError::ClientInit` if the HTTP client fails
    /// to initialize.
    pub fn new(
        network: Network,
        api_key: impl Into<String>,
        page_size: u32,
    ) -> Result<Self, GalleryError> {
        Self::with_http_config(network, api_key, page_size, HttpConfig::default())
    }

    /// Creates a client with an explicit HTTP configuration.
    ///
    /// # Errors
    ///
    /// See [`AlchemyClient::new`].
    pub fn with_http_config(
        network: Network,
        api_key: impl Into<String>,
        page_size: u32,
        config: HttpConfig,
    ) -> Result<Self, GalleryError> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(GalleryError::MissingApiKey);
        }
        // The key is a URL path segment
        if !api_key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(GalleryError::invalid_input(
                "API key may only contain letters, digits, '-' and '_'",
            ));
        }

        Ok(Self {
            http: HttpClient::with_config(config)?,
            network,
            api_key,
            page_size: clamp_page_size(page_size),
        })
    }

    #[must_use]
    pub fn network(&self) -> Network {
        self.network
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Base URL including the key, e.g. `https://eth-mainnet.g.alchemy.com/v2/KEY`.
    fn base_url(&self) -> String {
        format!("{}/{}", self.network.api_root(), self.api_key)
    }

    /// Builds the request URL for a query.
    ///
    /// Empty cursors are left out so the API starts from the first page.
    ///
    /// # Errors
    ///
    /// Returns `GalleryError::Url` if the URL cannot be assembled.
    pub fn query_url(&self, query: &NftQuery) -> Result<Url, GalleryError> {
        let page_size = self.page_size.to_string();

        let (method, mut params): (&str, Vec<(&str, &str)>) = match query {
            NftQuery::Owner { owner, .. } => ("getNFTs", vec![("owner", owner.as_str())]),
            NftQuery::OwnerInCollection {
                owner, contract, ..
            } => (
                "getNFTs",
                vec![
                    ("owner", owner.as_str()),
                    ("contractAddresses[]", contract.as_str()),
                ],
            ),
            NftQuery::Collection { contract, .. } => (
                "getNFTsForCollection",
                vec![
                    ("contractAddress", contract.as_str()),
                    ("withMetadata", "true"),
                ],
            ),
        };

        match query {
            NftQuery::Owner { page_key, .. } | NftQuery::OwnerInCollection { page_key, .. } => {
                params.push(("pageSize", page_size.as_str()));
                if !page_key.is_empty() {
                    params.push(("pageKey", page_key.as_str()));
                }
            }
            NftQuery::Collection { start_token, .. } => {
                params.push(("limit", page_size.as_str()));
                if !start_token.is_empty() {
                    params.push(("startToken", start_token.as_str()));
                }
            }
        }

        let endpoint = format!("{}/{}/", self.base_url(), method);
        Ok(Url::parse_with_params(&endpoint, &params)?)
    }

    /// Renders a URL for logging with the API key path segment masked.
    #[must_use]
    pub fn redact(&self, url: &Url) -> String {
        let Some(segments) = url.path_segments() else {
            return url.to_string();
        };
        let masked: Vec<&str> = segments
            .map(|segment| {
                if segment == self.api_key {
                    REDACTED
                } else {
                    segment
                }
            })
            .collect();

        let mut redacted = url.clone();
        if let Ok(mut path) = redacted.path_segments_mut() {
            path.clear().extend(masked);
        }
        redacted.to_string()
    }
}

/// Keeps the page size within what the API accepts.
#[must_use]
pub fn clamp_page_size(page_size: u32) -> u32 {
    page_size.clamp(1, MAX_PAGE_SIZE)
}
