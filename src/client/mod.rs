//! HTTP clients for the NFT indexing API.
//!
//! - [`http`] - shared reqwest wrapper with timeouts and default headers
//! - [`alchemy`] - typed client for the Alchemy NFT API v2
//!
//! # Example
//!
//! ```ignore
//! use crate::client::AlchemyClient;
//! use crate::domain::Network;
//!
//! let client = AlchemyClient::new(Network::EthMainnet, api_key, 100)?;
//! let page = client.get_nfts_for_owner("0xabc...", "").await?;
//! ```

pub mod alchemy;
pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use alchemy::AlchemyClient;
