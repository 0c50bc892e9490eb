//! Domain types for the NFT gallery.
//!
//! # Module Organization
//!
//! - [`error`] - Error taxonomy for fetch and input failures
//! - [`network`] - Supported chains, API roots and explorers
//! - [`nft`] - NFT records, pages and card display helpers
//! - [`query`] - Fetch requests and their kinds

pub mod error;
pub mod network;
pub mod nft;
pub mod query;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::GalleryError;
pub use network::Network;
pub use nft::{Nft, NftPage};
pub use query::{FetchKind, NftQuery};
