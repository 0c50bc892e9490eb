//! Supported chains for the NFT API.
//!
//! Each network maps to an Alchemy subdomain for API requests and to a block
//! explorer used for the outbound "view contract" link on every card.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

// ============================================================================
// Network
// ============================================================================

/// Chains the gallery can query.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    /// Ethereum mainnet.
    #[default]
    EthMainnet,
    /// Ethereum Sepolia testnet.
    EthSepolia,
    /// Polygon PoS mainnet.
    PolygonMainnet,
    /// Arbitrum One.
    ArbMainnet,
    /// OP mainnet.
    OptMainnet,
    /// Base mainnet.
    BaseMainnet,
}

impl Network {
    /// Returns the human-readable name of the network.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::EthMainnet => "Ethereum",
            Self::EthSepolia => "Sepolia",
            Self::PolygonMainnet => "Polygon",
            Self::ArbMainnet => "Arbitrum",
            Self::OptMainnet => "Optimism",
            Self::BaseMainnet => "Base",
        }
    }

    /// Returns the Alchemy subdomain for this network.
    #[must_use]
    pub const fn alchemy_subdomain(&self) -> &str {
        match self {
            Self::EthMainnet => "eth-mainnet",
            Self::EthSepolia => "eth-sepolia",
            Self::PolygonMainnet => "polygon-mainnet",
            Self::ArbMainnet => "arb-mainnet",
            Self::OptMainnet => "opt-mainnet",
            Self::BaseMainnet => "base-mainnet",
        }
    }

    /// Returns the root of the Alchemy v2 API for this network, without the key.
    #[must_use]
    pub fn api_root(&self) -> String {
        format!("https://{}.g.alchemy.com/v2", self.alchemy_subdomain())
    }

    /// Returns the block explorer base URL.
    #[must_use]
    pub const fn explorer_url(&self) -> &str {
        match self {
            Self::EthMainnet => "https://etherscan.io",
            Self::EthSepolia => "https://sepolia.etherscan.io",
            Self::PolygonMainnet => "https://polygonscan.com",
            Self::ArbMainnet => "https://arbiscan.io",
            Self::OptMainnet => "https://optimistic.etherscan.io",
            Self::BaseMainnet => "https://basescan.org",
        }
    }

    /// Returns the explorer's display name, used for the card link label.
    #[must_use]
    pub const fn explorer_name(&self) -> &str {
        match self {
            Self::EthMainnet | Self::EthSepolia => "Etherscan",
            Self::PolygonMainnet => "Polygonscan",
            Self::ArbMainnet => "Arbiscan",
            Self::OptMainnet => "Optimistic Etherscan",
            Self::BaseMainnet => "Basescan",
        }
    }

    /// Builds the explorer page URL for a token contract.
    #[must_use]
    pub fn token_url(&self, contract_address: &str) -> String {
        format!("{}/token/{}", self.explorer_url(), contract_address)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
