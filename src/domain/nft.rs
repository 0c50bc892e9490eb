//! NFT records as returned by the indexing API, plus card display helpers.

use serde_json::Value;

// ============================================================================
// Constants
// ============================================================================

/// Number of trailing token-id characters shown on a card.
pub const TOKEN_ID_TAIL_CHARS: usize = 4;

/// Number of leading contract-address characters shown on a card.
pub const ADDRESS_HEAD_CHARS: usize = 5;

/// Number of trailing contract-address characters shown on a card.
pub const ADDRESS_TAIL_CHARS: usize = 4;

/// Maximum description length shown on a card.
pub const DESCRIPTION_SNIPPET_CHARS: usize = 80;

/// Title shown for records without one.
pub const UNTITLED: &str = "Untitled";

// ============================================================================
// Token Type
// ============================================================================

/// Token standard reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenType {
    Erc721,
    Erc1155,
    #[default]
    Unknown,
}

impl TokenType {
    #[must_use]
    pub fn from_api(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "ERC721" => Self::Erc721,
            "ERC1155" => Self::Erc1155,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Erc721 => "ERC721",
            Self::Erc1155 => "ERC1155",
            Self::Unknown => "",
        }
    }
}

// ============================================================================
// Media
// ============================================================================

/// One media entry of an NFT.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NftMedia {
    /// Cached, directly retrievable URL.
    pub gateway: String,
    /// URL as stored in the token metadata (may be `ipfs://`).
    pub raw: String,
    pub thumbnail: Option<String>,
    pub format: Option<String>,
}

impl NftMedia {
    /// Returns the best retrievable URL for this entry.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        [self.gateway.as_str(), self.raw.as_str()]
            .into_iter()
            .find(|url| !url.is_empty())
    }

    fn from_json(data: &Value) -> Self {
        Self {
            gateway: data["gateway"].as_str().unwrap_or("").to_string(),
            raw: data["raw"].as_str().unwrap_or("").to_string(),
            thumbnail: data["thumbnail"].as_str().map(String::from),
            format: data["format"].as_str().map(String::from),
        }
    }
}

// ============================================================================
// NFT Record
// ============================================================================

/// A single NFT as returned by `getNFTs` or `getNFTsForCollection`.
///
/// Records are immutable once parsed. Missing fields are filled with empty
/// values so rendering never has to deal with absent data.
#[derive(Debug, Clone, PartialEq)]
pub struct Nft {
    pub contract_address: String,
    /// Token id exactly as the API returned it (usually `0x`-prefixed hex).
    pub token_id: String,
    pub token_type: TokenType,
    pub title: String,
    pub description: String,
    pub media: Vec<NftMedia>,
    /// Collection name from the contract metadata.
    pub collection_name: Option<String>,
    /// Held quantity, present for ERC1155 tokens.
    pub balance: Option<String>,
    /// Token metadata, passed through unmodified.
    pub metadata: Value,
}

impl Nft {
    /// Parses one NFT object from the API response.
    #[must_use]
    pub fn from_json(data: &Value) -> Self {
        let id = &data["id"];
        let token_type = id["tokenMetadata"]["tokenType"]
            .as_str()
            .or_else(|| data["contractMetadata"]["tokenType"].as_str())
            .map(TokenType::from_api)
            .unwrap_or_default();

        let media = data["media"]
            .as_array()
            .map(|entries| entries.iter().map(NftMedia::from_json).collect())
            .unwrap_or_default();

        // Some contracts put structured data in `description`; keep whatever
        // text we can get.
        let description = match &data["description"] {
            Value::String(text) => text.clone(),
            Value::Array(parts) => parts
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" "),
            _ => data["metadata"]["description"]
                .as_str()
                .unwrap_or("")
                .to_string(),
        };

        Self {
            contract_address: data["contract"]["address"]
                .as_str()
                .unwrap_or("")
                .to_string(),
            token_id: id["tokenId"].as_str().unwrap_or("").to_string(),
            token_type,
            title: data["title"].as_str().unwrap_or("").to_string(),
            description,
            media,
            collection_name: data["contractMetadata"]["name"]
                .as_str()
                .filter(|name| !name.is_empty())
                .map(String::from),
            balance: data["balance"].as_str().map(String::from),
            metadata: data["metadata"].clone(),
        }
    }

    /// Title shown on the card.
    #[must_use]
    pub fn display_title(&self) -> &str {
        let title = self.title.trim();
        if title.is_empty() { UNTITLED } else { title }
    }

    /// Last four characters of the token id.
    #[must_use]
    pub fn short_token_id(&self) -> String {
        tail_chars(&self.token_id, TOKEN_ID_TAIL_CHARS)
    }

    /// Contract address as `first5...last4`.
    #[must_use]
    pub fn short_contract_address(&self) -> String {
        truncate_address(&self.contract_address)
    }

    /// First 80 characters of the description.
    #[must_use]
    pub fn description_snippet(&self) -> String {
        self.description
            .chars()
            .take(DESCRIPTION_SNIPPET_CHARS)
            .collect()
    }

    /// URL of the image shown for this card: the first media entry.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.media.first().and_then(NftMedia::url)
    }

    /// Identity used to remember per-card UI state across pages.
    #[must_use]
    pub fn key(&self) -> (String, String) {
        (self.contract_address.clone(), self.token_id.clone())
    }
}

// ============================================================================
// Page
// ============================================================================

/// One page of results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NftPage {
    pub nfts: Vec<Nft>,
    /// Cursor for the following page; empty when this is the last page.
    pub next_page_key: String,
    pub total_count: Option<u64>,
}

// ============================================================================
// Helpers
// ============================================================================

/// Returns the last `count` characters of `text`, or all of it when shorter.
#[must_use]
pub fn tail_chars(text: &str, count: usize) -> String {
    let len = text.chars().count();
    text.chars().skip(len.saturating_sub(count)).collect()
}

/// Shortens an address to its first five and last four characters.
///
/// Addresses too short to benefit are returned unchanged.
#[must_use]
pub fn truncate_address(address: &str) -> String {
    let len = address.chars().count();
    if len <= ADDRESS_HEAD_CHARS + ADDRESS_TAIL_CHARS {
        return address.to_string();
    }
    let head: String = address.chars().take(ADDRESS_HEAD_CHARS).collect();
    format!("{head}...{}", tail_chars(address, ADDRESS_TAIL_CHARS))
}

// ============================================================================
// Tests
// ============================================================================
