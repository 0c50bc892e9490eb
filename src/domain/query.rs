//! Fetch requests understood by the NFT client.

// ============================================================================
// Fetch Kind
// ============================================================================

/// Which fetch function produced the current result list.
///
/// "Next page" repeats the last kind with the current cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// All NFTs owned by the wallet.
    Owner,
    /// NFTs of one collection owned by the wallet.
    OwnerInCollection,
    /// Every NFT of one collection, regardless of owner.
    Collection,
}

impl FetchKind {
    /// Short label for the header.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Owner => "owned",
            Self::OwnerInCollection => "owned in collection",
            Self::Collection => "collection",
        }
    }
}

// ============================================================================
// NFT Query
// ============================================================================

/// A fully specified request for one page of NFTs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NftQuery {
    Owner {
        owner: String,
        page_key: String,
    },
    OwnerInCollection {
        owner: String,
        contract: String,
        page_key: String,
    },
    Collection {
        contract: String,
        start_token: String,
    },
}

impl NftQuery {
    #[must_use]
    pub const fn kind(&self) -> FetchKind {
        match self {
            Self::Owner { .. } => FetchKind::Owner,
            Self::OwnerInCollection { .. } => FetchKind::OwnerInCollection,
            Self::Collection { .. } => FetchKind::Collection,
        }
    }

    /// The cursor this request starts from.
    #[must_use]
    pub fn cursor(&self) -> &str {
        match self {
            Self::Owner { page_key, .. } | Self::OwnerInCollection { page_key, .. } => page_key,
            Self::Collection { start_token, .. } => start_token,
        }
    }

    /// The same request starting from the first page.
    #[must_use]
    pub fn first_page(mut self) -> Self {
        match &mut self {
            Self::Owner { page_key, .. } | Self::OwnerInCollection { page_key, .. } => {
                page_key.clear();
            }
            Self::Collection { start_token, .. } => start_token.clear(),
        }
        self
    }
}
