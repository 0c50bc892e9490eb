//! Fetched data: the current page of NFTs and per-card session flags.

use std::collections::HashSet;

use crate::domain::{FetchKind, Nft, NftPage};

/// Application data state.
#[derive(Debug, Default)]
pub struct DataState {
    /// Records of the current page, replaced wholesale on every applied fetch.
    pub nfts: Vec<Nft>,
    /// Total reported by the API, when it reports one.
    pub total_count: Option<u64>,
    /// 1-based number of the page on screen; 0 before the first fetch.
    pub page_number: usize,
    /// The fetch function that produced `nfts`.
    pub last_fetch: Option<FetchKind>,
    /// Cards whose contract address has been copied this session.
    copied: HashSet<(String, String)>,
}

impl DataState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the displayed records with a freshly fetched page.
    ///
    /// `continued` is true when the page follows the one on screen.
    pub fn replace_page(&mut self, kind: FetchKind, page: NftPage, continued: bool) {
        self.nfts = page.nfts;
        self.total_count = page.total_count;
        self.last_fetch = Some(kind);
        self.page_number = if continued { self.page_number + 1 } else { 1 };
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Nft> {
        self.nfts.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nfts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nfts.is_empty()
    }

    /// Remembers that the card's address was copied. There is no expiry.
    pub fn mark_copied(&mut self, nft: &Nft) {
        self.copied.insert(nft.key());
    }

    #[must_use]
    pub fn is_copied(&self, nft: &Nft) -> bool {
        self.copied.contains(&nft.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nft(token_id: &str) -> Nft {
        Nft::from_json(&json!({
            "contract": { "address": "0xabc" },
            "id": { "tokenId": token_id },
        }))
    }

    fn page(ids: &[&str]) -> NftPage {
        NftPage {
            nfts: ids.iter().map(|id| nft(id)).collect(),
            next_page_key: String::new(),
            total_count: Some(10),
        }
    }

    #[test]
    fn test_replace_page_discards_previous_records() {
        let mut data = DataState::new();
        data.replace_page(FetchKind::Owner, page(&["1", "2", "3"]), false);
        data.replace_page(FetchKind::Owner, page(&["4"]), true);

        assert_eq!(data.len(), 1);
        assert_eq!(data.nfts[0].token_id, "4");
        assert!(data.nfts.iter().all(|n| n.token_id != "1"));
    }

    #[test]
    fn test_page_number_tracks_continuation() {
        let mut data = DataState::new();
        assert_eq!(data.page_number, 0);

        data.replace_page(FetchKind::Owner, page(&["1"]), false);
        assert_eq!(data.page_number, 1);
        data.replace_page(FetchKind::Owner, page(&["2"]), true);
        assert_eq!(data.page_number, 2);
        data.replace_page(FetchKind::Collection, page(&["3"]), false);
        assert_eq!(data.page_number, 1);
        assert_eq!(data.last_fetch, Some(FetchKind::Collection));
    }

    #[test]
    fn test_copied_flag_survives_page_changes() {
        let mut data = DataState::new();
        let first = nft("1");
        data.mark_copied(&first);
        data.replace_page(FetchKind::Owner, page(&["2"]), false);

        assert!(data.is_copied(&first));
        assert!(!data.is_copied(&data.nfts[0]));
    }
}
