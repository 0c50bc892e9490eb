//! User-triggered actions: fetching, paging, copying and opening links.

use crate::domain::{FetchKind, GalleryError, NftQuery};

use super::{App, AppMessage, QueryField};

/// Toast duration in ticks (~2 seconds).
const TOAST_TICKS: u8 = 20;

impl App {
    // ========================================================================
    // Fetching
    // ========================================================================

    /// Fetches every NFT owned by the wallet.
    ///
    /// An empty wallet is rejected with a message instead of a request.
    pub fn fetch_by_owner(&mut self) {
        match self.query.owner_query() {
            Some(query) => self.dispatch_fetch(query, false),
            None => self.reject_missing_wallet(),
        }
    }

    /// Fetches the wallet's NFTs in the chosen collection.
    ///
    /// Does nothing while the collection is empty. With no wallet the whole
    /// collection is listed.
    pub fn fetch_by_owner_and_collection(&mut self) {
        match self.query.collection_query() {
            Some(query) => self.dispatch_fetch(query, false),
            None => tracing::debug!("Collection fetch skipped: no collection address"),
        }
    }

    /// Starts a fresh search from the first page, picking the fetch function
    /// from the collection flag.
    ///
    /// The stored cursor is left alone until the response is applied, so a
    /// failed search keeps Next usable for the list still on screen.
    pub fn fetch(&mut self) {
        match self.fetch_query() {
            Some(query) => self.dispatch_fetch(query, false),
            None if self.query.collection_mode() => {
                tracing::debug!("Collection fetch skipped: no collection address");
            }
            None => self.reject_missing_wallet(),
        }
    }

    /// First-page request for the current form, or `None` when the field the
    /// mode needs is empty.
    #[must_use]
    pub fn fetch_query(&self) -> Option<NftQuery> {
        let query = if self.query.collection_mode() {
            self.query.collection_query()
        } else {
            self.query.owner_query()
        };
        query.map(NftQuery::first_page)
    }

    /// Repeats the last fetch with the stored cursor.
    ///
    /// No-op when there is no further page.
    pub fn next_page(&mut self) {
        if let Some(query) = self.next_page_query() {
            self.dispatch_fetch(query, true);
        }
    }

    /// The request "next page" would send: the kind of the last applied
    /// fetch, continued from the stored cursor.
    #[must_use]
    pub fn next_page_query(&self) -> Option<NftQuery> {
        if !self.query.has_next_page() {
            return None;
        }
        match self.data.last_fetch? {
            FetchKind::Owner => self.query.owner_query(),
            FetchKind::OwnerInCollection | FetchKind::Collection => {
                self.query.collection_query()
            }
        }
    }

    fn reject_missing_wallet(&mut self) {
        let error = GalleryError::invalid_input("Enter a wallet address to fetch its NFTs");
        self.ui.show_message(error.to_string());
    }

    /// Spawns the request and marks it as the one whose response counts.
    pub(crate) fn dispatch_fetch(&mut self, query: NftQuery, continued: bool) {
        self.fetch_generation = self.fetch_generation.wrapping_add(1);
        let generation = self.fetch_generation;
        let kind = query.kind();
        self.ui.loading = true;

        tracing::info!(
            kind = kind.as_str(),
            cursor = query.cursor(),
            continued,
            generation,
            network = %self.network,
            "Dispatching NFT fetch"
        );

        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = match &query {
                NftQuery::Owner { owner, page_key } => {
                    client.get_nfts_for_owner(owner, page_key).await
                }
                NftQuery::OwnerInCollection {
                    owner,
                    contract,
                    page_key,
                } => {
                    client
                        .get_nfts_for_owner_in_collection(owner, contract, page_key)
                        .await
                }
                NftQuery::Collection {
                    contract,
                    start_token,
                } => client.get_nfts_for_collection(contract, start_token).await,
            };
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = message_tx.send(AppMessage::NftsFetched {
                generation,
                kind,
                continued,
                result: result.map_err(|e| e.to_string()),
            });
        });
    }

    // ========================================================================
    // Query Editing
    // ========================================================================

    /// Invalidates any outstanding fetch after a parameter edit.
    pub(crate) fn invalidate_pending_fetch(&mut self) {
        self.fetch_generation = self.fetch_generation.wrapping_add(1);
        self.ui.loading = false;
    }

    pub(crate) fn edit_field(&mut self, edit: impl FnOnce(&mut super::QueryParams, QueryField)) {
        if let Some(field) = self.ui.focus.text_field() {
            edit(&mut self.query, field);
            self.invalidate_pending_fetch();
        }
    }

    pub fn toggle_collection_mode(&mut self) {
        self.query.toggle_collection_mode();
        self.invalidate_pending_fetch();
    }

    /// Inserts pasted text into the focused input.
    pub fn handle_paste(&mut self, text: &str) {
        self.edit_field(|query, field| query.push_str(field, text));
    }

    // ========================================================================
    // Card Actions
    // ========================================================================

    /// Copies the selected card's contract address to the clipboard.
    pub fn copy_selected_contract(&mut self) {
        let Some(nft) = self.selected_nft().cloned() else {
            return;
        };
        match self.clipboard.copy_text(&nft.contract_address) {
            Ok(()) => {
                self.data.mark_copied(&nft);
                self.ui.show_toast("[+] Copied!", TOAST_TICKS);
            }
            Err(err) => {
                tracing::warn!("Clipboard copy failed: {err}");
                self.ui.show_toast(format!("[x] {err}"), TOAST_TICKS);
            }
        }
    }

    /// Opens the selected card's token page on the network's explorer.
    pub fn open_selected_explorer(&mut self) {
        let network = self.network;
        let Some(url) = self
            .selected_nft()
            .map(|nft| network.token_url(&nft.contract_address))
        else {
            return;
        };
        self.open_link(&url, network.explorer_name());
    }

    /// Opens the selected card's image URL.
    pub fn open_selected_image(&mut self) {
        let Some(nft) = self.selected_nft() else {
            return;
        };
        match nft.image_url().map(String::from) {
            Some(url) => self.open_link(&url, "image"),
            None => self.ui.show_toast("[x] No image for this NFT", TOAST_TICKS),
        }
    }

    fn open_link(&mut self, url: &str, label: &str) {
        match self.browser.open_url(url) {
            Ok(()) => self
                .ui
                .show_toast(format!("Opened {label} in browser"), TOAST_TICKS),
            Err(err) => {
                tracing::warn!(url, "Failed to open link: {err}");
                self.ui.show_toast("[x] Could not open browser", TOAST_TICKS);
            }
        }
    }
}
