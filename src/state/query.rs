//! User-entered query parameters.
//!
//! Every parameter edit goes through a setter that clears the page cursor, so
//! changing what is being asked for always restarts pagination from page one.
//! Only applied fetch responses store a non-empty cursor.

use crate::domain::NftQuery;

// ============================================================================
// Query Field
// ============================================================================

/// The editable text fields of the query form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryField {
    Wallet,
    Collection,
}

// ============================================================================
// Query Params
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    wallet: String,
    collection: String,
    collection_mode: bool,
    page_key: String,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn collection_mode(&self) -> bool {
        self.collection_mode
    }

    /// Whether the API reported a further page; an empty cursor means first
    /// page or no further page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        !self.page_key.is_empty()
    }

    #[must_use]
    pub fn field(&self, field: QueryField) -> &str {
        match field {
            QueryField::Wallet => &self.wallet,
            QueryField::Collection => &self.collection,
        }
    }

    pub fn set_wallet(&mut self, wallet: impl Into<String>) {
        self.wallet = wallet.into();
        self.reset_page();
    }

    pub fn set_collection(&mut self, collection: impl Into<String>) {
        self.collection = collection.into();
        self.reset_page();
    }

    pub fn set_collection_mode(&mut self, enabled: bool) {
        self.collection_mode = enabled;
        self.reset_page();
    }

    pub fn toggle_collection_mode(&mut self) {
        self.set_collection_mode(!self.collection_mode);
    }

    /// Appends a character to a text field.
    pub fn push_char(&mut self, field: QueryField, c: char) {
        self.text_mut(field).push(c);
        self.reset_page();
    }

    /// Appends pasted text, dropping line breaks and surrounding whitespace.
    pub fn push_str(&mut self, field: QueryField, text: &str) {
        let cleaned: String = text.trim().chars().filter(|c| !c.is_control()).collect();
        self.text_mut(field).push_str(&cleaned);
        self.reset_page();
    }

    /// Removes the last character of a text field.
    pub fn pop_char(&mut self, field: QueryField) {
        self.text_mut(field).pop();
        self.reset_page();
    }

    pub fn clear_field(&mut self, field: QueryField) {
        self.text_mut(field).clear();
        self.reset_page();
    }

    /// Clears the cursor so the next fetch starts at page one.
    fn reset_page(&mut self) {
        self.page_key.clear();
    }

    /// Stores the cursor returned by the API.
    pub(crate) fn set_page_key(&mut self, page_key: impl Into<String>) {
        self.page_key = page_key.into();
    }

    fn text_mut(&mut self, field: QueryField) -> &mut String {
        match field {
            QueryField::Wallet => &mut self.wallet,
            QueryField::Collection => &mut self.collection,
        }
    }

    // ========================================================================
    // Request Building
    // ========================================================================

    /// Owner-only request, or `None` without a wallet.
    #[must_use]
    pub fn owner_query(&self) -> Option<NftQuery> {
        let owner = self.wallet.trim();
        (!owner.is_empty()).then(|| NftQuery::Owner {
            owner: owner.to_string(),
            page_key: self.page_key.clone(),
        })
    }

    /// Collection-aware request, or `None` without a collection.
    ///
    /// With a wallet this asks for that wallet's NFTs in the collection;
    /// without one it lists the whole collection.
    #[must_use]
    pub fn collection_query(&self) -> Option<NftQuery> {
        let contract = self.collection.trim();
        if contract.is_empty() {
            return None;
        }

        let owner = self.wallet.trim();
        Some(if owner.is_empty() {
            NftQuery::Collection {
                contract: contract.to_string(),
                start_token: self.page_key.clone(),
            }
        } else {
            NftQuery::OwnerInCollection {
                owner: owner.to_string(),
                contract: contract.to_string(),
                page_key: self.page_key.clone(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
