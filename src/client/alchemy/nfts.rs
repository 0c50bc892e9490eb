//! NFT fetching methods for AlchemyClient.

use serde_json::Value;

use super::AlchemyClient;
use crate::domain::{GalleryError, Nft, NftPage, NftQuery};

impl AlchemyClient {
    /// All NFTs owned by `owner`, starting at `page_key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a non-2xx
    /// status, or the body lacks `ownedNfts`.
    pub async fn get_nfts_for_owner(
        &self,
        owner: &str,
        page_key: &str,
    ) -> Result<NftPage, GalleryError> {
        self.fetch(&NftQuery::Owner {
            owner: owner.to_string(),
            page_key: page_key.to_string(),
        })
        .await
    }

    /// NFTs of one collection owned by `owner`.
    ///
    /// # Errors
    ///
    /// Same as [`AlchemyClient::get_nfts_for_owner`].
    pub async fn get_nfts_for_owner_in_collection(
        &self,
        owner: &str,
        contract: &str,
        page_key: &str,
    ) -> Result<NftPage, GalleryError> {
        self.fetch(&NftQuery::OwnerInCollection {
            owner: owner.to_string(),
            contract: contract.to_string(),
            page_key: page_key.to_string(),
        })
        .await
    }

    /// Every NFT in a collection, with metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body lacks `nfts`.
    pub async fn get_nfts_for_collection(
        &self,
        contract: &str,
        start_token: &str,
    ) -> Result<NftPage, GalleryError> {
        self.fetch(&NftQuery::Collection {
            contract: contract.to_string(),
            start_token: start_token.to_string(),
        })
        .await
    }

    /// Runs any query and parses the page for its endpoint.
    ///
    /// # Errors
    ///
    /// See the endpoint-specific methods.
    pub async fn fetch(&self, query: &NftQuery) -> Result<NftPage, GalleryError> {
        let url = self.query_url(query)?;
        let redacted = self.redact(&url);
        tracing::debug!("GET {redacted}");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .inspect_err(|e| tracing::warn!("Request to {redacted} failed: {e}"))?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!("{redacted} returned HTTP {status}");
        }

        let page = Self::parse_response(query, status.as_u16(), &body)?;
        tracing::info!(
            "Fetched {} NFTs ({}), more pages: {}",
            page.nfts.len(),
            query.kind().as_str(),
            !page.next_page_key.is_empty()
        );
        Ok(page)
    }

    /// Turns a status code and raw body into a page for the query's endpoint.
    ///
    /// # Errors
    ///
    /// `Api` for a non-2xx status, `MalformedResponse` when the body is not
    /// JSON or lacks the endpoint's list field.
    pub(crate) fn parse_response(
        query: &NftQuery,
        status: u16,
        body: &str,
    ) -> Result<NftPage, GalleryError> {
        if !(200..300).contains(&status) {
            return Err(GalleryError::api(status, body));
        }

        let data: Value = serde_json::from_str(body)
            .map_err(|e| GalleryError::malformed(format!("response is not JSON: {e}")))?;

        match query {
            NftQuery::Owner { .. } | NftQuery::OwnerInCollection { .. } => {
                Self::parse_owned_page(&data)
            }
            NftQuery::Collection { .. } => Self::parse_collection_page(&data),
        }
    }

    /// Parses a `getNFTs` response.
    pub(crate) fn parse_owned_page(data: &Value) -> Result<NftPage, GalleryError> {
        let nfts = data["ownedNfts"]
            .as_array()
            .ok_or_else(|| GalleryError::malformed("missing `ownedNfts` array"))?;

        Ok(NftPage {
            nfts: nfts.iter().map(Nft::from_json).collect(),
            next_page_key: data["pageKey"].as_str().unwrap_or("").to_string(),
            total_count: data["totalCount"].as_u64(),
        })
    }

    /// Parses a `getNFTsForCollection` response.
    pub(crate) fn parse_collection_page(data: &Value) -> Result<NftPage, GalleryError> {
        let nfts = data["nfts"]
            .as_array()
            .ok_or_else(|| GalleryError::malformed("missing `nfts` array"))?;

        Ok(NftPage {
            nfts: nfts.iter().map(Nft::from_json).collect(),
            next_page_key: data["nextToken"].as_str().unwrap_or("").to_string(),
            total_count: None,
        })
    }
}
