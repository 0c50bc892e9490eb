//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers instead of copy-pasting fixture JSON or app setup
//! across tests.
#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use ratatui::buffer::Buffer;
use serde_json::{Value, json};

use crate::client::AlchemyClient;
use crate::domain::{Network, Nft, NftPage};
use crate::state::platform::browser::LinkOpener;
use crate::state::platform::clipboard::{ClipboardError, ClipboardProvider, ClipboardResult};
use crate::state::{App, StartupOptions};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub const CONTRACT: &str = "0xABCDEF1234567890";

pub struct NftMother;

impl NftMother {
    /// Raw API object for an ERC721 token of [`CONTRACT`].
    #[must_use]
    pub fn json(token_id: &str) -> Value {
        json!({
            "contract": { "address": CONTRACT },
            "id": {
                "tokenId": token_id,
                "tokenMetadata": { "tokenType": "ERC721" }
            },
            "title": format!("Token {token_id}"),
            "description": "A token used in tests",
            "media": [{
                "gateway": format!("https://img.example/{token_id}.png"),
                "raw": format!("ipfs://{token_id}")
            }],
            "contractMetadata": { "name": "Test Collection" }
        })
    }

    #[must_use]
    pub fn with_id(token_id: &str) -> Nft {
        Nft::from_json(&Self::json(token_id))
    }

    /// A record with nothing but an address and id.
    #[must_use]
    pub fn without_media(token_id: &str) -> Nft {
        Nft::from_json(&json!({
            "contract": { "address": CONTRACT },
            "id": { "tokenId": token_id }
        }))
    }
}

pub struct PageMother;

impl PageMother {
    /// A page of tokens with the given ids and next-page cursor.
    #[must_use]
    pub fn with_ids(ids: &[&str], next_page_key: &str) -> NftPage {
        NftPage {
            nfts: ids.iter().map(|id| NftMother::with_id(id)).collect(),
            next_page_key: next_page_key.to_string(),
            total_count: Some(ids.len() as u64),
        }
    }
}

// ============================================================================
// Service Fakes
// ============================================================================

/// Records copied text instead of touching the system clipboard.
#[derive(Debug, Default, Clone)]
pub struct FakeClipboard {
    pub copied: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl ClipboardProvider for FakeClipboard {
    fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        if self.fail {
            return Err(ClipboardError::NotAvailable);
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Records opened URLs instead of launching a browser.
#[derive(Debug, Default, Clone)]
pub struct FakeBrowser {
    pub opened: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl LinkOpener for FakeBrowser {
    fn open_url(&self, url: &str) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::other("no browser"));
        }
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

// ============================================================================
// App Construction
// ============================================================================

/// Creates an App with fake services that never touches the network.
#[must_use]
pub fn create_test_app() -> App {
    create_test_app_with(FakeClipboard::default(), FakeBrowser::default())
}

#[must_use]
pub fn create_test_app_with(clipboard: FakeClipboard, browser: FakeBrowser) -> App {
    let client = AlchemyClient::new(Network::EthMainnet, "test-key", 100)
        .expect("test client should build");
    App::with_services(
        client,
        StartupOptions::default(),
        Box::new(clipboard),
        Box::new(browser),
    )
}

// ============================================================================
// Rendering
// ============================================================================

/// Flattens a buffer into newline-separated rows for `contains` assertions.
#[must_use]
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    (area.y..area.bottom())
        .map(|y| {
            (area.x..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
