//! State management for the gallery TUI.
//!
//! The state is split into focused sub-states:
//!
//! - [`QueryParams`] - wallet, collection, collection flag and page cursor
//! - [`DataState`] - the current page of NFTs and per-card flags
//! - [`NavigationState`] - card selection
//! - [`UiState`] - focus, popups, toasts, loading
//! - [`AppConfig`] - persistent configuration with load/save capabilities
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                           App                             │
//! ├──────────────┬──────────────┬──────────────┬──────────────┤
//! │ QueryParams  │  DataState   │ Navigation   │   UiState    │
//! │  - wallet    │  - nfts      │  - selected  │  - focus     │
//! │  - collection│  - page no.  │              │  - popups    │
//! │  - cursor    │  - copied    │              │  - loading   │
//! └──────────────┴──────────────┴──────────────┴──────────────┘
//! ```
//!
//! Fetches run on tokio tasks and report back through [`AppMessage`]. Each
//! dispatch carries a generation number; only the response matching the
//! latest generation is applied.

use tokio::sync::mpsc;

use crate::client::AlchemyClient;
use crate::domain::{FetchKind, Network, NftPage};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_actions;
mod app_commands;
mod app_lifecycle;
mod app_messages;

pub mod config;
pub mod data;
pub mod navigation;
pub mod platform;
pub mod query;
pub mod ui_state;


// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use data::DataState;
pub use navigation::NavigationState;
pub use query::{QueryField, QueryParams};
pub use ui_state::{Focus, PopupState, UiState};

use platform::ClipboardProvider;
use platform::browser::LinkOpener;

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A fetch finished.
    NftsFetched {
        /// Generation the fetch was dispatched under.
        generation: u64,
        /// Which fetch function ran.
        kind: FetchKind,
        /// Whether this was a "next page" request.
        continued: bool,
        result: Result<NftPage, String>,
    },
}

// ============================================================================
// Startup Options
// ============================================================================

/// Query parameters supplied on the command line.
///
/// When a wallet or collection is given, a fetch runs as soon as the loop
/// starts.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    pub wallet: Option<String>,
    pub collection: Option<String>,
    pub collection_mode: bool,
}

impl StartupOptions {
    /// Returns `true` if there is anything to fetch on startup.
    #[must_use]
    pub fn wants_fetch(&self) -> bool {
        filled(&self.wallet) || filled(&self.collection)
    }

    /// Collection mode is on when asked for, or when a collection is given
    /// without a wallet, since an owner fetch would have nothing to ask for.
    #[must_use]
    pub fn enables_collection_mode(&self) -> bool {
        self.collection_mode || (filled(&self.collection) && !filled(&self.wallet))
    }
}

fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    // ========================================================================
    // Sub-states
    // ========================================================================
    /// Query form contents and page cursor.
    pub query: QueryParams,

    /// Fetched records.
    pub data: DataState,

    /// Card selection.
    pub nav: NavigationState,

    /// Focus, popups, toasts.
    pub ui: UiState,

    // ========================================================================
    // App-level state
    // ========================================================================
    /// Chain being queried.
    pub network: Network,

    /// Whether the application should exit.
    pub exit: bool,

    /// Animation frame counter for the loading spinner.
    pub animation_tick: u64,

    /// Terminal width used to lay out the card grid.
    pub terminal_width: u16,

    /// Bumped on every dispatch and every parameter edit.
    pub(crate) fetch_generation: u64,

    // ========================================================================
    // Async communication
    // ========================================================================
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    // ========================================================================
    // Services
    // ========================================================================
    pub(crate) client: AlchemyClient,
    pub(crate) clipboard: Box<dyn ClipboardProvider>,
    pub(crate) browser: Box<dyn LinkOpener>,

    /// Consumed by the first iteration of the run loop.
    pub(crate) startup_options: Option<StartupOptions>,
}

impl App {
    /// Number of card columns for the current terminal width.
    #[must_use]
    pub fn grid_columns(&self) -> usize {
        crate::ui::gallery::columns_for_width(self.terminal_width)
    }

    /// The card under the cursor.
    #[must_use]
    pub fn selected_nft(&self) -> Option<&crate::domain::Nft> {
        self.nav.selected.and_then(|index| self.data.get(index))
    }

    /// Whether a "next page" request would do anything. The Next control
    /// is enabled exactly when this holds.
    #[must_use]
    pub fn can_load_next_page(&self) -> bool {
        self.query.has_next_page()
    }
}
