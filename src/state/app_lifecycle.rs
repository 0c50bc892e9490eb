//! Application lifecycle management.
//!
//! - `new()` - Creates a new application instance
//! - `run()` - Main event loop
//! - Startup fetch from command-line parameters

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Instant;
use tokio::sync::mpsc;

use crate::client::AlchemyClient;
use crate::constants::{DEFAULT_TERMINAL_WIDTH, TICK_RATE};
use crate::tui::Tui;
use crate::ui;

use super::platform::browser::{LinkOpener, SystemBrowser};
use super::platform::{ClipboardManager, ClipboardProvider};
use super::{App, DataState, Focus, NavigationState, QueryParams, StartupOptions, UiState};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App using the system clipboard and browser.
    #[must_use]
    pub fn new(client: AlchemyClient, startup_options: StartupOptions) -> Self {
        Self::with_services(
            client,
            startup_options,
            Box::new(ClipboardManager::new()),
            Box::new(SystemBrowser),
        )
    }

    /// Creates a new App with explicit clipboard and browser implementations.
    #[must_use]
    pub fn with_services(
        client: AlchemyClient,
        startup_options: StartupOptions,
        clipboard: Box<dyn ClipboardProvider>,
        browser: Box<dyn LinkOpener>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            query: QueryParams::new(),
            data: DataState::new(),
            nav: NavigationState::new(),
            ui: UiState::new(),
            network: client.network(),
            exit: false,
            animation_tick: 0,
            terminal_width: DEFAULT_TERMINAL_WIDTH,
            fetch_generation: 0,
            message_tx,
            message_rx,
            client,
            clipboard,
            browser,
            startup_options: Some(startup_options),
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.terminal_width = terminal.size()?.width;
        self.apply_startup_options();

        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Paste(text) => {
                        self.handle_paste(&text);
                    }
                    Event::Resize(width, _) => {
                        self.terminal_width = width;
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.animation_tick = self.animation_tick.wrapping_add(1);
                self.ui.tick_toast();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    /// Fills the query form from command-line options and fetches if
    /// anything was supplied.
    pub(crate) fn apply_startup_options(&mut self) {
        let Some(options) = self.startup_options.take() else {
            return;
        };
        let wants_fetch = options.wants_fetch();
        let collection_mode = options.enables_collection_mode();

        if let Some(wallet) = options.wallet {
            self.query.set_wallet(wallet.trim());
        }
        if let Some(collection) = options.collection {
            self.query.set_collection(collection.trim());
        }
        self.query.set_collection_mode(collection_mode);

        if wants_fetch {
            self.ui.focus = Focus::Gallery;
            self.fetch();
        }
    }
}
