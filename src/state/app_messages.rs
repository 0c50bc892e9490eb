//! Message processing for fetch results.

use super::{App, AppMessage};

impl App {
    /// Drains the message channel without blocking.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::NftsFetched {
                generation,
                kind,
                continued,
                result,
            } => {
                if generation != self.fetch_generation {
                    tracing::debug!(
                        generation,
                        current = self.fetch_generation,
                        "Discarding stale fetch response"
                    );
                    return;
                }
                self.ui.loading = false;

                match result {
                    Ok(page) => {
                        tracing::info!(
                            kind = kind.as_str(),
                            count = page.nfts.len(),
                            has_next = !page.next_page_key.is_empty(),
                            "Fetch applied"
                        );
                        self.query.set_page_key(page.next_page_key.clone());
                        self.data.replace_page(kind, page, continued);
                        self.nav.reset(self.data.len());
                    }
                    Err(error) => {
                        tracing::error!(kind = kind.as_str(), "Fetch failed: {error}");
                        self.ui.show_message(format!("Failed to fetch NFTs: {error}"));
                    }
                }
            }
        }
    }
}
