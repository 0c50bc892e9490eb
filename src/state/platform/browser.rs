//! Opening outbound links (explorer pages, images) in the system browser.

use std::fmt;
use std::io;

/// Anything that can open a URL in a new browsing context.
pub trait LinkOpener: fmt::Debug + Send {
    /// Opens `url` without blocking the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if no handler could be launched.
    fn open_url(&self, url: &str) -> io::Result<()>;
}

/// Opens links with the platform's default handler via the `open` crate.
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open_url(&self, url: &str) -> io::Result<()> {
        tracing::debug!("Opening {url}");
        open::that_detached(url)
    }
}
