//! Clipboard access for the copy-address action.
//!
//! Linux tries `wl-copy`, `xclip` and then `xsel` before `arboard`, since the
//! external tools keep the contents alive after the gallery exits. Other
//! platforms go straight to `arboard`.

use std::fmt;

use thiserror::Error;

/// Clipboard failure shown to the user as a toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard not available")]
    NotAvailable,
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// Anything that can place text on the system clipboard.
pub trait ClipboardProvider: fmt::Debug + Send {
    /// Copies `text` to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard is unavailable or the copy fails.
    fn copy_text(&self, text: &str) -> ClipboardResult<()>;
}

/// External copy commands tried in order on Linux.
#[cfg(target_os = "linux")]
const LINUX_COPY_COMMANDS: [(&str, &[&str]); 3] = [
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// The system clipboard.
#[derive(Debug)]
pub struct ClipboardManager {
    use_external_commands: bool,
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            use_external_commands: cfg!(target_os = "linux"),
        }
    }

    fn copy_with_arboard(text: &str) -> ClipboardResult<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    #[cfg(target_os = "linux")]
    fn copy_with_command(program: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let Ok(mut child) = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            return false;
        };

        // stdin must be closed before waiting or the tool blocks forever
        let written = child
            .stdin
            .take()
            .is_some_and(|mut stdin| stdin.write_all(text.as_bytes()).is_ok());

        written && child.wait().is_ok_and(|status| status.success())
    }

    #[cfg(target_os = "linux")]
    fn copy_with_external_commands(text: &str) -> bool {
        LINUX_COPY_COMMANDS.iter().any(|(program, args)| {
            let copied = Self::copy_with_command(program, args, text);
            if !copied {
                tracing::debug!(program, "Clipboard command unavailable");
            }
            copied
        })
    }

    #[cfg(not(target_os = "linux"))]
    fn copy_with_external_commands(_text: &str) -> bool {
        false
    }
}

impl ClipboardProvider for ClipboardManager {
    fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        if self.use_external_commands && Self::copy_with_external_commands(text) {
            return Ok(());
        }
        Self::copy_with_arboard(text)
    }
}
