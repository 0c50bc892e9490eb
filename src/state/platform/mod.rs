//! Platform-specific abstractions.
//!
//! - [`clipboard`] - Cross-platform clipboard access
//! - [`paths`] - Configuration and log file locations
//! - [`browser`] - Opening outbound links

pub mod browser;
pub mod clipboard;
pub mod paths;

pub use clipboard::{ClipboardManager, ClipboardProvider};
pub use paths::AppPaths;
