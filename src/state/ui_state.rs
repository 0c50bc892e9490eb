//! UI state management for the gallery.
//!
//! This module manages presentation concerns only:
//! - Which form element or the gallery has focus
//! - Popup/modal state
//! - Toast notifications
//! - The loading indicator

use super::query::QueryField;

// ============================================================================
// Focus
// ============================================================================

/// Which part of the screen receives keyboard input.
///
/// Tab order follows the screen top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Wallet address input.
    #[default]
    Wallet,
    /// Collection address input.
    Collection,
    /// "Fetch for collection" toggle.
    CollectionToggle,
    /// The card grid.
    Gallery,
}

impl Focus {
    /// Cycles to the next focus target.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Wallet => Self::Collection,
            Self::Collection => Self::CollectionToggle,
            Self::CollectionToggle => Self::Gallery,
            Self::Gallery => Self::Wallet,
        }
    }

    /// Cycles to the previous focus target.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Wallet => Self::Gallery,
            Self::Collection => Self::Wallet,
            Self::CollectionToggle => Self::Collection,
            Self::Gallery => Self::CollectionToggle,
        }
    }

    /// The text field this focus edits, if any.
    #[must_use]
    pub const fn text_field(self) -> Option<QueryField> {
        match self {
            Self::Wallet => Some(QueryField::Wallet),
            Self::Collection => Some(QueryField::Collection),
            Self::CollectionToggle | Self::Gallery => None,
        }
    }
}

// ============================================================================
// Popup State
// ============================================================================

/// Modal popups. Only one can be open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PopupState {
    #[default]
    None,
    /// A message, usually a fetch error.
    Message(String),
}

// ============================================================================
// UI State
// ============================================================================

/// UI state: focus, popup state, toast and loading flag.
///
/// # Example
///
/// ```ignore
/// use crate::state::UiState;
///
/// let mut ui = UiState::new();
/// ui.cycle_focus();
/// ui.show_toast("[+] Copied!", 20);
/// ```
#[derive(Debug, Default)]
pub struct UiState {
    /// What currently has focus.
    pub focus: Focus,

    /// Current popup/modal state.
    pub popup_state: PopupState,

    /// Toast notification message and remaining ticks (non-blocking overlay).
    pub toast: Option<(String, u8)>,

    /// Whether the most recently dispatched fetch is still outstanding.
    pub loading: bool,
}

impl UiState {
    /// Creates a new `UiState` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    /// Opens the message popup.
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    // ========================================================================
    // Toast Notifications
    // ========================================================================

    /// Shows a toast notification (non-blocking overlay that auto-dismisses).
    ///
    /// Duration is in ticks (each tick is ~100ms in the main loop).
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            if *ticks > 1 {
                *ticks -= 1;
                false
            } else {
                self.toast = None;
                true
            }
        } else {
            false
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_through_all_targets() {
        let mut focus = Focus::Wallet;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(focus);
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Wallet);
        assert_eq!(
            seen,
            vec![
                Focus::Wallet,
                Focus::Collection,
                Focus::CollectionToggle,
                Focus::Gallery
            ]
        );
    }

    #[test]
    fn test_prev_inverts_next() {
        for focus in [
            Focus::Wallet,
            Focus::Collection,
            Focus::CollectionToggle,
            Focus::Gallery,
        ] {
            assert_eq!(focus.next().prev(), focus);
        }
    }

    #[test]
    fn test_text_field_mapping() {
        assert_eq!(Focus::Wallet.text_field(), Some(QueryField::Wallet));
        assert_eq!(Focus::Collection.text_field(), Some(QueryField::Collection));
        assert_eq!(Focus::CollectionToggle.text_field(), None);
        assert_eq!(Focus::Gallery.text_field(), None);
    }

    #[test]
    fn test_message_popup_lifecycle() {
        let mut ui = UiState::new();
        assert_eq!(ui.popup_state, PopupState::None);
        ui.show_message("boom");
        assert_eq!(ui.popup_state, PopupState::Message("boom".into()));
        ui.dismiss_popup();
        assert_eq!(ui.popup_state, PopupState::None);
    }

    #[test]
    fn test_toast_countdown() {
        let mut ui = UiState::new();
        ui.show_toast("hello", 2);
        assert!(!ui.tick_toast());
        assert!(ui.toast.is_some());
        assert!(ui.tick_toast());
        assert!(ui.toast.is_none());
        assert!(!ui.tick_toast());
    }
}
