//! Command pattern for key event handling.
//!
//! Keys are first resolved against the current [`InputContext`] into an
//! [`AppCommand`]; the app then executes the command. Keeping the mapping
//! pure makes every binding testable without a terminal.
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! let command = map_key(key_event, &context);
//! app.execute_command(command).await?;
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Wallet or collection input has focus.
    TextInput,
    /// The "Fetch for collection" toggle has focus.
    CollectionToggle,
    /// The card grid has focus.
    Gallery,
    /// A message popup is open.
    MessagePopup,
}

impl InputContext {
    /// Returns `true` if this context accepts text input.
    #[must_use]
    pub const fn accepts_text_input(&self) -> bool {
        matches!(self, Self::TextInput)
    }
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Close the open popup.
    Dismiss,

    // === Focus ===
    FocusNext,
    FocusPrev,
    /// Jump to the card grid.
    FocusGallery,
    /// Jump to the wallet input.
    FocusWallet,

    // === Query Form ===
    /// Type a character into the focused input.
    TypeChar(char),
    /// Delete the last character of the focused input.
    Backspace,
    /// Clear the focused input.
    ClearField,
    /// Flip the "Fetch for collection" toggle.
    ToggleCollectionMode,

    // === Fetching ===
    /// Fetch the first page for the current parameters.
    Fetch,
    /// Fetch the page after the one on screen.
    NextPage,

    // === Gallery ===
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Copy the selected card's contract address.
    CopyContract,
    /// Open the selected card's explorer page.
    OpenExplorer,
    /// Open the selected card's image.
    OpenImage,

    /// No operation (key not mapped in current context).
    Noop,
}

// ============================================================================
// Key Mapping
// ============================================================================

/// Maps a key event to a command in the given context.
#[must_use]
pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppCommand::Quit;
    }

    match context {
        InputContext::TextInput => map_text_input_keys(key),
        InputContext::CollectionToggle => map_toggle_keys(key),
        InputContext::Gallery => map_gallery_keys(key),
        InputContext::MessagePopup => map_message_popup_keys(key),
    }
}

/// Maps keys while typing into an address input.
fn map_text_input_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc => AppCommand::FocusGallery,
        KeyCode::Enter => AppCommand::Fetch,
        KeyCode::Tab | KeyCode::Down => AppCommand::FocusNext,
        KeyCode::BackTab | KeyCode::Up => AppCommand::FocusPrev,
        KeyCode::Backspace => AppCommand::Backspace,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            AppCommand::ClearField
        }
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => AppCommand::Noop,
        KeyCode::Char(c) => AppCommand::TypeChar(c),
        _ => AppCommand::Noop,
    }
}

/// Maps keys on the collection toggle.
fn map_toggle_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('x') => AppCommand::ToggleCollectionMode,
        KeyCode::Enter | KeyCode::Char('f') => AppCommand::Fetch,
        KeyCode::Char('n') => AppCommand::NextPage,
        KeyCode::Tab | KeyCode::Down => AppCommand::FocusNext,
        KeyCode::BackTab | KeyCode::Up => AppCommand::FocusPrev,
        KeyCode::Esc => AppCommand::FocusGallery,
        KeyCode::Char('q') => AppCommand::Quit,
        _ => AppCommand::Noop,
    }
}

/// Maps keys in the card grid.
fn map_gallery_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('q') => AppCommand::Quit,
        KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
        KeyCode::Left | KeyCode::Char('h') => AppCommand::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') => AppCommand::MoveRight,
        KeyCode::Char('c') => AppCommand::CopyContract,
        KeyCode::Enter | KeyCode::Char('o') => AppCommand::OpenExplorer,
        KeyCode::Char('i') => AppCommand::OpenImage,
        KeyCode::Char('n') => AppCommand::NextPage,
        KeyCode::Char('f') => AppCommand::Fetch,
        KeyCode::Tab => AppCommand::FocusNext,
        KeyCode::BackTab => AppCommand::FocusPrev,
        KeyCode::Esc | KeyCode::Char('/') => AppCommand::FocusWallet,
        _ => AppCommand::Noop,
    }
}

/// Maps keys in the message popup.
fn map_message_popup_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => AppCommand::Dismiss,
        _ => AppCommand::Noop,
    }
}

// ============================================================================
// Tests
// ============================================================================
