//! Command execution and input handling.
//!
//! Keys are mapped to [`AppCommand`]s by [`map_key`] using the context
//! returned from [`App::get_input_context`], then executed here.

use crossterm::event::KeyEvent;

use super::{App, Focus, PopupState};
use crate::commands::{AppCommand, InputContext, map_key};

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines which keybindings are active.
    ///
    /// Popups take precedence over focus.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        match &self.ui.popup_state {
            PopupState::Message(_) => InputContext::MessagePopup,
            PopupState::None => match self.ui.focus {
                Focus::Wallet | Focus::Collection => InputContext::TextInput,
                Focus::CollectionToggle => InputContext::CollectionToggle,
                Focus::Gallery => InputContext::Gallery,
            },
        }
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::Dismiss => {
                self.ui.dismiss_popup();
            }

            // === Focus ===
            AppCommand::FocusNext => {
                self.ui.cycle_focus();
            }
            AppCommand::FocusPrev => {
                self.ui.cycle_focus_back();
            }
            AppCommand::FocusGallery => {
                self.ui.focus = Focus::Gallery;
            }
            AppCommand::FocusWallet => {
                self.ui.focus = Focus::Wallet;
            }

            // === Query Form ===
            AppCommand::TypeChar(c) => {
                self.edit_field(|query, field| query.push_char(field, c));
            }
            AppCommand::Backspace => {
                self.edit_field(|query, field| query.pop_char(field));
            }
            AppCommand::ClearField => {
                self.edit_field(|query, field| query.clear_field(field));
            }
            AppCommand::ToggleCollectionMode => {
                self.toggle_collection_mode();
            }

            // === Fetching ===
            AppCommand::Fetch => {
                self.fetch();
            }
            AppCommand::NextPage => {
                self.next_page();
            }

            // === Gallery ===
            AppCommand::MoveUp => {
                self.nav.move_up(self.grid_columns());
            }
            AppCommand::MoveDown => {
                self.nav.move_down(self.data.len(), self.grid_columns());
            }
            AppCommand::MoveLeft => {
                self.nav.move_left(self.data.len());
            }
            AppCommand::MoveRight => {
                self.nav.move_right(self.data.len());
            }
            AppCommand::CopyContract => {
                self.copy_selected_contract();
            }
            AppCommand::OpenExplorer => {
                self.open_selected_explorer();
            }
            AppCommand::OpenImage => {
                self.open_selected_image();
            }

            AppCommand::Noop => {}
        }
    }
}
