//! UI rendering.
//!
//! # Module Structure
//!
//! - `header` - App name, network, fetch status
//! - `query_form` - Wallet/collection inputs, toggle, buttons
//! - `gallery` - Card grid
//! - `card` - Single NFT card widget
//! - `footer` - Key hints
//! - `popups` - Modal dialogs
//! - `components` - Toast overlay
//! - `layout` / `helpers` - Shared layout and block styling

pub mod card;
pub mod components;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod popups;
pub mod query_form;

use ratatui::Frame;

use crate::state::{App, PopupState};

/// Draws the whole screen: sections first, then popups, then the toast.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let areas = layout::calculate_app_layout(size);

    header::render(frame, areas.header, app);
    query_form::render(frame, areas.form, app);
    gallery::render(frame, areas.gallery, app);
    footer::render(frame, areas.footer, app);

    if let PopupState::Message(message) = &app.ui.popup_state {
        popups::render_message_popup(frame, size, message);
    }

    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FetchKind;
    use crate::state::Focus;
    use crate::test_utils::{PageMother, buffer_to_string, create_test_app};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_initial_screen() {
        let app = create_test_app();
        let content = draw(&app, 120, 30);

        assert!(content.contains("[nftgallery]"));
        assert!(content.contains("Enter a wallet address"));
        assert!(content.contains("[Next]"));
    }

    #[test]
    fn test_cards_rendered_after_fetch() {
        let mut app = create_test_app();
        app.ui.focus = Focus::Gallery;
        app.data.replace_page(
            FetchKind::Owner,
            PageMother::with_ids(&["1111", "2222", "3333"], "next"),
            false,
        );
        app.nav.reset(app.data.len());
        let content = draw(&app, 120, 30);

        assert!(content.contains("NFTs - page 1 (3 of 3)"));
        assert!(content.contains("Token 1111"));
        assert!(content.contains("Token 3333"));
        assert!(content.contains("#2222"));
    }

    #[test]
    fn test_grid_scrolls_to_selection() {
        let mut app = create_test_app();
        app.ui.focus = Focus::Gallery;
        let ids: Vec<String> = (0..12).map(|i| format!("{i:04}")).collect();
        let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
        app.data
            .replace_page(FetchKind::Owner, PageMother::with_ids(&ids, ""), false);
        // 80 columns: two cards per row, one visible row in 20 rows.
        app.nav.selected = Some(11);
        let content = draw(&app, 80, 20);

        assert!(content.contains("Token 0011"));
        assert!(!content.contains("Token 0000"));
    }

    #[test]
    fn test_message_popup_and_toast_overlay() {
        let mut app = create_test_app();
        app.ui.show_message("Failed to fetch NFTs: timeout");
        app.ui.show_toast("[+] Copied!", 5);
        let content = draw(&app, 120, 30);

        assert!(content.contains("Failed to fetch NFTs: timeout"));
        assert!(content.contains("[+] Copied!"));
    }
}
