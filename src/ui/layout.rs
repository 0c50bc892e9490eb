//! Layout calculations for the gallery screen.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT, QUERY_FORM_HEIGHT};

// ============================================================================
// Layout Structs
// ============================================================================

/// Top-level screen areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// App name, network, page counter, spinner.
    pub header: Rect,
    /// Wallet, collection, toggle and buttons.
    pub form: Rect,
    /// Card grid.
    pub gallery: Rect,
    /// Key hints.
    pub footer: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Splits the terminal area into the screen sections.
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let [header, form, gallery, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(QUERY_FORM_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    AppLayout {
        header,
        form,
        gallery,
        footer,
    }
}

/// Calculate a centered popup area within a parent area, keeping a
/// two-cell margin.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================
