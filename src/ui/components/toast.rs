//! Toast notification component.
//!
//! A non-blocking overlay in the bottom-right corner, just above the
//! footer. Copy confirmations and failures are reported this way.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

const MIN_TOAST_WIDTH: u16 = 20;
const TOAST_HEIGHT: u16 = 3;
/// Borders plus one cell of padding each side.
const TOAST_WIDTH_PADDING: u16 = 4;
const TOAST_MARGIN: u16 = 2;

/// Renders a toast notification.
///
/// Messages prefixed with `[+]` are shown in the success color, `[x]` in
/// the error color, anything else in white.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_area(area, message);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(toast_area);

    frame.render_widget(Clear, toast_area);
    frame.render_widget(block, toast_area);
    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(text_color(message)))
            .alignment(Alignment::Center),
        inner,
    );
}

#[must_use]
fn toast_area(area: Rect, message: &str) -> Rect {
    let width = (message.chars().count() as u16 + TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);
    let height = TOAST_HEIGHT.min(area.height);

    Rect::new(
        area.x + area.width.saturating_sub(width + TOAST_MARGIN),
        area.y + area.height.saturating_sub(height + TOAST_MARGIN),
        width,
        height,
    )
}

#[must_use]
fn text_color(message: &str) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else if message.starts_with("[x]") {
        ERROR_COLOR
    } else {
        Color::White
    }
}

// ============================================================================
// Tests
// ============================================================================
