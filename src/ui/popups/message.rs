//! Message popup for fetch failures and input problems.
//!
//! Sized to its content and dismissed with Esc, Enter or q.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::{BORDER_STYLE, MUTED_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

const MIN_WIDTH: u16 = 40;
const HELP_TEXT: &str = "Esc/Enter: close";

/// Width and height that fit `message`, before clamping to the screen.
#[must_use]
fn popup_size(area: Rect, message: &str) -> (u16, u16) {
    let lines = message.lines().count().max(1) as u16;
    let longest = message
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as u16;

    let width = (longest + 6).max(MIN_WIDTH).min(area.width * 8 / 10);
    // Long lines wrap; reserve a row for each wrap.
    let wrapped = u16::try_from(message.chars().count())
        .unwrap_or(u16::MAX)
        .div_ceil(width.saturating_sub(4).max(1));
    let height = lines.max(wrapped) + 4;
    (width, height)
}

pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let (width, height) = popup_size(area, message);
    let popup_area = centered_popup_area(area, width, height);

    let block = create_popup_block("Message");
    let inner = block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    let [body, separator, help] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );
    frame.render_widget(
        Paragraph::new("─".repeat(usize::from(separator.width))).style(BORDER_STYLE),
        separator,
    );
    frame.render_widget(
        Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center),
        help,
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(message: &str) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), message))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_message_and_help_are_shown() {
        let content = draw("Failed to fetch NFTs: API error (401): Must be authenticated!");

        assert!(content.contains("Message"));
        assert!(content.contains("Failed to fetch NFTs"));
        assert!(content.contains(HELP_TEXT));
    }

    #[test]
    fn test_empty_and_multiline_messages_render() {
        assert!(draw("").contains(HELP_TEXT));
        let content = draw("first\nsecond");
        assert!(content.contains("first"));
        assert!(content.contains("second"));
    }

    #[test]
    fn test_popup_size() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(popup_size(area, "short"), (MIN_WIDTH, 5));
        let (width, height) = popup_size(area, &"x".repeat(200));
        assert_eq!(width, 64);
        assert!(height > 5);
    }
}
