//! Footer with key hints for the focused area.
//!
//! The `n:Next` hint is dimmed whenever there is no further page.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{App, Focus};
use crate::theme::{DISABLED_STYLE, KEY_STYLE, MUTED_COLOR};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let hints: &[(&str, &str)] = match app.ui.focus {
        Focus::Wallet | Focus::Collection => &[
            ("Enter", "Fetch"),
            ("Tab", "Next field"),
            ("^U", "Clear"),
            ("Esc", "Gallery"),
        ],
        Focus::CollectionToggle => &[
            ("Space", "Toggle"),
            ("Enter", "Fetch"),
            ("Tab", "Next field"),
        ],
        Focus::Gallery => &[
            ("←↑↓→", "Move"),
            ("c", "Copy"),
            ("o", "Explorer"),
            ("i", "Image"),
            ("f", "Fetch"),
            ("/", "Edit"),
            ("q", "Quit"),
        ],
    };

    let mut spans = Vec::new();
    for (key, label) in hints {
        push_hint(&mut spans, key, label, KEY_STYLE, Style::new().fg(MUTED_COLOR));
    }
    // `n` is typed as text while an input has focus
    if !app.get_input_context().accepts_text_input() {
        if app.can_load_next_page() {
            push_hint(&mut spans, "n", "Next", KEY_STYLE, Style::new().fg(MUTED_COLOR));
        } else {
            push_hint(&mut spans, "n", "Next", DISABLED_STYLE, DISABLED_STYLE);
        }
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn push_hint(
    spans: &mut Vec<Span<'static>>,
    key: &str,
    label: &str,
    key_style: Style,
    label_style: Style,
) {
    if !spans.is_empty() {
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(key.to_string(), key_style));
    spans.push(Span::styled(format!(":{label}"), label_style));
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, create_test_app};
    use ratatui::{Terminal, backend::TestBackend, style::Modifier};

    fn draw(app: &App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        terminal
    }

    fn next_hint_is_dimmed(terminal: &Terminal<TestBackend>) -> bool {
        let buffer = terminal.backend().buffer();
        let content = buffer_to_string(buffer);
        let column = content
            .chars()
            .collect::<Vec<_>>()
            .windows(6)
            .position(|w| w.iter().collect::<String>() == "n:Next")
            .expect("footer should show n:Next");
        buffer[(column as u16, 0)].modifier.contains(Modifier::DIM)
    }

    #[test]
    fn test_gallery_hints() {
        let mut app = create_test_app();
        app.ui.focus = Focus::Gallery;
        let content = buffer_to_string(draw(&app).backend().buffer());

        for hint in ["c:Copy", "o:Explorer", "i:Image", "q:Quit", "n:Next"] {
            assert!(content.contains(hint), "missing {hint} in {content}");
        }
    }

    #[test]
    fn test_text_input_hints_omit_next() {
        let app = create_test_app();
        let content = buffer_to_string(draw(&app).backend().buffer());

        assert!(content.contains("Enter:Fetch"));
        assert!(!content.contains("n:Next"));
    }

    #[test]
    fn test_next_dimmed_without_cursor() {
        let mut app = create_test_app();
        app.ui.focus = Focus::Gallery;
        assert!(next_hint_is_dimmed(&draw(&app)));
    }

    #[test]
    fn test_next_enabled_with_cursor() {
        let mut app = create_test_app();
        app.ui.focus = Focus::CollectionToggle;
        app.query.set_page_key("cursor");
        assert!(!next_hint_is_dimmed(&draw(&app)));
    }
}
