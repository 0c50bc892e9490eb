//! Query form: wallet and collection inputs, the collection toggle and the
//! Fetch / Next buttons.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{App, Focus, QueryField};
use crate::theme::{DISABLED_STYLE, KEY_STYLE, MUTED_COLOR, PRIMARY_COLOR, WARNING_COLOR};

use super::helpers::create_border_block;

const CURSOR: &str = "█";
const TOGGLE_WIDTH: u16 = 28;
const BUTTONS_WIDTH: u16 = 22;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let [wallet, collection, toggle, buttons] = Layout::horizontal([
        Constraint::Min(20),
        Constraint::Min(20),
        Constraint::Length(TOGGLE_WIDTH),
        Constraint::Length(BUTTONS_WIDTH),
    ])
    .areas(area);

    render_input(frame, wallet, app, QueryField::Wallet);
    render_input(frame, collection, app, QueryField::Collection);
    render_toggle(frame, toggle, app);
    render_buttons(frame, buttons, app);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App, field: QueryField) {
    let focused = app.ui.focus.text_field() == Some(field);
    let title = match field {
        QueryField::Wallet => "Wallet",
        QueryField::Collection => "Collection",
    };
    let block = create_border_block(title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value = app.query.field(field);
    let line = if value.is_empty() && !focused {
        Line::styled(placeholder(app, field), placeholder_style(app, field))
    } else {
        let visible = tail_fitting(value, inner.width.saturating_sub(1));
        let mut spans = vec![Span::raw(visible)];
        if focused {
            spans.push(Span::styled(CURSOR, Style::new().fg(PRIMARY_COLOR)));
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line), inner);
}

fn placeholder(app: &App, field: QueryField) -> &'static str {
    match field {
        QueryField::Wallet if app.query.collection_mode() => "optional in collection mode",
        QueryField::Wallet => "0x... wallet address",
        QueryField::Collection if app.query.collection_mode() => "required for collection fetch",
        QueryField::Collection => "0x... contract address",
    }
}

fn placeholder_style(app: &App, field: QueryField) -> Style {
    if field == QueryField::Collection && app.query.collection_mode() {
        Style::new().fg(WARNING_COLOR)
    } else {
        Style::new().fg(MUTED_COLOR).add_modifier(Modifier::ITALIC)
    }
}

/// Keeps the end of `text` visible while typing into a narrow box.
fn tail_fitting(text: &str, width: u16) -> String {
    let len = text.chars().count();
    text.chars()
        .skip(len.saturating_sub(usize::from(width)))
        .collect()
}

fn render_toggle(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.ui.focus == Focus::CollectionToggle;
    let block = create_border_block("", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mark = if app.query.collection_mode() { "[x]" } else { "[ ]" };
    let line = Line::from(vec![
        Span::styled(mark, KEY_STYLE),
        Span::raw(" Fetch for collection"),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let block = create_border_block("", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let next_style = if app.can_load_next_page() {
        KEY_STYLE
    } else {
        DISABLED_STYLE
    };
    let line = Line::from(vec![
        Span::styled("[Let's go!]", KEY_STYLE),
        Span::raw(" "),
        Span::styled("[Next]", next_style),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, create_test_app};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 3)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_tail_fitting() {
        assert_eq!(tail_fitting("0x1234", 10), "0x1234");
        assert_eq!(tail_fitting("0x1234", 4), "1234");
        assert_eq!(tail_fitting("0x1234", 0), "");
    }

    #[test]
    fn test_empty_form_shows_placeholders() {
        let mut app = create_test_app();
        app.ui.focus = Focus::Gallery;
        let content = draw(&app);

        assert!(content.contains("0x... wallet address"));
        assert!(content.contains("[ ] Fetch for collection"));
        assert!(content.contains("[Let's go!]"));
    }

    #[test]
    fn test_collection_mode_hint_when_collection_empty() {
        let mut app = create_test_app();
        app.ui.focus = Focus::Gallery;
        app.query.set_collection_mode(true);
        let content = draw(&app);

        assert!(content.contains("[x] Fetch for collection"));
        assert!(content.contains("required for collection"));
    }

    #[test]
    fn test_focused_input_shows_value_and_cursor() {
        let mut app = create_test_app();
        app.query.set_wallet("0xabc");
        let content = draw(&app);

        assert!(content.contains("● Wallet"));
        assert!(content.contains("0xabc█"));
    }
}
