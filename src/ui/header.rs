//! Header with the app name, network and fetch status.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::SPINNER_FRAMES;
use crate::state::App;
use crate::theme::{MUTED_COLOR, SUCCESS_COLOR, WARNING_COLOR};

use super::helpers::create_border_block;

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    frame.render_widget(header_block, area);

    if area.height <= 2 {
        return;
    }

    // The logo shimmers while a fetch is outstanding
    let title = if app.ui.loading {
        create_animated_logo(app.animation_tick)
    } else {
        create_static_logo()
    };

    let title_area = Rect::new(
        area.x + 2,
        area.y + 1,
        14.min(area.width.saturating_sub(2)),
        1,
    );
    frame.render_widget(Paragraph::new(title), title_area);

    if area.width > 40 {
        let status_area = Rect::new(
            area.x + 16,
            area.y + 1,
            area.width.saturating_sub(18),
            1,
        );
        let status = Paragraph::new(status_line(app)).alignment(Alignment::Right);
        frame.render_widget(status, status_area);
    }
}

/// Create the animated logo with a breathing glow
fn create_animated_logo(animation_tick: u64) -> Line<'static> {
    let time = animation_tick as f32 * 0.15;

    let bracket_glow = ((time * 0.8).sin() + 1.0) / 2.0;
    let nft_glow = ((time * 0.8 + 0.5).sin() + 1.0) / 2.0;
    let gallery_glow = ((time * 0.8 + 1.0).sin() + 1.0) / 2.0;

    let nft_magenta = (140.0 + nft_glow * 115.0) as u8;
    let nft_color = Color::Rgb(nft_magenta, (60.0 * nft_glow) as u8, nft_magenta);

    let gallery_blue = (140.0 + gallery_glow * 115.0) as u8;
    let gallery_green = (180.0 + gallery_glow * 75.0) as u8;
    let gallery_color = Color::Rgb((100.0 * gallery_glow) as u8, gallery_green, gallery_blue);

    let bracket_intensity = (100.0 + bracket_glow * 155.0) as u8;
    let bracket_color = Color::Rgb(bracket_intensity, bracket_intensity, bracket_intensity);

    Line::from(vec![
        Span::styled("[", Style::default().fg(bracket_color)),
        Span::styled(
            "nft",
            Style::default().fg(nft_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "gallery",
            Style::default()
                .fg(gallery_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("]", Style::default().fg(bracket_color)),
    ])
}

/// Create the static logo (when idle)
fn create_static_logo() -> Line<'static> {
    Line::from(vec![
        "[".into(),
        "nft".magenta().bold(),
        "gallery".cyan().bold(),
        "]".into(),
    ])
}

/// Network name, what the current list is, and a spinner while loading.
fn status_line(app: &App) -> Line<'static> {
    let mut spans = Vec::new();

    if app.ui.loading {
        let frame = SPINNER_FRAMES[(app.animation_tick as usize) % SPINNER_FRAMES.len()];
        spans.push(Span::styled(
            format!("{frame} Loading  "),
            Style::default().fg(WARNING_COLOR),
        ));
    }

    if let Some(kind) = app.data.last_fetch {
        spans.push(Span::styled(
            format!("{} · page {}  ", kind.as_str(), app.data.page_number),
            Style::default().fg(MUTED_COLOR),
        ));
    }

    spans.push(Span::styled(
        format!("Network: {}", app.network.as_str()),
        Style::default()
            .fg(SUCCESS_COLOR)
            .add_modifier(Modifier::BOLD),
    ));

    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================
