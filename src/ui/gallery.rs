//! Card grid for the current page of results.
//!
//! Cards are placed row-major. The column count follows the terminal width,
//! and the grid scrolls so the selected card's row is always visible.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::constants::{CARD_HEIGHT, CARD_MIN_WIDTH, MAX_GRID_COLUMNS};
use crate::state::{App, Focus};
use crate::theme::MUTED_COLOR;

use super::card::NftCard;
use super::helpers::create_border_block;

/// Number of card columns that fit in `width`.
#[must_use]
pub fn columns_for_width(width: u16) -> usize {
    // Two cells go to the gallery border.
    let usable = width.saturating_sub(2);
    usize::from(usable / CARD_MIN_WIDTH).clamp(1, MAX_GRID_COLUMNS)
}

/// First visible row so that `selected_row` is on screen.
#[must_use]
pub fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    selected_row.saturating_sub(visible_rows.max(1) - 1)
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let title = gallery_title(app);
    let block = create_border_block(&title, app.ui.focus == Focus::Gallery);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.data.is_empty() {
        render_empty(frame, inner, app);
        return;
    }

    let columns = columns_for_width(area.width);
    let visible_rows = usize::from(inner.height / CARD_HEIGHT).max(1);
    let selected = app.nav.selected.unwrap_or(0);
    let first_row = first_visible_row(selected / columns, visible_rows);

    let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(inner);

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let column_areas =
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(*row_area);
        for (column, card_area) in column_areas.iter().enumerate() {
            let index = (first_row + row_offset) * columns + column;
            let Some(nft) = app.data.get(index) else {
                return;
            };
            let card = NftCard::new(nft)
                .selected(app.nav.selected == Some(index))
                .copied(app.data.is_copied(nft));
            frame.render_widget(card, *card_area);
        }
    }
}

fn gallery_title(app: &App) -> String {
    if app.data.page_number == 0 {
        return "NFTs".to_string();
    }
    let count = app.data.len();
    match app.data.total_count {
        Some(total) => format!("NFTs - page {} ({count} of {total})", app.data.page_number),
        None => format!("NFTs - page {} ({count})", app.data.page_number),
    }
}

fn render_empty(frame: &mut Frame, area: Rect, app: &App) {
    let text = if app.ui.loading {
        "Loading..."
    } else if app.data.page_number > 0 {
        "No NFTs found"
    } else {
        "Enter a wallet address and press Enter"
    };
    let paragraph = Paragraph::new(text)
        .style(Style::new().fg(MUTED_COLOR))
        .alignment(Alignment::Center);
    let line_area = Rect::new(area.x, area.y + area.height / 2, area.width, area.height.min(1));
    frame.render_widget(paragraph, line_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::tiny(20, 1)]
    #[case::one(80, 2)]
    #[case::exact_two(74, 2)]
    #[case::just_under_two(73, 1)]
    #[case::three(120, 3)]
    #[case::capped(400, MAX_GRID_COLUMNS)]
    fn test_columns_for_width(#[case] width: u16, #[case] expected: usize) {
        assert_eq!(columns_for_width(width), expected);
    }

    #[rstest]
    #[case::top(0, 3, 0)]
    #[case::still_visible(2, 3, 0)]
    #[case::scrolled(5, 3, 3)]
    #[case::single_row(4, 1, 4)]
    #[case::zero_rows(4, 0, 4)]
    fn test_first_visible_row(
        #[case] selected_row: usize,
        #[case] visible_rows: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(first_visible_row(selected_row, visible_rows), expected);
    }
}
