//! Card widget for a single NFT.
//!
//! ```text
//! ╭ Collection ────────────────────╮
//! │Title                           │
//! │#7890  ERC721                   │
//! │First eighty characters of the  │
//! │description...                  │
//! │Image: https://...              │
//! │Contract: 0xABC...7890          │
//! │[c] Copy address                │
//! ╰────────────────────────────────╯
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::domain::Nft;
use crate::theme::{
    ACCENT_COLOR, BORDER_STYLE, KEY_STYLE, MUTED_COLOR, SELECTED_CARD_STYLE, SUCCESS_COLOR,
};

/// Draws one NFT record.
#[derive(Debug, Clone, Copy)]
pub struct NftCard<'a> {
    nft: &'a Nft,
    selected: bool,
    copied: bool,
}

impl<'a> NftCard<'a> {
    #[must_use]
    pub const fn new(nft: &'a Nft) -> Self {
        Self {
            nft,
            selected: false,
            copied: false,
        }
    }

    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Shows the `Copied!` indicator instead of the copy hint.
    #[must_use]
    pub const fn copied(mut self, copied: bool) -> Self {
        self.copied = copied;
        self
    }

    fn block(&self) -> Block<'a> {
        let (border_set, border_style) = if self.selected {
            (border::DOUBLE, SELECTED_CARD_STYLE)
        } else {
            (border::ROUNDED, BORDER_STYLE)
        };
        let title = self
            .nft
            .collection_name
            .as_deref()
            .map(|name| format!(" {name} "))
            .unwrap_or_default();

        Block::default()
            .borders(Borders::ALL)
            .border_set(border_set)
            .border_style(border_style)
            .title(title)
            .title_style(Style::new().fg(MUTED_COLOR))
    }

    fn id_line(&self) -> Line<'a> {
        let mut spans = vec![
            Span::styled(
                format!("#{}", self.nft.short_token_id()),
                Style::new().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(self.nft.token_type.as_str(), Style::new().fg(MUTED_COLOR)),
        ];
        if let Some(balance) = self.nft.balance.as_deref().filter(|b| *b != "1") {
            spans.push(Span::styled(
                format!("  x{balance}"),
                Style::new().fg(MUTED_COLOR),
            ));
        }
        Line::from(spans)
    }

    fn image_line(&self) -> Line<'a> {
        match self.nft.image_url() {
            Some(url) => {
                let label = match self.nft.media.first().and_then(|m| m.format.as_deref()) {
                    Some(format) => format!("Image ({format}): "),
                    None => "Image: ".to_string(),
                };
                Line::from(vec![
                    Span::styled(label, Style::new().fg(MUTED_COLOR)),
                    Span::raw(url.to_string()),
                ])
            }
            None => Line::styled("No image", Style::new().fg(MUTED_COLOR)),
        }
    }

    fn copy_line(&self) -> Line<'a> {
        if self.copied {
            Line::styled(
                "[+] Copied!",
                Style::new().fg(SUCCESS_COLOR).add_modifier(Modifier::BOLD),
            )
        } else {
            Line::from(vec![
                Span::styled("[c]", KEY_STYLE),
                Span::raw(" Copy address"),
            ])
        }
    }
}

impl Widget for NftCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        let [title, id, description, image, contract, copy] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Line::styled(
            self.nft.display_title(),
            Style::new().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD),
        )
        .render(title, buf);
        self.id_line().render(id, buf);
        Paragraph::new(self.nft.description_snippet())
            .wrap(Wrap { trim: true })
            .render(description, buf);
        self.image_line().render(image, buf);
        Line::from(vec![
            Span::styled("Contract: ", Style::new().fg(MUTED_COLOR)),
            Span::raw(self.nft.short_contract_address()),
        ])
        .render(contract, buf);
        self.copy_line().render(copy, buf);
    }
}
