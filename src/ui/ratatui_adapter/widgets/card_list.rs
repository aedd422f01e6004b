//! Recipe card list widget

use crate::render::{Card, LOAD_ERROR_LABEL, ListView, NO_RESULTS_LABEL};
use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::state::{AppState, CARD_HEIGHT, FocusPane};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Card list widget
///
/// Cards are drawn `CARD_HEIGHT` rows apart from the top of the inner
/// area, starting at `scroll_offset`; `AppState::card_at` relies on it.
pub struct CardList<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> CardList<'a> {
    #[must_use]
    pub const fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Inner area the cards are drawn into
    #[must_use]
    pub fn inner(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    fn card_lines(&self, card: &'a Card, selected: bool) -> Vec<Line<'a>> {
        let marker = if selected { "▶ " } else { "  " };
        let title_style = if selected {
            self.theme.highlight_style()
        } else {
            self.theme.title_style()
        };

        let mut badges = vec![Span::raw("  ")];
        for tag in &card.tags {
            badges.push(Span::styled(format!("[{tag}]"), self.theme.tag_style()));
            badges.push(Span::raw(" "));
        }
        badges.push(Span::styled(card.image.as_str(), self.theme.muted_style()));

        vec![
            Line::from(vec![
                Span::styled(marker, self.theme.accent_style()),
                Span::styled(card.title.as_str(), title_style),
            ]),
            Line::styled(format!("  {}", card.meta_line()), self.theme.muted_style()),
            Line::raw(format!("  {}", card.description)),
            Line::from(badges),
        ]
    }

    fn render_placeholder(&self, text: &'static str, error: bool, inner: Rect, buf: &mut Buffer) {
        let style = if error {
            self.theme.message_style(MessageLevel::Error)
        } else {
            self.theme.muted_style().add_modifier(Modifier::ITALIC)
        };
        Paragraph::new(vec![Line::default(), Line::styled(text, style)])
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

impl Widget for CardList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == FocusPane::Recipes;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.pane_border(focused))
            .title(" Recettes ");

        let inner = block.inner(area);
        block.render(area, buf);

        if self.state.load_failed() {
            self.render_placeholder(LOAD_ERROR_LABEL, true, inner, buf);
            return;
        }

        let cards = match &self.state.list_view {
            ListView::NoResults => {
                self.render_placeholder(NO_RESULTS_LABEL, false, inner, buf);
                return;
            }
            ListView::Cards(cards) => cards,
        };

        let height = CARD_HEIGHT as u16;
        let mut y = inner.y;
        for (position, card) in cards.iter().enumerate().skip(self.state.scroll_offset) {
            if y >= inner.bottom() {
                break;
            }
            let card_area = Rect::new(inner.x, y, inner.width, height.min(inner.bottom() - y));
            Paragraph::new(self.card_lines(card, position == self.state.cursor))
                .render(card_area, buf);
            y = y.saturating_add(height);
        }
    }
}
