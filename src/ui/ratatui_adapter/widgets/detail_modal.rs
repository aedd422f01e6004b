//! Detail modal widget for displaying one full recipe

use crate::render::DetailView;
use crate::render::detail::{INGREDIENTS_LABEL, STEPS_LABEL};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::centered_rect;

/// Detail modal widget
pub struct DetailModal<'a> {
    /// Recipe to display
    detail: &'a DetailView,
    /// Theme for styling
    theme: &'a Theme,
    /// Rows scrolled past
    scroll: u16,
}

impl<'a> DetailModal<'a> {
    /// Create a new detail modal
    #[must_use]
    pub const fn new(detail: &'a DetailView, theme: &'a Theme) -> Self {
        Self {
            detail,
            theme,
            scroll: 0,
        }
    }

    #[must_use]
    pub const fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// Area covered by the modal within `frame`
    ///
    /// Clicks outside it close the modal.
    #[must_use]
    pub fn area(frame: Rect) -> Rect {
        centered_rect(80, 85, frame)
    }

    /// Build content lines for the modal
    fn build_content(&self) -> Vec<Line<'a>> {
        let d = self.detail;
        let mut lines = vec![
            Line::styled(d.title.as_str(), self.theme.title_style()),
            Line::styled(d.image.as_str(), self.theme.muted_style()),
            Line::default(),
        ];

        for (label, value) in d.info_rows() {
            lines.push(Line::from(vec![
                Span::styled(format!("{label:<13}"), self.theme.accent_style()),
                Span::raw(value),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::styled(INGREDIENTS_LABEL, self.theme.heading_style()));
        lines.extend(d.ingredients.iter().map(|i| Line::raw(format!("  • {i}"))));

        lines.push(Line::default());
        lines.push(Line::styled(STEPS_LABEL, self.theme.heading_style()));
        lines.extend(d.steps.iter().map(|(n, step)| {
            Line::from(vec![
                Span::styled(format!("  {n}. "), self.theme.accent_style()),
                Span::raw(step.as_str()),
            ])
        }));

        lines.push(Line::default());
        lines.push(Line::styled(
            "Échap/Entrée pour fermer",
            self.theme.muted_style(),
        ));
        lines
    }
}

impl Widget for DetailModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = Self::area(area);

        // Clear the background
        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.accent_style())
            .title(" Recette ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(modal_area, buf);
    }
}
