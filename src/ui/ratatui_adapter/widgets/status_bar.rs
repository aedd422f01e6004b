//! Status bar widget for displaying messages and the match count

use crate::ui::ratatui_adapter::state::StatusMessage;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget that displays the latest message and a counter
pub struct StatusBar<'a> {
    /// Messages to display
    messages: &'a [&'a StatusMessage],
    /// Theme for styling
    theme: &'a Theme,
    /// Recipes currently shown
    visible: usize,
    /// Recipes in the catalog
    total: usize,
    /// Active tag, if any
    active_tag: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(
        messages: &'a [&'a StatusMessage],
        theme: &'a Theme,
        visible: usize,
        total: usize,
    ) -> Self {
        Self {
            messages,
            theme,
            visible,
            total,
            active_tag: None,
        }
    }

    #[must_use]
    pub const fn with_active_tag(mut self, tag: Option<&'a str>) -> Self {
        self.active_tag = tag;
        self
    }

    fn indicator(&self) -> String {
        match self.active_tag {
            Some(tag) => format!("#{tag}  {}/{} recettes", self.visible, self.total),
            None => format!("{}/{} recettes", self.visible, self.total),
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.pane_border(false));

        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
                .areas(inner);

        // Show the most recent message
        if let Some(msg) = self.messages.last() {
            let style = self.theme.message_style(msg.level);
            let line = Line::from(vec![
                Span::styled(msg.level.prefix(), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(left, buf);
        }

        Paragraph::new(Line::styled(self.indicator(), self.theme.muted_style()))
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}
