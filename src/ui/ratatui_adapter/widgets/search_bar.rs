//! Free-text query input

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Hint shown while the query is empty
const PLACEHOLDER: &str = "Rechercher une recette, un ingrédient…";

/// Query line with a block cursor at a byte offset
pub struct SearchBar<'a> {
    query: &'a str,
    /// Byte offset, always on a char boundary
    cursor: usize,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> SearchBar<'a> {
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            theme,
            focused: true,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Query text split around the cursor: before, under, after
    fn split(&self) -> (&'a str, &'a str, &'a str) {
        let at = self.cursor.min(self.query.len());
        let (before, rest) = self.query.split_at(at);
        let under = rest.chars().next().map_or(0, char::len_utf8);
        let (under, after) = rest.split_at(under);
        (before, under, after)
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.pane_border(self.focused))
            .title(" Recherche ");
        let inner = block.inner(area);
        block.render(area, buf);

        let cursor_style = self.theme.accent_style().add_modifier(Modifier::REVERSED);
        let mut spans = vec![Span::styled("🔍 ", self.theme.muted_style())];

        if self.query.is_empty() {
            spans.push(Span::styled(" ", cursor_style));
            spans.push(Span::styled(
                PLACEHOLDER,
                self.theme.muted_style().add_modifier(Modifier::ITALIC),
            ));
        } else {
            let (before, under, after) = self.split();
            spans.push(Span::raw(before));
            spans.push(Span::styled(if under.is_empty() { " " } else { under }, cursor_style));
            spans.push(Span::raw(after));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_at_cursor() {
        let theme = Theme::default();
        assert_eq!(SearchBar::new("tarte", 2, &theme).split(), ("ta", "r", "te"));
        assert_eq!(SearchBar::new("tarte", 5, &theme).split(), ("tarte", "", ""));
        // Multi-byte char under the cursor stays whole
        assert_eq!(SearchBar::new("léger", 1, &theme).split(), ("l", "é", "ger"));
    }

    #[test]
    fn test_placeholder_when_empty() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        SearchBar::new("", 0, &theme).render(area, &mut buf);
        let line: String = (0..area.width).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(line.contains("Rechercher"));
    }
}
