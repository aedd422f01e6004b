//! One-line key hint bar at the bottom of the screen

use crate::ui::ratatui_adapter::state::{FocusPane, Mode};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A key and what it does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    #[must_use]
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

const RECIPE_HINTS: &[KeyHint] = &[
    KeyHint::new("Tab", "tags"),
    KeyHint::new("↑/↓", "naviguer"),
    KeyHint::new("Entrée", "ouvrir"),
    KeyHint::new("Échap", "quitter"),
    KeyHint::new("F1", "aide"),
];

const TAG_HINTS: &[KeyHint] = &[
    KeyHint::new("Tab", "recettes"),
    KeyHint::new("←/→", "tag"),
    KeyHint::new("Entrée", "choisir"),
    KeyHint::new("Échap", "quitter"),
    KeyHint::new("F1", "aide"),
];

const DETAIL_HINTS: &[KeyHint] = &[
    KeyHint::new("↑/↓", "défiler"),
    KeyHint::new("Échap", "fermer"),
];

const HELP_HINTS: &[KeyHint] = &[KeyHint::new("touche", "fermer")];

/// Help bar widget
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints relevant to the current mode and focused pane
    #[must_use]
    pub const fn hints_for(mode: Mode, focus: FocusPane) -> &'static [KeyHint] {
        match (mode, focus) {
            (Mode::Help, _) => HELP_HINTS,
            (Mode::Detail, _) => DETAIL_HINTS,
            (Mode::Normal, FocusPane::Tags) => TAG_HINTS,
            (Mode::Normal, FocusPane::Recipes) => RECIPE_HINTS,
        }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let separator = Span::styled(" │ ", self.theme.muted_style());
        let mut spans = Vec::with_capacity(self.hints.len() * 3);

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(separator.clone());
            }
            spans.push(Span::styled(hint.key, self.theme.accent_style()));
            spans.push(Span::raw(format!(" {}", hint.action)));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_follow_focus() {
        let tags = HelpBar::hints_for(Mode::Normal, FocusPane::Tags);
        let recipes = HelpBar::hints_for(Mode::Normal, FocusPane::Recipes);
        assert_eq!(tags[0].action, "recettes");
        assert_eq!(recipes[0].action, "tags");
        assert_eq!(HelpBar::hints_for(Mode::Detail, FocusPane::Tags), DETAIL_HINTS);
    }

    #[test]
    fn test_render() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        HelpBar::new(DETAIL_HINTS, &theme).render(area, &mut buf);
        let line: String = (0..area.width).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(line.starts_with("↑/↓ défiler │ Échap fermer"));
    }
}
