//! Full key reference, shown with F1

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::centered_rect;

/// Sections of the reference: heading, then key/description rows
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Recherche",
        &[
            ("Saisie", "Filtrer titre, description, ingrédients"),
            ("←/→", "Déplacer le curseur"),
            ("Ctrl+U", "Effacer la recherche"),
            ("Ctrl+W", "Effacer un mot"),
        ],
    ),
    (
        "Tags",
        &[
            ("Tab", "Basculer tags / recettes"),
            ("←/→", "Changer de tag"),
            ("Entrée/Espace", "Choisir (re-choisir = Tous)"),
        ],
    ),
    (
        "Recettes",
        &[
            ("↑/↓", "Déplacer la sélection"),
            ("PgUp/PgDn", "Page précédente/suivante"),
            ("Home/End", "Début/fin de liste"),
            ("Entrée", "Afficher la recette"),
            ("Clic", "Choisir un tag / ouvrir une carte"),
            ("Échap", "Fermer / quitter"),
        ],
    ),
];

/// Help overlay widget
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (heading, rows) in SECTIONS {
            lines.push(Line::default());
            lines.push(Line::styled(format!("  {heading}"), self.theme.heading_style()));
            lines.extend(rows.iter().map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("    {key:<16}"), self.theme.accent_style()),
                    Span::raw(*desc),
                ])
            }));
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            "  Appuyez sur une touche pour fermer",
            self.theme.muted_style(),
        ));
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(60, 80, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.pane_border(true))
            .title(" Aide ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup, buf);
    }
}
