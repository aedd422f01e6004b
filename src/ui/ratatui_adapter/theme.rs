//! Color palette for the recipe browser

use crate::ui::output::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Colors used by the browser widgets
#[derive(Debug, Clone)]
pub struct Theme {
    /// Focused pane border, list marker, step numbers
    pub accent: Color,
    /// Background of the card under the cursor
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    /// Unfocused borders, meta lines, hints
    pub muted: Color,
    /// Tag badges and chips
    pub tag: Color,
    pub title: Color,
    /// Section headings of the detail overlay
    pub heading: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Palette for dark terminals (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            accent: Color::Cyan,
            highlight_bg: Color::Rgb(60, 45, 30),
            highlight_fg: Color::White,
            muted: Color::DarkGray,
            tag: Color::Magenta,
            title: Color::White,
            heading: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
        }
    }

    /// Palette for light terminals
    #[must_use]
    pub const fn light() -> Self {
        Self {
            accent: Color::Blue,
            highlight_bg: Color::Rgb(250, 230, 200),
            highlight_fg: Color::Black,
            muted: Color::Gray,
            tag: Color::Magenta,
            title: Color::Black,
            heading: Color::Rgb(160, 80, 0),
            success: Color::Green,
            error: Color::Red,
            warning: Color::Rgb(160, 80, 0),
        }
    }

    /// Palette by its configuration name
    #[must_use]
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Title of the card under the cursor
    #[must_use]
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .fg(self.highlight_fg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Border of a pane, brighter when it has focus
    #[must_use]
    pub fn pane_border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            self.muted_style()
        }
    }

    #[must_use]
    pub fn tag_style(&self) -> Style {
        Style::default().fg(self.tag)
    }

    /// The chip of the current selection, drawn inverted
    #[must_use]
    pub fn active_chip_style(&self) -> Style {
        Style::default()
            .bg(self.tag)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Status bar text for a message of `level`
    #[must_use]
    pub fn message_style(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Normal => Style::default(),
            MessageLevel::Error => Style::default().fg(self.error).add_modifier(Modifier::BOLD),
            MessageLevel::Success => Style::default().fg(self.success),
            MessageLevel::Warning => Style::default().fg(self.warning),
            MessageLevel::Info => Style::default().fg(self.accent),
        }
    }
}
