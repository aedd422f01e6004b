//! Tag filter bar: the "all" chip followed by one chip per tag

use crate::catalog::TagChip;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::Span,
    widgets::{Block, Borders, Widget},
};

/// Tag bar widget
pub struct TagBar<'a> {
    chips: &'a [TagChip],
    /// Chip under the keyboard cursor
    cursor: usize,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> TagBar<'a> {
    #[must_use]
    pub const fn new(chips: &'a [TagChip], cursor: usize, theme: &'a Theme) -> Self {
        Self {
            chips,
            cursor,
            theme,
            focused: false,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Width of a chip: its label padded by one space on each side
    fn chip_width(chip: &TagChip) -> u16 {
        u16::try_from(Span::raw(chip.label.as_str()).width() + 2).unwrap_or(u16::MAX)
    }

    /// Place chips left to right, wrapping to the next row when full
    ///
    /// Chips that do not fit in `inner` get an empty rectangle.
    #[must_use]
    pub fn layout(chips: &[TagChip], inner: Rect) -> Vec<Rect> {
        let mut areas = Vec::with_capacity(chips.len());
        let mut x = inner.x;
        let mut y = inner.y;

        for chip in chips {
            let width = Self::chip_width(chip).min(inner.width);
            if x > inner.x && x.saturating_add(width) > inner.right() {
                x = inner.x;
                y = y.saturating_add(1);
            }
            if y >= inner.bottom() || width == 0 {
                areas.push(Rect::default());
                continue;
            }
            areas.push(Rect::new(x, y, width, 1));
            x = x.saturating_add(width + 1);
        }
        areas
    }

    /// Total height (borders included) needed to show every chip at `width`
    #[must_use]
    pub fn required_height(chips: &[TagChip], width: u16) -> u16 {
        // One row per chip is the worst case
        let max_rows = u16::try_from(chips.len()).unwrap_or(u16::MAX).max(1);
        let inner = Rect::new(0, 0, width.saturating_sub(2), max_rows);
        let rows = Self::layout(chips, inner)
            .iter()
            .filter(|r| !r.is_empty())
            .map(|r| r.y + 1)
            .max()
            .unwrap_or(1);
        rows + 2
    }
}

impl Widget for TagBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.pane_border(self.focused))
            .title(" Tags ");

        let inner = block.inner(area);
        block.render(area, buf);

        for (idx, (chip, chip_area)) in self
            .chips
            .iter()
            .zip(Self::layout(self.chips, inner))
            .enumerate()
        {
            if chip_area.is_empty() {
                continue;
            }
            let mut style = if chip.active {
                self.theme.active_chip_style()
            } else {
                self.theme.tag_style()
            };
            if self.focused && idx == self.cursor {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            buf.set_stringn(
                chip_area.x,
                chip_area.y,
                format!(" {} ", chip.label),
                chip_area.width as usize,
                style,
            );
        }
    }
}
