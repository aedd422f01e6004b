//! Ratatui widgets for the recipe browser

mod card_list;
mod detail_modal;
mod help_bar;
mod help_overlay;
mod search_bar;
mod status_bar;
mod tag_bar;

pub use card_list::CardList;
pub use detail_modal::DetailModal;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
pub use tag_bar::TagBar;

use ratatui::layout::{Constraint, Layout, Rect};

/// Rectangle centered in `area`, sized in percent of it
pub(crate) fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let width_percent = width_percent.min(100);
    let height_percent = height_percent.min(100);
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(middle);
    center
}
