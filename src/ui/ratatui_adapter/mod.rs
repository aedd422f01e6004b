//! Ratatui-based recipe browser adapter
//!
//! Implements the `RecipeBrowser` trait with ratatui widgets and crossterm
//! events.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ Recherche  > tarte│                      │
//! ├──────────────────────────────────────────┤
//! │ Tags       Tous  dessert  fruit  vegan   │
//! ├──────────────────────────────────────────┤
//! │ Recettes   ▶ Tarte aux pommes            │
//! │              Dessert • 6 pers • 20 min   │
//! ├──────────────────────────────────────────┤
//! │ Status                    1/2 recettes   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! Opening a card draws the detail overlay on top; F1 shows the help
//! overlay.

mod browser;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use browser::RatatuiBrowser;
pub use state::{AppState, FocusPane, Mode};
pub use theme::Theme;
