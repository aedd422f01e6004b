//! Types exchanged between the core and a presentation shell

use crate::catalog::FilterState;

/// A user action, independent of how the front end captured it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// The search input now holds this raw text
    QueryInput(String),
    /// A filter chip was activated; `None` is the "all" chip
    TagClicked(Option<String>),
    /// A card was activated (click or confirm key); carries the store position
    RecipeActivated(usize),
    /// The detail overlay was dismissed
    CloseDetail,
    /// Leave the browser
    Quit,
}

/// What a browsing session ended with
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrowseOutcome {
    /// Filter state at exit
    pub final_state: FilterState,
    /// Titles of the recipes opened in detail, in order
    pub viewed: Vec<String>,
}
