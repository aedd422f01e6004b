//! Scripted browser for testing

use super::error::Result;
use super::ratatui_adapter::AppState;
use super::traits::{BrowseConfig, RecipeBrowser};
use super::types::{BrowseOutcome, ShellEvent};

/// Browser that replays a fixed sequence of shell events
///
/// Drives the same [`AppState`] as the terminal browser, without a terminal.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBrowser {
    pub events: Vec<ShellEvent>,
}

impl ScriptedBrowser {
    #[must_use]
    pub const fn new(events: Vec<ShellEvent>) -> Self {
        Self { events }
    }
}

impl RecipeBrowser for ScriptedBrowser {
    fn run(&self, config: BrowseConfig) -> Result<BrowseOutcome> {
        let mut state = AppState::new(config.catalog, config.render);
        for event in &self.events {
            state.apply(event.clone());
            if state.should_exit {
                break;
            }
        }
        Ok(state.into_outcome())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, FilterState, TagSelection};
    use crate::store::RecipeStore;
    use crate::testing::sample_recipes;

    fn config() -> BrowseConfig {
        BrowseConfig::new(Catalog::new(RecipeStore::from_recipes(sample_recipes())))
    }

    #[test]
    fn test_no_events() {
        let outcome = ScriptedBrowser::default().run(config()).unwrap();
        assert_eq!(outcome.final_state, FilterState::default());
        assert!(outcome.viewed.is_empty());
    }

    #[test]
    fn test_query_and_tag_events() {
        let browser = ScriptedBrowser::new(vec![
            ShellEvent::QueryInput("soupe".into()),
            ShellEvent::TagClicked(Some("vegan".into())),
        ]);
        let outcome = browser.run(config()).unwrap();
        assert_eq!(outcome.final_state.query, "soupe");
        assert_eq!(
            outcome.final_state.selection,
            TagSelection::TagSelected("vegan".into())
        );
    }

    #[test]
    fn test_open_and_close_detail_keeps_state() {
        let browser = ScriptedBrowser::new(vec![
            ShellEvent::QueryInput("tarte".into()),
            ShellEvent::TagClicked(Some("fruit".into())),
            ShellEvent::RecipeActivated(0),
            ShellEvent::CloseDetail,
        ]);
        let outcome = browser.run(config()).unwrap();
        assert_eq!(outcome.viewed, ["Tarte aux pommes"]);
        assert_eq!(outcome.final_state, FilterState::new("tarte", Some("fruit".into())));
    }

    #[test]
    fn test_tag_toggle_and_all() {
        let browser = ScriptedBrowser::new(vec![
            ShellEvent::TagClicked(Some("vegan".into())),
            ShellEvent::TagClicked(Some("vegan".into())),
            ShellEvent::TagClicked(Some("dessert".into())),
            ShellEvent::TagClicked(None),
        ]);
        let outcome = browser.run(config()).unwrap();
        assert_eq!(outcome.final_state.selection, TagSelection::NoTagSelected);
    }

    #[test]
    fn test_quit_stops_replay() {
        let browser = ScriptedBrowser::new(vec![
            ShellEvent::QueryInput("a".into()),
            ShellEvent::Quit,
            ShellEvent::QueryInput("b".into()),
        ]);
        let outcome = browser.run(config()).unwrap();
        assert_eq!(outcome.final_state.query, "a");
    }
}
