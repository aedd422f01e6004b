//! Session state and the catalog facade used by the presentation layers
//!
//! [`FilterState`] is the explicit, shell-owned state of one browsing
//! session. [`Catalog`] pairs it with the loaded [`RecipeStore`] and answers
//! the questions a front end asks: which chips to draw, which recipes are
//! visible, and what the detail view of one of them looks like.

use super::filter::{filter, filter_indices};
use super::selection::TagSelection;
use super::tags::{TagChip, tag_chips};
use crate::recipe::Recipe;
use crate::render::{DetailView, ListView, RenderOptions, render_detail, render_list};
use crate::CookbookError;
use crate::store::RecipeStore;

/// Query and tag selection of the current session
///
/// Starts empty, changes only in response to user input, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Raw query as typed; normalized at match time
    pub query: String,
    pub selection: TagSelection,
}

impl FilterState {
    #[must_use]
    pub fn new(query: impl Into<String>, tag: Option<String>) -> Self {
        Self {
            query: query.into(),
            selection: tag.into(),
        }
    }

    #[must_use]
    pub fn active_tag(&self) -> Option<&str> {
        self.selection.active()
    }
}

/// Loaded recipes plus the session's filter state
#[derive(Debug, Default)]
pub struct Catalog {
    store: RecipeStore,
    state: FilterState,
}

impl Catalog {
    #[must_use]
    pub fn new(store: RecipeStore) -> Self {
        Self {
            store,
            state: FilterState::default(),
        }
    }

    #[must_use]
    pub fn with_state(store: RecipeStore, state: FilterState) -> Self {
        Self { store, state }
    }

    /// Start a session seeded from the command line
    ///
    /// The seeded tag must be part of the tag index of a loaded store. A
    /// store that failed to load is accepted as is, so the shell can still
    /// report the load error.
    ///
    /// # Errors
    ///
    /// Returns `CookbookError::InvalidInput` for a tag no recipe carries.
    pub fn seeded(store: RecipeStore, state: FilterState) -> Result<Self, CookbookError> {
        let unknown = state
            .active_tag()
            .filter(|tag| store.is_loaded() && !store.tags().iter().any(|t| t == tag));
        if let Some(tag) = unknown {
            return Err(CookbookError::InvalidInput(format!(
                "Unknown tag '{tag}'. Available tags: {}",
                store.tags().join(", ")
            )));
        }
        Ok(Self::with_state(store, state))
    }

    #[must_use]
    pub const fn store(&self) -> &RecipeStore {
        &self.store
    }

    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    /// Replace the query with the raw text of the search input
    pub fn set_query(&mut self, raw: impl Into<String>) {
        self.state.query = raw.into();
    }

    /// Choose a tag chip (toggles when already selected)
    pub fn choose_tag(&mut self, tag: &str) {
        self.state.selection.choose(tag);
        tracing::debug!(selection = ?self.state.selection, "tag chosen");
    }

    /// Choose the "all" chip
    pub fn choose_all(&mut self) {
        self.state.selection.choose_all();
    }

    /// Apply a chip: the "all" chip clears the selection, a tag chip toggles
    pub fn choose_chip(&mut self, chip: &TagChip) {
        match &chip.value {
            Some(tag) => self.choose_tag(tag),
            None => self.choose_all(),
        }
    }

    /// Filter bar chips reflecting the current selection
    #[must_use]
    pub fn chips(&self) -> Vec<TagChip> {
        tag_chips(self.store.tags(), &self.state.selection)
    }

    /// Recipes visible under the current state
    #[must_use]
    pub fn visible(&self) -> Vec<&Recipe> {
        filter(self.store.all(), &self.state.query, self.state.active_tag())
    }

    /// Store positions of the visible recipes
    #[must_use]
    pub fn visible_indices(&self) -> Vec<usize> {
        filter_indices(self.store.all(), &self.state.query, self.state.active_tag())
    }

    /// Cards for the visible recipes, or `NoResults`
    #[must_use]
    pub fn list_view(&self, options: &RenderOptions) -> ListView {
        render_list(&self.visible(), options)
    }

    /// Detail view of the recipe at store position `index`
    #[must_use]
    pub fn detail(&self, index: usize, options: &RenderOptions) -> Option<DetailView> {
        self.store.get(index).map(|r| render_detail(r, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StaticSource;
    use crate::testing::sample_recipes;

    fn catalog() -> Catalog {
        Catalog::new(RecipeStore::from_recipes(sample_recipes()))
    }

    fn visible_titles(catalog: &Catalog) -> Vec<String> {
        catalog.visible().iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn test_initial_state_shows_everything() {
        let catalog = catalog();
        assert_eq!(catalog.state(), &FilterState::default());
        assert_eq!(catalog.visible().len(), 2);
        assert_eq!(catalog.visible_indices(), [0, 1]);
    }

    #[test]
    fn test_query_then_tag() {
        let mut catalog = catalog();
        catalog.set_query("soupe");
        assert_eq!(visible_titles(&catalog), ["Soupe de légumes"]);

        catalog.choose_tag("dessert");
        assert!(catalog.visible().is_empty());
        assert_eq!(catalog.list_view(&RenderOptions::default()), ListView::NoResults);

        catalog.choose_tag("dessert");
        assert_eq!(visible_titles(&catalog), ["Soupe de légumes"]);
    }

    #[test]
    fn test_choose_chip() {
        let mut catalog = catalog();
        let chips = catalog.chips();
        let vegan = chips
            .iter()
            .find(|c| c.value.as_deref() == Some("vegan"))
            .unwrap();

        catalog.choose_chip(vegan);
        assert_eq!(catalog.state().active_tag(), Some("vegan"));
        assert!(catalog.chips().iter().any(|c| c.active && c.label == "vegan"));

        catalog.choose_chip(&chips[0]);
        assert_eq!(catalog.state().active_tag(), None);
        assert!(catalog.chips()[0].active);
    }

    #[test]
    fn test_detail_does_not_touch_state() {
        let mut catalog = catalog();
        catalog.set_query("tarte");
        catalog.choose_tag("fruit");
        let before = catalog.state().clone();

        let detail = catalog.detail(0, &RenderOptions::default()).unwrap();
        assert_eq!(detail.title, "Tarte aux pommes");
        assert_eq!(catalog.state(), &before);
        assert!(catalog.detail(5, &RenderOptions::default()).is_none());
    }

    #[test]
    fn test_with_state_seeds_filters() {
        let catalog = Catalog::with_state(
            RecipeStore::from_recipes(sample_recipes()),
            FilterState::new("", Some("vegan".to_string())),
        );
        assert_eq!(visible_titles(&catalog), ["Soupe de légumes"]);
    }

    #[test]
    fn test_seeded_rejects_unknown_tag() {
        let result = Catalog::seeded(
            RecipeStore::from_recipes(sample_recipes()),
            FilterState::new("", Some("pizza".to_string())),
        );
        assert!(matches!(result, Err(CookbookError::InvalidInput(_))));
    }

    #[test]
    fn test_seeded_accepts_known_tag() {
        let catalog = Catalog::seeded(
            RecipeStore::from_recipes(sample_recipes()),
            FilterState::new("tarte", Some("fruit".to_string())),
        )
        .unwrap();
        assert_eq!(visible_titles(&catalog), ["Tarte aux pommes"]);
        assert_eq!(catalog.chips().iter().filter(|c| c.active).count(), 1);
    }

    #[test]
    fn test_seeded_keeps_failed_store() {
        let mut store = RecipeStore::new();
        let _ = store.load(&StaticSource::new("broken", "{"));
        let catalog =
            Catalog::seeded(store, FilterState::new("", Some("vegan".to_string()))).unwrap();
        assert!(catalog.visible().is_empty());
    }
}
