//! Recipe store
//!
//! Holds the recipe collection loaded once at startup, together with its
//! load status and the tag index derived from it. The collection is never
//! modified after a successful load.
//!
//! # Load policy
//!
//! A load either fully succeeds or leaves the store empty: there is no
//! partially loaded state. The status distinguishes "nothing loaded yet",
//! "loaded (possibly with zero recipes)" and "load failed", which is what the
//! shell uses to tell an empty search result from a missing catalog.

pub mod error;
mod source;

pub use error::LoadError;
pub use source::{FileSource, RecipeSource, StaticSource};

use crate::catalog::tags::tags_of;
use crate::recipe::{Recipe, RecipeDocument};

/// Load status of the store
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No load attempted yet
    #[default]
    NotLoaded,
    /// Collection available
    Loaded,
    /// Last load failed; carries the error message
    Failed(String),
}

/// In-memory recipe collection
#[derive(Debug, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    tags: Vec<String>,
    status: LoadStatus,
}

impl RecipeStore {
    /// Create an empty, not-yet-loaded store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a loaded store directly from recipes
    #[must_use]
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let tags = tags_of(&recipes);
        Self {
            recipes,
            tags,
            status: LoadStatus::Loaded,
        }
    }

    /// Load the collection from `source`
    ///
    /// On failure the store is emptied and its status set to
    /// [`LoadStatus::Failed`].
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the source cannot be read or is not a
    /// well-formed catalog document.
    pub fn load(&mut self, source: &dyn RecipeSource) -> Result<(), LoadError> {
        match Self::read_document(source) {
            Ok(document) => {
                tracing::debug!(
                    source = %source.name(),
                    count = document.recipes.len(),
                    "loaded recipes"
                );
                self.tags = tags_of(&document.recipes);
                self.recipes = document.recipes;
                self.status = LoadStatus::Loaded;
                Ok(())
            }
            Err(e) => {
                self.recipes.clear();
                self.tags.clear();
                self.status = LoadStatus::Failed(e.to_string());
                Err(e)
            }
        }
    }

    fn read_document(source: &dyn RecipeSource) -> Result<RecipeDocument, LoadError> {
        let text = source.read()?;
        serde_json::from_str(&text).map_err(|error| LoadError::Malformed {
            source_name: source.name(),
            error,
        })
    }

    /// All recipes in load order
    #[must_use]
    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Distinct tags across all recipes, sorted ascending
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self.status, LoadStatus::Loaded)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipe at `index` in load order
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    /// First recipe whose title equals `title`, ignoring case and
    /// surrounding whitespace
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&Recipe> {
        let wanted = title.trim().to_lowercase();
        self.recipes
            .iter()
            .find(|r| r.title.trim().to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SAMPLE_JSON;

    #[test]
    fn test_new_store_is_not_loaded() {
        let store = RecipeStore::new();
        assert_eq!(store.status(), &LoadStatus::NotLoaded);
        assert!(!store.is_loaded());
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_success() {
        let mut store = RecipeStore::new();
        store
            .load(&StaticSource::new("sample", SAMPLE_JSON))
            .unwrap();

        assert!(store.is_loaded());
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].title, "Tarte aux pommes");
        assert_eq!(store.all()[1].title, "Soupe de légumes");
        assert_eq!(store.tags(), ["dessert", "fruit", "soupe", "vegan"]);
    }

    #[test]
    fn test_load_malformed_leaves_store_empty() {
        let mut store = RecipeStore::new();
        store
            .load(&StaticSource::new("sample", SAMPLE_JSON))
            .unwrap();

        let err = store
            .load(&StaticSource::new("broken", r#"{"recipes": [{"title": "x"}"#))
            .unwrap_err();

        assert!(matches!(err, LoadError::Malformed { .. }));
        assert!(store.is_empty());
        assert!(store.tags().is_empty());
        assert!(matches!(store.status(), LoadStatus::Failed(_)));
    }

    #[test]
    fn test_load_rejects_record_without_title() {
        let mut store = RecipeStore::new();
        let result = store.load(&StaticSource::new(
            "inline",
            r#"{"recipes": [{"title": "ok"}, {"description": "no title"}]}"#,
        ));
        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_accepts_null_optional_fields() {
        let mut store = RecipeStore::new();
        store
            .load(&StaticSource::new(
                "inline",
                r#"{"recipes": [
                    {"title": "A", "description": null, "tags": null, "ingredients": null, "steps": null},
                    {"title": "B", "tags": ["vegan"]}
                ]}"#,
            ))
            .unwrap();

        assert!(store.is_loaded());
        assert_eq!(store.len(), 2);
        assert!(store.all()[0].tags.is_empty());
        assert_eq!(store.tags(), ["vegan"]);
    }

    #[test]
    fn test_load_accepts_fractional_numbers() {
        let mut store = RecipeStore::new();
        store
            .load(&StaticSource::new(
                "inline",
                r#"{"recipes": [{"title": "A", "prepTimeMinutes": 7.5}, {"title": "B"}]}"#,
            ))
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].prep_time_minutes, Some(7.5));
        assert_eq!(store.all()[1].title, "B");
    }

    #[test]
    fn test_load_unreachable() {
        let mut store = RecipeStore::new();
        let result = store.load(&FileSource::new("/nonexistent/recipes.json"));
        assert!(matches!(result, Err(LoadError::Unreachable { .. })));
        assert!(!store.is_loaded());
        assert!(store.is_empty());
    }

    #[test]
    fn test_missing_recipes_key_loads_empty() {
        let mut store = RecipeStore::new();
        store.load(&StaticSource::new("inline", "{}")).unwrap();
        assert!(store.is_loaded());
        assert!(store.is_empty());
    }

    #[test]
    fn test_find_by_title() {
        let mut store = RecipeStore::new();
        store
            .load(&StaticSource::new("sample", SAMPLE_JSON))
            .unwrap();

        let found = store.find_by_title("  TARTE AUX POMMES ").unwrap();
        assert_eq!(found.title, "Tarte aux pommes");
        assert!(store.find_by_title("Tarte").is_none());
        assert_eq!(store.get(1).map(|r| r.title.as_str()), Some("Soupe de légumes"));
        assert!(store.get(2).is_none());
    }
}
