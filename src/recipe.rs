//! Recipe records as read from the catalog document
//!
//! Every field except `title` is optional in the source document and is
//! defaulted on deserialization, whether the key is missing or `null`, so the
//! rest of the crate never has to deal with missing collections.

use serde::{Deserialize, Deserializer, Serialize};

/// Read a field that may be `null`, substituting the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One catalog entry
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<String>,
    /// Tag values; order only matters for badge display
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Any JSON number; 0 counts as absent
    #[serde(default)]
    pub servings: Option<f64>,
    #[serde(default)]
    pub prep_time_minutes: Option<f64>,
    #[serde(default)]
    pub cook_time_minutes: Option<f64>,
}

impl Recipe {
    /// Create a recipe with only a title
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Text searched by the free-text filter: title, description and
    /// ingredients joined with single spaces, lower-cased.
    #[must_use]
    pub fn searchable_text(&self) -> String {
        let mut text = String::with_capacity(self.title.len() + self.description.len() + 1);
        text.push_str(&self.title);
        text.push(' ');
        text.push_str(&self.description);
        for ingredient in &self.ingredients {
            text.push(' ');
            text.push_str(ingredient);
        }
        text.to_lowercase()
    }

    /// Whether `tag` is one of this recipe's tags (exact value match)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Top-level shape of the catalog document: `{ "recipes": [...] }`
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RecipeDocument {
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default() {
        let recipe: Recipe = serde_json::from_str(r#"{"title": "Crêpes"}"#).unwrap();
        assert_eq!(recipe.title, "Crêpes");
        assert!(recipe.description.is_empty());
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
        assert!(recipe.tags.is_empty());
        assert_eq!(recipe.category, None);
        assert_eq!(recipe.servings, None);
        assert_eq!(recipe.prep_time_minutes, None);
    }

    #[test]
    fn test_camel_case_fields() {
        let json = r#"{
            "title": "Quiche",
            "prepTimeMinutes": 20,
            "cookTimeMinutes": 35,
            "servings": 6,
            "unknownField": true
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.prep_time_minutes, Some(20.0));
        assert_eq!(recipe.cook_time_minutes, Some(35.0));
        assert_eq!(recipe.servings, Some(6.0));
    }

    #[test]
    fn test_null_fields_default() {
        let json = r#"{
            "title": "Galette",
            "description": null,
            "ingredients": null,
            "steps": null,
            "tags": null,
            "category": null,
            "servings": null
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.title, "Galette");
        assert!(recipe.description.is_empty());
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
        assert!(recipe.tags.is_empty());
        assert_eq!(recipe.category, None);
        assert_eq!(recipe.servings, None);
        assert_eq!(recipe.searchable_text(), "galette ");
    }

    #[test]
    fn test_fractional_numbers() {
        let json = r#"{"title": "Flan", "prepTimeMinutes": 7.5, "servings": 2.5}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.prep_time_minutes, Some(7.5));
        assert_eq!(recipe.servings, Some(2.5));
    }

    #[test]
    fn test_title_is_required() {
        let result: Result<Recipe, _> = serde_json::from_str(r#"{"description": "no title"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_searchable_text_order() {
        let mut recipe = Recipe::new("Tarte");
        recipe.description = "Aux Pommes".into();
        recipe.ingredients = vec!["Farine".into(), "Beurre".into()];
        assert_eq!(recipe.searchable_text(), "tarte aux pommes farine beurre");
    }

    #[test]
    fn test_searchable_text_without_description() {
        let recipe = Recipe::new("Soupe");
        assert_eq!(recipe.searchable_text(), "soupe ");
    }

    #[test]
    fn test_missing_recipes_key() {
        let doc: RecipeDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.recipes.is_empty());
    }
}
