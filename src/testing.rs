//! Testing utilities for cookbook
//!
//! Recipe fixtures shared by the unit tests. The two-recipe sample mirrors
//! the reference scenario: one fruit dessert, one vegan soup.
//!
//! Only available when compiled with `cfg(test)`.

use crate::recipe::Recipe;

/// Two-recipe catalog document used across tests
pub const SAMPLE_JSON: &str = r#"{
  "recipes": [
    {
      "title": "Tarte aux pommes",
      "description": "Une tarte classique, parfumée à la cannelle.",
      "category": "Dessert",
      "servings": 6,
      "prepTimeMinutes": 20,
      "cookTimeMinutes": 35,
      "ingredients": ["1 pâte brisée", "4 pommes", "50 g de sucre", "1 pincée de cannelle"],
      "steps": ["Préchauffer le four à 180°C.", "Éplucher et trancher les pommes.", "Garnir la pâte et cuire 35 minutes."],
      "tags": ["dessert", "fruit"]
    },
    {
      "title": "Soupe de légumes",
      "description": "Soupe réconfortante de saison.",
      "category": "Entrée",
      "servings": 4,
      "prepTimeMinutes": 15,
      "ingredients": ["2 carottes", "1 poireau", "3 pommes de terre"],
      "steps": ["Couper les légumes.", "Cuire 25 minutes dans l'eau salée.", "Mixer."],
      "tags": ["soupe", "vegan"]
    }
  ]
}"#;

/// The sample catalog as recipes
///
/// # Panics
/// Panics if `SAMPLE_JSON` stops being a valid document.
#[must_use]
pub fn sample_recipes() -> Vec<Recipe> {
    let document: crate::recipe::RecipeDocument =
        serde_json::from_str(SAMPLE_JSON).expect("sample document should parse");
    document.recipes
}

/// Recipe with only a title and tags
#[must_use]
pub fn recipe_with_tags(title: &str, tags: &[&str]) -> Recipe {
    Recipe {
        tags: tags.iter().map(ToString::to_string).collect(),
        ..Recipe::new(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_recipes() {
        let recipes = sample_recipes();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[1].cook_time_minutes, None);
    }

    #[test]
    fn test_recipe_with_tags() {
        let recipe = recipe_with_tags("x", &["a", "b"]);
        assert_eq!(recipe.title, "x");
        assert_eq!(recipe.tags, ["a", "b"]);
    }
}
