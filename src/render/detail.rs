//! Detail renderer: one recipe → full view

use super::{RenderOptions, format_number};
use crate::recipe::Recipe;

pub const CATEGORY_LABEL: &str = "Catégorie";
pub const SERVINGS_LABEL: &str = "Portions";
pub const PREP_LABEL: &str = "Préparation";
pub const COOK_LABEL: &str = "Cuisson";
pub const INGREDIENTS_LABEL: &str = "Ingrédients";
pub const STEPS_LABEL: &str = "Étapes";

/// Shown for an absent text field
const MISSING: &str = "-";

/// Everything the detail overlay displays
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub image: String,
    /// `-` when absent
    pub category: String,
    /// `-` when absent
    pub servings: String,
    pub prep_minutes: f64,
    pub cook_minutes: f64,
    pub ingredients: Vec<String>,
    /// Steps numbered from 1
    pub steps: Vec<(usize, String)>,
}

impl DetailView {
    /// Label/value rows of the info block, in display order
    #[must_use]
    pub fn info_rows(&self) -> [(&'static str, String); 4] {
        [
            (CATEGORY_LABEL, self.category.clone()),
            (SERVINGS_LABEL, self.servings.clone()),
            (PREP_LABEL, format!("{} min", format_number(self.prep_minutes))),
            (COOK_LABEL, format!("{} min", format_number(self.cook_minutes))),
        ]
    }
}

/// Project one recipe into its detail view
#[must_use]
pub fn render_detail(recipe: &Recipe, options: &RenderOptions) -> DetailView {
    DetailView {
        title: recipe.title.clone(),
        image: options.image_for(recipe.image.as_deref()),
        category: recipe
            .category
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| MISSING.to_string()),
        servings: recipe
            .servings
            .filter(|&s| s != 0.0)
            .map_or_else(|| MISSING.to_string(), format_number),
        prep_minutes: recipe.prep_time_minutes.unwrap_or(0.0),
        cook_minutes: recipe.cook_time_minutes.unwrap_or(0.0),
        ingredients: recipe.ingredients.clone(),
        steps: recipe
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| (i + 1, step.clone()))
            .collect(),
    }
}
