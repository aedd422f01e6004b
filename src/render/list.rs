//! List renderer: filtered recipes → summary cards

use super::{RenderOptions, format_number};
use crate::recipe::Recipe;

/// Summary of one recipe in the result list
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    /// Empty when the recipe has no category
    pub category: String,
    pub servings: Option<f64>,
    /// Absent prep time renders as 0
    pub prep_minutes: f64,
    pub description: String,
    pub tags: Vec<String>,
    /// Recipe image or the placeholder
    pub image: String,
}

impl Card {
    #[must_use]
    pub fn from_recipe(recipe: &Recipe, options: &RenderOptions) -> Self {
        Self {
            title: recipe.title.clone(),
            category: recipe.category.clone().unwrap_or_default(),
            servings: recipe.servings.filter(|&s| s != 0.0),
            prep_minutes: recipe.prep_time_minutes.unwrap_or(0.0),
            description: recipe.description.clone(),
            tags: recipe.tags.clone(),
            image: options.image_for(recipe.image.as_deref()),
        }
    }

    /// `"{category} • {servings} pers • {prep} min"`
    #[must_use]
    pub fn meta_line(&self) -> String {
        let servings = self.servings.map(format_number).unwrap_or_default();
        format!(
            "{} • {} pers • {} min",
            self.category,
            servings,
            format_number(self.prep_minutes)
        )
    }
}

/// Output of the list renderer; always replaces the previous list entirely
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Cards(Vec<Card>),
    /// Nothing matched: show the "no results" indicator instead of cards
    NoResults,
}

impl ListView {
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match self {
            Self::Cards(cards) => cards.as_slice(),
            Self::NoResults => &[],
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::NoResults)
    }
}

/// Project the filtered recipes into cards
#[must_use]
pub fn render_list(filtered: &[&Recipe], options: &RenderOptions) -> ListView {
    if filtered.is_empty() {
        return ListView::NoResults;
    }
    ListView::Cards(
        filtered
            .iter()
            .map(|recipe| Card::from_recipe(recipe, options))
            .collect(),
    )
}
