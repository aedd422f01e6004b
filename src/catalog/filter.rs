//! Filter engine
//!
//! A recipe is visible when it matches both the free-text query and the
//! active tag. The result is a stable subsequence of the input: matching
//! recipes keep their original relative order.

use crate::recipe::Recipe;

/// Trim and lower-case a raw query as typed by the user
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Text part of the match; `needle` must already be normalized
fn matches_text(recipe: &Recipe, needle: &str) -> bool {
    needle.is_empty() || recipe.searchable_text().contains(needle)
}

fn matches_tag(recipe: &Recipe, active_tag: Option<&str>) -> bool {
    active_tag.is_none_or(|tag| recipe.has_tag(tag))
}

/// Positions of the recipes matching `query` and `active_tag`, ascending
#[must_use]
pub fn filter_indices(recipes: &[Recipe], query: &str, active_tag: Option<&str>) -> Vec<usize> {
    let needle = normalize_query(query);
    recipes
        .iter()
        .enumerate()
        .filter(|(_, recipe)| matches_text(recipe, &needle) && matches_tag(recipe, active_tag))
        .map(|(idx, _)| idx)
        .collect()
}

/// Recipes matching `query` and `active_tag`, in original order
#[must_use]
pub fn filter<'a>(recipes: &'a [Recipe], query: &str, active_tag: Option<&str>) -> Vec<&'a Recipe> {
    filter_indices(recipes, query, active_tag)
        .into_iter()
        .map(|idx| &recipes[idx])
        .collect()
}
