//! Tag index
//!
//! Derives the distinct tags of a collection and the chip list shown in the
//! filter bar.

use super::selection::TagSelection;
use crate::recipe::Recipe;
use std::collections::{BTreeMap, BTreeSet};

/// Label of the chip that clears the tag filter
pub const ALL_TAGS_LABEL: &str = "Tous";

/// Distinct tags across all recipes, deduplicated and sorted ascending
#[must_use]
pub fn tags_of(recipes: &[Recipe]) -> Vec<String> {
    recipes
        .iter()
        .flat_map(|r| r.tags.iter())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .cloned()
        .collect()
}

/// Tags with the number of recipes carrying each, in `tags_of` order
///
/// A recipe listing the same tag twice is counted once.
#[must_use]
pub fn tag_counts(recipes: &[Recipe]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for recipe in recipes {
        let unique: BTreeSet<&str> = recipe.tags.iter().map(String::as_str).collect();
        for tag in unique {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect()
}

/// One button of the tag filter bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    /// Text shown on the chip
    pub label: String,
    /// Canonical tag value; `None` for the "all" chip
    pub value: Option<String>,
    /// Whether this chip reflects the current selection
    pub active: bool,
}

impl TagChip {
    /// Whether this is the "all" chip
    #[must_use]
    pub const fn is_all(&self) -> bool {
        self.value.is_none()
    }
}

/// Build the filter bar: the "all" chip first, then one chip per tag
///
/// Exactly one chip is active when the selected tag is part of `tags`.
/// Activity is decided on the tag value, never on the label, so two tags
/// that happen to display alike stay distinct.
#[must_use]
pub fn tag_chips(tags: &[String], selection: &TagSelection) -> Vec<TagChip> {
    let active = selection.active();
    let mut chips = Vec::with_capacity(tags.len() + 1);
    chips.push(TagChip {
        label: ALL_TAGS_LABEL.to_string(),
        value: None,
        active: active.is_none(),
    });
    chips.extend(tags.iter().map(|tag| TagChip {
        label: tag.clone(),
        value: Some(tag.clone()),
        active: active == Some(tag.as_str()),
    }));
    chips
}
