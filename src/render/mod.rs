//! Projection of recipes into display units
//!
//! The renderers here produce plain data ([`Card`], [`ListView`],
//! [`DetailView`]) with every optional field already defaulted. The terminal
//! widgets and the CLI formatter draw those; they never look at a
//! [`Recipe`](crate::recipe::Recipe) directly.

pub mod detail;
pub mod list;

pub use detail::{DetailView, render_detail};
pub use list::{Card, ListView, render_list};

/// Image shown when a recipe has none
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "images/placeholder.jpg";

/// Indicator shown instead of cards when nothing matches
pub const NO_RESULTS_LABEL: &str = "Aucune recette ne correspond à votre recherche.";

/// Message shown in place of the list when the catalog failed to load
pub const LOAD_ERROR_LABEL: &str = "Erreur de chargement des recettes.";

/// Display a JSON number without a trailing `.0` for whole values
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Options shared by the list and detail renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub placeholder_image: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn with_placeholder(placeholder_image: impl Into<String>) -> Self {
        Self {
            placeholder_image: placeholder_image.into(),
        }
    }

    /// The recipe's image, or the placeholder
    pub(crate) fn image_for(&self, image: Option<&str>) -> String {
        image
            .filter(|i| !i.is_empty())
            .unwrap_or(&self.placeholder_image)
            .to_string()
    }
}
