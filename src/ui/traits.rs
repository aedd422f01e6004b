//! Core traits for UI abstraction layer

use super::error::Result;
use super::types::BrowseOutcome;
use crate::catalog::Catalog;
use crate::render::RenderOptions;

/// Everything a browser needs to start a session
#[derive(Debug)]
pub struct BrowseConfig {
    /// Loaded (or failed) store plus the initial filter state
    pub catalog: Catalog,
    /// Placeholder image and other rendering options
    pub render: RenderOptions,
}

impl BrowseConfig {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            render: RenderOptions::default(),
        }
    }

    #[must_use]
    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }
}

/// Trait for interactive recipe browsers
///
/// A browser owns the session's filter state for its lifetime, feeds user
/// actions into the catalog, and draws the results.
pub trait RecipeBrowser {
    /// Run a browsing session until the user quits
    ///
    /// # Errors
    ///
    /// Returns an error if the front end cannot be initialized or fails
    /// while running.
    fn run(&self, config: BrowseConfig) -> Result<BrowseOutcome>;
}
