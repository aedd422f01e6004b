//! Cookbook - a small recipe catalog browser
//!
//! This library loads a static recipe collection once and lets a front end
//! narrow it with a free-text query and a single selected tag, render
//! summary cards, and show the full detail of one recipe.
//!
//! The core (`store`, `catalog`, `render`) is pure and independent of any
//! front end; `ui` is the interactive terminal browser and `output` the
//! plain CLI formatter built on top of it.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod recipe;
pub mod render;
pub mod store;
pub mod ui;

#[cfg(test)]
pub mod testing;

pub use recipe::Recipe;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum CookbookError {
    /// The recipe catalog could not be loaded
    #[error("Load error: {0}")]
    LoadError(#[from] store::LoadError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// No recipe with the requested title
    #[error("Recipe not found: {0}")]
    NotFound(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
