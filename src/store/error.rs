//! Load error type for the recipe store
//!
//! There is a single failure kind at the store boundary: the catalog
//! document could not be retrieved or could not be parsed. The variants
//! keep the two apart so the log says which one happened; the user sees
//! the same message either way.

use thiserror::Error;

/// Errors raised while loading the recipe catalog
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read (missing file, permission denied, ...)
    #[error("Cannot read recipes from {source_name}: {error}")]
    Unreachable {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    /// The source was read but is not a well-formed catalog document
    #[error("Malformed recipe document in {source_name}: {error}")]
    Malformed {
        source_name: String,
        #[source]
        error: serde_json::Error,
    },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
