//! Where the catalog document comes from

use super::error::LoadError;
use std::fs;
use std::path::{Path, PathBuf};

/// A readable catalog document
///
/// The store only needs the raw text and a human-readable name for error
/// messages; parsing is done by the store itself.
pub trait RecipeSource {
    /// Name used in log lines and error messages
    fn name(&self) -> String;

    /// Read the whole document
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Unreachable` if the document cannot be read.
    fn read(&self) -> Result<String, LoadError>;
}

/// Catalog stored in a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecipeSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<String, LoadError> {
        fs::read_to_string(&self.path).map_err(|error| LoadError::Unreachable {
            source_name: self.name(),
            error,
        })
    }
}

/// Catalog held in memory (embedded data, tests)
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    text: String,
}

impl StaticSource {
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl RecipeSource for StaticSource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn read(&self) -> Result<String, LoadError> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_source_missing_file() {
        let source = FileSource::new("/nonexistent/dir/recipes.json");
        let err = source.read().unwrap_err();
        assert!(matches!(err, LoadError::Unreachable { .. }));
        assert_eq!(source.name(), "/nonexistent/dir/recipes.json");
    }

    #[test]
    fn test_file_source_reads_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(&path, r#"{"recipes": []}"#).unwrap();

        let source = FileSource::new(&path);
        assert_eq!(source.read().unwrap(), r#"{"recipes": []}"#);
        assert_eq!(source.path(), path.as_path());
    }

    #[test]
    fn test_static_source() {
        let source = StaticSource::new("inline", "{}");
        assert_eq!(source.name(), "inline");
        assert_eq!(source.read().unwrap(), "{}");
    }
}
