//! Configuration module for cookbook
//!
//! Manages application configuration: where the recipe catalog lives, the
//! placeholder image, and logging. Configuration is stored in the user's
//! config directory (`~/.config/cookbook/config.toml` on Linux).

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::DEFAULT_PLACEHOLDER_IMAGE;

/// Catalog file used when neither the CLI nor the config names one
pub const DEFAULT_RECIPES_FILE: &str = "recipes.json";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Browser color palettes accepted by the `theme` key
pub const THEMES: [&str; 2] = ["dark", "light"];

fn default_theme() -> String {
    THEMES[0].to_string()
}

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CookbookConfig {
    /// Path of the recipe catalog (JSON)
    #[serde(default)]
    pub recipes_path: Option<PathBuf>,

    /// Image shown for recipes without one
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Browser palette: "dark" or "light"
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Log filter used when `RUST_LOG` is not set (e.g. "warn", "cookbook=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Write logs to this file instead of stderr
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for CookbookConfig {
    fn default() -> Self {
        Self {
            recipes_path: None,
            placeholder_image: default_placeholder_image(),
            quiet: false,
            theme: default_theme(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

impl CookbookConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("cookbook").join("config.toml"))
    }

    /// Load configuration from the user config file, creating a default one
    /// if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config path cannot be determined or
    /// writing fails.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Catalog path: explicit override, then config, then `recipes.json`
    #[must_use]
    pub fn resolve_recipes_path(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.recipes_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RECIPES_FILE))
    }

    /// Set a value by key, as used by `cookbook config set key=value`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or an unparsable value.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "recipes_path" => {
                self.recipes_path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "placeholder_image" => value.clone_into(&mut self.placeholder_image),
            "quiet" => {
                self.quiet = value.parse::<bool>().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                    ))
                })?;
            }
            "theme" => {
                if !THEMES.contains(&value) {
                    return Err(ConfigError::Message(format!(
                        "Invalid value for theme: '{value}'. Use 'dark' or 'light'"
                    )));
                }
                value.clone_into(&mut self.theme);
            }
            "log_level" => value.clone_into(&mut self.log_level),
            "log_file" => {
                self.log_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            _ => return Err(Self::unknown_key(key)),
        }
        Ok(())
    }

    /// Get a value by key as display text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigError> {
        let display_path =
            |p: &Option<PathBuf>| p.as_ref().map(|p| p.display().to_string()).unwrap_or_default();
        match key {
            "recipes_path" => Ok(display_path(&self.recipes_path)),
            "placeholder_image" => Ok(self.placeholder_image.clone()),
            "quiet" => Ok(self.quiet.to_string()),
            "theme" => Ok(self.theme.clone()),
            "log_level" => Ok(self.log_level.clone()),
            "log_file" => Ok(display_path(&self.log_file)),
            _ => Err(Self::unknown_key(key)),
        }
    }

    fn unknown_key(key: &str) -> ConfigError {
        ConfigError::Message(format!(
            "Unknown configuration key: '{key}'. Available keys: recipes_path, placeholder_image, quiet, theme, log_level, log_file"
        ))
    }
}
