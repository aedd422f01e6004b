//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for cookbook using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive terminal browser (default)
//! - **list**: Print the cards matching a query and tag
//! - **show**: Print the full detail of one recipe
//! - **tags**: Print the tag index
//! - **config**: Read or change configuration values
//!
//! # Examples
//!
//! ```no_run
//! use cookbook::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//! match cli.get_command() {
//!     Commands::List { query, tag } => println!("{query:?} {tag:?}"),
//!     _ => {}
//! }
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., quiet=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., `recipes_path`)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "cookbook")]
#[command(about = "Browse a recipe catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Recipe document to load (overrides config)
    #[arg(long = "recipes", value_name = "PATH", global = true)]
    pub recipes: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive recipe browser (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Initial search query
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Initially selected tag
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tag: Option<String>,
    },

    /// Print the recipes matching a query and tag
    #[command(visible_alias = "ls")]
    List {
        /// Search query (title, description, ingredients)
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Only recipes carrying this tag
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tag: Option<String>,
    },

    /// Print the full detail of one recipe
    Show {
        /// Recipe title (case-insensitive)
        #[arg(value_name = "TITLE", num_args = 1.., required = true)]
        title: Vec<String>,
    },

    /// Print every tag with its usage count
    Tags,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Commands {
    /// Query and tag to seed the filter with, for `browse` and `list`
    #[must_use]
    pub fn filter_args(&self) -> (String, Option<String>) {
        match self {
            Self::Browse { query, tag } | Self::List { query, tag } => {
                (query.clone().unwrap_or_default(), tag.clone())
            }
            _ => (String::new(), None),
        }
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            query: None,
            tag: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_browse() {
        let cli = Cli::parse_from(["cookbook"]);
        assert_eq!(
            cli.get_command(),
            Commands::Browse {
                query: None,
                tag: None
            }
        );
    }

    #[test]
    fn test_browse_alias_with_seed() {
        let cli = Cli::parse_from(["cookbook", "b", "tarte", "-t", "dessert"]);
        let (query, tag) = cli.get_command().filter_args();
        assert_eq!(query, "tarte");
        assert_eq!(tag.as_deref(), Some("dessert"));
    }

    #[test]
    fn test_list_alias() {
        let cli = Cli::parse_from(["cookbook", "ls", "--tag", "vegan"]);
        assert_eq!(
            cli.command,
            Some(Commands::List {
                query: None,
                tag: Some("vegan".to_string())
            })
        );
    }

    #[test]
    fn test_show_joins_words() {
        let cli = Cli::parse_from(["cookbook", "show", "Soupe", "de", "légumes"]);
        match cli.command {
            Some(Commands::Show { title }) => assert_eq!(title.join(" "), "Soupe de légumes"),
            other => panic!("Expected Show command, got {other:?}"),
        }
    }

    #[test]
    fn test_show_requires_title() {
        assert!(Cli::try_parse_from(["cookbook", "show"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["cookbook", "tags", "-q", "--recipes", "data/r.json"]);
        assert!(cli.quiet);
        assert_eq!(cli.recipes, Some(PathBuf::from("data/r.json")));
        assert_eq!(cli.command, Some(Commands::Tags));
    }

    #[test]
    fn test_config_commands() {
        let cli = Cli::parse_from(["cookbook", "config", "set", "quiet=true"]);
        let command = cli.get_command();
        assert_eq!(command.filter_args(), (String::new(), None));
        assert_eq!(
            command,
            Commands::Config {
                command: ConfigCommands::Set {
                    setting: "quiet=true".to_string()
                }
            }
        );

        let cli = Cli::parse_from(["cookbook", "config", "get", "log_level"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommands::Get { .. }
            })
        ));
    }
}
