//! Cookbook CLI application entry point
//!
//! Loads the recipe catalog once and either opens the interactive terminal
//! browser or prints cards, details, or the tag index.
//!
//! # Usage
//!
//! ```bash
//! # Browse recipes interactively (default command)
//! cookbook
//! cookbook browse tarte -t dessert
//!
//! # Print matching cards
//! cookbook list poireau
//! cookbook ls -t vegan
//!
//! # Print one recipe
//! cookbook show "Soupe de légumes"
//!
//! # Tag index with usage counts
//! cookbook tags
//!
//! # Use another catalog
//! cookbook --recipes data/recipes.json list
//! ```
//!
//! # Configuration
//!
//! Stored in the user's config directory (`~/.config/cookbook/config.toml`
//! on Linux); a default file is written on first run.

use cookbook::{
    CookbookError,
    catalog::{Catalog, FilterState, tag_counts},
    cli::{Cli, Commands, ConfigCommands},
    config::CookbookConfig,
    logging, output,
    render::{LOAD_ERROR_LABEL, RenderOptions, render_detail},
    store::{FileSource, RecipeStore},
    ui::{
        BrowseConfig, OutputWriter, RecipeBrowser, StdoutWriter,
        ratatui_adapter::{RatatuiBrowser, Theme},
    },
};
use std::process::ExitCode;

type Result<T> = std::result::Result<T, CookbookError>;

/// Handle the browse command - interactive terminal browser
///
/// A catalog that failed to load is still browsed: the list pane shows the
/// load error instead of cards.
///
/// # Errors
///
/// Returns `CookbookError` if the terminal cannot be set up or drawn to.
fn handle_browse_command(
    catalog: Catalog,
    options: RenderOptions,
    theme: Theme,
    writer: &dyn OutputWriter,
) -> Result<()> {
    let config = BrowseConfig::new(catalog).with_render_options(options);
    let outcome = RatatuiBrowser::new().with_theme(theme).run(config)?;

    tracing::debug!(
        query = %outcome.final_state.query,
        tag = ?outcome.final_state.active_tag(),
        "browse finished"
    );
    if !outcome.viewed.is_empty() {
        writer.info(&format!("Viewed: {}", outcome.viewed.join(", ")));
    }
    Ok(())
}

/// Handle the list command - print the cards of the filtered subset
fn handle_list_command(
    catalog: &Catalog,
    options: &RenderOptions,
    quiet: bool,
    writer: &dyn OutputWriter,
) {
    writer.info(&output::chips(&catalog.chips()));
    writer.write(&output::list(&catalog.list_view(options), quiet));
}

/// Handle the show command - print one recipe in full
///
/// # Errors
///
/// Returns `CookbookError::NotFound` if no recipe has that title.
fn handle_show_command(
    store: &RecipeStore,
    title: &str,
    options: &RenderOptions,
    writer: &dyn OutputWriter,
) -> Result<()> {
    let recipe = store
        .find_by_title(title)
        .ok_or_else(|| CookbookError::NotFound(title.to_string()))?;
    writer.write(&output::detail(&render_detail(recipe, options)));
    Ok(())
}

/// Handle the tags command - print every tag with its usage count
fn handle_tags_command(store: &RecipeStore, quiet: bool, writer: &dyn OutputWriter) {
    let counts = tag_counts(store.all());
    if counts.is_empty() {
        writer.info("No tags found");
        return;
    }

    writer.info("Tags:");
    for (tag, count) in counts {
        writer.write(&output::tag_with_count(&tag, count, quiet));
    }
}

/// Handle the config command - read or change a configuration value
///
/// # Errors
///
/// Returns `CookbookError` for a malformed setting, an unknown key, or a
/// failed save.
fn handle_config_command(
    mut config: CookbookConfig,
    command: &ConfigCommands,
    writer: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                CookbookError::InvalidInput(
                    "Invalid format. Use: cookbook config set key=value".into(),
                )
            })?;
            let (key, value) = (key.trim(), value.trim());

            config.set_value(key, value)?;
            config.save()?;
            writer.success(&format!("Set {key} = {value}"));
        }
        ConfigCommands::Get { key } => {
            writer.write(&config.get_value(key)?);
        }
    }
    Ok(())
}

/// Load the recipe catalog named by the CLI or the config
///
/// The store is returned even when loading fails, together with the error,
/// so `browse` can show the failure in place of the list.
fn load_store(config: &CookbookConfig, cli: &Cli) -> (RecipeStore, Result<()>) {
    let source = FileSource::new(config.resolve_recipes_path(cli.recipes.as_deref()));
    let mut store = RecipeStore::new();
    let loaded = store.load(&source).map_err(|e| {
        tracing::error!(path = %source.path().display(), "failed to load recipes: {e}");
        CookbookError::from(e)
    });
    (store, loaded)
}

/// Load configuration, parse arguments, and dispatch to a command handler
///
/// # Errors
///
/// Returns `CookbookError` if configuration loading fails, the catalog
/// cannot be loaded (except for `browse`), a seeded tag is unknown, or a
/// handler fails.
fn run() -> Result<()> {
    let config = CookbookConfig::load()?;
    let cli = Cli::parse_args();
    logging::init(&config)?;

    let quiet = cli.quiet || config.quiet;
    let writer = StdoutWriter::new(quiet);
    let options = RenderOptions::with_placeholder(config.placeholder_image.clone());

    let command = cli.get_command();
    let (query, tag) = command.filter_args();
    let state = FilterState::new(query, tag);

    match &command {
        Commands::Config { command } => handle_config_command(config, command, &writer)?,
        Commands::Browse { .. } => {
            let (store, _) = load_store(&config, &cli);
            let catalog = Catalog::seeded(store, state)?;
            let theme = Theme::named(&config.theme).unwrap_or_default();
            handle_browse_command(catalog, options, theme, &writer)?;
        }
        Commands::List { .. } => {
            let (store, loaded) = load_store(&config, &cli);
            loaded?;
            let catalog = Catalog::seeded(store, state)?;
            handle_list_command(&catalog, &options, quiet, &writer);
        }
        Commands::Show { title } => {
            let (store, loaded) = load_store(&config, &cli);
            loaded?;
            handle_show_command(&store, &title.join(" "), &options, &writer)?;
        }
        Commands::Tags => {
            let (store, loaded) = load_store(&config, &cli);
            loaded?;
            handle_tags_command(&store, quiet, &writer);
        }
    }

    Ok(())
}

/// Main entry point for the cookbook application
///
/// Exits with status 1 on any error; a catalog load failure is reported as
/// the user-facing load error message.
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = match &e {
                CookbookError::LoadError(_) => LOAD_ERROR_LABEL.to_string(),
                other => other.to_string(),
            };
            StdoutWriter::default().error(&message);
            ExitCode::FAILURE
        }
    }
}
