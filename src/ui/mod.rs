//! UI abstraction layer
//!
//! The presentation shell of the catalog: it translates user actions into
//! catalog calls and rendered views into visuals. The core stays unaware of
//! terminals and key codes.
//!
//! # Core Traits
//!
//! - **`RecipeBrowser`** - An interactive browsing session
//! - **`OutputWriter`** - Status messages with severity levels
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Catalog core                       │
//! │   (store, filter, tags, renderers)      │
//! └────────────────▲────────────────────────┘
//!                  │ ShellEvent / views
//! ┌────────────────┴────────────────────────┐
//! │      RecipeBrowser trait                │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌─────────────────┐  ┌───────────────────┐
//! │ ScriptedBrowser │  │ RatatuiBrowser    │
//! │ (tests)         │  │   (default)       │
//! └─────────────────┘  └───────────────────┘
//! ```

pub mod error;
pub mod mock;
pub mod output;
pub mod ratatui_adapter;
pub mod traits;
pub mod types;

pub use error::{Result, UiError};
pub use mock::ScriptedBrowser;
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
pub use traits::{BrowseConfig, RecipeBrowser};
pub use types::{BrowseOutcome, ShellEvent};
