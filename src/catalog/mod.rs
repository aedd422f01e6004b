//! Catalog core: tag index, filter engine, tag selection and session state
//!
//! Everything in here is a pure function of the recipe collection and the
//! explicit [`FilterState`]; the presentation layers (`ui`, `output`) own the
//! state and call into these functions on every input event.

pub mod filter;
pub mod selection;
pub mod session;
pub mod tags;

pub use filter::{filter, filter_indices, normalize_query};
pub use selection::TagSelection;
pub use session::{Catalog, FilterState};
pub use tags::{TagChip, tag_chips, tag_counts, tags_of};
