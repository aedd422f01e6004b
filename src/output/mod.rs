//! Output formatting for CLI display
//!
//! Text renditions of the rendered views: cards for `list`, the detail
//! block for `show`, and the tag index for `tags`.

use crate::catalog::TagChip;
use crate::render::detail::{INGREDIENTS_LABEL, STEPS_LABEL};
use crate::render::{Card, DetailView, ListView, NO_RESULTS_LABEL};
use colored::Colorize;

/// Format tag badges: `[dessert] [fruit]`
#[must_use]
pub fn badges(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("[{t}]").magenta().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format one card
///
/// In quiet mode only the title is printed, for scripting.
#[must_use]
pub fn card(card: &Card, quiet: bool) -> String {
    if quiet {
        return card.title.clone();
    }

    let mut lines = vec![
        format!("{}", card.title.bold()),
        format!("  {}", card.meta_line().dimmed()),
    ];
    if !card.description.is_empty() {
        lines.push(format!("  {}", card.description));
    }
    if !card.tags.is_empty() {
        lines.push(format!("  {}", badges(&card.tags)));
    }
    lines.push(format!("  {}", card.image.dimmed()));
    lines.join("\n")
}

/// Format a whole list view: cards separated by blank lines, or the
/// "no results" indicator
#[must_use]
pub fn list(view: &ListView, quiet: bool) -> String {
    match view {
        ListView::NoResults => NO_RESULTS_LABEL.to_string(),
        ListView::Cards(cards) => {
            let separator = if quiet { "\n" } else { "\n\n" };
            cards
                .iter()
                .map(|c| card(c, quiet))
                .collect::<Vec<_>>()
                .join(separator)
        }
    }
}

/// Format the detail view of one recipe
#[must_use]
pub fn detail(view: &DetailView) -> String {
    let mut lines = vec![
        format!("{}", view.title.bold().underline()),
        format!("{}", view.image.dimmed()),
        String::new(),
    ];

    for (label, value) in view.info_rows() {
        lines.push(format!("{:<13} {value}", format!("{label}:").cyan()));
    }

    lines.push(String::new());
    lines.push(format!("{}", INGREDIENTS_LABEL.yellow().bold()));
    lines.extend(view.ingredients.iter().map(|i| format!("  • {i}")));

    lines.push(String::new());
    lines.push(format!("{}", STEPS_LABEL.yellow().bold()));
    lines.extend(view.steps.iter().map(|(n, s)| format!("  {n}. {s}")));

    lines.join("\n")
}

/// Format the filter bar on one line; the active chip is highlighted
#[must_use]
pub fn chips(chips: &[TagChip]) -> String {
    chips
        .iter()
        .map(|chip| {
            if chip.active {
                format!("[{}]", chip.label).black().on_magenta().to_string()
            } else {
                format!("[{}]", chip.label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} (used by {count} recipe(s))")
    }
}
