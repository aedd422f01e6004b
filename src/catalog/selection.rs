//! Tag selection state machine
//!
//! ```text
//!                choose(t)                 choose(u), u != t
//! NoTagSelected ──────────► TagSelected(t) ─────────────────► TagSelected(u)
//!       ▲                        │
//!       └────── choose(t) ───────┘   (choose_all from any state → NoTagSelected)
//! ```

/// Current tag filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagSelection {
    #[default]
    NoTagSelected,
    TagSelected(String),
}

impl TagSelection {
    /// Choose `tag`: selects it, or toggles it off if it is already selected
    pub fn choose(&mut self, tag: &str) {
        *self = match &*self {
            Self::TagSelected(current) if current == tag => Self::NoTagSelected,
            _ => Self::TagSelected(tag.to_string()),
        };
    }

    /// The explicit "all" control
    pub fn choose_all(&mut self) {
        *self = Self::NoTagSelected;
    }

    /// Currently selected tag, if any
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        match self {
            Self::NoTagSelected => None,
            Self::TagSelected(tag) => Some(tag.as_str()),
        }
    }
}

impl From<Option<String>> for TagSelection {
    fn from(tag: Option<String>) -> Self {
        tag.map_or(Self::NoTagSelected, Self::TagSelected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(TagSelection::default(), TagSelection::NoTagSelected);
        assert_eq!(TagSelection::default().active(), None);
    }

    #[test]
    fn test_choose_selects() {
        let mut selection = TagSelection::default();
        selection.choose("vegan");
        assert_eq!(selection, TagSelection::TagSelected("vegan".into()));
        assert_eq!(selection.active(), Some("vegan"));
    }

    #[test]
    fn test_choose_same_tag_toggles_off() {
        let mut selection = TagSelection::default();
        selection.choose("vegan");
        selection.choose("vegan");
        assert_eq!(selection, TagSelection::NoTagSelected);
    }

    #[test]
    fn test_choose_other_tag_switches() {
        let mut selection = TagSelection::TagSelected("vegan".into());
        selection.choose("dessert");
        assert_eq!(selection, TagSelection::TagSelected("dessert".into()));
    }

    #[test]
    fn test_choose_all_from_any_state() {
        let mut selection = TagSelection::TagSelected("vegan".into());
        selection.choose_all();
        assert_eq!(selection, TagSelection::NoTagSelected);

        selection.choose_all();
        assert_eq!(selection, TagSelection::NoTagSelected);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(TagSelection::from(None), TagSelection::NoTagSelected);
        assert_eq!(
            TagSelection::from(Some("fruit".to_string())),
            TagSelection::TagSelected("fruit".into())
        );
    }
}
