//! Application state for the ratatui TUI
//!
//! Owns the catalog (and through it the session's filter state) together
//! with everything the terminal needs on top: query cursor, list cursor,
//! focus, overlay mode, status messages, and the screen areas recorded
//! during the last draw for mouse hit-testing.

use crate::catalog::{Catalog, TagChip};
use crate::recipe::Recipe;
use crate::render::{DetailView, LOAD_ERROR_LABEL, ListView, RenderOptions, render_list};
use crate::store::LoadStatus;
use crate::ui::output::MessageLevel;
use crate::ui::types::{BrowseOutcome, ShellEvent};
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};

/// Terminal rows used by one card in the recipe list
pub const CARD_HEIGHT: usize = 4;

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
    /// Recipe detail overlay is visible
    Detail,
}

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// The tag filter bar
    Tags,
    /// The recipe card list
    #[default]
    Recipes,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, warning, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Application state for the recipe browser
#[derive(Debug)]
pub struct AppState {
    /// Recipes plus query and tag selection
    pub catalog: Catalog,
    /// Rendering options (placeholder image)
    pub options: RenderOptions,
    /// Filter bar chips, rebuilt on every filter change
    pub chips: Vec<TagChip>,
    /// Highlighted chip when the tag bar has focus
    pub chip_cursor: usize,
    /// Store positions of the visible recipes
    pub visible: Vec<usize>,
    /// Cards for `visible`, or `NoResults`
    pub list_view: ListView,
    /// Cursor position in the visible list
    pub cursor: usize,
    /// First visible card
    pub scroll_offset: usize,
    /// Number of cards that fit in the list area (set during render)
    pub visible_height: usize,
    /// Search input text; mirrored into the catalog on every edit
    pub query: String,
    /// Cursor position (byte offset) within the query string
    pub query_cursor: usize,
    /// Current UI mode
    pub mode: Mode,
    /// Focused pane
    pub focus: FocusPane,
    /// Detail overlay content
    pub detail: Option<DetailView>,
    /// Scroll offset inside the detail overlay
    pub detail_scroll: u16,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the browser should exit
    pub should_exit: bool,
    /// Titles opened in detail during the session
    pub viewed: Vec<String>,
    /// Chip rectangles from the last draw
    pub chip_areas: Vec<Rect>,
    /// Inner area of the card list from the last draw
    pub list_area: Rect,
    /// Detail overlay rectangle from the last draw
    pub detail_area: Option<Rect>,
}

impl AppState {
    /// Create the state for a session over `catalog`
    #[must_use]
    pub fn new(catalog: Catalog, options: RenderOptions) -> Self {
        let query = catalog.state().query.clone();
        let query_cursor = query.len();
        let mut state = Self {
            catalog,
            options,
            chips: Vec::new(),
            chip_cursor: 0,
            visible: Vec::new(),
            list_view: ListView::NoResults,
            cursor: 0,
            scroll_offset: 0,
            visible_height: 5, // Default, updated during render
            query,
            query_cursor,
            mode: Mode::Normal,
            focus: FocusPane::Recipes,
            detail: None,
            detail_scroll: 0,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            should_exit: false,
            viewed: Vec::new(),
            chip_areas: Vec::new(),
            list_area: Rect::default(),
            detail_area: None,
        };

        if state.load_failed() {
            // Stays visible for the whole session
            state.message_ttl = Duration::MAX;
            state.add_message(MessageLevel::Error, LOAD_ERROR_LABEL.to_string());
        }
        state.refresh();
        state
    }

    /// Whether the catalog failed to load
    #[must_use]
    pub const fn load_failed(&self) -> bool {
        matches!(self.catalog.store().status(), LoadStatus::Failed(_))
    }

    /// Recompute chips, visible recipes and cards from the catalog
    ///
    /// Replaces the previous list entirely.
    pub fn refresh(&mut self) {
        self.chips = self.catalog.chips();
        self.visible = self.catalog.visible_indices();

        let recipes = self.catalog.store().all();
        let filtered: Vec<&Recipe> = self.visible.iter().filter_map(|&i| recipes.get(i)).collect();
        self.list_view = render_list(&filtered, &self.options);

        if self.cursor >= self.visible.len() {
            self.cursor = self.visible.len().saturating_sub(1);
        }
        if self.chip_cursor >= self.chips.len() {
            self.chip_cursor = self.chips.len().saturating_sub(1);
        }
        self.scroll_offset = 0;
        self.adjust_scroll();
    }

    /// Apply a front-end independent user action
    pub fn apply(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::QueryInput(text) => {
                self.query_cursor = text.len();
                self.query = text;
                self.on_query_changed();
            }
            ShellEvent::TagClicked(value) => {
                match &value {
                    Some(tag) if !self.catalog.store().tags().contains(tag) => {
                        tracing::debug!(tag = %tag, "ignoring tag outside the index");
                        return;
                    }
                    Some(tag) => self.catalog.choose_tag(tag),
                    None => self.catalog.choose_all(),
                }
                self.refresh();
                if let Some(pos) = self.chips.iter().position(|c| c.value == value) {
                    self.chip_cursor = pos;
                }
            }
            ShellEvent::RecipeActivated(index) => self.open_recipe(index),
            ShellEvent::CloseDetail => self.close_detail(),
            ShellEvent::Quit => self.should_exit = true,
        }
    }

    /// Push the query text into the catalog and re-filter
    fn on_query_changed(&mut self) {
        self.catalog.set_query(self.query.clone());
        self.refresh();
    }

    /// Choose the chip at `index` in the filter bar
    pub fn choose_chip(&mut self, index: usize) {
        if let Some(chip) = self.chips.get(index) {
            let value = chip.value.clone();
            self.apply(ShellEvent::TagClicked(value));
        }
    }

    /// Choose the chip under the chip cursor
    pub fn choose_current_chip(&mut self) {
        self.choose_chip(self.chip_cursor);
    }

    /// Open the detail overlay for the recipe under the cursor
    pub fn open_selected(&mut self) {
        if let Some(&index) = self.visible.get(self.cursor) {
            self.open_recipe(index);
        }
    }

    /// Open the detail overlay for the recipe at store position `index`
    pub fn open_recipe(&mut self, index: usize) {
        if let Some(detail) = self.catalog.detail(index, &self.options) {
            self.viewed.push(detail.title.clone());
            self.detail = Some(detail);
            self.detail_scroll = 0;
            self.mode = Mode::Detail;
        }
    }

    /// Close the detail overlay; the filter state is left untouched
    pub fn close_detail(&mut self) {
        self.detail = None;
        self.detail_area = None;
        self.detail_scroll = 0;
        self.mode = Mode::Normal;
    }

    /// Switch focus between tag bar and recipe list
    pub const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Tags => FocusPane::Recipes,
            FocusPane::Recipes => FocusPane::Tags,
        };
    }

    /// Move cursor up
    pub const fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down
    pub const fn cursor_down(&mut self) {
        if self.cursor + 1 < self.visible.len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor up by one page
    pub const fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height);
        self.adjust_scroll();
    }

    /// Move cursor down by one page
    pub fn page_down(&mut self) {
        let max_cursor = self.visible.len().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height).min(max_cursor);
        self.adjust_scroll();
    }

    /// Jump to first item
    pub const fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    /// Jump to last item
    pub const fn jump_to_end(&mut self) {
        self.cursor = self.visible.len().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Adjust scroll offset to keep cursor visible
    const fn adjust_scroll(&mut self) {
        let height = if self.visible_height == 0 {
            1
        } else {
            self.visible_height
        };
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }

    /// Update the number of cards that fit, keeping the cursor in view
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
        self.adjust_scroll();
    }

    /// Move the chip cursor left
    pub const fn chip_left(&mut self) {
        self.chip_cursor = self.chip_cursor.saturating_sub(1);
    }

    /// Move the chip cursor right
    pub const fn chip_right(&mut self) {
        if self.chip_cursor + 1 < self.chips.len() {
            self.chip_cursor += 1;
        }
    }

    /// Add a character to the query
    pub fn query_push(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
        self.on_query_changed();
    }

    /// Remove a character from the query (backspace)
    ///
    /// Returns `false` when there was nothing to remove.
    pub fn query_backspace(&mut self) -> bool {
        if self.query_cursor == 0 {
            return false;
        }
        let prev_char_boundary = self.query[..self.query_cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.query.remove(prev_char_boundary);
        self.query_cursor = prev_char_boundary;
        self.on_query_changed();
        true
    }

    /// Delete character under cursor
    ///
    /// Returns `false` when the cursor is at the end of the query.
    pub fn query_delete(&mut self) -> bool {
        if self.query_cursor >= self.query.len() {
            return false;
        }
        self.query.remove(self.query_cursor);
        self.on_query_changed();
        true
    }

    /// Delete the word before the cursor
    pub fn query_delete_word(&mut self) {
        let trimmed = self.query[..self.query_cursor].trim_end();
        if let Some(last_space) = trimmed.rfind(' ') {
            self.query.drain(last_space + 1..self.query_cursor);
            self.query_cursor = last_space + 1;
        } else {
            self.query.drain(..self.query_cursor);
            self.query_cursor = 0;
        }
        self.on_query_changed();
    }

    /// Move query cursor left
    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move query cursor right
    pub fn query_cursor_right(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query_cursor = self.query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    /// Clear the query
    pub fn query_clear(&mut self) {
        self.query.clear();
        self.query_cursor = 0;
        self.on_query_changed();
    }

    /// Scroll the detail overlay
    pub const fn detail_scroll_by(&mut self, delta: i32) {
        let next = self.detail_scroll as i32 + delta;
        self.detail_scroll = if next < 0 {
            0
        } else if next > u16::MAX as i32 {
            u16::MAX
        } else {
            next as u16
        };
    }

    /// Index of the chip drawn at the given terminal cell
    #[must_use]
    pub fn chip_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.chip_areas.iter().position(|area| area.contains(pos))
    }

    /// Visible-list position of the card drawn at the given terminal cell
    #[must_use]
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.list_area.contains(Position::new(column, row)) {
            return None;
        }
        let offset = (row - self.list_area.y) as usize / CARD_HEIGHT;
        let position = self.scroll_offset + offset;
        (position < self.visible.len()).then_some(position)
    }

    /// Handle a primary mouse click at the given terminal cell
    pub fn click(&mut self, column: u16, row: u16) {
        match self.mode {
            Mode::Detail => {
                let inside = self
                    .detail_area
                    .is_some_and(|area| area.contains(Position::new(column, row)));
                if !inside {
                    self.close_detail();
                }
            }
            Mode::Help => self.mode = Mode::Normal,
            Mode::Normal => {
                if let Some(chip) = self.chip_at(column, row) {
                    self.focus = FocusPane::Tags;
                    self.choose_chip(chip);
                } else if let Some(position) = self.card_at(column, row) {
                    self.focus = FocusPane::Recipes;
                    self.cursor = position;
                    self.adjust_scroll();
                    self.open_selected();
                }
            }
        }
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Get non-expired messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Clean up expired messages
    pub fn cleanup_messages(&mut self) {
        let ttl = self.message_ttl;
        self.messages.retain(|m| !m.is_expired(ttl));
    }

    /// Summary of the session for the caller
    #[must_use]
    pub fn into_outcome(self) -> BrowseOutcome {
        BrowseOutcome {
            final_state: self.catalog.state().clone(),
            viewed: self.viewed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TagSelection;
    use crate::store::{RecipeStore, StaticSource};
    use crate::testing::sample_recipes;

    fn make_state() -> AppState {
        AppState::new(
            Catalog::new(RecipeStore::from_recipes(sample_recipes())),
            RenderOptions::default(),
        )
    }

    #[test]
    fn test_initial_state() {
        let state = make_state();
        assert_eq!(state.visible, [0, 1]);
        assert_eq!(state.list_view.cards().len(), 2);
        assert_eq!(state.chips.len(), 5);
        assert!(state.chips[0].active);
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_query_edit_refilters() {
        let mut state = make_state();
        for c in "soupe".chars() {
            state.query_push(c);
        }
        assert_eq!(state.catalog.state().query, "soupe");
        assert_eq!(state.visible, [1]);

        state.query_clear();
        assert_eq!(state.visible, [0, 1]);
    }

    #[test]
    fn test_query_no_results() {
        let mut state = make_state();
        state.apply(ShellEvent::QueryInput("pizza".into()));
        assert!(state.visible.is_empty());
        assert_eq!(state.list_view, ListView::NoResults);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_query_unicode_editing() {
        let mut state = make_state();
        for c in "lég".chars() {
            state.query_push(c);
        }
        state.query_cursor_left();
        assert!(state.query_backspace());
        assert_eq!(state.query, "lg");
        state.query_cursor_right();
        assert_eq!(state.query_cursor, state.query.len());
        assert!(!state.query_delete());
    }

    #[test]
    fn test_query_delete_word() {
        let mut state = make_state();
        state.apply(ShellEvent::QueryInput("soupe de".into()));
        state.query_delete_word();
        assert_eq!(state.query, "soupe ");
        state.query_delete_word();
        assert_eq!(state.query, "");
    }

    #[test]
    fn test_choose_chip_toggles() {
        let mut state = make_state();
        let vegan = state
            .chips
            .iter()
            .position(|c| c.value.as_deref() == Some("vegan"))
            .unwrap();

        state.choose_chip(vegan);
        assert_eq!(state.visible, [1]);
        assert!(state.chips[vegan].active);
        assert_eq!(state.chip_cursor, vegan);

        state.choose_chip(vegan);
        assert_eq!(state.catalog.state().selection, TagSelection::NoTagSelected);
        assert_eq!(state.visible, [0, 1]);
    }

    #[test]
    fn test_unknown_tag_click_is_ignored() {
        let mut state = make_state();
        state.apply(ShellEvent::TagClicked(Some("vegan".into())));
        state.apply(ShellEvent::TagClicked(Some("pizza".into())));

        assert_eq!(
            state.catalog.state().selection,
            TagSelection::TagSelected("vegan".into())
        );
        assert_eq!(state.chips.iter().filter(|c| c.active).count(), 1);
        assert_eq!(state.visible, [1]);
    }

    #[test]
    fn test_open_and_close_detail() {
        let mut state = make_state();
        state.apply(ShellEvent::QueryInput("soupe".into()));
        let before = state.catalog.state().clone();

        state.open_selected();
        assert_eq!(state.mode, Mode::Detail);
        assert_eq!(state.detail.as_ref().unwrap().title, "Soupe de légumes");

        state.close_detail();
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.detail.is_none());
        assert_eq!(state.catalog.state(), &before);
        assert_eq!(state.viewed, ["Soupe de légumes"]);
    }

    #[test]
    fn test_open_selected_on_empty_list() {
        let mut state = make_state();
        state.apply(ShellEvent::QueryInput("pizza".into()));
        state.open_selected();
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.viewed.is_empty());
    }

    #[test]
    fn test_click_outside_detail_closes() {
        let mut state = make_state();
        state.open_recipe(0);
        state.detail_area = Some(Rect::new(10, 5, 40, 20));

        state.click(20, 10);
        assert_eq!(state.mode, Mode::Detail);

        state.click(1, 1);
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_click_on_chip_and_card() {
        let mut state = make_state();
        state.chip_areas = vec![Rect::new(0, 0, 6, 1), Rect::new(7, 0, 9, 1)];
        state.list_area = Rect::new(0, 3, 40, 8);

        state.click(8, 0);
        assert_eq!(state.catalog.state().active_tag(), Some("dessert"));
        assert_eq!(state.focus, FocusPane::Tags);

        state.click(0, 0);
        assert_eq!(state.catalog.state().active_tag(), None);

        // Second card starts CARD_HEIGHT rows below the list top
        state.click(2, 3 + CARD_HEIGHT as u16);
        assert_eq!(state.cursor, 1);
        assert_eq!(state.mode, Mode::Detail);
    }

    #[test]
    fn test_card_at_outside_list() {
        let mut state = make_state();
        state.list_area = Rect::new(0, 3, 40, 8);
        assert_eq!(state.card_at(0, 0), None);
        assert_eq!(state.card_at(0, 3), Some(0));
    }

    #[test]
    fn test_cursor_navigation_and_scroll() {
        let recipes = (0..10)
            .map(|i| crate::Recipe::new(format!("Recette {i}")))
            .collect();
        let mut state = AppState::new(
            Catalog::new(RecipeStore::from_recipes(recipes)),
            RenderOptions::default(),
        );
        state.set_visible_height(3);

        state.jump_to_end();
        assert_eq!(state.cursor, 9);
        assert_eq!(state.scroll_offset, 7);

        state.page_up();
        assert_eq!(state.cursor, 6);
        state.jump_to_start();
        assert_eq!(state.scroll_offset, 0);

        state.cursor_up();
        assert_eq!(state.cursor, 0);
        state.page_down();
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn test_load_failure_message() {
        let mut store = RecipeStore::new();
        let _ = store.load(&StaticSource::new("broken", "not json"));
        let state = AppState::new(Catalog::new(store), RenderOptions::default());

        assert!(state.load_failed());
        assert!(state.visible.is_empty());
        let messages = state.active_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, LOAD_ERROR_LABEL);
    }

    #[test]
    fn test_detail_scroll_saturates() {
        let mut state = make_state();
        state.detail_scroll_by(-3);
        assert_eq!(state.detail_scroll, 0);
        state.detail_scroll_by(4);
        assert_eq!(state.detail_scroll, 4);
    }
}
