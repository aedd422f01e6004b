//! Ratatui-based recipe browser
//!
//! Implements the `RecipeBrowser` trait: search bar, tag bar, card list,
//! and a detail overlay, driven by crossterm key and mouse events.

use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, CARD_HEIGHT, FocusPane, Mode};
use super::theme::Theme;
use super::widgets::{CardList, DetailModal, HelpBar, HelpOverlay, SearchBar, StatusBar, TagBar};
use crate::store::LoadStatus;
use crate::ui::error::{Result, UiError};
use crate::ui::traits::{BrowseConfig, RecipeBrowser};
use crate::ui::types::BrowseOutcome;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    widgets::{Block, Borders},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Event poll interval
const TICK: Duration = Duration::from_millis(50);

/// Ratatui-based recipe browser
#[derive(Debug, Default)]
pub struct RatatuiBrowser {
    theme: Theme,
}

impl RatatuiBrowser {
    /// Create a new ratatui browser
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom theme
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Draw one frame, recording the areas used for mouse hit-testing
    fn render(&self, frame: &mut Frame, state: &mut AppState) {
        let theme = &self.theme;
        let area = frame.area();
        let bordered = Block::default().borders(Borders::ALL);

        let tag_height = TagBar::required_height(&state.chips, area.width)
            .min((area.height / 3).max(3));
        let [search_area, tag_area, list_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(3),                   // Search bar
            Constraint::Length(tag_height),          // Tag bar
            Constraint::Min(CARD_HEIGHT as u16 + 2), // Cards
            Constraint::Length(3),                   // Status bar
            Constraint::Length(1),                   // Help bar
        ])
        .areas(area);

        state.chip_areas = TagBar::layout(&state.chips, bordered.inner(tag_area));
        state.list_area = CardList::inner(list_area);
        state.set_visible_height((state.list_area.height as usize / CARD_HEIGHT).max(1));

        frame.render_widget(
            SearchBar::new(&state.query, state.query_cursor, theme)
                .focused(state.mode == Mode::Normal),
            search_area,
        );
        frame.render_widget(
            TagBar::new(&state.chips, state.chip_cursor, theme)
                .focused(state.focus == FocusPane::Tags),
            tag_area,
        );
        frame.render_widget(CardList::new(state, theme), list_area);

        let messages = state.active_messages();
        let status = StatusBar::new(
            &messages,
            theme,
            state.visible.len(),
            state.catalog.store().len(),
        )
        .with_active_tag(state.catalog.state().active_tag());
        frame.render_widget(status, status_area);
        let hints = HelpBar::hints_for(state.mode, state.focus);
        frame.render_widget(HelpBar::new(hints, theme), help_area);
    }

    /// Render overlays on top of the main screen
    fn render_overlays(&self, frame: &mut Frame, state: &mut AppState) {
        match state.mode {
            Mode::Help => frame.render_widget(HelpOverlay::new(&self.theme), frame.area()),
            Mode::Detail => {
                state.detail_area = Some(DetailModal::area(frame.area()));
                if let Some(detail) = &state.detail {
                    let modal = DetailModal::new(detail, &self.theme).scroll(state.detail_scroll);
                    frame.render_widget(modal, frame.area());
                }
            }
            Mode::Normal => {}
        }
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        config: BrowseConfig,
    ) -> Result<BrowseOutcome> {
        let mut state = AppState::new(config.catalog, config.render);

        loop {
            terminal.draw(|frame| {
                self.render(frame, &mut state);
                self.render_overlays(frame, &mut state);
            })?;

            if poll_and_handle(&mut state, TICK)? == EventResult::Quit || state.should_exit {
                break;
            }
            state.cleanup_messages();
        }

        tracing::debug!(viewed = state.viewed.len(), "browser session ended");
        Ok(state.into_outcome())
    }
}

impl RecipeBrowser for RatatuiBrowser {
    fn run(&self, config: BrowseConfig) -> Result<BrowseOutcome> {
        if matches!(config.catalog.store().status(), LoadStatus::NotLoaded) {
            return Err(UiError::InvalidConfig(
                "recipe store has not been loaded".to_string(),
            ));
        }

        // Setup terminal
        let mut terminal = Self::setup_terminal()?;

        // Run the event loop, ensuring cleanup happens
        let result = self.run_loop(&mut terminal, config);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            tracing::warn!("terminal cleanup failed: {e}");
        }

        result
    }
}
