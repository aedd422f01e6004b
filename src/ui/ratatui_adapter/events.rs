//! Event handling for the ratatui TUI
//!
//! Handles keyboard and mouse events, mapping them to application actions.

use super::state::{AppState, FocusPane, Mode};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

/// Rows scrolled per key press in the detail overlay
const DETAIL_PAGE: i32 = 10;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Leave the browser
    Quit,
    /// No action taken
    Ignored,
}

/// Keys that edit the query, shared by both panes
fn handle_query_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.query_clear();
            EventResult::Continue
        }
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
            state.query_delete_word();
            EventResult::Continue
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            if state.query_backspace() {
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Delete, _) => {
            if state.query_delete() {
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
        _ => EventResult::Ignored,
    }
}

/// Handle events in normal mode
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_exit = true;
            return EventResult::Quit;
        }
        (KeyCode::F(1), _) => {
            state.mode = Mode::Help;
            return EventResult::Continue;
        }
        (KeyCode::Tab | KeyCode::BackTab, _) => {
            state.toggle_focus();
            return EventResult::Continue;
        }
        _ => {}
    }

    match state.focus {
        FocusPane::Tags => handle_tags_pane(state, key),
        FocusPane::Recipes => handle_recipes_pane(state, key),
    }
}

fn handle_tags_pane(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Left => state.chip_left(),
        KeyCode::Right => state.chip_right(),
        KeyCode::Home => state.chip_cursor = 0,
        KeyCode::End => state.chip_cursor = state.chips.len().saturating_sub(1),
        KeyCode::Enter | KeyCode::Char(' ') => state.choose_current_chip(),
        KeyCode::Down => state.focus = FocusPane::Recipes,
        _ => return handle_query_key(state, key),
    }
    EventResult::Continue
}

fn handle_recipes_pane(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => state.open_selected(),
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => state.cursor_up(),
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => state.cursor_down(),
        (KeyCode::PageUp, _) => state.page_up(),
        (KeyCode::PageDown, _) => state.page_down(),
        (KeyCode::Home, _) => state.jump_to_start(),
        (KeyCode::End, _) => state.jump_to_end(),
        (KeyCode::Left, _) => state.query_cursor_left(),
        (KeyCode::Right, _) => state.query_cursor_right(),
        _ => return handle_query_key(state, key),
    }
    EventResult::Continue
}

/// Handle events while the detail overlay is open
fn handle_detail_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_exit = true;
            EventResult::Quit
        }
        (KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q'), _) => {
            state.close_detail();
            EventResult::Continue
        }
        (KeyCode::Up | KeyCode::Char('k'), _) => {
            state.detail_scroll_by(-1);
            EventResult::Continue
        }
        (KeyCode::Down | KeyCode::Char('j'), _) => {
            state.detail_scroll_by(1);
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.detail_scroll_by(-DETAIL_PAGE);
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.detail_scroll_by(DETAIL_PAGE);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Handle events in help mode
fn handle_help_mode(state: &mut AppState) -> EventResult {
    // Any key closes help
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Dispatch a key event according to the current mode
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    if key.kind != KeyEventKind::Press {
        return EventResult::Ignored;
    }
    match state.mode {
        Mode::Normal => handle_normal_mode(state, key),
        Mode::Help => handle_help_mode(state),
        Mode::Detail => handle_detail_mode(state, key),
    }
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            state.click(mouse.column, mouse.row);
            EventResult::Continue
        }
        MouseEventKind::ScrollUp => {
            if state.mode == Mode::Detail {
                state.detail_scroll_by(-1);
            } else {
                state.cursor_up();
            }
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            if state.mode == Mode::Detail {
                state.detail_scroll_by(1);
            } else {
                state.cursor_down();
            }
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
