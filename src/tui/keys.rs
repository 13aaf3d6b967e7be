/// Keyboard and mouse event to action mapping
///
/// This module handles converting crossterm KeyEvents and MouseEvents into
/// Actions. The mapping depends on which view is open.
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::trace;

use super::action::{Action, SettingsAction};
use super::state::AppState;
use super::types::View;
use super::view::date_at;

/// Days moved by the up/down arrows
const DAYS_PER_ROW: i64 = 7;

/// Handle global keys that work regardless of the open view
fn handle_global_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('s') => Some(Action::ToggleSettings),
        _ => None,
    }
}

/// Year view: arrows move the selection, brackets and paging change year
fn handle_calendar_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Left => Some(Action::MoveSelection(-1)),
        KeyCode::Right => Some(Action::MoveSelection(1)),
        KeyCode::Up => Some(Action::MoveSelection(-DAYS_PER_ROW)),
        KeyCode::Down => Some(Action::MoveSelection(DAYS_PER_ROW)),
        KeyCode::Char('[') | KeyCode::PageUp => Some(Action::ChangeYear(-1)),
        KeyCode::Char(']') | KeyCode::PageDown => Some(Action::ChangeYear(1)),
        KeyCode::Char('t') | KeyCode::Home => Some(Action::GoToToday),
        KeyCode::Char('r') => Some(Action::ReloadEvents),
        _ => None,
    }
}

/// Settings view: arrows pick and adjust, space/enter toggle, ESC closes
fn handle_settings_keys(key_code: KeyCode) -> Option<Action> {
    let settings_action = match key_code {
        KeyCode::Up => SettingsAction::MoveUp,
        KeyCode::Down => SettingsAction::MoveDown,
        KeyCode::Char(' ') | KeyCode::Enter => SettingsAction::Toggle,
        KeyCode::Left => SettingsAction::DecreaseMaxEvents,
        KeyCode::Right => SettingsAction::IncreaseMaxEvents,
        KeyCode::Esc => return Some(Action::ToggleSettings),
        _ => return None,
    };
    Some(Action::SettingsAction(settings_action))
}

/// Convert a key event to an action for the current state
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!("KEY: {:?} in {:?}", key.code, state.ui.view);

    if let Some(action) = handle_global_keys(key.code) {
        return Some(action);
    }

    match state.ui.view {
        View::Calendar => handle_calendar_keys(key.code),
        View::Settings => handle_settings_keys(key.code),
    }
}

/// A left click on a day cell selects that day
///
/// `screen` is the full terminal area the frame was drawn into.
pub fn mouse_to_action(mouse: MouseEvent, state: &AppState, screen: Rect) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    trace!("MOUSE: click at ({}, {})", mouse.column, mouse.row);
    date_at(state, screen, mouse.column, mouse.row).map(Action::SelectDate)
}
