//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. Printable characters always edit the
//! focused field, so commands are bound to control keys and function keys.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return map_control_key(key.key);
    }

    match key.key {
        KeyCode::Esc => Some(AppMsg::Quit),
        KeyCode::Enter => Some(AppMsg::SubmitSearch),
        KeyCode::Tab | KeyCode::Down => Some(AppMsg::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(AppMsg::FocusPrevious),
        KeyCode::Backspace => Some(AppMsg::DeleteChar),
        KeyCode::F(1) => Some(AppMsg::ToggleHelp),
        KeyCode::Char(character) if !character.is_control() => {
            Some(AppMsg::InsertChar(character))
        }
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_control_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('c' | 'q') => Some(AppMsg::Quit),
        KeyCode::Char('s') => Some(AppMsg::StarRequested),
        _ => None,
    }
}
