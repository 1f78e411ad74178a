//! Key mapping from terminal events to viewer actions.

use crate::types::ViewerAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to viewer actions.
pub fn handle_key_event(key: KeyEvent) -> Option<ViewerAction> {
    if should_quit(key) {
        return Some(ViewerAction::Quit);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(ViewerAction::Prev),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(ViewerAction::Next),
        _ => None,
    }
}

/// Check if key should leave the viewer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
