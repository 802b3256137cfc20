//! Mapping from raw terminal key events to game actions
//!
//! Only key presses count; repeats and releases are dropped so holding
//! the tap key does not auto-fire. Unmapped keys are ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// High-level actions the player can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Press the tap button
    Tap,
    /// Open or close the about dialog
    ToggleAbout,
    /// Escape: dismiss the dialog, or quit from the main screen
    CloseDialog,
    /// Quit immediately
    Quit,
}

/// Translates a key event into a game action, if it maps to one
pub fn action_for(key: KeyEvent) -> Option<GameAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(GameAction::Quit);
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::Tap),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::ToggleAbout),
        KeyCode::Esc => Some(GameAction::CloseDialog),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameAction::Quit),
        _ => None,
    }
}
