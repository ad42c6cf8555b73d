//! Key mapping from terminal events to intents.

use crate::types::{Direction, Intent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to an intent.
///
/// Release events (reported by some terminals) never map to anything.
pub fn handle_key_event(key: KeyEvent) -> Option<Intent> {
    if key.kind == KeyEventKind::Release || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Intent::Move(Direction::Left)),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Intent::Move(Direction::Right)),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Intent::Move(Direction::Down)),

        // Rotation (clockwise only)
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Intent::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(Intent::Drop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Intent::Pause),
        KeyCode::Enter => Some(Intent::Start),

        // Back to idle
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
