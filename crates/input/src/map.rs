//! Key mapping from terminal events to polled game keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::poller::HeldKey;

/// Map a key code to one of the held gameplay keys.
///
/// Arrow keys and WASD are both accepted.
pub fn held_key_for(code: KeyCode) -> Option<HeldKey> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(HeldKey::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(HeldKey::Right),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(HeldKey::FastDrop),
        _ => None,
    }
}

/// True if this key code requests a rotation.
pub fn is_rotate_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W')
    )
}

/// True if this key starts a game / leaves a screen (Space).
pub fn is_start_key(key: KeyEvent) -> bool {
    key.code == KeyCode::Char(' ')
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
