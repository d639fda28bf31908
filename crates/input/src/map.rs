//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Enter pauses (and starts a game from the menu), X/Z rotate, arrows move
/// and soft drop. Vim and WASD aliases are accepted as well.
pub fn map_key(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(GameAction::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('x' | 'X' | 'k' | 'K' | 'w' | 'W') => {
            Some(GameAction::RotateCw)
        }
        KeyCode::Char('z' | 'Z' | 'y' | 'Y') => Some(GameAction::RotateCcw),

        // Pause / confirm
        KeyCode::Enter | KeyCode::Char('p' | 'P') => Some(GameAction::Pause),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Option<GameAction> {
        map_key(KeyEvent::from(code))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(key(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(key(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(key(KeyCode::Down), Some(GameAction::SoftDrop));
        assert_eq!(key(KeyCode::Up), Some(GameAction::RotateCw));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(key(KeyCode::Char('x')), Some(GameAction::RotateCw));
        assert_eq!(key(KeyCode::Char('X')), Some(GameAction::RotateCw));
        assert_eq!(key(KeyCode::Char('z')), Some(GameAction::RotateCcw));
        assert_eq!(key(KeyCode::Char('Z')), Some(GameAction::RotateCcw));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(key(KeyCode::Char('H')), Some(GameAction::MoveLeft));
        assert_eq!(key(KeyCode::Char('d')), Some(GameAction::MoveRight));
        assert_eq!(key(KeyCode::Char('j')), Some(GameAction::SoftDrop));
        assert_eq!(key(KeyCode::Char('y')), Some(GameAction::RotateCcw));
    }

    #[test]
    fn test_enter_pauses() {
        assert_eq!(key(KeyCode::Enter), Some(GameAction::Pause));
        assert_eq!(key(KeyCode::Char('p')), Some(GameAction::Pause));
        assert_eq!(key(KeyCode::Char(' ')), None);
        assert_eq!(key(KeyCode::Char('c')), None);
    }

    #[test]
    fn test_control_chords_are_not_actions() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
