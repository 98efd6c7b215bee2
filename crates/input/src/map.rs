//! Key mapping from terminal events to replay decisions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// True when the key asks for another play-through.
pub fn is_replay_key(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y'))
        && !key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_replay_keys() {
        assert!(is_replay_key(KeyEvent::from(KeyCode::Char('y'))));
        assert!(is_replay_key(KeyEvent::from(KeyCode::Char('Y'))));

        assert!(!is_replay_key(KeyEvent::from(KeyCode::Char('n'))));
        assert!(!is_replay_key(KeyEvent::from(KeyCode::Enter)));
        assert!(!is_replay_key(KeyEvent::new(
            KeyCode::Char('y'),
            KeyModifiers::CONTROL
        )));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
