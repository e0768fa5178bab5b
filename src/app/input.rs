use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::maze::Direction;

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    /// Start a new maze
    Restart,
    Quit,
}

/// Map a key event to a game action. Key releases, repeats of non-movement keys and
/// unknown keys map to `None`.
pub fn action_for(key_event: &KeyEvent) -> Option<Action> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        // Raw mode swallows Ctrl-C, so treat it as quit
        return match key_event.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }
    let action = match key_event.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Action::Move(Direction::Up),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => {
            Action::Move(Direction::Right)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Action::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Action::Move(Direction::Left),
        KeyCode::Enter | KeyCode::Char('r') if key_event.kind == KeyEventKind::Press => {
            Action::Restart
        }
        KeyCode::Esc | KeyCode::Char('q') if key_event.kind == KeyEventKind::Press => {
            Action::Quit
        }
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(action_for(&press(KeyCode::Up)), Some(Action::Move(Direction::Up)));
        assert_eq!(
            action_for(&press(KeyCode::Right)),
            Some(Action::Move(Direction::Right))
        );
        assert_eq!(
            action_for(&press(KeyCode::Down)),
            Some(Action::Move(Direction::Down))
        );
        assert_eq!(
            action_for(&press(KeyCode::Left)),
            Some(Action::Move(Direction::Left))
        );
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(
            action_for(&press(KeyCode::Char('w'))),
            Some(Action::Move(Direction::Up))
        );
        assert_eq!(
            action_for(&press(KeyCode::Char('h'))),
            Some(Action::Move(Direction::Left))
        );
        assert_eq!(action_for(&press(KeyCode::Char('r'))), Some(Action::Restart));
        assert_eq!(action_for(&press(KeyCode::Enter)), Some(Action::Restart));
        assert_eq!(action_for(&press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(action_for(&press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(action_for(&press(KeyCode::Char('x'))), None);
        assert_eq!(action_for(&press(KeyCode::Tab)), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(&event), Some(Action::Quit));
        let event = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(action_for(&event), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let mut event = press(KeyCode::Up);
        event.kind = KeyEventKind::Release;
        assert_eq!(action_for(&event), None);
    }

    #[test]
    fn test_held_arrow_repeats_but_restart_does_not() {
        let mut event = press(KeyCode::Left);
        event.kind = KeyEventKind::Repeat;
        assert_eq!(action_for(&event), Some(Action::Move(Direction::Left)));
        let mut event = press(KeyCode::Enter);
        event.kind = KeyEventKind::Repeat;
        assert_eq!(action_for(&event), None);
    }
}
