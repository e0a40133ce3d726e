//! Event handling utilities

use crossterm::event::KeyCode;

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the highlight or option cursor up
    Up,
    /// Move the highlight or option cursor down
    Down,
    /// Confirm: start a chapter, submit an answer, or dismiss feedback
    Select,
    /// Advance to the next question
    Next,
    /// Back to the chapter menu
    Back,
    /// Quit the application (menu only)
    Quit,
}

/// Vim-style key mapping
pub fn key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
        KeyCode::Enter => Some(Action::Select),
        KeyCode::Char('n') | KeyCode::Char('l') | KeyCode::Right => Some(Action::Next),
        KeyCode::Esc | KeyCode::Char('m') => Some(Action::Back),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vim_j_maps_to_down() {
        assert_eq!(key_to_action(KeyCode::Char('j')), Some(Action::Down));
        assert_eq!(key_to_action(KeyCode::Down), Some(Action::Down));
    }

    #[test]
    fn vim_k_maps_to_up() {
        assert_eq!(key_to_action(KeyCode::Char('k')), Some(Action::Up));
        assert_eq!(key_to_action(KeyCode::Up), Some(Action::Up));
    }

    #[test]
    fn enter_maps_to_select() {
        assert_eq!(key_to_action(KeyCode::Enter), Some(Action::Select));
    }

    #[test]
    fn n_maps_to_next() {
        assert_eq!(key_to_action(KeyCode::Char('n')), Some(Action::Next));
    }

    #[test]
    fn esc_and_m_map_to_back() {
        assert_eq!(key_to_action(KeyCode::Esc), Some(Action::Back));
        assert_eq!(key_to_action(KeyCode::Char('m')), Some(Action::Back));
    }

    #[test]
    fn unknown_key_returns_none() {
        assert_eq!(key_to_action(KeyCode::Char('x')), None);
    }
}
