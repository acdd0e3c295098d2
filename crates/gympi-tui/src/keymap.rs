//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Dashboard keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// Close the detail view, or quit when none is open.
    Back,
    Left,
    Right,
    Up,
    Down,
    /// Trigger the selected card's detail control.
    Activate,
    ToggleLogs,
    PageUp,
    PageDown,
    Home,
    End,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Esc => KeyAction::Back,
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Activate,
        KeyCode::Char('l') => KeyAction::ToggleLogs,
        KeyCode::Left => KeyAction::Left,
        KeyCode::Right => KeyAction::Right,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::Up,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::Down,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn esc_goes_back() {
        assert_eq!(map_key(key(KeyCode::Esc)), KeyAction::Back);
    }

    #[test]
    fn enter_activates() {
        assert_eq!(map_key(key(KeyCode::Enter)), KeyAction::Activate);
        assert_eq!(map_key(key(KeyCode::Char(' '))), KeyAction::Activate);
    }

    #[test]
    fn arrows_move() {
        assert_eq!(map_key(key(KeyCode::Left)), KeyAction::Left);
        assert_eq!(map_key(key(KeyCode::Right)), KeyAction::Right);
        assert_eq!(map_key(key(KeyCode::Up)), KeyAction::Up);
        assert_eq!(map_key(key(KeyCode::Down)), KeyAction::Down);
        assert_eq!(map_key(key(KeyCode::Char('j'))), KeyAction::Down);
    }

    #[test]
    fn log_keys() {
        assert_eq!(map_key(key(KeyCode::Char('l'))), KeyAction::ToggleLogs);
        assert_eq!(map_key(key(KeyCode::PageUp)), KeyAction::PageUp);
        assert_eq!(map_key(key(KeyCode::PageDown)), KeyAction::PageDown);
        assert_eq!(map_key(key(KeyCode::Home)), KeyAction::Home);
        assert_eq!(map_key(key(KeyCode::End)), KeyAction::End);
    }

    #[test]
    fn plain_c_is_ignored() {
        assert_eq!(map_key(key(KeyCode::Char('c'))), KeyAction::None);
        assert_eq!(map_key(key(KeyCode::Char('z'))), KeyAction::None);
    }
}
