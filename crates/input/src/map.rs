//! Mapping from terminal events to game actions.

use crate::types::{GameAction, BOARD_CELLS};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to game actions.
///
/// Cursor keys are not mapped here; see [`crate::CursorHandler`].
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Squares, numbered row by row from the top-left
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as u8 - b'1') as usize;
            debug_assert!(index < BOARD_CELLS);
            Some(GameAction::Click(index))
        }

        // History
        KeyCode::Char('[') | KeyCode::Char(',') | KeyCode::PageUp => Some(GameAction::StepBack),
        KeyCode::Char(']') | KeyCode::Char('.') | KeyCode::PageDown => {
            Some(GameAction::StepForward)
        }
        KeyCode::Home | KeyCode::Char('g') => Some(GameAction::JumpToStart),
        KeyCode::End | KeyCode::Char('G') => Some(GameAction::JumpToLatest),

        // Move list order
        KeyCode::Char('t') | KeyCode::Char('T') | KeyCode::Char('o') | KeyCode::Char('O') => {
            Some(GameAction::ToggleSort)
        }

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Terminal position of a left-button press.
///
/// Drags, releases and other buttons are not clicks.
pub fn mouse_click(event: MouseEvent) -> Option<(u16, u16)> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((event.column, event.row)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_digit_keys_click_squares() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(GameAction::Click(0))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('5'))),
            Some(GameAction::Click(4))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('9'))),
            Some(GameAction::Click(8))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_history_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('['))),
            Some(GameAction::StepBack)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::PageDown)),
            Some(GameAction::StepForward)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Home)),
            Some(GameAction::JumpToStart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('G'))),
            Some(GameAction::JumpToLatest)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('t'))),
            Some(GameAction::ToggleSort)
        );
    }

    #[test]
    fn test_cursor_keys_are_left_to_the_handler() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_only_left_press_is_a_click() {
        assert_eq!(
            mouse_click(mouse(MouseEventKind::Down(MouseButton::Left), 4, 7)),
            Some((4, 7))
        );
        assert_eq!(
            mouse_click(mouse(MouseEventKind::Up(MouseButton::Left), 4, 7)),
            None
        );
        assert_eq!(
            mouse_click(mouse(MouseEventKind::Down(MouseButton::Right), 4, 7)),
            None
        );
        assert_eq!(mouse_click(mouse(MouseEventKind::Moved, 4, 7)), None);
    }
}
