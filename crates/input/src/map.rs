//! Key and mouse mapping from terminal events to game controls.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// A game control bound to one or more keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Left,
    Right,
    /// Alternate jump key
    Up,
    Jump,
    /// Press the replay button from the keyboard
    Replay,
}

/// Map keyboard input to a game control.
pub fn handle_key_event(key: KeyEvent) -> Option<Control> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Control::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Control::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Control::Up),
        KeyCode::Char(' ') => Some(Control::Jump),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Control::Replay),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Convert a left-button press into screen pixels at the centre of the clicked cell.
pub fn click_position(mouse: MouseEvent, cell_w: i32, cell_h: i32) -> Option<(i32, i32)> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((
            i32::from(mouse.column) * cell_w + cell_w / 2,
            i32::from(mouse.row) * cell_h + cell_h / 2,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(Control::Left)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('D'))),
            Some(Control::Right)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), None);
    }

    #[test]
    fn test_jump_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), Some(Control::Up));
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(Control::Up)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(Control::Jump)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(Control::Replay)
        );
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
    fn test_click_maps_to_cell_centre() {
        let down = mouse(MouseEventKind::Down(MouseButton::Left), 64, 18);
        assert_eq!(click_position(down, 8, 16), Some((516, 296)));

        let right = mouse(MouseEventKind::Down(MouseButton::Right), 64, 18);
        assert_eq!(click_position(right, 8, 16), None);

        let up = mouse(MouseEventKind::Up(MouseButton::Left), 64, 18);
        assert_eq!(click_position(up, 8, 16), None);
    }
}
