//! Key handling for keyboard play.

use crossterm::event::KeyCode;
use vanishing_tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Play the given cell.
    Select(Position),
    /// Play the cell under the cursor.
    SelectCursor,
    /// Move the cursor.
    MoveCursor(KeyCode),
    /// Start a new game.
    Reset,
    /// Switch between two-player and computer mode.
    ToggleMode,
    /// Leave the app.
    Quit,
}

/// Maps a key to an action, `None` for keys the game ignores.
pub fn action_for(key: KeyCode) -> Option<InputAction> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(InputAction::Select),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(InputAction::MoveCursor(key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputAction::SelectCursor),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Reset),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(InputAction::ToggleMode),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputAction::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_select_cells() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(InputAction::Select(Position::TopLeft)));
        assert_eq!(action_for(KeyCode::Char('5')), Some(InputAction::Select(Position::Center)));
        assert_eq!(
            action_for(KeyCode::Char('9')),
            Some(InputAction::Select(Position::BottomRight))
        );
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for(KeyCode::Char('r')), Some(InputAction::Reset));
        assert_eq!(action_for(KeyCode::Char('m')), Some(InputAction::ToggleMode));
        assert_eq!(action_for(KeyCode::Esc), Some(InputAction::Quit));
        assert_eq!(action_for(KeyCode::Enter), Some(InputAction::SelectCursor));
        assert_eq!(action_for(KeyCode::Tab), None);
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Down), Position::BottomLeft);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Right), Position::TopRight);
        assert_eq!(move_cursor(Position::MiddleLeft, KeyCode::Char('x')), Position::MiddleLeft);
    }
}
