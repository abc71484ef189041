//! The eight fixed winning lines.

use super::position::Position;
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// Three positions that win when one player holds all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Positions on this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// True if `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// If `player` holds exactly two cells and the third is empty, returns the empty one.
    pub fn completing_move(&self, board: &Board, player: Player) -> Option<Position> {
        let owned = self
            .0
            .iter()
            .filter(|&&pos| board.cell_at(pos) == Square::Occupied(player))
            .count();
        let mut empty = self.0.iter().copied().filter(|&pos| board.is_empty(pos));
        match (owned, empty.next(), empty.next()) {
            (2, Some(pos), None) => Some(pos),
            _ => None,
        }
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}-{}-{}", a.to_index(), b.to_index(), c.to_index())
    }
}

/// Winning lines in scan order: rows, then columns, then diagonals.
pub const LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinningLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinningLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinningLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinningLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_on_some_line() {
        for pos in Position::ALL {
            assert!(LINES.iter().any(|line| line.contains(pos)));
        }
        assert_eq!(LINES.iter().filter(|l| l.contains(Position::Center)).count(), 4);
    }

    #[test]
    fn test_completing_move() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X).unwrap();
        board.place(Position::TopCenter, Player::X).unwrap();
        assert_eq!(LINES[0].completing_move(&board, Player::X), Some(Position::TopRight));
        assert_eq!(LINES[0].completing_move(&board, Player::O), None);

        board.place(Position::TopRight, Player::O).unwrap();
        assert_eq!(LINES[0].completing_move(&board, Player::X), None);
    }

    #[test]
    fn test_display_uses_indices() {
        assert_eq!(LINES[7].to_string(), "2-4-6");
    }
}
