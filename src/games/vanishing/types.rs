//! Core domain types for vanishing tic-tac-toe.

use super::action::MoveError;
use super::lines::{LINES, WinningLine};
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (always moves first).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player's marker.
    Occupied(Player),
}

impl Square {
    /// Returns the owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 board, the single authority on cell occupancy.
///
/// The board knows nothing about move order. Eviction is driven by
/// [`MoveHistory`](super::history::MoveHistory), which clears cells here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Returns the square at the given position.
    pub fn cell_at(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell_at(pos) == Square::Empty
    }

    /// Places a player's marker on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the square already holds a marker.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(player);
        Ok(())
    }

    /// Empties a square. Clearing an empty square is a no-op.
    pub fn clear(&mut self, pos: Position) {
        self.squares[pos.to_index()] = Square::Empty;
    }

    /// Returns every winning line fully occupied by `player`, in scan order.
    pub fn lines_matching(&self, player: Player) -> Vec<WinningLine> {
        LINES
            .iter()
            .copied()
            .filter(|line| {
                line.positions()
                    .iter()
                    .all(|&pos| self.cell_at(pos) == Square::Occupied(player))
            })
            .collect()
    }

    /// True iff no square is empty.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of squares holding `player`'s marker.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so the grid doubles as a keypad legend.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Result status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Turn state machine as seen from outside: whose turn, or how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Phase {
    /// Game in progress, this player to move.
    #[display("Player {_0}'s turn")]
    Turn(Player),
    /// Terminal: this player completed a line.
    #[display("Player {_0} wins!")]
    Won(Player),
    /// Terminal: the board filled with no line.
    #[display("Draw!")]
    Draw,
}

impl Phase {
    /// Returns true for the terminal phases.
    pub fn is_over(self) -> bool {
        !matches!(self, Phase::Turn(_))
    }
}

/// Who controls the markers.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the input.
    #[default]
    HumanVsHuman,
    /// Human plays X, the computer plays O.
    HumanVsComputer,
}

impl GameMode {
    /// Marker played by the computer, if this mode has one.
    pub fn computer_player(self) -> Option<Player> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer => Some(Player::O),
        }
    }

    /// True if `player` is driven by the computer in this mode.
    pub fn is_computer(self, player: Player) -> bool {
        self.computer_player() == Some(player)
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            GameMode::HumanVsHuman => GameMode::HumanVsComputer,
            GameMode::HumanVsComputer => GameMode::HumanVsHuman,
        }
    }

    /// Returns display name.
    pub fn name(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsComputer => "Human vs Computer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_rejects_occupied() {
        let mut board = Board::new();
        board.place(Position::Center, Player::X).unwrap();
        assert_eq!(
            board.place(Position::Center, Player::O),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(board.cell_at(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_clear_empties_square() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::O).unwrap();
        board.clear(Position::TopLeft);
        assert!(board.is_empty(Position::TopLeft));
        board.clear(Position::TopLeft);
        assert!(board.is_empty(Position::TopLeft));
    }

    #[test]
    fn test_lines_matching_scan_order() {
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.place(pos, Player::X).unwrap();
        }
        let lines = board.lines_matching(Player::X);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], LINES[0]);
        assert_eq!(lines[1], LINES[3]);
        assert!(board.lines_matching(Player::O).is_empty());
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        assert!(!board.is_full());
        for (i, pos) in Position::ALL.iter().enumerate() {
            let player = if i % 2 == 0 { Player::X } else { Player::O };
            board.place(*pos, player).unwrap();
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_display_shows_keys_for_empty() {
        let mut board = Board::new();
        board.place(Position::Center, Player::O).unwrap();
        assert_eq!(board.display(), "1|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_mode_parses_kebab_case() {
        let mode: GameMode = "human-vs-computer".parse().unwrap();
        assert_eq!(mode, GameMode::HumanVsComputer);
        assert_eq!(mode.computer_player(), Some(Player::O));
        assert_eq!(mode.toggled(), GameMode::HumanVsHuman);
        assert_eq!(GameMode::default().computer_player(), None);
    }
}
