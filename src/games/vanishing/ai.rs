//! Heuristic computer opponent.
//!
//! Priority, evaluated against the current board only:
//! win, block, center, random corner, random edge, random empty square.
//! The choice is returned to the engine, which applies it through the same
//! pipeline as a human move.

use super::lines::LINES;
use super::position::Position;
use super::types::{Board, Player};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Which rule produced the computer's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Reason {
    /// Completes one of its own lines.
    #[display("win")]
    Win,
    /// Stops the opponent completing a line.
    #[display("block")]
    Block,
    /// Takes the center.
    #[display("center")]
    Center,
    /// Takes a free corner.
    #[display("corner")]
    Corner,
    /// Takes a free edge.
    #[display("edge")]
    Edge,
    /// Any free square.
    #[display("fallback")]
    Fallback,
}

/// First empty square (in line scan order) that gives `player` three in a row.
pub fn completing_move(board: &Board, player: Player) -> Option<Position> {
    LINES.iter().find_map(|line| line.completing_move(board, player))
}

/// Picks the computer's move and the rule that chose it.
///
/// Returns `None` only when the board has no empty square.
#[instrument(skip(board, rng), fields(board = %board.display()))]
pub fn choose_move_with_reason<R: Rng + ?Sized>(
    board: &Board,
    own: Player,
    opponent: Player,
    rng: &mut R,
) -> Option<(Position, Reason)> {
    let empty_among = |candidates: &[Position]| -> Vec<Position> {
        candidates
            .iter()
            .copied()
            .filter(|&p| board.is_empty(p))
            .collect()
    };

    let choice = if let Some(pos) = completing_move(board, own) {
        Some((pos, Reason::Win))
    } else if let Some(pos) = completing_move(board, opponent) {
        Some((pos, Reason::Block))
    } else if board.is_empty(Position::Center) {
        Some((Position::Center, Reason::Center))
    } else if let Some(&pos) = empty_among(&Position::CORNERS).choose(rng) {
        Some((pos, Reason::Corner))
    } else if let Some(&pos) = empty_among(&Position::EDGES).choose(rng) {
        Some((pos, Reason::Edge))
    } else {
        Position::valid_moves(board)
            .choose(rng)
            .map(|&pos| (pos, Reason::Fallback))
    };

    match choice {
        Some((pos, reason)) => debug!(position = %pos, %reason, "Computer chose move"),
        None => debug!("No empty square for the computer"),
    }
    choice
}

/// Picks the computer's move for `own` against `opponent`.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    own: Player,
    opponent: Player,
    rng: &mut R,
) -> Option<Position> {
    choose_move_with_reason(board, own, opponent, rng).map(|(pos, _)| pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn board_with(x: &[Position], o: &[Position]) -> Board {
        let mut board = Board::new();
        for &pos in x {
            board.place(pos, Player::X).unwrap();
        }
        for &pos in o {
            board.place(pos, Player::O).unwrap();
        }
        board
    }

    fn pick(board: &Board) -> Option<(Position, Reason)> {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        choose_move_with_reason(board, Player::O, Player::X, &mut rng)
    }

    #[test]
    fn test_blocks_open_row() {
        let board = board_with(&[Position::TopLeft, Position::TopCenter], &[]);
        assert_eq!(pick(&board), Some((Position::TopRight, Reason::Block)));
    }

    #[test]
    fn test_win_beats_block() {
        let board = board_with(
            &[Position::TopLeft, Position::TopCenter],
            &[Position::MiddleLeft, Position::Center],
        );
        assert_eq!(pick(&board), Some((Position::MiddleRight, Reason::Win)));
    }

    #[test]
    fn test_takes_center() {
        let board = board_with(&[Position::TopLeft], &[]);
        assert_eq!(pick(&board), Some((Position::Center, Reason::Center)));
    }

    #[test]
    fn test_corner_when_center_taken() {
        let board = board_with(&[Position::Center], &[]);
        let (pos, reason) = pick(&board).unwrap();
        assert_eq!(reason, Reason::Corner);
        assert!(Position::CORNERS.contains(&pos));
    }

    #[test]
    fn test_edge_when_corners_taken() {
        // Center and corners filled; every line through an edge is mixed.
        let board = board_with(
            &[Position::TopLeft, Position::BottomRight],
            &[Position::TopRight, Position::BottomLeft, Position::Center],
        );
        let (pos, reason) = pick(&board).unwrap();
        assert_eq!(reason, Reason::Edge);
        assert!(Position::EDGES.contains(&pos));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            board.place(pos, if i % 2 == 0 { Player::X } else { Player::O }).unwrap();
        }
        assert_eq!(pick(&board), None);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = board_with(&[Position::Center], &[]);
        let first = pick(&board);
        for _ in 0..5 {
            assert_eq!(pick(&board), first);
        }
    }
}
