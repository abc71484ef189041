//! Per-player FIFO window of active markers.
//!
//! Each player keeps at most [`MAX_ACTIVE_MARKERS`] markers on the board.
//! Recording a fourth move evicts that player's oldest marker and clears
//! its square, so the window slides forward one move at a time.

use super::position::Position;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Hard cap on simultaneously placed markers per player.
pub const MAX_ACTIVE_MARKERS: usize = 3;

/// Ordered positions of one player's markers, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    player: Player,
    pub(super) moves: VecDeque<Position>,
    recorded: usize,
}

impl MoveHistory {
    /// Creates an empty history for `player`.
    pub fn new(player: Player) -> Self {
        Self {
            player,
            moves: VecDeque::with_capacity(MAX_ACTIVE_MARKERS + 1),
            recorded: 0,
        }
    }

    /// The player whose markers this history tracks.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Records a freshly placed marker.
    ///
    /// When the window overflows, the oldest position is removed and its
    /// square cleared on `board`. Returns the evicted position, if any.
    #[instrument(skip(self, board), fields(player = %self.player))]
    pub fn record_move(&mut self, pos: Position, board: &mut Board) -> Option<Position> {
        self.moves.push_back(pos);
        self.recorded += 1;
        if self.moves.len() <= MAX_ACTIVE_MARKERS {
            return None;
        }

        let evicted = self.moves.pop_front()?;
        board.clear(evicted);
        debug!(evicted = %evicted, "Oldest marker vanished");
        Some(evicted)
    }

    /// The marker that will vanish on this player's next move.
    ///
    /// Only reported once the window is full; advisory for display.
    pub fn next_to_evict(&self) -> Option<Position> {
        if self.moves.len() == MAX_ACTIVE_MARKERS {
            self.moves.front().copied()
        } else {
            None
        }
    }

    /// True if `pos` holds one of this player's active markers.
    pub fn contains(&self, pos: Position) -> bool {
        self.moves.contains(&pos)
    }

    /// Number of active markers.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Moves recorded over the whole session, evicted ones included.
    pub fn total_moves(&self) -> usize {
        self.recorded
    }

    /// True if the player has no marker on the board.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Active positions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.moves.iter().copied()
    }

    /// Active positions as a vector, oldest first.
    pub fn to_vec(&self) -> Vec<Position> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(history: &mut MoveHistory, board: &mut Board, pos: Position) -> Option<Position> {
        board.place(pos, history.player()).unwrap();
        history.record_move(pos, board)
    }

    #[test]
    fn test_no_eviction_below_capacity() {
        let mut board = Board::new();
        let mut history = MoveHistory::new(Player::X);
        assert_eq!(play(&mut history, &mut board, Position::TopLeft), None);
        assert_eq!(play(&mut history, &mut board, Position::TopCenter), None);
        assert_eq!(history.next_to_evict(), None);
        assert_eq!(play(&mut history, &mut board, Position::TopRight), None);
        assert_eq!(history.next_to_evict(), Some(Position::TopLeft));
    }

    #[test]
    fn test_fourth_move_evicts_oldest() {
        let mut board = Board::new();
        let mut history = MoveHistory::new(Player::X);
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            play(&mut history, &mut board, pos);
        }

        let evicted = play(&mut history, &mut board, Position::MiddleLeft);

        assert_eq!(evicted, Some(Position::TopLeft));
        assert!(board.is_empty(Position::TopLeft));
        assert_eq!(
            history.to_vec(),
            vec![Position::TopCenter, Position::TopRight, Position::MiddleLeft]
        );
        assert_eq!(history.next_to_evict(), Some(Position::TopCenter));
        assert_eq!(board.count(Player::X), 3);
    }

    #[test]
    fn test_window_keeps_sliding() {
        let mut board = Board::new();
        let mut history = MoveHistory::new(Player::O);
        let order = [
            Position::Center,
            Position::TopLeft,
            Position::BottomRight,
            Position::TopRight,
            Position::Center,
        ];
        let evictions: Vec<_> = order
            .into_iter()
            .map(|pos| play(&mut history, &mut board, pos))
            .collect();

        assert_eq!(
            evictions,
            vec![None, None, None, Some(Position::Center), Some(Position::TopLeft)]
        );
        assert_eq!(history.len(), MAX_ACTIVE_MARKERS);
        assert_eq!(history.total_moves(), 5);
        assert!(history.contains(Position::Center));
        assert!(!history.contains(Position::TopLeft));
    }
}
