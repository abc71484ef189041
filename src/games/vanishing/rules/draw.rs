//! Draw detection.
//!
//! A draw is a full board with no winner. With the three-marker cap at
//! most six squares are ever occupied once eviction starts, so this can
//! only trigger in a hypothetical opening that fills all nine squares.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Full board and nobody holds a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
