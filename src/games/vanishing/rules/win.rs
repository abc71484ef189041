//! Win detection.

use super::super::{Board, LINES, Player, WinningLine};
use tracing::instrument;

/// Returns the first line (in scan order) held entirely by `player`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, player: Player) -> Option<WinningLine> {
    board.lines_matching(player).into_iter().next()
}

/// Checks if any player holds a complete line.
///
/// Lines are scanned rows, then columns, then diagonals; the first full
/// line decides. Only one marker can fill a line, so no tie-break exists.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let owner = board.cell_at(a).player()?;
        (board.cell_at(b).player() == Some(owner) && board.cell_at(c).player() == Some(owner))
            .then_some((owner, *line))
    })
}
