//! Single source of truth: the board and the windows agree.

use super::super::{GameSession, Player, Position, Square};
use super::Invariant;

/// Invariant: a square holds a player's marker iff its position is in that player's window.
pub struct BoardMatchesHistoryInvariant;

impl Invariant<GameSession> for BoardMatchesHistoryInvariant {
    fn holds(session: &GameSession) -> bool {
        Position::ALL.into_iter().all(|pos| {
            let expected = [Player::X, Player::O]
                .into_iter()
                .find(|&player| session.history(player).contains(pos))
                .map_or(Square::Empty, Square::Occupied);
            session.board().cell_at(pos) == expected
        })
    }

    fn description() -> &'static str {
        "Board occupancy matches the players' move windows"
    }
}
