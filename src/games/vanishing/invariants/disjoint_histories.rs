//! No square belongs to both players.

use super::super::{GameSession, Player};
use super::Invariant;

/// Invariant: the two move windows share no position.
pub struct DisjointHistoriesInvariant;

impl Invariant<GameSession> for DisjointHistoriesInvariant {
    fn holds(session: &GameSession) -> bool {
        let o = session.history(Player::O);
        session.history(Player::X).iter().all(|pos| !o.contains(pos))
    }

    fn description() -> &'static str {
        "No position appears in both move windows"
    }
}
