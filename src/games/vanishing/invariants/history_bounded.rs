//! Window cap: no player ever has more than three markers down.

use super::super::history::MAX_ACTIVE_MARKERS;
use super::super::{GameSession, Player};
use super::Invariant;

/// Invariant: each move window holds at most [`MAX_ACTIVE_MARKERS`] positions.
pub struct HistoryBoundedInvariant;

impl Invariant<GameSession> for HistoryBoundedInvariant {
    fn holds(session: &GameSession) -> bool {
        [Player::X, Player::O]
            .into_iter()
            .all(|player| session.history(player).len() <= MAX_ACTIVE_MARKERS)
    }

    fn description() -> &'static str {
        "Each player has at most three active markers"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::vanishing::{Board, GameMode, Position};

    #[test]
    fn test_overfull_window_violates() {
        let mut session = GameSession::new(0, GameMode::HumanVsHuman);
        // Record into a scratch board so the window grows without the cap
        // being enforced against the session board.
        let mut scratch = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            session.x_history.record_move(pos, &mut scratch);
        }
        assert!(HistoryBoundedInvariant::holds(&session));

        session.x_history.moves.push_back(Position::Center);
        assert!(!HistoryBoundedInvariant::holds(&session));
    }
}
