//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: `{P} action {Q}`. The
//! preconditions here are the engine's re-entrancy guards; the
//! postcondition is the invariant set.

use super::GameSession;
use super::action::{Actor, Move, MoveError};
use super::invariants::check_session;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game has not ended.
pub struct GameActive;

impl GameActive {
    /// Rejects moves once the session is won or drawn.
    pub fn check(session: &GameSession) -> Result<(), MoveError> {
        if session.is_in_progress() {
            Ok(())
        } else {
            Err(MoveError::GameOver)
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), MoveError> {
        if session.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: the move is for the player whose turn it is, and the
/// submitter controls that player.
///
/// In human-vs-computer mode the input boundary may only move for the
/// human, and the computer may only move on its own turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects out-of-turn moves.
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), MoveError> {
        let to_move = session.current_player();
        let computer_turn = session.mode().is_computer(to_move);
        let controls = match mov.actor {
            Actor::Human => !computer_turn,
            Actor::Computer => computer_turn,
        };
        if mov.player != to_move || !controls {
            return Err(MoveError::NotYourTurn(to_move));
        }
        Ok(())
    }
}

/// Composite precondition: active game, the mover's turn, an empty square.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), MoveError> {
        GameActive::check(session)?;
        PlayersTurn::check(mov, session)?;
        SquareIsEmpty::check(mov, session)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - Windows hold at most three markers each
/// - Board occupancy matches the windows
/// - No square is in both windows
pub struct MoveContract;

impl Contract<GameSession, Move> for MoveContract {
    fn pre(session: &GameSession, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, session)
    }

    fn post(_before: &GameSession, after: &GameSession) -> Result<(), MoveError> {
        check_session(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(session_id = after.id(), %descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
