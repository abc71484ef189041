//! First-class action types.
//!
//! Moves are domain events, not side effects. They carry the player's
//! intent and can be validated before anything is applied.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Who submitted a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    /// Arrived through the input boundary.
    Human,
    /// Injected by the engine on the computer's turn.
    Computer,
}

/// A player placing their marker at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the marker goes.
    pub position: Position,
    /// Where the move came from.
    pub actor: Actor,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was rejected.
///
/// These are validation outcomes, not failures: the boundary drops them
/// and leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is not on the board.
    #[display("Position {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// The mover does not control the player whose turn it is.
    #[display("It's not your turn; waiting on {_0}")]
    NotYourTurn(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
