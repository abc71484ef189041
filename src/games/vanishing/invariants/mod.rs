//! First-class invariants for vanishing tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every completed
//! move. The engine checks them as postconditions in debug builds; tests
//! check them directly.

use super::GameSession;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

pub mod board_matches_history;
pub mod disjoint_histories;
pub mod history_bounded;

pub use board_matches_history::BoardMatchesHistoryInvariant;
pub use disjoint_histories::DisjointHistoriesInvariant;
pub use history_bounded::HistoryBoundedInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    HistoryBoundedInvariant,
    BoardMatchesHistoryInvariant,
    DisjointHistoriesInvariant,
);

/// Checks every session invariant.
pub fn check_session(session: &GameSession) -> Result<(), Vec<InvariantViolation>> {
    SessionInvariants::check_all(session)
}
