//! Deferred computer turns.
//!
//! After a human move hands the turn to the computer, the engine issues a
//! [`DeferredMove`]: a one-shot task the host runs after `delay`. The
//! session stores the matching [`Ticket`]. A reset replaces the session,
//! so a ticket issued for the old session can never match again and the
//! task becomes a no-op even if the host failed to cancel it.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Pause before the computer answers a human move.
pub const DEFAULT_COMPUTER_DELAY: Duration = Duration::from_millis(500);

/// Identifies one scheduled computer turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Ticket {
    /// Session the turn belongs to.
    pub session_id: u64,
    /// Ply count when the turn was scheduled.
    pub ply: u32,
}

/// A computer turn waiting to be run by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, derive_new::new)]
pub struct DeferredMove {
    /// Pass back to [`GameEngine::run_computer_turn`](super::GameEngine::run_computer_turn).
    ticket: Ticket,
    /// How long the host waits before running it.
    delay: Duration,
}
