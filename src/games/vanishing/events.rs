//! Signals from the engine to the display layer.
//!
//! Each signal describes a state change and is idempotent to render: a
//! display that replays the same event twice shows the same thing.

use super::lines::WinningLine;
use super::position::Position;
use super::schedule::DeferredMove;
use super::types::{Phase, Player, Square};
use serde::{Deserialize, Serialize};

/// One display update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A square now shows `square`.
    CellRendered {
        /// Which square.
        position: Position,
        /// Its new content.
        square: Square,
    },
    /// `player`'s marker at `position` vanishes on their next move (or none does).
    MarkerAboutToVanish {
        /// Whose marker.
        player: Player,
        /// The oldest marker once the window is full.
        position: Option<Position>,
    },
    /// Whose turn it is, or how the game ended.
    StatusChanged(Phase),
    /// Emitted once, on the transition to a win.
    WinningLineHighlighted(WinningLine),
}

/// Everything an accepted operation produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    /// Display updates, in the order they happened.
    pub events: Vec<GameEvent>,
    /// Computer turn the host should schedule, if any.
    pub deferred: Option<DeferredMove>,
}

impl Transition {
    /// Nothing happened: the silent no-op.
    pub fn none() -> Self {
        Self::default()
    }

    /// True for the silent no-op.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.deferred.is_none()
    }

    /// Appends another transition's events and takes over its deferred move.
    pub fn merge(&mut self, other: Transition) {
        self.events.extend(other.events);
        self.deferred = other.deferred;
    }
}
