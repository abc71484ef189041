//! Vanishing Tic-Tac-Toe library
//!
//! Tic-tac-toe where each player may have at most three markers on the
//! board. A fourth move evicts that player's oldest marker.
//!
//! # Architecture
//!
//! - **Board**: the 9-square grid and line checks
//! - **MoveHistory**: per-player FIFO window with eviction
//! - **GameEngine**: turn state machine, win/draw detection, computer scheduling
//! - **AI**: heuristic move choice for the computer opponent
//!
//! # Example
//!
//! ```
//! use vanishing_tictactoe::{GameEngine, GameMode, Phase, Player};
//!
//! let mut engine = GameEngine::new(GameMode::HumanVsHuman);
//! for index in [0, 3, 4, 5, 8] {
//!     engine.on_cell_selected(index);
//! }
//! assert_eq!(engine.session().phase(), Phase::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types
pub use games::vanishing::{
    Actor, Board, DeferredMove, GameEngine, GameEvent, GameMode, GameSession, GameStatus, LINES,
    MAX_ACTIVE_MARKERS, Move, MoveError, MoveHistory, Phase, Player, Position, Square, Ticket,
    Transition, WinningLine,
};
