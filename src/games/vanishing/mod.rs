//! Vanishing tic-tac-toe: each player keeps at most three markers on the
//! board, and a fourth move removes that player's oldest marker.

mod action;
mod ai;
mod contracts;
mod engine;
mod events;
mod history;
mod lines;
mod position;
mod rules;
mod schedule;
mod session;
mod types;

pub mod invariants;

pub use action::{Actor, Move, MoveError};
pub use ai::{Reason, choose_move, choose_move_with_reason, completing_move};
pub use contracts::{Contract, GameActive, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};
pub use engine::GameEngine;
pub use events::{GameEvent, Transition};
pub use history::{MAX_ACTIVE_MARKERS, MoveHistory};
pub use lines::{LINES, WinningLine};
pub use position::Position;
pub use rules::{check_winner, is_draw, is_full, winning_line};
pub use schedule::{DEFAULT_COMPUTER_DELAY, DeferredMove, Ticket};
pub use session::{GameSession, SessionId};
pub use types::{Board, GameMode, GameStatus, Phase, Player, Square};
