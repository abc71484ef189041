//! The game session aggregate.

use super::history::MoveHistory;
use super::lines::WinningLine;
use super::schedule::Ticket;
use super::types::{Board, GameMode, GameStatus, Phase, Player};
use serde::Serialize;
use tracing::{info, instrument};

/// Unique identifier for a session within one engine.
pub type SessionId = u64;

/// Everything one game needs: board, both move windows, turn, mode and status.
///
/// Sessions are never partially reset. The engine builds a fresh one on
/// start, reset and mode change, and mutates it only through its move
/// pipeline. A finished session stays readable until it is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    pub(super) id: SessionId,
    pub(super) mode: GameMode,
    pub(super) board: Board,
    pub(super) x_history: MoveHistory,
    pub(super) o_history: MoveHistory,
    pub(super) current_player: Player,
    pub(super) status: GameStatus,
    pub(super) winning_line: Option<WinningLine>,
    pub(super) ply: u32,
    #[serde(skip)]
    pub(super) pending: Option<Ticket>,
}

impl GameSession {
    /// Creates a new session with X to move.
    #[instrument]
    pub fn new(id: SessionId, mode: GameMode) -> Self {
        info!(session_id = id, %mode, "Creating new game session");
        Self {
            id,
            mode,
            board: Board::new(),
            x_history: MoveHistory::new(Player::X),
            o_history: MoveHistory::new(Player::O),
            current_player: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
            ply: 0,
            pending: None,
        }
    }

    /// Session ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Who controls the markers.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a player's move window.
    pub fn history(&self, player: Player) -> &MoveHistory {
        match player {
            Player::X => &self.x_history,
            Player::O => &self.o_history,
        }
    }

    /// Board and `player`'s window, borrowed together for a move.
    pub(super) fn board_and_history_mut(
        &mut self,
        player: Player,
    ) -> (&mut Board, &mut MoveHistory) {
        match player {
            Player::X => (&mut self.board, &mut self.x_history),
            Player::O => (&mut self.board, &mut self.o_history),
        }
    }

    /// The player to move (or the last mover once the game is over).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True while moves are accepted.
    pub fn is_in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Turn state: whose turn, or the terminal outcome.
    pub fn phase(&self) -> Phase {
        match self.status {
            GameStatus::InProgress => Phase::Turn(self.current_player),
            GameStatus::Won(player) => Phase::Won(player),
            GameStatus::Draw => Phase::Draw,
        }
    }

    /// The completed line, once someone has won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Moves applied so far, both players.
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Computer turn currently waiting to run.
    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }
}
