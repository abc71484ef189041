//! Turn state machine for vanishing tic-tac-toe.
//!
//! The engine owns the current [`GameSession`] and is the only thing that
//! mutates it. Every move, human or computer, runs through one pipeline:
//!
//! 1. validate ([`MoveContract::pre`])
//! 2. place the marker
//! 3. record it in the mover's window, evicting the oldest if over the cap
//! 4. win check, then full-board draw check, else hand the turn over
//! 5. verify invariants (debug builds)
//! 6. if the computer is now to move, issue a [`DeferredMove`]

use super::action::{Actor, Move, MoveError};
use super::ai;
use super::contracts::{Contract, MoveContract};
use super::events::{GameEvent, Transition};
use super::position::Position;
use super::rules;
use super::schedule::{DEFAULT_COMPUTER_DELAY, DeferredMove, Ticket};
use super::session::{GameSession, SessionId};
use super::types::{GameMode, GameStatus, Phase, Player, Square};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Drives one game at a time and hands out fresh sessions on reset.
#[derive(Debug, Clone)]
pub struct GameEngine {
    session: GameSession,
    next_session_id: SessionId,
    computer_delay: Duration,
    rng: ChaCha8Rng,
}

impl GameEngine {
    /// Creates an engine with a fresh session in `mode`.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            session: GameSession::new(0, mode),
            next_session_id: 1,
            computer_delay: DEFAULT_COMPUTER_DELAY,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Seeds the computer opponent's randomness.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Sets the pause before computer turns.
    pub fn with_computer_delay(mut self, delay: Duration) -> Self {
        self.computer_delay = delay;
        self
    }

    /// The current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Input boundary: a cell was selected.
    ///
    /// Invalid selections are dropped and return an empty [`Transition`];
    /// the session is untouched and no event is produced.
    #[instrument(skip(self), fields(session_id = self.session.id()))]
    pub fn on_cell_selected(&mut self, index: usize) -> Transition {
        match self.apply_move(index) {
            Ok(transition) => transition,
            Err(error) => {
                debug!(index, %error, "Ignoring cell selection");
                Transition::none()
            }
        }
    }

    /// Applies a move for the player to move, as submitted through the input boundary.
    ///
    /// # Errors
    ///
    /// Returns the validation outcome when the move is rejected; the session
    /// is unchanged in that case.
    #[instrument(skip(self), fields(session_id = self.session.id()))]
    pub fn apply_move(&mut self, index: usize) -> Result<Transition, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let mov = Move::new(self.session.current_player(), position, Actor::Human);
        self.apply(mov)
    }

    /// Runs a computer turn previously issued as a [`DeferredMove`].
    ///
    /// Does nothing unless `ticket` is the one the current session is
    /// waiting on, the game is still in progress, and the computer is to
    /// move. Tickets from a replaced session never match.
    #[instrument(skip(self), fields(session_id = self.session.id()))]
    pub fn run_computer_turn(&mut self, ticket: Ticket) -> Transition {
        if self.session.pending != Some(ticket) {
            debug!(?ticket, pending = ?self.session.pending, "Stale computer turn ignored");
            return Transition::none();
        }
        self.session.pending = None;

        if !self.session.is_in_progress() {
            debug!("Game ended before the computer turn ran");
            return Transition::none();
        }

        let own = self.session.current_player();
        if !self.session.mode().is_computer(own) {
            debug!(player = %own, "Computer turn fired on a human turn");
            return Transition::none();
        }

        let board = self.session.board();
        let Some(position) = ai::choose_move(board, own, own.opponent(), &mut self.rng) else {
            warn!("Computer found no empty square");
            return Transition::none();
        };

        match self.apply(Move::new(own, position, Actor::Computer)) {
            Ok(transition) => transition,
            Err(error) => {
                warn!(%error, "Computer move rejected");
                Transition::none()
            }
        }
    }

    /// Runs the pending computer turn right away, if there is one.
    ///
    /// For hosts without a timer (headless replay, tests).
    pub fn run_pending_now(&mut self) -> Transition {
        match self.session.pending {
            Some(ticket) => self.run_computer_turn(ticket),
            None => Transition::none(),
        }
    }

    /// Input boundary: start over in the same mode.
    #[instrument(skip(self), fields(session_id = self.session.id()))]
    pub fn on_reset_requested(&mut self) -> Transition {
        let mode = self.session.mode();
        self.start_session(mode)
    }

    /// Input boundary: switch mode, which always starts a new session.
    #[instrument(skip(self), fields(session_id = self.session.id()))]
    pub fn on_mode_changed(&mut self, mode: GameMode) -> Transition {
        self.start_session(mode)
    }

    /// Events that render the current session from scratch.
    pub fn snapshot_events(&self) -> Vec<GameEvent> {
        let session = &self.session;
        let mut events: Vec<GameEvent> = Position::ALL
            .into_iter()
            .map(|position| GameEvent::CellRendered {
                position,
                square: session.board().cell_at(position),
            })
            .collect();
        events.extend(Player::iter().map(|player| GameEvent::MarkerAboutToVanish {
            player,
            position: session.history(player).next_to_evict(),
        }));
        events.push(GameEvent::StatusChanged(session.phase()));
        if let Some(line) = session.winning_line() {
            events.push(GameEvent::WinningLineHighlighted(line));
        }
        events
    }

    fn start_session(&mut self, mode: GameMode) -> Transition {
        let id = self.next_session_id;
        self.next_session_id += 1;
        if let Some(ticket) = self.session.pending {
            debug!(?ticket, "Dropping pending computer turn");
        }
        self.session = GameSession::new(id, mode);
        info!(session_id = id, %mode, "Session reset");
        Transition {
            events: self.snapshot_events(),
            deferred: None,
        }
    }

    /// The move pipeline shared by human and computer moves.
    fn apply(&mut self, mov: Move) -> Result<Transition, MoveError> {
        MoveContract::pre(&self.session, &mov)?;

        #[cfg(debug_assertions)]
        let before = self.session.clone();

        let Move { player, position, .. } = mov;
        let mut events = Vec::with_capacity(6);

        let (board, history) = self.session.board_and_history_mut(player);
        board.place(position, player)?;
        let evicted = history.record_move(position, board);
        let next_to_evict = history.next_to_evict();
        self.session.ply += 1;

        events.push(GameEvent::CellRendered {
            position,
            square: Square::Occupied(player),
        });
        if let Some(evicted) = evicted {
            events.push(GameEvent::CellRendered {
                position: evicted,
                square: Square::Empty,
            });
        }
        events.push(GameEvent::MarkerAboutToVanish {
            player,
            position: next_to_evict,
        });
        debug!(%mov, ?evicted, ply = self.session.ply, "Move applied");

        if let Some(line) = rules::winning_line(self.session.board(), player) {
            self.session.status = GameStatus::Won(player);
            self.session.winning_line = Some(line);
            events.push(GameEvent::StatusChanged(Phase::Won(player)));
            events.push(GameEvent::WinningLineHighlighted(line));
            info!(winner = %player, %line, "Game won");
        } else if rules::is_draw(self.session.board()) {
            self.session.status = GameStatus::Draw;
            events.push(GameEvent::StatusChanged(Phase::Draw));
            info!("Game drawn");
        } else {
            self.session.current_player = player.opponent();
            events.push(GameEvent::StatusChanged(self.session.phase()));
        }

        #[cfg(debug_assertions)]
        if let Err(error) = MoveContract::post(&before, &self.session) {
            self.session = before;
            return Err(error);
        }

        Ok(Transition {
            events,
            deferred: self.schedule_computer_turn(),
        })
    }

    fn schedule_computer_turn(&mut self) -> Option<DeferredMove> {
        let session = &mut self.session;
        if !session.is_in_progress() || !session.mode().is_computer(session.current_player()) {
            return None;
        }
        let ticket = Ticket::new(session.id(), session.ply());
        session.pending = Some(ticket);
        debug!(
            ?ticket,
            delay_ms = self.computer_delay.as_millis() as u64,
            "Computer turn scheduled"
        );
        Some(DeferredMove::new(ticket, self.computer_delay))
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
