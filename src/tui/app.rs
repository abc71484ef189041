//! Application state and logic.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};
use vanishing_tictactoe::{
    GameEngine, GameEvent, GameMode, Phase, Player, Position, Square, Ticket, Transition,
    WinningLine,
};

/// What the screen shows, built only from engine events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    squares: [Square; 9],
    vanishing_x: Option<Position>,
    vanishing_o: Option<Position>,
    phase: Phase,
    winning_line: Option<WinningLine>,
}

impl BoardView {
    fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
            vanishing_x: None,
            vanishing_o: None,
            phase: Phase::Turn(Player::X),
            winning_line: None,
        }
    }

    /// Applies one display signal.
    pub fn apply(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::CellRendered { position, square } => {
                self.squares[position.to_index()] = square;
            }
            GameEvent::MarkerAboutToVanish {
                player: Player::X,
                position,
            } => self.vanishing_x = position,
            GameEvent::MarkerAboutToVanish {
                player: Player::O,
                position,
            } => self.vanishing_o = position,
            GameEvent::StatusChanged(phase) => {
                self.phase = phase;
                if !phase.is_over() {
                    self.winning_line = None;
                }
            }
            GameEvent::WinningLineHighlighted(line) => self.winning_line = Some(line),
        }
    }

    /// Square content at `pos`.
    pub fn square(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// True if the marker at `pos` goes on its owner's next move.
    pub fn is_vanishing(&self, pos: Position) -> bool {
        self.vanishing_x == Some(pos) || self.vanishing_o == Some(pos)
    }

    /// True if `pos` is on the completed line.
    pub fn is_winning(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(pos))
    }

    /// Current turn state.
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

/// Main application state.
pub struct App {
    engine: GameEngine,
    view: BoardView,
    cursor: Position,
    computer_task: Option<JoinHandle<()>>,
    ticket_tx: mpsc::UnboundedSender<Ticket>,
}

impl App {
    /// Creates the app around `engine`; due computer turns are sent on `ticket_tx`.
    pub fn new(engine: GameEngine, ticket_tx: mpsc::UnboundedSender<Ticket>) -> Self {
        let mut view = BoardView::new();
        for event in engine.snapshot_events() {
            view.apply(&event);
        }
        Self {
            engine,
            view,
            cursor: Position::Center,
            computer_task: None,
            ticket_tx,
        }
    }

    /// The rendered state.
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Mode of the current session.
    pub fn mode(&self) -> GameMode {
        self.engine.session().mode()
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the keyboard cursor.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Status line text.
    pub fn status_message(&self) -> String {
        match self.view.phase() {
            Phase::Turn(player) if self.mode().is_computer(player) => {
                "Computer is thinking...".to_string()
            }
            Phase::Turn(player) => format!("Player {}'s turn", player),
            phase => format!("{} Press 'r' to play again.", phase),
        }
    }

    /// A cell was chosen by key or cursor.
    #[instrument(skip(self))]
    pub fn select(&mut self, pos: Position) {
        let transition = self.engine.on_cell_selected(pos.to_index());
        self.handle_transition(transition);
    }

    /// A scheduled computer turn came due.
    #[instrument(skip(self))]
    pub fn on_computer_turn(&mut self, ticket: Ticket) {
        self.computer_task = None;
        let transition = self.engine.run_computer_turn(ticket);
        self.handle_transition(transition);
    }

    /// Starts over in the current mode.
    pub fn reset(&mut self) {
        info!("Reset requested");
        self.cancel_computer_turn();
        let transition = self.engine.on_reset_requested();
        self.handle_transition(transition);
    }

    /// Switches mode, which starts a new game.
    pub fn toggle_mode(&mut self) {
        let mode = self.mode().toggled();
        info!(%mode, "Mode changed");
        self.cancel_computer_turn();
        let transition = self.engine.on_mode_changed(mode);
        self.handle_transition(transition);
    }

    fn handle_transition(&mut self, transition: Transition) {
        for event in &transition.events {
            self.view.apply(event);
        }
        if let Some(deferred) = transition.deferred {
            self.schedule(*deferred.ticket(), *deferred.delay());
        }
    }

    fn schedule(&mut self, ticket: Ticket, delay: Duration) {
        self.cancel_computer_turn();
        let tx = self.ticket_tx.clone();
        debug!(?ticket, ?delay, "Starting computer timer");
        self.computer_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the app is shutting down.
            let _ = tx.send(ticket);
        }));
    }

    fn cancel_computer_turn(&mut self) {
        if let Some(task) = self.computer_task.take() {
            debug!("Cancelling computer timer");
            task.abort();
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.cancel_computer_turn();
    }
}
