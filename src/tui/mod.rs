//! Terminal UI for vanishing tic-tac-toe.

mod app;
mod input;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{error, info, instrument};
use vanishing_tictactoe::{GameConfig, Ticket};

use app::App;
use input::InputAction;

/// Runs the interactive game until the player quits.
pub async fn run(config: GameConfig) -> Result<()> {
    // Log to a file so tracing output does not tear the screen
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(
        mode = %config.mode(),
        ai_delay_ms = *config.ai_delay_ms(),
        "Starting vanishing tic-tac-toe"
    );

    let (ticket_tx, ticket_rx) = mpsc::unbounded_channel();
    let app = App::new(config.engine(), ticket_tx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, app, ticket_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    mut ticket_rx: mpsc::UnboundedReceiver<Ticket>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        while let Ok(ticket) = ticket_rx.try_recv() {
            app.on_computer_turn(ticket);
        }

        if !event::poll(Duration::from_millis(50))? {
            // Let the computer timer task run between polls
            tokio::task::yield_now().await;
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match input::action_for(key.code) {
            Some(InputAction::Select(pos)) => {
                app.set_cursor(pos);
                app.select(pos);
            }
            Some(InputAction::SelectCursor) => app.select(app.cursor()),
            Some(InputAction::MoveCursor(code)) => {
                app.set_cursor(input::move_cursor(app.cursor(), code))
            }
            Some(InputAction::Reset) => app.reset(),
            Some(InputAction::ToggleMode) => app.toggle_mode(),
            Some(InputAction::Quit) => {
                info!("User quit");
                return Ok(());
            }
            None => {}
        }
    }
}
