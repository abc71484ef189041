//! Vanishing Tic-Tac-Toe - CLI
//!
//! Interactive terminal play, or headless replay of a move list.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command, GameOptions};
use std::path::Path;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;
use vanishing_tictactoe::{GameConfig, GameEngine, Player, Position};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { options } => {
            let config = load_config(&cli.config, options)?;
            tui::run(config).await
        }
        Command::Replay { options, moves, json } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_writer(std::io::stderr)
                .init();
            let config = load_config(&cli.config, options)?;
            replay(config.engine(), &moves, json)
        }
    }
}

fn load_config(path: &Path, options: GameOptions) -> Result<GameConfig> {
    let config = GameConfig::load_or_default(path)?.with_overrides(
        options.mode,
        options.ai_delay_ms,
        options.seed,
    );
    Ok(config)
}

/// Applies `moves` in order and prints the resulting game.
///
/// Computer turns run immediately after the move that scheduled them.
#[instrument(skip(engine))]
fn replay(mut engine: GameEngine, moves: &[String], json: bool) -> Result<()> {
    for raw in moves {
        let Some(position) = Position::from_label_or_number(raw) else {
            bail!("Unknown move '{}': use 0-8 or a label such as 'center'", raw);
        };

        let mut transition = engine.on_cell_selected(position.to_index());
        if transition.is_empty() {
            warn!(%position, "Move ignored");
            continue;
        }
        if transition.deferred.is_some() {
            transition.merge(engine.run_pending_now());
        }
        debug!(%position, events = transition.events.len(), "Move replayed");
    }

    let session = engine.session();
    info!(phase = %session.phase(), ply = session.ply(), "Replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(session)?);
        return Ok(());
    }

    println!("{}", session.board().display());
    println!();
    println!("{}", session.phase());
    for player in [Player::X, Player::O] {
        let history = session.history(player);
        let markers: Vec<String> = history.iter().map(|pos| pos.to_string()).collect();
        let next = history
            .next_to_evict()
            .map(|pos| format!(" (next to vanish: {})", pos))
            .unwrap_or_default();
        println!("{}: [{}]{}", player, markers.join(", "), next);
    }
    Ok(())
}
