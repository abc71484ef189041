//! Command-line interface for vanishing_tictactoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vanishing_tictactoe::GameMode;

/// Vanishing Tic-Tac-Toe - three markers each, the oldest one vanishes
#[derive(Parser, Debug)]
#[command(name = "vanishing_tictactoe")]
#[command(
    about = "Tic-tac-toe where each player's fourth marker evicts their oldest",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, global = true, default_value = "vanishing_tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Settings shared by every command; each overrides the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct GameOptions {
    /// Who controls the markers
    #[arg(short, long, value_enum)]
    pub mode: Option<GameMode>,

    /// Pause before the computer moves, in milliseconds
    #[arg(long)]
    pub ai_delay_ms: Option<u64>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Game settings
        #[command(flatten)]
        options: GameOptions,
    },

    /// Apply a sequence of moves headlessly and print the result
    Replay {
        /// Game settings
        #[command(flatten)]
        options: GameOptions,

        /// Moves as board indices (0-8) or labels such as `center` or `top-left`
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final session as JSON
        #[arg(long)]
        json: bool,
    },
}
