//! Command-line interface for ar_tictactoe.

use ar_tictactoe::Mode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AR Tic-Tac-Toe - terminal board for the game engine
#[derive(Parser, Debug)]
#[command(name = "ar_tictactoe")]
#[command(about = "Play tic-tac-toe against people or the automated player", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Mode for X (human or automated)
    #[arg(long, global = true)]
    pub cross: Option<Mode>,

    /// Mode for O (human or automated)
    #[arg(long, global = true)]
    pub circle: Option<Mode>,

    /// Seed for the automated player's tie-breaking
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Pause before each automated move, in milliseconds
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play interactively on the terminal
    Play,

    /// Pit two automated players against each other and report results
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,
    },
}
