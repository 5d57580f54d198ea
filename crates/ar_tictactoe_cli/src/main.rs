//! AR Tic-Tac-Toe - terminal board
//!
//! Play against a friend or the automated player, or run automated
//! matches to see how the heuristic fares against itself.

#![warn(missing_docs)]

use anyhow::Result;
use ar_tictactoe::PlayerConfig;
use ar_tictactoe_cli::cli::{Cli, Command};
use ar_tictactoe_cli::{Overrides, Session, Settings, simulate};
use clap::Parser;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.verbose);

    let settings = Settings::load(cli.config.as_deref())?.with_overrides(Overrides {
        cross: cli.cross,
        circle: cli.circle,
        seed: cli.seed,
        delay_ms: cli.delay_ms,
    });

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(settings).await,
        Command::Simulate { games } => run_simulate(games, &settings),
    }
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive game on the terminal
#[instrument(skip_all, fields(players = ?settings.players()))]
async fn run_play(settings: Settings) -> Result<()> {
    info!("Starting interactive session");
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut session = Session::new(&settings, std::io::stdout());
    session.run(input).await
}

/// Run automated-vs-automated games and print the tally
#[instrument(skip(settings))]
fn run_simulate(games: u32, settings: &Settings) -> Result<()> {
    info!(players = ?PlayerConfig::automated(), "Starting simulation");
    let tally = simulate(games, *settings.engine().seed())?;
    println!("{tally}");
    Ok(())
}
