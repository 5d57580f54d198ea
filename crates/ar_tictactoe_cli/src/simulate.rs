//! Automated-versus-automated games for checking the heuristic.

use ar_tictactoe::{GameEngine, GameRng, InvalidMove, NoopObserver, Outcome, PlayerConfig, Symbol};
use derive_more::Display;
use tracing::{debug, info, instrument};

/// Results over a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[display("{games} games: X won {cross_wins}, O won {circle_wins}, {ties} tied")]
pub struct Tally {
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub cross_wins: u32,
    /// Games won by O.
    pub circle_wins: u32,
    /// Tied games.
    pub ties: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome.winner() {
            Some(Symbol::Cross) => self.cross_wins += 1,
            Some(Symbol::Circle) => self.circle_wins += 1,
            None => self.ties += 1,
        }
    }
}

/// Plays `games` games with both symbols automated.
///
/// # Errors
///
/// Propagates an [`InvalidMove`] from the engine, which would indicate a
/// strategy bug.
#[instrument]
pub fn simulate(games: u32, seed: Option<u64>) -> Result<Tally, InvalidMove> {
    let rng = GameRng::from_seed_option(seed);
    let mut engine = GameEngine::with_parts(PlayerConfig::automated(), NoopObserver, rng);
    let mut tally = Tally::default();

    for game in 0..games {
        engine.reset();
        while !engine.is_game_over() {
            engine.apply_automated_move()?;
        }
        debug!(game, status = ?engine.status(), "Game finished");
        if let Some(outcome) = engine.status().outcome() {
            tally.record(outcome);
        }
    }

    info!(%tally, "Simulation complete");
    Ok(tally)
}
