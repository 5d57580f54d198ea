//! Game lifecycle status and outcomes.

use crate::types::Symbol;
use serde::{Deserialize, Serialize};

/// Where a game is in its lifecycle.
///
/// `NotStarted -> InProgress -> {Won, Tied}`; a reset returns any status
/// to `InProgress` with an empty board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Engine constructed but no game started yet.
    #[default]
    NotStarted,
    /// Moves are being accepted.
    InProgress,
    /// A symbol completed a winning line.
    Won(Symbol),
    /// All cells filled with no winner.
    Tied,
}

impl GameStatus {
    /// Returns true for `Won` and `Tied`.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Tied)
    }

    /// Returns the outcome of a finished game.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GameStatus::Won(symbol) => Some(Outcome::Winner(symbol)),
            GameStatus::Tied => Some(Outcome::Tie),
            GameStatus::NotStarted | GameStatus::InProgress => None,
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Symbol won the game.
    Winner(Symbol),
    /// Board filled without a winner.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            Outcome::Winner(symbol) => Some(*symbol),
            Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(symbol) => write!(f, "{} wins!", symbol),
            Outcome::Tie => write!(f, "It's a tie!"),
        }
    }
}
