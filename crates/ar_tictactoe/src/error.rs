//! Move rejection errors.

use crate::cell::Cell;

/// A move the engine refused to apply.
///
/// Every variant is a contract violation by the caller; the engine state
/// is untouched when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The cell already holds a symbol.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Cell),

    /// The game has been won or tied.
    #[display("Game is already over")]
    GameOver,

    /// No game has been started; call `reset` first.
    #[display("Game has not started")]
    NotStarted,
}

impl std::error::Error for InvalidMove {}
