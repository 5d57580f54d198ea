//! Move selection for automated players.
//!
//! Four tiers, tried in order until one yields a candidate:
//!
//! 1. **Winning**: complete a line we hold two cells of.
//! 2. **Blocking**: take the open cell of a line the opponent holds two of.
//! 3. **Strategic**: extend a line we have started that the opponent has
//!    not touched.
//! 4. **Fallback**: any empty cell.
//!
//! Randomness only breaks ties within a tier. Candidate lists are not
//! deduplicated: a cell that serves several lines appears once per line,
//! which weights the draw toward well-connected cells (the center and
//! corners).

use crate::cell::Cell;
use crate::random::RandomSource;
use crate::rules::WINNING_LINES;
use crate::types::{Board, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which tier produced an automated move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Completes a line for the mover.
    Winning,
    /// Stops the opponent completing a line next turn.
    Blocking,
    /// Extends a line still open to the mover.
    Strategic,
    /// Arbitrary empty cell.
    Fallback,
}

/// A move chosen by the strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AutomatedMove {
    /// Cell to play.
    pub cell: Cell,
    /// Tier the cell came from.
    pub kind: MoveKind,
}

impl std::fmt::Display for AutomatedMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:?})", self.cell, self.kind)
    }
}

/// Empty cells that would complete a line for `symbol`.
///
/// One entry per qualifying line, in line declaration order.
#[instrument(skip(board))]
pub fn completing_cells(board: &Board, symbol: Symbol) -> Vec<Cell> {
    let mut cells = Vec::new();
    for line in &WINNING_LINES {
        let missing: Vec<Cell> = line
            .iter()
            .copied()
            .filter(|cell| board.occupant(*cell) != Some(symbol))
            .collect();
        if let [cell] = missing.as_slice()
            && board.is_empty(*cell)
        {
            cells.push(*cell);
        }
    }
    cells
}

/// Empty cells on lines `symbol` has started and the opponent has not.
///
/// Each live line contributes all of its empty cells.
#[instrument(skip(board))]
pub fn strategic_cells(board: &Board, symbol: Symbol) -> Vec<Cell> {
    let opponent = symbol.opponent();
    let mut cells = Vec::new();
    for line in &WINNING_LINES {
        let started = line.iter().any(|cell| board.occupant(*cell) == Some(symbol));
        let contested = line.iter().any(|cell| board.occupant(*cell) == Some(opponent));
        if started && !contested {
            cells.extend(line.iter().copied().filter(|cell| board.is_empty(*cell)));
        }
    }
    cells
}

fn choose<R: RandomSource + ?Sized>(candidates: &[Cell], rng: &mut R) -> Option<Cell> {
    if candidates.is_empty() {
        return None;
    }
    candidates.get(rng.pick(candidates.len())).copied()
}

/// Chooses a move for `symbol`, or `None` if the board is full.
#[instrument(skip(board, rng))]
pub fn select_move<R: RandomSource + ?Sized>(
    board: &Board,
    symbol: Symbol,
    rng: &mut R,
) -> Option<AutomatedMove> {
    let tiers: [(MoveKind, Vec<Cell>); 4] = [
        (MoveKind::Winning, completing_cells(board, symbol)),
        (MoveKind::Blocking, completing_cells(board, symbol.opponent())),
        (MoveKind::Strategic, strategic_cells(board, symbol)),
        (MoveKind::Fallback, board.empty_cells()),
    ];

    for (kind, candidates) in tiers {
        if candidates.is_empty() {
            continue;
        }
        debug!(?kind, ?candidates, "Automated move candidates");
        let cell = choose(&candidates, rng)?;
        debug!(?kind, %cell, "Automated move chosen");
        return Some(AutomatedMove { cell, kind });
    }

    None
}
