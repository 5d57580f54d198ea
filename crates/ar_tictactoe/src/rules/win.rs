//! Win detection logic for tic-tac-toe.

use crate::cell::Cell;
use crate::state::GameState;
use crate::types::Symbol;
use tracing::instrument;

/// The 8 lines that win the game: rows, then columns, then diagonals.
pub const WINNING_LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Returns true if every cell of `line` is in `cells`.
pub fn holds_line(cells: &[Cell], line: &[Cell; 3]) -> bool {
    line.iter().all(|cell| cells.contains(cell))
}

/// Checks the occupied cell sets for a completed line.
///
/// Lines are scanned in declaration order. For each line Circle is
/// checked before Cross, and the first completed line decides.
#[instrument(skip(state), fields(moves = state.move_count()))]
pub fn check_winner(state: &GameState) -> Option<Symbol> {
    let circle = state.occupied_by(Symbol::Circle);
    let cross = state.occupied_by(Symbol::Cross);

    for line in &WINNING_LINES {
        if holds_line(circle, line) {
            return Some(Symbol::Circle);
        }
        if holds_line(cross, line) {
            return Some(Symbol::Cross);
        }
    }

    None
}
