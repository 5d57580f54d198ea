//! Game state owned by the engine.

use crate::cell::Cell;
use crate::status::GameStatus;
use crate::types::{Board, Square, Symbol};
use serde::{Deserialize, Serialize};

/// Complete game state.
///
/// The per-symbol cell lists are kept alongside the board and always
/// agree with it: a cell appears in exactly one list iff the board
/// holds that symbol there. Lists are in the order the cells were played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_turn: Symbol,
    cross_cells: Vec<Cell>,
    circle_cells: Vec<Cell>,
    status: GameStatus,
}

impl GameState {
    /// Creates an empty, not yet started game.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Symbol::Cross,
            cross_cells: Vec::new(),
            circle_cells: Vec::new(),
            status: GameStatus::NotStarted,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the symbol whose turn it is.
    pub fn current_turn(&self) -> Symbol {
        self.current_turn
    }

    /// Cells occupied by `symbol`, in play order.
    pub fn occupied_by(&self, symbol: Symbol) -> &[Cell] {
        match symbol {
            Symbol::Cross => &self.cross_cells,
            Symbol::Circle => &self.circle_cells,
        }
    }

    /// Total number of occupied cells.
    pub fn move_count(&self) -> usize {
        self.cross_cells.len() + self.circle_cells.len()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Symbol> {
        match self.status {
            GameStatus::Won(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Returns true if the game ended in a tie.
    pub fn is_tie(&self) -> bool {
        self.status == GameStatus::Tied
    }

    /// Marks `cell` for `symbol`. Callers validate first.
    pub(crate) fn place(&mut self, cell: Cell, symbol: Symbol) {
        self.board.set(cell, Square::Occupied(symbol));
        match symbol {
            Symbol::Cross => self.cross_cells.push(cell),
            Symbol::Circle => self.circle_cells.push(cell),
        }
    }

    pub(crate) fn set_turn(&mut self, symbol: Symbol) {
        self.current_turn = symbol;
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
