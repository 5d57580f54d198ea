//! Core board types.

use crate::cell::Cell;
use serde::{Deserialize, Serialize};

/// A player's marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    /// Cross (X), always moves first.
    Cross,
    /// Circle (O).
    Circle,
}

impl Symbol {
    /// Returns the opponent's symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::Cross => Symbol::Circle,
            Symbol::Circle => Symbol::Cross,
        }
    }

    /// Single-character mark used in board renderings and status text.
    pub fn mark(self) -> char {
        match self {
            Symbol::Cross => 'X',
            Symbol::Circle => 'O',
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// Contents of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a symbol.
    Occupied(Symbol),
}

impl Square {
    /// Returns the symbol occupying this square, if any.
    pub fn occupant(self) -> Option<Symbol> {
        match self {
            Square::Empty => None,
            Square::Occupied(symbol) => Some(symbol),
        }
    }
}

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (cell 1 at offset 0).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board with the given cells already marked.
    ///
    /// Later entries overwrite earlier ones, so callers wanting a legal
    /// position should pass disjoint lists.
    pub fn with_marks(cross: &[Cell], circle: &[Cell]) -> Self {
        let mut board = Self::new();
        for &cell in cross {
            board.set(cell, Square::Occupied(Symbol::Cross));
        }
        for &cell in circle {
            board.set(cell, Square::Occupied(Symbol::Circle));
        }
        board
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.offset()]
    }

    /// Sets the square at the given cell.
    pub fn set(&mut self, cell: Cell, square: Square) {
        self.squares[cell.offset()] = square;
    }

    /// Returns the symbol in the cell, if any.
    pub fn occupant(&self, cell: Cell) -> Option<Symbol> {
        self.get(cell).occupant()
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Empty cells in reading order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .iter()
            .copied()
            .filter(|cell| self.is_empty(*cell))
            .collect()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their number so a player can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (i, cell) in Cell::ALL.iter().enumerate() {
            match self.get(*cell) {
                Square::Empty => result.push_str(&cell.index().to_string()),
                Square::Occupied(symbol) => result.push(symbol.mark()),
            }
            match i {
                2 | 5 => result.push_str("\n-+-+-\n"),
                8 => {}
                _ => result.push('|'),
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
