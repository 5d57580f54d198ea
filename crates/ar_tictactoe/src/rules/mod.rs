//! Game rules for tic-tac-toe.
//!
//! Pure functions over game state. The engine decides when to call them;
//! nothing here mutates.

pub mod draw;
pub mod win;

pub use draw::is_tie;
pub use win::{WINNING_LINES, check_winner, holds_line};

/// Fewest moves after which a line can be complete (three for the
/// first player, two for the second).
pub const MIN_MOVES_FOR_WIN: usize = 5;
