//! Tie detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::state::GameState;
use tracing::instrument;

/// A full board with no winner.
#[instrument(skip(state))]
pub fn is_tie(state: &GameState) -> bool {
    state.board().is_full() && check_winner(state).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::types::{Board, Symbol};

    fn play(moves: &[Cell]) -> GameState {
        let mut state = GameState::new();
        let mut symbol = Symbol::Cross;
        for &cell in moves {
            state.place(cell, symbol);
            symbol = symbol.opponent();
        }
        state
    }

    #[test]
    fn test_empty_board_not_tie() {
        assert!(!is_tie(&GameState::new()));
        assert!(!Board::new().is_full());
    }

    #[test]
    fn test_tie_detection() {
        // X O X / X O O / O X X
        let state = play(&[
            Cell::TopLeft,
            Cell::TopCenter,
            Cell::TopRight,
            Cell::Center,
            Cell::MiddleLeft,
            Cell::MiddleRight,
            Cell::BottomCenter,
            Cell::BottomLeft,
            Cell::BottomRight,
        ]);
        assert!(state.board().is_full());
        assert!(is_tie(&state));
    }

    #[test]
    fn test_not_tie_if_winner() {
        // X completes the left column on the last move
        let state = play(&[
            Cell::TopLeft,
            Cell::TopCenter,
            Cell::MiddleLeft,
            Cell::Center,
            Cell::BottomCenter,
            Cell::TopRight,
            Cell::MiddleRight,
            Cell::BottomRight,
            Cell::BottomLeft,
        ]);
        assert!(state.board().is_full());
        assert!(!is_tie(&state));
    }

    #[test]
    fn test_partial_board_not_tie() {
        let state = play(&[Cell::Center, Cell::TopLeft]);
        assert!(!is_tie(&state));
    }
}
