//! Tic-tac-toe engine for the AR board.
//!
//! Owns everything about a game that does not depend on how it is shown:
//! turn order, cell state, win and tie detection, and the heuristic that
//! plays for automated players. Scene building, plane detection and piece
//! physics live in the presentation layer, which drives a [`GameEngine`]
//! with cell selections and renders the notifications it raises.
//!
//! # Example
//!
//! ```
//! use ar_tictactoe::{Cell, EventLog, GameEngine, GameRng, GameStatus, PlayerConfig, Symbol};
//!
//! let players = PlayerConfig::human();
//! let mut engine = GameEngine::with_parts(players, EventLog::new(), GameRng::new(1));
//! engine.reset();
//! for cell in [Cell::TopLeft, Cell::Center, Cell::TopCenter, Cell::BottomLeft, Cell::TopRight] {
//!     engine.apply_move(cell)?;
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Symbol::Cross));
//! # Ok::<(), ar_tictactoe::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod engine;
mod error;
mod events;
mod players;
mod random;
pub mod rules;
mod state;
mod status;
pub mod strategy;
mod types;

pub use cell::Cell;
pub use engine::GameEngine;
pub use error::InvalidMove;
pub use events::{EventLog, GameEvent, GameObserver, NoopObserver};
pub use players::{Mode, PlayerConfig};
pub use random::{GameRng, RandomSource};
pub use state::GameState;
pub use status::{GameStatus, Outcome};
pub use strategy::{AutomatedMove, MoveKind};
pub use types::{Board, Square, Symbol};
