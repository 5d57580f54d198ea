//! Notifications the engine raises for its presentation layer.
//!
//! The engine calls into a [`GameObserver`] synchronously, from inside the
//! operation that caused the change. Observers that render on another
//! thread should forward the [`GameEvent`] over a channel rather than
//! block here.

use crate::cell::Cell;
use crate::types::Symbol;
use serde::{Deserialize, Serialize};

/// Callbacks for state changes. All methods default to doing nothing.
pub trait GameObserver {
    /// It is now `symbol`'s turn.
    fn on_turn_changed(&mut self, _symbol: Symbol) {}

    /// `symbol` was placed in `cell`.
    fn on_cell_filled(&mut self, _cell: Cell, _symbol: Symbol) {}

    /// `symbol` completed a line.
    fn on_game_won(&mut self, _symbol: Symbol) {}

    /// The board filled with no winner.
    fn on_game_tied(&mut self) {}

    /// An automated `symbol` is due to move.
    ///
    /// Raised after `on_turn_changed`. The receiver schedules the actual
    /// move by calling back into the engine.
    fn on_automated_turn_started(&mut self, _symbol: Symbol) {}
}

/// A state change, as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// See [`GameObserver::on_turn_changed`].
    TurnChanged(Symbol),
    /// See [`GameObserver::on_cell_filled`].
    CellFilled {
        /// Cell that was filled.
        cell: Cell,
        /// Symbol placed there.
        symbol: Symbol,
    },
    /// See [`GameObserver::on_game_won`].
    GameWon(Symbol),
    /// See [`GameObserver::on_game_tied`].
    GameTied,
    /// See [`GameObserver::on_automated_turn_started`].
    AutomatedTurnStarted(Symbol),
}

/// Ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {}

/// Records every notification in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl GameObserver for EventLog {
    fn on_turn_changed(&mut self, symbol: Symbol) {
        self.events.push(GameEvent::TurnChanged(symbol));
    }

    fn on_cell_filled(&mut self, cell: Cell, symbol: Symbol) {
        self.events.push(GameEvent::CellFilled { cell, symbol });
    }

    fn on_game_won(&mut self, symbol: Symbol) {
        self.events.push(GameEvent::GameWon(symbol));
    }

    fn on_game_tied(&mut self) {
        self.events.push(GameEvent::GameTied);
    }

    fn on_automated_turn_started(&mut self, symbol: Symbol) {
        self.events.push(GameEvent::AutomatedTurnStarted(symbol));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_records_in_order() {
        let mut log = EventLog::new();
        log.on_turn_changed(Symbol::Cross);
        log.on_cell_filled(Cell::Center, Symbol::Cross);
        log.on_automated_turn_started(Symbol::Circle);
        log.on_game_won(Symbol::Circle);
        log.on_game_tied();

        let expected = [
            GameEvent::TurnChanged(Symbol::Cross),
            GameEvent::CellFilled {
                cell: Cell::Center,
                symbol: Symbol::Cross,
            },
            GameEvent::AutomatedTurnStarted(Symbol::Circle),
            GameEvent::GameWon(Symbol::Circle),
            GameEvent::GameTied,
        ];
        assert_eq!(log.events(), &expected);
        assert_eq!(log.drain().len(), 5);
        assert!(log.events().is_empty());
    }
}
