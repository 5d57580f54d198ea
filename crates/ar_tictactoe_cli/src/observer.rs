//! Forwards engine notifications to the session over a channel.

use ar_tictactoe::{Cell, GameEvent, GameObserver, Symbol};
use tokio::sync::mpsc;
use tracing::warn;

/// Observer that turns each callback into a [`GameEvent`] on a channel.
///
/// The engine calls observers synchronously; the unbounded sender never
/// blocks, so rendering happens wherever the receiver lives.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<GameEvent>,
}

impl ChannelObserver {
    /// Creates an observer sending on `tx`.
    pub fn new(tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        Self { tx }
    }

    fn forward(&self, event: GameEvent) {
        if self.tx.send(event).is_err() {
            warn!(?event, "Event receiver dropped");
        }
    }
}

impl GameObserver for ChannelObserver {
    fn on_turn_changed(&mut self, symbol: Symbol) {
        self.forward(GameEvent::TurnChanged(symbol));
    }

    fn on_cell_filled(&mut self, cell: Cell, symbol: Symbol) {
        self.forward(GameEvent::CellFilled { cell, symbol });
    }

    fn on_game_won(&mut self, symbol: Symbol) {
        self.forward(GameEvent::GameWon(symbol));
    }

    fn on_game_tied(&mut self) {
        self.forward(GameEvent::GameTied);
    }

    fn on_automated_turn_started(&mut self, symbol: Symbol) {
        self.forward(GameEvent::AutomatedTurnStarted(symbol));
    }
}
