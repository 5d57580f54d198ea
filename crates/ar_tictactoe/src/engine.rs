//! The game engine: turn order, move validation, outcomes and the
//! automated player.
//!
//! The engine is synchronous and owns all game state. Presentation layers
//! drive it with [`GameEngine::reset`], [`GameEngine::apply_move`] and
//! [`GameEngine::apply_automated_move`], and learn about changes through a
//! [`GameObserver`]. When an automated player's turn begins the engine
//! only notifies; the caller decides when to ask for the move, so any
//! "thinking" delay lives outside the engine.

use crate::cell::Cell;
use crate::error::InvalidMove;
use crate::events::{GameObserver, NoopObserver};
use crate::players::{Mode, PlayerConfig};
use crate::random::{GameRng, RandomSource};
use crate::rules::{self, MIN_MOVES_FOR_WIN};
use crate::state::GameState;
use crate::status::GameStatus;
use crate::strategy::{self, AutomatedMove};
use crate::types::{Board, Symbol};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe engine.
///
/// Generic over the observer receiving notifications and the random
/// source used to break ties in automated play.
#[derive(Debug, Clone)]
pub struct GameEngine<O = NoopObserver, R = GameRng> {
    state: GameState,
    players: PlayerConfig,
    observer: O,
    rng: R,
}

impl GameEngine {
    /// Creates an engine with default players, no observer and an
    /// entropy-seeded random source.
    #[instrument]
    pub fn new() -> Self {
        Self::with_parts(PlayerConfig::default(), NoopObserver, GameRng::from_entropy())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: GameObserver, R: RandomSource> GameEngine<O, R> {
    /// Creates an engine from its collaborators.
    ///
    /// The game starts in [`GameStatus::NotStarted`]; call
    /// [`reset`](Self::reset) to begin.
    pub fn with_parts(players: PlayerConfig, observer: O, rng: R) -> Self {
        Self {
            state: GameState::new(),
            players,
            observer,
            rng,
        }
    }

    /// Clears the board and starts a new game with Cross to move.
    ///
    /// Notifies the observer of the turn, and of an automated turn if
    /// Cross is automated.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(players = ?self.players, "Resetting game");
        self.state = GameState::new();
        self.state.set_status(GameStatus::InProgress);
        self.begin_turn(Symbol::Cross);
    }

    /// Sets the mode for `symbol`.
    ///
    /// Does not reset. Switching modes mid-game leaves the turn semantics
    /// stale, so callers should confirm with the user and then call
    /// [`reset`](Self::reset).
    #[instrument(skip(self))]
    pub fn set_player_mode(&mut self, symbol: Symbol, mode: Mode) {
        info!(%symbol, %mode, "Player mode changed");
        self.players.set_mode(symbol, mode);
    }

    /// Flips the mode for `symbol` and returns the new mode.
    ///
    /// Same reset caveat as [`set_player_mode`](Self::set_player_mode).
    #[instrument(skip(self))]
    pub fn toggle_player_mode(&mut self, symbol: Symbol) -> Mode {
        let mode = self.players.mode(symbol).toggle();
        self.set_player_mode(symbol, mode);
        mode
    }

    /// Returns true if the board is full or someone has won.
    pub fn is_game_over(&self) -> bool {
        self.state.move_count() == 9 || self.state.winner().is_some()
    }

    /// Mode of the player whose turn it is.
    pub fn current_player_mode(&self) -> Mode {
        self.players.mode(self.state.current_turn())
    }

    /// Places the current player's symbol in `cell`.
    ///
    /// After placing, checks for a win (once at least five cells are
    /// filled) and then for a tie. If the game continues the turn passes
    /// to the opponent.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if no game is running or `cell` is
    /// occupied. State is unchanged on error.
    #[instrument(skip(self), fields(symbol = %self.state.current_turn()))]
    pub fn apply_move(&mut self, cell: Cell) -> Result<GameStatus, InvalidMove> {
        self.validate(cell).inspect_err(|err| {
            warn!(%cell, %err, "Rejected move");
        })?;

        let symbol = self.state.current_turn();
        self.state.place(cell, symbol);
        debug!(%cell, %symbol, moves = self.state.move_count(), "Cell filled");
        self.observer.on_cell_filled(cell, symbol);

        self.update_status();
        Ok(self.state.status())
    }

    /// Chooses and applies a move for the current player.
    ///
    /// Uses the same path as [`apply_move`](Self::apply_move), so every
    /// notification fires. Does not check that the current player is
    /// automated.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if no game is running.
    #[instrument(skip(self), fields(symbol = %self.state.current_turn()))]
    pub fn apply_automated_move(&mut self) -> Result<AutomatedMove, InvalidMove> {
        self.ensure_running()?;
        let symbol = self.state.current_turn();
        let chosen = strategy::select_move(self.state.board(), symbol, &mut self.rng)
            .ok_or(InvalidMove::GameOver)?;
        info!(%symbol, cell = %chosen.cell, kind = ?chosen.kind, "Automated move");
        self.apply_move(chosen.cell)?;
        Ok(chosen)
    }

    /// Chooses a move for the current player without applying it.
    ///
    /// Draws from a copy of the random source, so the suggestion is the
    /// move an automated player would make now and later automated moves
    /// are unaffected. Returns `None` when no game is running.
    #[instrument(skip(self))]
    pub fn suggest_move(&self) -> Option<AutomatedMove>
    where
        R: Clone,
    {
        self.ensure_running().ok()?;
        let mut rng = self.rng.clone();
        strategy::select_move(self.state.board(), self.state.current_turn(), &mut rng)
    }

    /// Symbol whose turn it is.
    pub fn current_turn(&self) -> Symbol {
        self.state.current_turn()
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Winner, if the game has been won.
    pub fn winner(&self) -> Option<Symbol> {
        self.state.winner()
    }

    /// Returns true if the game ended in a tie.
    pub fn is_tie(&self) -> bool {
        self.state.is_tie()
    }

    /// Player mode configuration.
    pub fn players(&self) -> PlayerConfig {
        self.players
    }

    /// Mode for `symbol`.
    pub fn player_mode(&self, symbol: Symbol) -> Mode {
        self.players.mode(symbol)
    }

    /// The observer receiving notifications.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the observer, e.g. to drain recorded events.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    fn ensure_running(&self) -> Result<(), InvalidMove> {
        match self.state.status() {
            GameStatus::NotStarted => Err(InvalidMove::NotStarted),
            GameStatus::Won(_) | GameStatus::Tied => Err(InvalidMove::GameOver),
            GameStatus::InProgress if self.is_game_over() => Err(InvalidMove::GameOver),
            GameStatus::InProgress => Ok(()),
        }
    }

    fn validate(&self, cell: Cell) -> Result<(), InvalidMove> {
        self.ensure_running()?;
        if !self.state.board().is_empty(cell) {
            return Err(InvalidMove::CellOccupied(cell));
        }
        Ok(())
    }

    fn update_status(&mut self) {
        let moves = self.state.move_count();
        if moves >= MIN_MOVES_FOR_WIN {
            if let Some(winner) = rules::check_winner(&self.state) {
                info!(%winner, moves, "Game won");
                self.state.set_status(GameStatus::Won(winner));
                self.observer.on_game_won(winner);
                return;
            }
            if rules::is_tie(&self.state) {
                info!("Game tied");
                self.state.set_status(GameStatus::Tied);
                self.observer.on_game_tied();
                return;
            }
        }

        self.begin_turn(self.state.current_turn().opponent());
    }

    fn begin_turn(&mut self, symbol: Symbol) {
        self.state.set_turn(symbol);
        debug!(%symbol, "Turn changed");
        self.observer.on_turn_changed(symbol);
        if self.players.mode(symbol).is_automated() {
            self.observer.on_automated_turn_started(symbol);
        }
    }
}
