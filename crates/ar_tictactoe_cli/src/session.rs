//! Interactive terminal session.
//!
//! Plays the part of the AR scene: turns typed cell numbers into engine
//! moves, renders the notifications the engine raises, and waits out the
//! automated player's visible pause before asking the engine for its move.

use crate::observer::ChannelObserver;
use crate::settings::Settings;
use anyhow::Result;
use ar_tictactoe::{Cell, GameEngine, GameEvent, GameRng, Outcome, Symbol};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Engine type driven by a session.
pub type SessionEngine = GameEngine<ChannelObserver, GameRng>;

/// A line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Play this cell.
    Cell(Cell),
    /// Switch this symbol between human and automated.
    Toggle(Symbol),
    /// Start over.
    Reset,
    /// Suggest a move for the current player.
    Hint,
    /// Show the board.
    Board,
    /// Show the commands.
    Help,
    /// Leave.
    Quit,
    /// Blank line.
    Empty,
    /// Anything else.
    Unknown(String),
}

impl Input {
    /// Parses one line of input.
    #[instrument]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Input::Empty,
            "q" | "quit" | "exit" => Input::Quit,
            "r" | "reset" | "restart" => Input::Reset,
            "x" => Input::Toggle(Symbol::Cross),
            "o" => Input::Toggle(Symbol::Circle),
            "h" | "hint" => Input::Hint,
            "b" | "board" => Input::Board,
            "?" | "help" => Input::Help,
            _ => Cell::from_label_or_number(trimmed)
                .map(Input::Cell)
                .unwrap_or_else(|| Input::Unknown(trimmed.to_string())),
        }
    }
}

const HELP: &str = "\
Commands:
  1-9      place your symbol (cells numbered left to right, top to bottom)
  x / o    switch X or O between human and automated (restarts the game)
  h        suggest a move
  b        show the board
  r        restart
  q        quit";

/// A terminal game session.
pub struct Session<W> {
    engine: SessionEngine,
    events: mpsc::UnboundedReceiver<GameEvent>,
    delay: Duration,
    pending: Option<Symbol>,
    out: W,
}

impl<W: Write> Session<W> {
    /// Creates a session writing to `out`.
    #[instrument(skip(out))]
    pub fn new(settings: &Settings, out: W) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        let engine = GameEngine::with_parts(
            *settings.players(),
            ChannelObserver::new(tx),
            GameRng::from_seed_option(*settings.engine().seed()),
        );
        Self {
            engine,
            events,
            delay: settings.automated_delay(),
            pending: None,
            out,
        }
    }

    /// The engine being played.
    pub fn engine(&self) -> &SessionEngine {
        &self.engine
    }

    /// Everything written so far.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Runs until `q` or end of input.
    #[instrument(skip_all)]
    pub async fn run<I: AsyncBufRead + Unpin>(&mut self, input: I) -> Result<()> {
        let mut lines = input.lines();
        writeln!(self.out, "{HELP}")?;
        self.restart()?;

        loop {
            if let Some(symbol) = self.pending.take() {
                self.play_automated(symbol).await?;
                continue;
            }

            write!(self.out, "> ")?;
            self.out.flush()?;
            let Some(line) = lines.next_line().await? else {
                info!("Input closed");
                break;
            };

            match Input::parse(&line) {
                Input::Quit => break,
                input => self.handle(input, &mut lines).await?,
            }
        }

        writeln!(self.out, "Bye!")?;
        Ok(())
    }

    async fn handle<I: AsyncBufRead + Unpin>(
        &mut self,
        input: Input,
        lines: &mut Lines<I>,
    ) -> Result<()> {
        debug!(?input, "Handling input");
        match input {
            Input::Cell(_) | Input::Empty if self.engine.is_game_over() => self.restart()?,
            Input::Cell(cell) => self.play_human(cell)?,
            Input::Toggle(symbol) => {
                write!(self.out, "Restart game? [y/N] ")?;
                self.out.flush()?;
                let answer = lines.next_line().await?.unwrap_or_default();
                if answer.trim().eq_ignore_ascii_case("y") {
                    let mode = self.engine.toggle_player_mode(symbol);
                    writeln!(self.out, "{symbol} is now {mode}")?;
                    self.restart()?;
                } else {
                    writeln!(self.out, "Mode unchanged")?;
                }
            }
            Input::Reset => self.restart()?,
            Input::Hint => match self.engine.suggest_move() {
                Some(suggestion) => writeln!(self.out, "Try {}", suggestion.cell)?,
                None => writeln!(self.out, "No moves left")?,
            },
            Input::Board => writeln!(self.out, "{}", self.engine.board().display())?,
            Input::Help => writeln!(self.out, "{HELP}")?,
            Input::Empty => {}
            Input::Unknown(text) => writeln!(self.out, "Unknown command: {text} (? for help)")?,
            Input::Quit => {}
        }
        Ok(())
    }

    fn play_human(&mut self, cell: Cell) -> Result<()> {
        let symbol = self.engine.current_turn();
        if self.engine.current_player_mode().is_automated() {
            writeln!(self.out, "{symbol} is played automatically")?;
            return Ok(());
        }
        if let Err(err) = self.engine.apply_move(cell) {
            writeln!(self.out, "{err}")?;
        }
        self.render_events()
    }

    #[instrument(skip(self))]
    async fn play_automated(&mut self, symbol: Symbol) -> Result<()> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match self.engine.apply_automated_move() {
            Ok(chosen) => debug!(%symbol, %chosen, "Automated move applied"),
            Err(err) => {
                warn!(%symbol, %err, "Automated move rejected");
                writeln!(self.out, "{err}")?;
            }
        }
        self.render_events()
    }

    fn restart(&mut self) -> Result<()> {
        self.pending = None;
        self.engine.reset();
        writeln!(self.out, "{}", self.engine.board().display())?;
        self.render_events()
    }

    /// Writes out every event the engine has raised since the last call.
    fn render_events(&mut self) -> Result<()> {
        while let Ok(event) = self.events.try_recv() {
            match event {
                GameEvent::CellFilled { cell, symbol } => {
                    writeln!(self.out, "{symbol} played {cell}")?;
                    writeln!(self.out, "{}", self.engine.board().display())?;
                }
                GameEvent::TurnChanged(symbol) => {
                    writeln!(self.out, "Waiting for {symbol} to play")?;
                }
                GameEvent::AutomatedTurnStarted(symbol) => {
                    writeln!(self.out, "{symbol} is thinking...")?;
                    self.pending = Some(symbol);
                }
                GameEvent::GameWon(_) | GameEvent::GameTied => {
                    if let Some(outcome) = self.engine.status().outcome() {
                        self.announce(outcome)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn announce(&mut self, outcome: Outcome) -> Result<()> {
        info!(%outcome, "Game over");
        writeln!(self.out, "{outcome}")?;
        writeln!(self.out, "Enter a cell or press Enter to play again, q to quit")?;
        Ok(())
    }
}
