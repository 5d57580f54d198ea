//! Player mode configuration.

use crate::types::Symbol;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who supplies a symbol's moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Mode {
    /// Moves come from input events.
    #[strum(to_string = "human")]
    Human,
    /// Moves are computed by the engine's heuristic.
    #[serde(alias = "robot")]
    #[strum(to_string = "automated", serialize = "robot")]
    Automated,
}

impl Mode {
    /// Toggles between `Human` and `Automated`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Automated,
            Self::Automated => Self::Human,
        }
    }

    /// Returns true for `Automated`.
    pub fn is_automated(self) -> bool {
        self == Self::Automated
    }
}

/// Mode per symbol.
///
/// Defaults to a human Cross playing against an automated Circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Mode for Cross.
    #[serde(default = "default_cross")]
    pub cross: Mode,
    /// Mode for Circle.
    #[serde(default = "default_circle")]
    pub circle: Mode,
}

fn default_cross() -> Mode {
    Mode::Human
}

fn default_circle() -> Mode {
    Mode::Automated
}

impl PlayerConfig {
    /// Creates a configuration with explicit modes.
    pub fn new(cross: Mode, circle: Mode) -> Self {
        Self { cross, circle }
    }

    /// Both symbols automated.
    pub fn automated() -> Self {
        Self::new(Mode::Automated, Mode::Automated)
    }

    /// Both symbols human.
    pub fn human() -> Self {
        Self::new(Mode::Human, Mode::Human)
    }

    /// Returns the mode for `symbol`.
    pub fn mode(&self, symbol: Symbol) -> Mode {
        match symbol {
            Symbol::Cross => self.cross,
            Symbol::Circle => self.circle,
        }
    }

    /// Sets the mode for `symbol`.
    pub fn set_mode(&mut self, symbol: Symbol, mode: Mode) {
        match symbol {
            Symbol::Cross => self.cross = mode,
            Symbol::Circle => self.circle = mode,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new(default_cross(), default_circle())
    }
}
