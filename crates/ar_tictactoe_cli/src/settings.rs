//! Settings for a play session, loaded from TOML and overridden by flags.

use ar_tictactoe::{Mode, PlayerConfig};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for the game session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Mode per symbol.
    #[serde(default)]
    players: PlayerConfig,

    /// Engine settings.
    #[serde(default)]
    engine: EngineSettings,

    /// Presentation settings.
    #[serde(default)]
    presentation: PresentationSettings,
}

/// Engine settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Seed for the automated player's random tie-breaking. Entropy if unset.
    #[serde(default)]
    seed: Option<u64>,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PresentationSettings {
    /// Visible pause before each automated move.
    #[serde(default = "default_automated_delay_ms")]
    automated_delay_ms: u64,
}

#[instrument]
fn default_automated_delay_ms() -> u64 {
    2000
}

impl Default for PresentationSettings {
    fn default() -> Self {
        Self {
            automated_delay_ms: default_automated_delay_ms(),
        }
    }
}

/// Command-line overrides; `None` keeps the file value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Mode for X.
    pub cross: Option<Mode>,
    /// Mode for O.
    pub circle: Option<Mode>,
    /// Random seed.
    pub seed: Option<u64>,
    /// Automated move delay in milliseconds.
    pub delay_ms: Option<u64>,
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(players = ?settings.players, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Loads `path` if given, otherwise defaults.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(mode) = overrides.cross {
            self.players.cross = mode;
        }
        if let Some(mode) = overrides.circle {
            self.players.circle = mode;
        }
        if overrides.seed.is_some() {
            self.engine.seed = overrides.seed;
        }
        if let Some(delay_ms) = overrides.delay_ms {
            self.presentation.automated_delay_ms = delay_ms;
        }
        self
    }

    /// Delay before automated moves.
    pub fn automated_delay(&self) -> Duration {
        Duration::from_millis(self.presentation.automated_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
