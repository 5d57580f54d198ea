//! Terminal front end for the AR tic-tac-toe engine.
//!
//! Stands in for the AR scene: reads cell choices from the keyboard,
//! renders engine notifications as text, and schedules automated moves
//! after a visible pause.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod observer;
mod session;
mod settings;
mod simulate;

pub use observer::ChannelObserver;
pub use session::{Input, Session, SessionEngine};
pub use settings::{ConfigError, EngineSettings, Overrides, PresentationSettings, Settings};
pub use simulate::{Tally, simulate};
