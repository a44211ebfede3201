//! Core building blocks: RNG, clocks, configuration, errors.
//!
//! Nothing here knows about the game's phases. The session module combines
//! these into the state machine.

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;

pub use clock::{Clock, ManualClock, TokioClock};
pub use config::{SessionConfig, DEFAULT_SELECTION_DELAY_MS, MIN_PARTICIPANTS};
pub use error::{ConfigError, ValidationError};
pub use rng::GameRng;
