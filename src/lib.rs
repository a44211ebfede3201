//! # who-pays
//!
//! A party game engine: enter the people at the table, press start, and after
//! a few seconds of suspense one of them is picked to pay the bill.
//!
//! ## Design Principles
//!
//! 1. **State, not screens**: `GameSession` owns participants, phase and the
//!    outcome. Renderers read snapshots and forward intents, nothing more.
//!
//! 2. **No hidden timers**: The delayed draw is a deadline checked against a
//!    `Clock`. Hosts poll; tests advance a `ManualClock`.
//!
//! 3. **Misuse is a no-op**: Starting with too few names or acting in the
//!    wrong phase changes nothing. Only blank names produce an error.
//!
//! ## Modules
//!
//! - `core`: RNG, clocks, configuration, errors
//! - `session`: The game state machine and its snapshot
//! - `view`: Mapping snapshots to presentations
//! - `driver`: Awaiting the draw on tokio time

pub mod core;
pub mod driver;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Clock, ConfigError, GameRng, ManualClock, SessionConfig, TokioClock, ValidationError,
};

pub use crate::session::{EpisodeId, GameSession, Phase, Selection, SessionSnapshot};

pub use crate::driver::await_selection;

pub use crate::view::{result_caption, Screen};
