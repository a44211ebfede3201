//! Session phases and episode identifiers.

use serde::{Deserialize, Serialize};

/// Discrete stage of a game session.
///
/// `Idle --start--> Selecting --delay--> Result`, with `cancel_selection`
/// returning `Selecting` to `Idle` and `reset` returning any phase to `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Collecting participants.
    #[default]
    Idle,
    /// Waiting for the delayed draw.
    Selecting,
    /// A loser has been drawn. Terminal until reset.
    Result,
}

impl Phase {
    /// Whether the session accepts new participants.
    #[must_use]
    pub fn accepts_participants(self) -> bool {
        self == Phase::Idle
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Selecting => "selecting",
            Phase::Result => "result",
        };
        f.write_str(name)
    }
}

/// One run of the state machine from `Selecting` to `Result` or cancellation.
///
/// A new id is issued on every successful start. The pending draw carries the
/// id it was scheduled with, so a draw from an earlier episode can never land
/// in a later one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EpisodeId(pub u64);

impl EpisodeId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    #[must_use]
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Episode({})", self.0)
    }
}
