//! The game session state machine.
//!
//! ## Lifecycle
//!
//! 1. `add_participant` while `Idle`
//! 2. `start_game` once enough names are in: phase becomes `Selecting` and a
//!    draw is scheduled `selection_delay` from now
//! 3. `poll` (or `fire` with the episode id) once the delay has elapsed: a
//!    loser is drawn and the phase becomes `Result`
//! 4. `reset` to play again
//!
//! The session never sleeps or spawns. Whoever hosts it decides when to poll,
//! see [`crate::driver`] for the tokio version.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::participant::parse_participant_name;
use super::phase::{EpisodeId, Phase};
use super::snapshot::SessionSnapshot;
use crate::core::{Clock, GameRng, SessionConfig, TokioClock, ValidationError};

/// Outcome of a completed draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Episode the draw belongs to.
    pub episode: EpisodeId,
    /// Position of the loser in the participant list.
    pub index: usize,
    /// The loser's name.
    pub loser: String,
}

/// Draw scheduled by `start_game`.
#[derive(Clone, Copy, Debug)]
struct PendingSelection {
    episode: EpisodeId,
    due_at: Duration,
}

/// A single bill-roulette game.
pub struct GameSession<C: Clock = TokioClock> {
    config: SessionConfig,
    clock: C,
    rng: GameRng,

    participants: Vector<String>,
    phase: Phase,
    selected_loser: Option<String>,
    validation_error: Option<ValidationError>,

    /// Last issued episode.
    episode: EpisodeId,
    /// At most one draw is ever pending.
    pending: Option<PendingSelection>,
}

impl GameSession<TokioClock> {
    /// Create a session on tokio time with the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default(), TokioClock::new())
    }
}

impl Default for GameSession<TokioClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> GameSession<C> {
    /// Create a session with a config and clock.
    ///
    /// The RNG is seeded from `config.seed` or from OS entropy.
    #[must_use]
    pub fn with_config(config: SessionConfig, clock: C) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config, clock, rng)
    }

    /// Create a session with an explicit RNG.
    #[must_use]
    pub fn with_rng(config: SessionConfig, clock: C, rng: GameRng) -> Self {
        debug!(seed = rng.seed(), "session created");
        Self {
            config,
            clock,
            rng,
            participants: Vector::new(),
            phase: Phase::Idle,
            selected_loser: None,
            validation_error: None,
            episode: EpisodeId(0),
            pending: None,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn participants(&self) -> &Vector<String> {
        &self.participants
    }

    #[must_use]
    pub fn selected_loser(&self) -> Option<&str> {
        self.selected_loser.as_deref()
    }

    /// Episode of the pending draw, if any.
    #[must_use]
    pub fn pending_episode(&self) -> Option<EpisodeId> {
        self.pending.map(|p| p.episode)
    }

    /// Whether `start_game` would do anything right now.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.phase == Phase::Idle && self.participants.len() >= self.config.min_participants
    }

    /// Immutable view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            participants: self.participants.clone(),
            phase: self.phase,
            selected_loser: self.selected_loser.clone(),
            validation_error: self.validation_error,
        }
    }

    // === Intents ===

    /// Add a participant.
    ///
    /// Returns `Ok(true)` when the trimmed name was appended and `Ok(false)`
    /// when the session is not `Idle` (nothing changes). Blank input is
    /// rejected and remembered as the current validation error.
    pub fn add_participant(&mut self, name: &str) -> Result<bool, ValidationError> {
        if !self.phase.accepts_participants() {
            debug!(phase = %self.phase, "ignoring participant outside idle phase");
            return Ok(false);
        }

        match parse_participant_name(name) {
            Ok(name) => {
                debug!(participant = %name, count = self.participants.len() + 1, "participant added");
                self.participants.push_back(name);
                self.validation_error = None;
                Ok(true)
            }
            Err(err) => {
                debug!(error = %err, "participant rejected");
                self.validation_error = Some(err);
                Err(err)
            }
        }
    }

    /// Start the game and schedule the draw.
    ///
    /// A no-op returning `None` unless the session is `Idle` with enough
    /// participants; renderers are expected to disable the control instead.
    pub fn start_game(&mut self) -> Option<EpisodeId> {
        if !self.can_start() {
            debug!(
                phase = %self.phase,
                participants = self.participants.len(),
                "start ignored"
            );
            return None;
        }

        self.episode = self.episode.next();
        let due_at = self.clock.now() + self.config.selection_delay();
        self.pending = Some(PendingSelection {
            episode: self.episode,
            due_at,
        });
        self.selected_loser = None;
        self.phase = Phase::Selecting;

        info!(
            episode = %self.episode,
            participants = self.participants.len(),
            delay_ms = self.config.selection_delay_ms,
            "selection started"
        );
        Some(self.episode)
    }

    /// Time left before the pending draw is due. `None` if nothing is pending.
    #[must_use]
    pub fn time_until_selection(&self) -> Option<Duration> {
        self.pending.map(|p| p.due_at.saturating_sub(self.clock.now()))
    }

    /// Run the pending draw if its delay has elapsed.
    pub fn poll(&mut self) -> Option<Selection> {
        let pending = self.pending?;
        if self.clock.now() < pending.due_at {
            return None;
        }
        self.fire(pending.episode)
    }

    /// Run the draw scheduled for `episode`.
    ///
    /// Only the currently pending episode can draw. Anything else (a draw
    /// that was cancelled, reset away or already completed) does nothing.
    pub fn fire(&mut self, episode: EpisodeId) -> Option<Selection> {
        match self.pending {
            Some(pending) if pending.episode == episode => {}
            _ => {
                warn!(episode = %episode, "stale selection ignored");
                return None;
            }
        }
        self.pending = None;

        if self.phase != Phase::Selecting || self.participants.len() < 2 {
            return None;
        }

        let index = self.rng.pick_index(self.participants.len())?;
        let loser = self.participants[index].clone();

        self.selected_loser = Some(loser.clone());
        self.phase = Phase::Result;

        info!(episode = %episode, loser = %loser, index, "loser selected");
        Some(Selection {
            episode,
            index,
            loser,
        })
    }

    /// Abandon a pending draw and go back to `Idle`, keeping participants.
    ///
    /// Returns `false` (and does nothing) outside `Selecting`.
    pub fn cancel_selection(&mut self) -> bool {
        if self.phase != Phase::Selecting {
            return false;
        }

        if let Some(pending) = self.pending.take() {
            info!(episode = %pending.episode, "selection cancelled");
        }
        self.selected_loser = None;
        self.phase = Phase::Idle;
        true
    }

    /// Drop everything and return to an empty `Idle` session.
    pub fn reset(&mut self) {
        info!(phase = %self.phase, "session reset");
        self.pending = None;
        self.participants.clear();
        self.selected_loser = None;
        self.validation_error = None;
        self.phase = Phase::Idle;
    }
}
