//! Renderer and navigation contract.
//!
//! A renderer calls [`Screen::from_snapshot`] after every intent and draws
//! whatever comes back. Moving into [`Screen::Result`] is the cue to navigate
//! to the result presentation; its "Play Again" button maps to
//! [`GameSession::reset`](crate::session::GameSession::reset).

use im::Vector;

use crate::session::{Phase, SessionSnapshot};

/// Which presentation to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Name input plus the list entered so far.
    Entry {
        participants: Vector<String>,
        /// Inline message for the last rejected input.
        error_message: Option<&'static str>,
    },
    /// Placeholder while the draw is pending.
    Selecting,
    /// The outcome.
    Result { loser: Option<String> },
}

impl Screen {
    #[must_use]
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        match snapshot.phase {
            Phase::Idle => Screen::Entry {
                participants: snapshot.participants.clone(),
                error_message: snapshot.validation_error.map(|e| e.user_message()),
            },
            Phase::Selecting => Screen::Selecting,
            Phase::Result => Screen::Result {
                loser: snapshot.selected_loser.clone(),
            },
        }
    }
}

/// Caption for the result presentation.
#[must_use]
pub fn result_caption(loser: Option<&str>) -> String {
    match loser {
        Some(loser) => format!("{} will pay the bills!", loser),
        None => "No loser!".to_string(),
    }
}
