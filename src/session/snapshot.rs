//! Immutable session view handed to renderers.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::core::ValidationError;

/// Everything a renderer needs to draw the current screen.
///
/// Participants live in an `im::Vector`, so taking a snapshot after every
/// state change costs O(1) regardless of how many names were entered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Names in entry order.
    pub participants: Vector<String>,

    /// Current phase.
    pub phase: Phase,

    /// Set exactly when `phase == Result`.
    pub selected_loser: Option<String>,

    /// Last rejected input, cleared by the next successful add.
    pub validation_error: Option<ValidationError>,
}

impl SessionSnapshot {
    /// Whether a renderer should enable its start control.
    #[must_use]
    pub fn can_start(&self, min_participants: usize) -> bool {
        self.phase == Phase::Idle && self.participants.len() >= min_participants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_idle() {
        let snapshot = SessionSnapshot::default();
        assert!(snapshot.participants.is_empty());
        assert_eq!(snapshot.phase, Phase::Idle);
        assert_eq!(snapshot.selected_loser, None);
        assert_eq!(snapshot.validation_error, None);
    }

    #[test]
    fn test_can_start() {
        let mut snapshot = SessionSnapshot::default();
        snapshot.participants.push_back("Ann".into());
        assert!(!snapshot.can_start(2));

        snapshot.participants.push_back("Ben".into());
        assert!(snapshot.can_start(2));

        snapshot.phase = Phase::Selecting;
        assert!(!snapshot.can_start(2));
    }

    #[test]
    fn test_serializes_to_json() {
        let snapshot = SessionSnapshot {
            participants: vec!["Ann".to_string()].into(),
            phase: Phase::Result,
            selected_loser: Some("Ann".into()),
            validation_error: None,
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["participants"][0], "Ann");
        assert_eq!(json["phase"], "Result");
        assert_eq!(json["selected_loser"], "Ann");
    }
}
