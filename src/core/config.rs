//! Session configuration.
//!
//! Defaults match the party game: a 4 second suspense delay before the draw
//! and at least two participants. Configs can be built in code with the
//! `with_*` setters or loaded from TOML:
//!
//! ```toml
//! selection_delay_ms = 2500
//! min_participants = 3
//! seed = 42
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Delay between starting a game and the draw.
pub const DEFAULT_SELECTION_DELAY_MS: u64 = 4000;

/// Fewest participants a game can start with.
pub const MIN_PARTICIPANTS: usize = 2;

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Milliseconds between `start_game` and the draw.
    pub selection_delay_ms: u64,

    /// Participants required before `start_game` does anything (never below 2).
    pub min_participants: usize,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            selection_delay_ms: DEFAULT_SELECTION_DELAY_MS,
            min_participants: MIN_PARTICIPANTS,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Set a custom selection delay.
    #[must_use]
    pub fn with_selection_delay(mut self, delay: Duration) -> Self {
        self.selection_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set a custom minimum participant count.
    #[must_use]
    pub fn with_min_participants(mut self, min: usize) -> Self {
        self.min_participants = min;
        self
    }

    /// Set a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Selection delay as a `Duration`.
    #[must_use]
    pub fn selection_delay(&self) -> Duration {
        Duration::from_millis(self.selection_delay_ms)
    }

    /// Check the config for values the session cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_participants < MIN_PARTICIPANTS {
            return Err(ConfigError::Invalid {
                message: format!(
                    "min_participants must be at least {}, got {}",
                    MIN_PARTICIPANTS, self.min_participants
                ),
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML config.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_toml_str(&input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.selection_delay(), Duration::from_millis(4000));
        assert_eq!(config.min_participants, 2);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::default()
            .with_selection_delay(Duration::from_millis(250))
            .with_min_participants(3)
            .with_seed(7);

        assert_eq!(config.selection_delay_ms, 250);
        assert_eq!(config.min_participants, 3);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_from_toml_partial() {
        let config = SessionConfig::from_toml_str("seed = 42\n").unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.selection_delay_ms, DEFAULT_SELECTION_DELAY_MS);
    }

    #[test]
    fn test_from_toml_full() {
        let input = "selection_delay_ms = 10\nmin_participants = 4\nseed = 1\n";
        let config = SessionConfig::from_toml_str(input).unwrap();
        assert_eq!(
            config,
            SessionConfig {
                selection_delay_ms: 10,
                min_participants: 4,
                seed: Some(1),
            }
        );
    }

    #[test]
    fn test_rejects_single_participant_games() {
        let err = SessionConfig::from_toml_str("min_participants = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_rejects_bad_toml() {
        let err = SessionConfig::from_toml_str("selection_delay_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
