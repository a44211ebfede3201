//! Error types.
//!
//! The session itself only ever fails on name validation. Everything else a
//! caller can do in the wrong phase is a no-op rather than an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected participant input.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// Name was empty or whitespace only.
    #[error("empty name")]
    EmptyName,
}

impl ValidationError {
    /// Message shown inline next to the name input.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "You need to type a player's name",
        }
    }
}

/// Failure to load a [`SessionConfig`](crate::core::SessionConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {message}")]
    Invalid { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        let err = ValidationError::EmptyName;
        assert_eq!(err.to_string(), "empty name");
        assert_eq!(err.user_message(), "You need to type a player's name");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid {
            message: "min_participants must be at least 2".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config: min_participants must be at least 2"
        );
    }
}
