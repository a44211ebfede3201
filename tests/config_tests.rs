//! Config file loading tests.

use std::io::Write;
use std::time::Duration;

use tempfile::NamedTempFile;
use who_pays::core::{ConfigError, ManualClock, SessionConfig};
use who_pays::session::{GameSession, Phase};

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "selection_delay_ms = 500").unwrap();
    writeln!(file, "seed = 8").unwrap();

    let config = SessionConfig::load(file.path()).unwrap();
    assert_eq!(config.selection_delay(), Duration::from_millis(500));
    assert_eq!(config.seed, Some(8));
    assert_eq!(config.min_participants, 2);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SessionConfig::load(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

/// The configured delay is what the session waits for.
#[test]
fn test_loaded_delay_drives_session() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "selection_delay_ms = 250").unwrap();
    writeln!(file, "seed = 1").unwrap();
    let config = SessionConfig::load(file.path()).unwrap();

    let clock = ManualClock::new();
    let mut session = GameSession::with_config(config, clock.clone());
    session.add_participant("Ann").unwrap();
    session.add_participant("Ben").unwrap();
    session.start_game().unwrap();

    clock.advance(Duration::from_millis(249));
    assert!(session.poll().is_none());
    clock.advance(Duration::from_millis(1));
    assert!(session.poll().is_some());
    assert_eq!(session.phase(), Phase::Result);
}
