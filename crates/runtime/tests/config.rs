use std::io::Write;

use adventure_core::{ErrorSeverity, GameError};
use adventure_runtime::{ConfigError, RuntimeConfig, TurnTimerInfo};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_full_config_from_ron() {
    let file = write_config(
        r#"(
            pathfinder: (
                use_embark_and_disembark: false,
                max_turns: 3,
            ),
            timers: (
                budget: (
                    base_timer: 120000,
                    turn_timer: 60000,
                    battle_timer: 90000,
                    creature_timer: 20000,
                ),
                propagate_threshold: 2000,
            ),
            event_buffer_size: 16,
        )"#,
    );

    let config = RuntimeConfig::load_from_file(file.path()).unwrap();

    assert!(!config.pathfinder.use_embark_and_disembark);
    assert!(config.pathfinder.allow_teleport_transit);
    assert_eq!(config.pathfinder.max_turns, 3);
    assert_eq!(
        config.timers.budget,
        TurnTimerInfo::new(120_000, 60_000, 90_000, 20_000)
    );
    assert_eq!(config.timers.propagate_threshold, 2000);
    assert_eq!(config.timers.propagate_frequency, 5000);
    assert_eq!(config.event_buffer_size, 16);
}

#[test]
fn empty_document_yields_defaults() {
    let file = write_config("()");
    let config = RuntimeConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config, RuntimeConfig::default());
    assert!(!config.timers.budget.is_enabled());
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("runtime.ron");

    let err = RuntimeConfig::load_from_file(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Read { path: ref p, .. } if p == &path));
    assert_eq!(err.error_code(), "CONFIG_READ_FAILED");
    assert!(err.severity().is_recoverable());
}

#[test]
fn malformed_ron_is_a_parse_error() {
    let file = write_config("(timers: (budget: oops))");

    let err = RuntimeConfig::load_from_file(file.path()).unwrap_err();

    assert!(matches!(err, ConfigError::Parse(_)));
    assert_eq!(err.severity(), ErrorSeverity::Validation);
}

#[test]
fn invalid_budgets_are_rejected_after_parsing() {
    let file = write_config("(timers: (propagate_frequency: 0))");

    let err = RuntimeConfig::load_from_file(file.path()).unwrap_err();

    assert_eq!(err.error_code(), "CONFIG_INVALID_TIMER");
}
