//! Tests for loading game configuration from disk.

use std::io::Write;
use std::time::Duration;

use vanishing_tictactoe::{GameConfig, GameMode, Player, Position, Square};

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"human-vs-computer\"").unwrap();
    writeln!(file, "ai_delay_ms = 0").unwrap();
    writeln!(file, "seed = 5").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.mode(), GameMode::HumanVsComputer);
    assert_eq!(config.ai_delay(), Duration::ZERO);
    assert_eq!(*config.seed(), Some(5));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
    assert_eq!(config.ai_delay(), Duration::from_millis(500));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ai_delay_ms = \"soon\"").unwrap();

    let err = GameConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_engine_from_config() {
    let config =
        GameConfig::default().with_overrides(Some(GameMode::HumanVsComputer), Some(0), Some(1));
    let mut engine = config.engine();

    let deferred = engine.on_cell_selected(0).deferred.expect("computer scheduled");
    assert_eq!(*deferred.delay(), Duration::ZERO);

    engine.run_computer_turn(*deferred.ticket());
    assert_eq!(engine.session().board().cell_at(Position::Center), Square::Occupied(Player::O));
}
