//! Tests for TOML configuration loading.

use std::io::Write;
use tictactoe::{GameConfig, Mark};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, GameConfig::default());
    assert_eq!(config.players().name(Mark::X), "Player X");
    assert_eq!(config.players().name(Mark::O), "Player O");
    assert_eq!(config.log().filter(), "warn");
    assert!(config.log().file().is_none());
}

#[test]
fn test_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[players]
x_name = "Ada"
o_name = "Grace"

[log]
filter = "debug"
file = "game.log"
"#
    )
    .unwrap();

    let config = GameConfig::load_or_default(file.path()).unwrap();
    assert_eq!(config.players().name(Mark::X), "Ada");
    assert_eq!(config.players().name(Mark::O), "Grace");
    assert_eq!(config.log().filter(), "debug");
    assert_eq!(
        config.log().file().as_deref(),
        Some(std::path::Path::new("game.log"))
    );
}

#[test]
fn test_partial_sections_keep_remaining_defaults() {
    let config = GameConfig::from_toml("[players]\nx_name = \"Ada\"\n").unwrap();

    assert_eq!(config.players().name(Mark::X), "Ada");
    assert_eq!(config.players().name(Mark::O), "Player O");
    assert_eq!(config.log().filter(), "warn");
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[players\nx_name = ").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"), "{err}");
}

#[test]
fn test_log_filter_override() {
    let mut config = GameConfig::default();
    config.log_mut().set_filter("tictactoe=trace");
    assert_eq!(config.log().filter(), "tictactoe=trace");
}
