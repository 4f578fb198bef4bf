//! Tests for TOML configuration loading.

use strictly_crosses::{DisplayConfig, GameConfig, PlayerSign, Rules};

#[test]
fn test_empty_toml_gives_defaults() {
    let config = GameConfig::from_toml("").unwrap();
    assert_eq!(config, GameConfig::default());
    assert_eq!(config.rules().first_sign, PlayerSign::Cross);
    assert!(config.rules().alternate_first_mover);
    assert!(!config.rules().detect_draw);
    assert!(config.display().highlight_winning_line);
}

#[test]
fn test_partial_rules_keep_other_defaults() {
    let config = GameConfig::from_toml(
        r#"
        [rules]
        first_sign = "zero"
        detect_draw = true
        "#,
    )
    .unwrap();

    assert_eq!(
        config.rules(),
        &Rules {
            first_sign: PlayerSign::Zero,
            alternate_first_mover: true,
            detect_draw: true,
        }
    );
    assert_eq!(config.display(), &DisplayConfig::default());
}

#[test]
fn test_unknown_sign_is_parse_error() {
    let err = GameConfig::from_toml("[rules]\nfirst_sign = \"triangle\"\n").unwrap_err();
    assert!(err.message.contains("Failed to parse config"), "{err}");
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crosses.toml");
    std::fs::write(&path, "[display]\nhighlight_winning_line = false\n").unwrap();

    let config = GameConfig::from_file(&path).unwrap();
    assert!(!config.display().highlight_winning_line);
    assert_eq!(config.rules(), &Rules::default());
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_load_or_default_without_path() {
    assert_eq!(GameConfig::load_or_default(None).unwrap(), GameConfig::default());
}

#[test]
fn test_default_config_text_parses_back() {
    let text = GameConfig::default().to_toml().unwrap();
    assert!(text.contains("first_sign = \"cross\""));
    assert_eq!(GameConfig::from_toml(&text).unwrap(), GameConfig::default());
}
