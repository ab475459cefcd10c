//! 設定ファイルのテスト

use pitch_coach::config::{validate_api_url, Config};
use pitch_coach::error::PitchCoachError;
use pitch_coach_common::api::{DEFAULT_API_BASE_URL, IDEA_TIMEOUT_SECS, PITCH_TIMEOUT_SECS};
use pitch_coach_common::Persona;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

/// ファイルが無ければ既定値
#[test]
fn test_load_missing_file_returns_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.idea_timeout_seconds, IDEA_TIMEOUT_SECS);
    assert_eq!(config.market_timeout_seconds, None);
    assert_eq!(config.pitch_timeout_seconds, PITCH_TIMEOUT_SECS);
    assert_eq!(config.default_persona, Persona::Investor);
}

#[test]
fn test_save_and_reload() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");
    let config = Config {
        api_base_url: "https://coach.example.com".into(),
        market_timeout_seconds: Some(90),
        default_persona: Persona::Healthcare,
        ..Config::default()
    };

    config.save_to(&path).unwrap();
    let loaded = Config::load_from(&path).unwrap();

    assert_eq!(loaded, config);
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"default_persona\": \"healthcare\""));
}

/// 一部の項目だけ書かれたファイルは残りを既定値で補う
#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"api_base_url": "http://10.0.0.5:8000"}"#).unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.api_base_url, "http://10.0.0.5:8000");
    assert_eq!(config.pitch_timeout_seconds, PITCH_TIMEOUT_SECS);
}

#[test]
fn test_broken_file_is_an_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, PitchCoachError::JsonParse(_)));
}

/// 壊れたファイルでも既定値で読み込み、保存すれば修復される
#[test]
fn test_broken_file_can_be_repaired() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{not json").unwrap();

    let mut config = Config::load_or_default_from(&path);
    assert_eq!(config, Config::default());

    config.api_base_url = validate_api_url("https://coach.example.com/").unwrap();
    config.save_to(&path).unwrap();

    let repaired = Config::load_from(&path).unwrap();
    assert_eq!(repaired.api_base_url, "https://coach.example.com");
}

/// --api-url > 環境変数 > 設定ファイル
#[test]
fn test_api_url_precedence() {
    let config = Config {
        api_base_url: "http://file:8000".into(),
        ..Config::default()
    };

    assert_eq!(config.resolve_api_url(None, None), "http://file:8000");
    assert_eq!(config.resolve_api_url(None, Some("http://env:8000")), "http://env:8000");
    assert_eq!(
        config.resolve_api_url(Some("http://flag:8000"), Some("http://env:8000")),
        "http://flag:8000"
    );
    // 空の環境変数は無視
    assert_eq!(config.resolve_api_url(None, Some("  ")), "http://file:8000");
}

#[test]
fn test_api_config_carries_timeouts() {
    let config = Config {
        idea_timeout_seconds: 60,
        ..Config::default()
    };

    let api = config.api_config_with(Some("http://localhost:9000/"), None);

    assert_eq!(api.base_url, "http://localhost:9000/");
    assert_eq!(api.url("/api/analyze-idea"), "http://localhost:9000/api/analyze-idea");
    assert_eq!(api.idea_timeout_secs, Some(60));
    assert_eq!(api.market_timeout_secs, None);
    assert_eq!(api.pitch_timeout_secs, Some(PITCH_TIMEOUT_SECS));
}

#[test]
fn test_validate_api_url() {
    assert_eq!(validate_api_url(" https://coach.example.com/ ").unwrap(), "https://coach.example.com");
    assert!(matches!(validate_api_url("coach.example.com"), Err(PitchCoachError::Config(_))));
}
