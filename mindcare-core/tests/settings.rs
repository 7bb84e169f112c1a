//! Settings file loading: defaults, partial files, malformed TOML.

use mindcare_core::config::{ConfigError, Settings, DEFAULT_THEME};
use mindcare_core::client::DEFAULT_BASE_URL;
use pretty_assertions::assert_eq;

fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn full_file_is_read() {
    let (_dir, path) = write_config(
        "theme = \"dark\"\nbase_url = \"http://192.168.1.20:8000\"\n",
    );
    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(
        settings,
        Settings { theme: "dark".to_owned(), base_url: "http://192.168.1.20:8000".to_owned() }
    );
}

#[test]
fn missing_file_reports_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = Settings::load_from(&dir.path().join("absent.toml")).unwrap_err();
    match err {
        ConfigError::Read { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
        }
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn malformed_file_reports_parse_error() {
    let (_dir, path) = write_config("theme = [unterminated\n");
    let err = Settings::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got {err:?}");
}

#[test]
fn env_style_override_beats_file() {
    let (_dir, path) = write_config("base_url = \"http://from-file:1\"\n");
    let settings = Settings::load_from(&path)
        .unwrap()
        .with_base_url_override(Some("http://from-env:2".to_owned()));
    assert_eq!(settings.base_url, "http://from-env:2");
    assert_eq!(settings.theme, DEFAULT_THEME);
    assert_ne!(settings.base_url, DEFAULT_BASE_URL);
}
