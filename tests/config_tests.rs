// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for session config loading

use profile_term::config::SessionConfig;
use profile_term::i18n::Locale;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_yaml_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.yaml");
    fs::write(
        &path,
        "default_locale: en\nboot_delay_ms: 0\nprompt: \"guest@quyenlt:~$\"\n",
    )
    .unwrap();

    let config = SessionConfig::load(&path).expect("yaml config should load");
    assert_eq!(config.default_locale, Locale::En);
    assert_eq!(config.boot_delay_ms, 0);
    assert_eq!(config.prompt, "guest@quyenlt:~$");
    assert!(config.welcome);
}

#[test]
fn test_load_json_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, r#"{"welcome": false}"#).unwrap();

    let config = SessionConfig::load(&path).expect("json config should load");
    assert!(!config.welcome);
    assert_eq!(config.default_locale, Locale::Vi);
}

#[test]
fn test_unsupported_extension_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.toml");
    fs::write(&path, "default_locale = \"en\"").unwrap();

    let err = SessionConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("unsupported session config extension"));
}

#[test]
fn test_invalid_locale_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.yml");
    fs::write(&path, "default_locale: fr\n").unwrap();

    assert!(SessionConfig::load(&path).is_err());
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    let err = SessionConfig::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("absent.json"));
}

#[test]
fn test_no_path_uses_defaults() {
    let config = SessionConfig::load_or_default(None).unwrap();
    assert_eq!(config, SessionConfig::default());
}
