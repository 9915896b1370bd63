//! Configuration loading tests
//!
//! Tests that configuration loads correctly and provides expected
//! default values

use std::io::Write;

use ivn::config::{Config, DEFAULT_PITCH, DEFAULT_RATE};
use ivn::Language;

#[test]
fn test_config_loads_successfully() {
    // Load must work whether or not the user has a config file
    let config = Config::load().expect("Failed to load config");

    assert!(config.path().to_str().unwrap().contains(".ivn.cfg"));

    // Startup voice settings are always in a sane range
    assert!(config.pitch() > 0.0 && config.pitch() < 2.0);
    assert!(config.rate() > 0.0 && config.rate() < 2.0);
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "[speech]").unwrap();
    writeln!(file, "pitch = 1.1").unwrap();
    writeln!(file, "rate = 0.8").unwrap();
    writeln!(file, "language = en").unwrap();
    writeln!(file, "[notes]").unwrap();
    writeln!(file, "translations = /tmp/extra.json").unwrap();

    let config = Config::from_file(file.path()).expect("Failed to parse config");
    assert_eq!(config.pitch(), 1.1);
    assert_eq!(config.rate(), 0.8);
    assert_eq!(config.default_language(), Language::English);
    assert_eq!(
        config.translations_path().unwrap().to_str().unwrap(),
        "/tmp/extra.json"
    );
}

#[test]
fn test_config_defaults_for_missing_keys() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "[speech]").unwrap();
    writeln!(file, "rate = 1.0").unwrap();

    let config = Config::from_file(file.path()).expect("Failed to parse config");
    assert_eq!(config.pitch(), DEFAULT_PITCH);
    assert_eq!(config.rate(), 1.0);
    assert_eq!(config.default_language(), Language::Spanish);
    assert!(config.translations_path().is_none());
}

#[test]
fn test_config_rejects_bad_values() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "[speech]").unwrap();
    writeln!(file, "pitch = fast").unwrap();
    assert!(Config::from_file(file.path()).is_err());

    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "[speech]").unwrap();
    writeln!(file, "language = fr").unwrap();
    assert!(Config::from_file(file.path()).is_err());
}

#[test]
fn test_default_constants() {
    // The tuned voice the app ships with
    assert_eq!(DEFAULT_PITCH, 0.9);
    assert_eq!(DEFAULT_RATE, 0.9);
}
