//! Configuration loading tests
//!
//! Tests that defaults are created on first load and that explicit values
//! round-trip through the typed getters.

use saytext::config::Config;
use saytext::prefs::Gender;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_config_created_with_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".saytext.cfg");

    let config = Config::load_from(path.clone()).unwrap();

    assert!(path.exists());
    assert_eq!(config.path(), &path);
    assert_eq!(config.rate(), 0);
    assert!(config.preferences().is_empty());
    assert!(config.wav_path().is_none());
}

#[test]
fn test_config_values_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".saytext.cfg");
    fs::write(
        &path,
        "[speech]\n\
         rate=40\n\
         language=VI\n\
         country=vn\n\
         gender=Female\n\
         \n\
         [output]\n\
         wav_path=/tmp/out.wav\n",
    )
    .unwrap();

    let config = Config::load_from(path).unwrap();

    assert_eq!(config.rate(), 40);

    // Values are normalized the same way interactive input is
    let prefs = config.preferences();
    assert_eq!(prefs.language.as_deref(), Some("vi"));
    assert_eq!(prefs.country.as_deref(), Some("VN"));
    assert_eq!(prefs.gender, Gender::Female);

    assert_eq!(config.wav_path(), Some(PathBuf::from("/tmp/out.wav")));
}

#[test]
fn test_config_out_of_range_rate_clamped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".saytext.cfg");
    fs::write(&path, "[speech]\nrate=500\n").unwrap();

    let config = Config::load_from(path).unwrap();
    assert_eq!(config.rate(), 100);
}

#[test]
fn test_config_blank_entries_are_unset() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".saytext.cfg");
    fs::write(
        &path,
        "[speech]\nlanguage=\ncountry=  \ngender=\n\n[output]\nwav_path=\n",
    )
    .unwrap();

    let config = Config::load_from(path).unwrap();
    assert!(config.preferences().is_empty());
    assert!(config.wav_path().is_none());
}
