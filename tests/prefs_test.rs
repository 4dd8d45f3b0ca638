//! Preference collection and text parsing tests
//!
//! Covers word joining, rate parsing, and the interactive collector driven
//! by scripted input.

use saytext::input::{read_preferences, read_rate};
use saytext::prefs::{join_words, parse_rate, Gender};
use std::io::Cursor;

#[test]
fn test_join_words_round_trips() {
    let words: Vec<String> = ["hello", "there", "world"]
        .iter()
        .map(|w| w.to_string())
        .collect();

    let text = join_words(&words);
    assert_eq!(text, "hello there world");

    // Splitting on whitespace reproduces the original tokens
    let split: Vec<&str> = text.split_whitespace().collect();
    assert_eq!(split, words);
}

#[test]
fn test_join_words_empty() {
    assert_eq!(join_words(&[]), "");
}

#[test]
fn test_parse_rate_valid() {
    assert_eq!(parse_rate("50").unwrap(), 50);
    assert_eq!(parse_rate("-100").unwrap(), -100);
    assert_eq!(parse_rate("100").unwrap(), 100);
    assert_eq!(parse_rate(" 0 ").unwrap(), 0);
}

#[test]
fn test_parse_rate_invalid() {
    assert!(parse_rate("abc").is_err());
    assert!(parse_rate("").is_err());
    assert!(parse_rate("12.5").is_err());
}

#[test]
fn test_parse_rate_clamps_out_of_range() {
    assert_eq!(parse_rate("250").unwrap(), 100);
    assert_eq!(parse_rate("-250").unwrap(), -100);
}

#[test]
fn test_blank_preferences_left_unset() {
    let mut input = Cursor::new(b"\n\n\n".to_vec());
    let mut output = Vec::new();

    let prefs = read_preferences(&mut input, &mut output).unwrap();
    assert!(prefs.language.is_none());
    assert!(prefs.country.is_none());
    assert_eq!(prefs.gender, Gender::Unspecified);
    assert!(prefs.is_empty());
}

#[test]
fn test_preferences_normalized() {
    let mut input = Cursor::new(b"VI\nvn\nFEMALE\n".to_vec());
    let mut output = Vec::new();

    let prefs = read_preferences(&mut input, &mut output).unwrap();
    assert_eq!(prefs.language.as_deref(), Some("vi"));
    assert_eq!(prefs.country.as_deref(), Some("VN"));
    assert_eq!(prefs.gender, Gender::Female);

    // Prompts and the echo of the collected preferences went to the writer
    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("Language: "));
    assert!(transcript.contains("Country: "));
    assert!(transcript.contains("Gender: "));
    assert!(transcript.contains("language=vi, country=VN, gender=female"));
}

#[test]
fn test_unrecognized_gender_left_unset() {
    let mut input = Cursor::new(b"en\nUS\nrobot\n".to_vec());
    let mut output = Vec::new();

    let prefs = read_preferences(&mut input, &mut output).unwrap();
    assert_eq!(prefs.gender, Gender::Unspecified);
}

#[test]
fn test_read_rate() {
    let mut input = Cursor::new(b"50\n".to_vec());
    let mut output = Vec::new();
    assert_eq!(read_rate(&mut input, &mut output).unwrap(), 50);

    // Non-numeric input defaults to 0 instead of failing
    let mut input = Cursor::new(b"abc\n".to_vec());
    let mut output = Vec::new();
    assert_eq!(read_rate(&mut input, &mut output).unwrap(), 0);
}
