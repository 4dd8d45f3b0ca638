//! Voice preferences and command-line text handling
//!
//! A `VoicePreferences` is collected once per run (from config, flags, or
//! interactive prompts) and then used only as a filter for voice selection.

use crate::{Result, SayError};
use log::warn;
use std::fmt;

/// Voice gender preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl Gender {
    /// Case-insensitive parse; anything but "male"/"female" means no preference.
    pub fn parse(input: &str) -> Gender {
        let input = input.trim();
        if input.eq_ignore_ascii_case("male") {
            Gender::Male
        } else if input.eq_ignore_ascii_case("female") {
            Gender::Female
        } else {
            Gender::Unspecified
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Unspecified => write!(f, "any"),
        }
    }
}

/// Voice selection preferences, immutable once collected
///
/// Language is stored lowercase ("vi"), country uppercase ("VN"), matching
/// the subtags of a culture tag like "vi-VN". Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoicePreferences {
    pub language: Option<String>,
    pub country: Option<String>,
    pub gender: Gender,
}

impl VoicePreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.trim().to_lowercase());
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.trim().to_uppercase());
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// True when no field constrains the selection.
    pub fn is_empty(&self) -> bool {
        self.language.is_none() && self.country.is_none() && self.gender == Gender::Unspecified
    }
}

impl fmt::Display for VoicePreferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "language={}, country={}, gender={}",
            self.language.as_deref().unwrap_or("any"),
            self.country.as_deref().unwrap_or("any"),
            self.gender
        )
    }
}

/// Join command-line words into the text to speak.
///
/// Tokens are concatenated with single spaces, preserving order; an empty
/// list yields an empty string.
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}

/// Parse a speech rate in [-100, 100].
///
/// Non-numeric input is an error the caller recovers from (default 0);
/// out-of-range values are clamped with a warning.
pub fn parse_rate(input: &str) -> Result<i32> {
    let trimmed = input.trim();
    let rate: i32 = trimmed
        .parse()
        .map_err(|e| SayError::InvalidRate(format!("{:?}: {}", trimmed, e)))?;

    if !(-100..=100).contains(&rate) {
        warn!("Rate {} out of range, clamping to [-100, 100]", rate);
    }
    Ok(rate.clamp(-100, 100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::parse("male"), Gender::Male);
        assert_eq!(Gender::parse("MALE"), Gender::Male);
        assert_eq!(Gender::parse("Female"), Gender::Female);
        assert_eq!(Gender::parse(""), Gender::Unspecified);
        assert_eq!(Gender::parse("robot"), Gender::Unspecified);
    }

    #[test]
    fn test_preferences_display() {
        let prefs = VoicePreferences::new();
        assert_eq!(prefs.to_string(), "language=any, country=any, gender=any");

        let prefs = VoicePreferences::new()
            .with_language("VI")
            .with_country("vn")
            .with_gender(Gender::Female);
        assert_eq!(prefs.to_string(), "language=vi, country=VN, gender=female");
    }

    #[test]
    fn test_preferences_is_empty() {
        assert!(VoicePreferences::new().is_empty());
        assert!(!VoicePreferences::new().with_language("en").is_empty());
        assert!(!VoicePreferences::new().with_gender(Gender::Male).is_empty());
    }
}
