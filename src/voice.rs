//! Voice metadata and preference-based selection

use crate::prefs::{Gender, VoicePreferences};
use std::fmt;

/// Read-only view of an engine-provided voice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    /// Engine-specific identifier used to select the voice
    pub id: String,
    /// Human-readable voice name
    pub name: String,
    /// Culture tag as reported by the engine, e.g. "vi-VN" or "en"
    pub language: String,
    pub gender: Gender,
}

impl VoiceInfo {
    fn primary_subtag(&self) -> &str {
        self.language.split(['-', '_']).next().unwrap_or("")
    }

    fn region_subtag(&self) -> Option<&str> {
        self.language.split(['-', '_']).nth(1)
    }
}

impl fmt::Display for VoiceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.language, self.gender)
    }
}

/// Case-insensitive substring match on the culture tag.
pub fn matches_culture(voice: &VoiceInfo, needle: &str) -> bool {
    voice
        .language
        .to_lowercase()
        .contains(&needle.to_lowercase())
}

/// Pick the voice best matching the preferences, or `None` when nothing
/// matches.
///
/// Selection policy: language and country, when specified, are hard filters
/// against the culture tag's primary and region subtags. Gender only ranks
/// candidates and never empties the result. Among candidates the highest
/// score wins; ties keep the earliest voice in engine enumeration order.
pub fn select_voice<'a>(
    voices: &'a [VoiceInfo],
    prefs: &VoicePreferences,
) -> Option<&'a VoiceInfo> {
    let mut best: Option<(u32, &VoiceInfo)> = None;

    for voice in voices {
        if let Some(score) = score_voice(voice, prefs) {
            if best.map_or(true, |(s, _)| score > s) {
                best = Some((score, voice));
            }
        }
    }

    best.map(|(_, voice)| voice)
}

fn score_voice(voice: &VoiceInfo, prefs: &VoicePreferences) -> Option<u32> {
    let mut score = 0;

    if let Some(language) = &prefs.language {
        if !voice.primary_subtag().eq_ignore_ascii_case(language) {
            return None;
        }
        score += 2;
    }

    if let Some(country) = &prefs.country {
        match voice.region_subtag() {
            Some(region) if region.eq_ignore_ascii_case(country) => score += 2,
            _ => return None,
        }
    }

    if prefs.gender != Gender::Unspecified && voice.gender == prefs.gender {
        score += 1;
    }

    Some(score)
}
