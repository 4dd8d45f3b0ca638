//! Error types for saytext

use crate::prefs::VoicePreferences;
use std::io;
use thiserror::Error;

/// Main error type for saytext
#[derive(Error, Debug)]
pub enum SayError {
    #[error("Speech engine failure ({engine}): {error}")]
    Engine {
        engine: String,
        error: anyhow::Error,
    },

    #[error("No voice matches the requested preferences ({0})")]
    NoMatchingVoice(VoicePreferences),

    #[error("The {engine} backend cannot write audio to a file")]
    FileOutputUnsupported { engine: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid speech rate: {0}")]
    InvalidRate(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for saytext operations
pub type Result<T> = std::result::Result<T, SayError>;

impl SayError {
    /// Wrap a backend failure, tagging it with the engine it came from.
    pub fn engine<E>(engine: &str, error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        SayError::Engine {
            engine: engine.to_string(),
            error: error.into(),
        }
    }
}

impl From<String> for SayError {
    fn from(s: String) -> Self {
        SayError::Other(s)
    }
}

impl From<&str> for SayError {
    fn from(s: &str) -> Self {
        SayError::Other(s.to_string())
    }
}
