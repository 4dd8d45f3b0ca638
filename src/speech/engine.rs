//! The speech engine trait and per-invocation request

use crate::voice::VoiceInfo;
use crate::Result;
use std::path::{Path, PathBuf};

/// One synthesis request: the text plus an optional WAV destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    pub text: String,
    pub output: Option<PathBuf>,
}

impl SpeechRequest {
    /// Speak on the default audio device.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            output: None,
        }
    }

    /// Render to a WAV file instead of playing.
    pub fn to_file(text: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            text: text.into(),
            output: Some(path.into()),
        }
    }
}

/// Interface to a text-to-speech engine
///
/// All synthesis, voice enumeration, and audio handling happen behind this
/// trait; the rest of the program only reads the reported voice metadata.
pub trait SpeechEngine {
    /// Backend name for logs and error messages
    fn name(&self) -> &str;

    /// Enumerate the voices this engine can render with.
    fn voices(&self) -> Result<Vec<VoiceInfo>>;

    /// Select the active voice.
    fn set_voice(&mut self, voice: &VoiceInfo) -> Result<()>;

    /// Set the speech rate in [-100, 100], where 0 is the engine default.
    fn set_rate(&mut self, rate: i32) -> Result<()>;

    /// Speak on the default audio device, blocking until playback finishes.
    fn say(&mut self, text: &str) -> Result<()>;

    /// Render to a WAV file; not every engine supports this.
    fn say_to_file(&mut self, text: &str, path: &Path) -> Result<()>;

    /// Run one request end to end, dispatching on its destination.
    fn run(&mut self, request: &SpeechRequest) -> Result<()> {
        match &request.output {
            Some(path) => self.say_to_file(&request.text, path),
            None => self.say(&request.text),
        }
    }
}
