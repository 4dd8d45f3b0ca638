//! Speech engine abstraction
//!
//! The program talks to the underlying TTS through the [`SpeechEngine`]
//! trait; engines are passed around as explicit handles, never through
//! process-wide state.

pub mod backends;
mod engine;

pub use engine::{SpeechEngine, SpeechRequest};

use crate::{Result, SayError};
use log::info;

/// Create a speech engine, trying backends in order of preference.
///
/// The native backend (speech-dispatcher on Linux, AVFoundation on macOS,
/// WinRT on Windows) is preferred for playback but cannot render to a file;
/// when a WAV output was requested, espeak-ng is required.
pub fn create_engine(needs_file_output: bool) -> Result<Box<dyn SpeechEngine>> {
    use backends::espeak::EspeakEngine;
    use backends::native::NativeEngine;

    if needs_file_output {
        info!("File output requested, trying espeak-ng backend...");
        return match EspeakEngine::new() {
            Ok(engine) => {
                info!("Initialized espeak-ng backend");
                Ok(Box::new(engine))
            }
            Err(e) => Err(SayError::Other(format!(
                "No speech backend with file output available.\n\
                 espeak-ng is required for WAV output (install: sudo apt install espeak-ng)\n\
                 Error: {}",
                e
            ))),
        };
    }

    info!("Trying native TTS backend...");
    match NativeEngine::new() {
        Ok(engine) => {
            info!("Initialized native TTS backend");
            return Ok(Box::new(engine));
        }
        Err(e) => {
            info!("Native TTS backend unavailable: {}", e);
        }
    }

    info!("Trying espeak-ng backend...");
    match EspeakEngine::new() {
        Ok(engine) => {
            info!("Initialized espeak-ng backend");
            Ok(Box::new(engine))
        }
        Err(e) => Err(SayError::Other(format!(
            "No speech backend available. Tried:\n\
             1. Native TTS (speech-dispatcher on Linux, AVFoundation on macOS)\n\
             2. espeak-ng (install: sudo apt install espeak-ng)\n\
             Error: {}",
            e
        ))),
    }
}
