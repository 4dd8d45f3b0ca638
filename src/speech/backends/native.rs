//! Native TTS backend using the tts crate
//!
//! The `tts` crate provides a unified interface to:
//! - Speech Dispatcher on Linux (via native bindings)
//! - AVFoundation on macOS/iOS (via native bindings)
//! - WinRT speech synthesis on Windows
//!
//! This backend plays through the default audio device only; it cannot
//! render to a file.

use crate::prefs::Gender;
use crate::speech::SpeechEngine;
use crate::voice::VoiceInfo;
use crate::{Result, SayError};
use anyhow::anyhow;
use log::{debug, warn};
use std::path::Path;
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;
use tts::Tts;

const ENGINE_NAME: &str = "native-tts";

/// How long to wait for an utterance to finish before giving up
const UTTERANCE_TIMEOUT: Duration = Duration::from_secs(120);

/// Native TTS backend
pub struct NativeEngine {
    tts: Tts,

    /// Flipped by the utterance-end callback; say() blocks on it
    done: Arc<(Mutex<bool>, Condvar)>,

    /// Whether the platform delivers utterance callbacks
    callbacks: bool,
}

impl NativeEngine {
    /// Create a new native TTS engine
    pub fn new() -> Result<Self> {
        debug!("Creating native TTS backend");

        let tts = Tts::default()
            .map_err(|e| SayError::engine(ENGINE_NAME, anyhow!("failed to initialize: {}", e)))?;

        let callbacks = tts.supported_features().utterance_callbacks;
        let done = Arc::new((Mutex::new(false), Condvar::new()));

        if callbacks {
            let pair = Arc::clone(&done);
            tts.on_utterance_end(Some(Box::new(move |_| {
                let (flag, cond) = &*pair;
                *flag.lock().unwrap() = true;
                cond.notify_one();
            })))
            .map_err(|e| {
                SayError::engine(ENGINE_NAME, anyhow!("failed to register callback: {}", e))
            })?;
        }

        debug!("Native TTS backend created (callbacks: {})", callbacks);

        Ok(Self {
            tts,
            done,
            callbacks,
        })
    }

    /// Map the -100..100 user rate onto the engine's min/normal/max range.
    fn convert_rate(&self, rate: i32) -> f32 {
        let rate = rate.clamp(-100, 100) as f32;
        let normal = self.tts.normal_rate();
        if rate >= 0.0 {
            normal + (self.tts.max_rate() - normal) * rate / 100.0
        } else {
            normal + (normal - self.tts.min_rate()) * rate / 100.0
        }
    }

    /// Block until the current utterance finishes playing.
    fn wait_until_done(&mut self) -> Result<()> {
        if self.callbacks {
            let (flag, cond) = &*self.done;
            let mut finished = flag.lock().unwrap();
            while !*finished {
                let (guard, timeout) = cond.wait_timeout(finished, UTTERANCE_TIMEOUT).unwrap();
                finished = guard;
                if timeout.timed_out() {
                    warn!("Timed out waiting for utterance end");
                    break;
                }
            }
            return Ok(());
        }

        if self.tts.supported_features().is_speaking {
            loop {
                let speaking = self.tts.is_speaking().map_err(|e| {
                    SayError::engine(ENGINE_NAME, anyhow!("is_speaking failed: {}", e))
                })?;
                if !speaking {
                    break;
                }
                std::thread::sleep(Duration::from_millis(50));
            }
        } else {
            warn!("Cannot observe playback progress on this platform; returning immediately");
        }
        Ok(())
    }
}

impl SpeechEngine for NativeEngine {
    fn name(&self) -> &str {
        ENGINE_NAME
    }

    fn voices(&self) -> Result<Vec<VoiceInfo>> {
        let voices = self.tts.voices().map_err(|e| {
            SayError::engine(ENGINE_NAME, anyhow!("failed to enumerate voices: {}", e))
        })?;

        Ok(voices
            .iter()
            .map(|v| VoiceInfo {
                id: v.id(),
                name: v.name(),
                language: v.language().to_string(),
                gender: match v.gender() {
                    Some(tts::Gender::Male) => Gender::Male,
                    Some(tts::Gender::Female) => Gender::Female,
                    None => Gender::Unspecified,
                },
            })
            .collect())
    }

    fn set_voice(&mut self, voice: &VoiceInfo) -> Result<()> {
        debug!("Selecting voice {} ({})", voice.name, voice.language);

        let available = self.tts.voices().map_err(|e| {
            SayError::engine(ENGINE_NAME, anyhow!("failed to enumerate voices: {}", e))
        })?;

        let target = available
            .iter()
            .find(|v| v.id() == voice.id)
            .ok_or_else(|| {
                SayError::engine(ENGINE_NAME, anyhow!("unknown voice: {}", voice.name))
            })?;

        self.tts
            .set_voice(target)
            .map_err(|e| SayError::engine(ENGINE_NAME, anyhow!("failed to set voice: {}", e)))
    }

    fn set_rate(&mut self, rate: i32) -> Result<()> {
        if !self.tts.supported_features().rate {
            warn!("Rate control not supported on this platform");
            return Ok(());
        }

        let converted = self.convert_rate(rate);
        debug!("Setting rate to {} (engine value {})", rate, converted);
        self.tts
            .set_rate(converted)
            .map_err(|e| SayError::engine(ENGINE_NAME, anyhow!("failed to set rate: {}", e)))?;

        Ok(())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        debug!("Speaking: {}", text);
        if self.callbacks {
            *self.done.0.lock().unwrap() = false;
        }

        self.tts
            .speak(text, false)
            .map_err(|e| SayError::engine(ENGINE_NAME, anyhow!("speak failed: {}", e)))?;

        self.wait_until_done()
    }

    fn say_to_file(&mut self, _text: &str, path: &Path) -> Result<()> {
        debug!("File output to {:?} requested from native backend", path);
        Err(SayError::FileOutputUnsupported {
            engine: ENGINE_NAME.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_engine() {
        // May fail without speech-dispatcher or in headless CI
        match NativeEngine::new() {
            Ok(_) => println!("✓ Native TTS backend initialized successfully"),
            Err(e) => println!("⚠ TTS initialization failed (may be expected in CI): {}", e),
        }
    }

    #[test]
    fn test_rate_conversion_bounds() {
        fn close(a: f32, b: f32) -> bool {
            (a - b).abs() < 0.01
        }

        if let Ok(engine) = NativeEngine::new() {
            assert!(close(engine.convert_rate(0), engine.tts.normal_rate()));
            assert!(close(engine.convert_rate(100), engine.tts.max_rate()));
            assert!(close(engine.convert_rate(-100), engine.tts.min_rate()));
            // Out-of-range input clamps instead of overshooting
            assert!(close(engine.convert_rate(500), engine.tts.max_rate()));
        }
    }

    #[test]
    fn test_file_output_unsupported() {
        if let Ok(mut engine) = NativeEngine::new() {
            let result = engine.say_to_file("hello", Path::new("/tmp/out.wav"));
            assert!(matches!(
                result,
                Err(SayError::FileOutputUnsupported { .. })
            ));
        }
    }
}
