//! Speech engine backends

// Cross-platform native TTS via the tts crate
pub mod native;

// espeak-ng subprocess backend, also handles WAV output
pub mod espeak;
