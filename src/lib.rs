//! saytext - a console front-end for native text-to-speech
//!
//! Collects a block of text and optional voice preferences, picks a matching
//! voice from the platform speech engine, and plays the result or writes it
//! to a WAV file.

pub mod config;
pub mod error;
pub mod input;
pub mod prefs;
pub mod report;
pub mod speech;
pub mod voice;

pub use error::{Result, SayError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "saytext";
