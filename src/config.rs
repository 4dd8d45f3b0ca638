//! Configuration management
//!
//! Optional per-user defaults in `~/.saytext.cfg`. Everything here can be
//! overridden for a single run by command-line flags or interactive answers.

use crate::prefs::{Gender, VoicePreferences};
use crate::{Result, SayError};
use ini::Ini;
use log::{debug, info};
use std::path::PathBuf;

/// Persistent defaults for saytext
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Config file path (~/.saytext.cfg)
    path: PathBuf,
}

impl Config {
    /// Load configuration from disk or create default
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load from an explicit path, creating the file with defaults if absent
    pub fn load_from(path: PathBuf) -> Result<Self> {
        debug!("Loading config from {:?}", path);

        let ini = if path.exists() {
            Ini::load_from_file(&path)
                .map_err(|e| SayError::Config(format!("Failed to load config: {}", e)))?
        } else {
            info!("Config file not found, creating default");
            let default = Self::default_config();
            default
                .write_to_file(&path)
                .map_err(|e| SayError::Config(format!("Failed to write config: {}", e)))?;
            default
        };

        Ok(Self { ini, path })
    }

    /// Get config file path (~/.saytext.cfg)
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".saytext.cfg")
    }

    /// Expose the config file path for display
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Create default configuration
    fn default_config() -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some("speech"))
            .set("rate", "0")
            .set("language", "")
            .set("country", "")
            .set("gender", "");

        ini.with_section(Some("output")).set("wav_path", "");

        ini
    }

    /// Get a string value from config; blank entries mean "unset"
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.ini
            .get_from(Some(section), key)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// Get an integer value from config
    fn get_int(&self, section: &str, key: &str, default: i32) -> i32 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    // saytext-specific configuration getters

    /// Default speech rate (-100..100)
    pub fn rate(&self) -> i32 {
        self.get_int("speech", "rate", 0).clamp(-100, 100)
    }

    /// Default voice preferences, normalized like interactive input
    pub fn preferences(&self) -> VoicePreferences {
        let mut prefs = VoicePreferences::new();

        if let Some(language) = self.get_string("speech", "language") {
            prefs.language = Some(language.to_lowercase());
        }
        if let Some(country) = self.get_string("speech", "country") {
            prefs.country = Some(country.to_uppercase());
        }
        if let Some(gender) = self.get_string("speech", "gender") {
            prefs.gender = Gender::parse(&gender);
        }

        prefs
    }

    /// Default WAV output path, when every run should write a file
    pub fn wav_path(&self) -> Option<PathBuf> {
        self.get_string("output", "wav_path").map(PathBuf::from)
    }
}
