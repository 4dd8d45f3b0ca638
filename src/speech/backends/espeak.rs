//! espeak-ng subprocess backend
//!
//! Runs the espeak-ng binary for synthesis. Unlike the native backend this
//! one can render a WAV file (`-w`), so it is required whenever an output
//! path was requested.
//!
//! Dependencies:
//! - espeak-ng (install with: sudo apt install espeak-ng)

use crate::prefs::Gender;
use crate::speech::SpeechEngine;
use crate::voice::VoiceInfo;
use crate::{Result, SayError};
use anyhow::anyhow;
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

const ENGINE_NAME: &str = "espeak-ng";

/// espeak-ng subprocess backend
pub struct EspeakEngine {
    /// Path to the espeak-ng binary
    espeak_path: String,

    /// Language tag passed as `-v`, when a voice was selected
    voice: Option<String>,

    /// Cached rate setting (-100..100)
    rate: i32,
}

impl EspeakEngine {
    /// Create a new espeak-ng engine, verifying the binary is available
    pub fn new() -> Result<Self> {
        debug!("Creating espeak-ng backend");

        let espeak_path = Self::find_espeak()?;
        debug!("Found espeak-ng at: {}", espeak_path);

        Ok(Self {
            espeak_path,
            voice: None,
            rate: 0,
        })
    }

    /// Find the espeak-ng executable
    fn find_espeak() -> Result<String> {
        let paths = [
            "espeak-ng",
            "/usr/bin/espeak-ng",
            "/opt/homebrew/bin/espeak-ng",
        ];

        for path in paths {
            if let Ok(status) = Command::new(path)
                .arg("--version")
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
            {
                if status.success() {
                    return Ok(path.to_string());
                }
            }
        }

        Err(SayError::engine(
            ENGINE_NAME,
            anyhow!("espeak-ng not found. Install with: sudo apt install espeak-ng"),
        ))
    }

    /// Map the -100..100 user rate to espeak words per minute.
    ///
    /// 0 is espeak's default of 175 wpm; the extremes are 80 and 450.
    fn rate_to_wpm(rate: i32) -> u16 {
        let rate = rate.clamp(-100, 100);
        if rate >= 0 {
            (175 + rate * 275 / 100) as u16
        } else {
            (175 + rate * 95 / 100) as u16
        }
    }

    /// Parse one line of `espeak-ng --voices` output.
    ///
    /// Columns: Pty Language Age/Gender VoiceName File Other Languages.
    /// The header line fails the priority parse and is skipped.
    fn parse_voice_line(line: &str) -> Option<VoiceInfo> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 || fields[0].parse::<u8>().is_err() {
            return None;
        }

        let gender = if fields[2].contains('M') {
            Gender::Male
        } else if fields[2].contains('F') {
            Gender::Female
        } else {
            Gender::Unspecified
        };

        Some(VoiceInfo {
            id: fields[3].to_string(),
            name: fields[3].to_string(),
            language: fields[1].to_string(),
            gender,
        })
    }

    fn base_command(&self) -> Command {
        let mut cmd = Command::new(&self.espeak_path);
        if let Some(voice) = &self.voice {
            cmd.arg("-v").arg(voice);
        }
        cmd.arg("-s").arg(Self::rate_to_wpm(self.rate).to_string());
        cmd
    }

    /// Run espeak-ng to completion; synthesis is blocking by design.
    fn run_command(&self, mut cmd: Command) -> Result<()> {
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());

        let status = cmd
            .status()
            .map_err(|e| SayError::engine(ENGINE_NAME, anyhow!("failed to run espeak-ng: {}", e)))?;

        if !status.success() {
            return Err(SayError::engine(
                ENGINE_NAME,
                anyhow!("espeak-ng exited with {}", status),
            ));
        }
        Ok(())
    }
}

impl SpeechEngine for EspeakEngine {
    fn name(&self) -> &str {
        ENGINE_NAME
    }

    fn voices(&self) -> Result<Vec<VoiceInfo>> {
        let output = Command::new(&self.espeak_path)
            .arg("--voices")
            .output()
            .map_err(|e| {
                SayError::engine(ENGINE_NAME, anyhow!("failed to list voices: {}", e))
            })?;

        if !output.status.success() {
            return Err(SayError::engine(
                ENGINE_NAME,
                anyhow!("espeak-ng --voices exited with {}", output.status),
            ));
        }

        let listing = String::from_utf8_lossy(&output.stdout);
        Ok(listing.lines().filter_map(Self::parse_voice_line).collect())
    }

    fn set_voice(&mut self, voice: &VoiceInfo) -> Result<()> {
        debug!("Selecting voice {} ({})", voice.name, voice.language);
        // espeak-ng selects voices by language tag
        self.voice = Some(voice.language.clone());
        Ok(())
    }

    fn set_rate(&mut self, rate: i32) -> Result<()> {
        debug!("Setting rate to {} ({} wpm)", rate, Self::rate_to_wpm(rate));
        self.rate = rate.clamp(-100, 100);
        Ok(())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        debug!("Speaking: {}", text);
        let mut cmd = self.base_command();
        cmd.arg(text);
        self.run_command(cmd)
    }

    fn say_to_file(&mut self, text: &str, path: &Path) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        debug!("Rendering to {:?}", path);
        let mut cmd = self.base_command();
        cmd.arg("-w").arg(path);
        cmd.arg(text);
        self.run_command(cmd)
    }
}
