//! Configuration management
//!
//! Loaded from a TOML file (default location from the platform config
//! directory), then overridden by environment variables.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use gesture_oui::{GestureDetector, IpEntry, DEFAULT_PROMPT, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding `detector.threshold`
pub const THRESHOLD_ENV: &str = "GESTURE_IP_THRESHOLD";

/// Upper bound for `entry.trail_lines`
pub const MAX_TRAIL_LINES: usize = 4096;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Invalid configuration values
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("detector.threshold must be a positive finite number, got {0}")]
    InvalidThreshold(f32),

    #[error("feedback.cue_volume must be between 0.0 and 1.0, got {0}")]
    InvalidVolume(f32),

    #[error("entry.trail_lines must be at most {max}, got {0}", max = MAX_TRAIL_LINES)]
    InvalidTrailLines(usize),

    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),

    #[error("Invalid value for {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Swipe detection settings
    pub detector: DetectorConfig,
    /// Address entry settings
    pub entry: EntryConfig,
    /// Feedback output settings
    pub feedback: FeedbackConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Hand displacement needed to register a direction
    pub threshold: f32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryConfig {
    /// Text shown above the address
    pub prompt: String,
    /// Clear the address after it is completed
    pub reset_on_complete: bool,
    /// Number of gesture debug lines kept (0 disables the trail)
    pub trail_lines: usize,
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            reset_on_complete: true,
            trail_lines: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Playback volume for cues (0.0 - 1.0)
    pub cue_volume: f32,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self { cue_volume: 0.8 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when RUST_LOG is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Platform default config file, e.g. `~/.config/gesture-ip/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gesture-ip").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, or the default path if it exists, or
    /// fall back to defaults. Environment overrides are applied last.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None => match Self::default_path().filter(|path| path.exists()) {
                Some(path) => Self::load(&path)?,
                None => Self::default(),
            },
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(value) = std::env::var(THRESHOLD_ENV) {
            self.detector.threshold =
                value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                    var: THRESHOLD_ENV,
                    value: value.clone(),
                })?;
        }
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.detector.threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(threshold));
        }

        let volume = self.feedback.cue_volume;
        if !(0.0..=1.0).contains(&volume) {
            return Err(ConfigError::InvalidVolume(volume));
        }

        if self.entry.trail_lines > MAX_TRAIL_LINES {
            return Err(ConfigError::InvalidTrailLines(self.entry.trail_lines));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.logging.level.clone()));
        }

        Ok(())
    }

    pub fn build_detector(&self) -> Result<GestureDetector> {
        GestureDetector::with_threshold(self.detector.threshold)
            .context("Failed to create gesture detector")
    }

    pub fn build_entry(&self) -> IpEntry {
        IpEntry::new()
            .with_prompt(self.entry.prompt.clone())
            .with_reset_on_complete(self.entry.reset_on_complete)
    }
}
