//! Application configuration
//!
//! Persisted via confy in the platform config directory. `load` falls back
//! to defaults when the file is missing or unreadable; `save` propagates
//! the failure.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_NAME: &str = "heckler";
const CONFIG_NAME: &str = "config";

/// Errors during configuration persistence
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),
}

/// User-facing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory scanned for cue assets
    #[serde(default = "default_audio_directory")]
    pub audio_directory: String,

    /// Playback volume, 0-100
    #[serde(default = "default_volume")]
    pub volume: u8,

    /// Poll interval for playback-completion and cancellation checks
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_audio_directory() -> String {
    "audio_files".to_string()
}

fn default_volume() -> u8 {
    80
}

fn default_poll_interval_ms() -> u64 {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            audio_directory: default_audio_directory(),
            volume: default_volume(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl AppConfig {
    /// Load from the platform config directory, falling back to defaults
    pub fn load() -> Self {
        confy::load(APP_NAME, CONFIG_NAME).unwrap_or_default()
    }

    /// Persist to the platform config directory
    pub fn save(self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }
}
