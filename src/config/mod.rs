// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[source]` - Where the manifest and concept assets are served from
//! - `[speech]` - Text-to-speech engine and utterance parameters
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `CONCEPT_LENS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use concept_lens::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.source.base_url = Some("https://concepts.example.org".to_string());
//! config::save_to_path(&config, std::path::Path::new("settings.toml"))
//!     .expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Location of the static concept server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceConfig {
    /// Base URL every manifest and asset path is resolved against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Manifest path relative to `base_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_path: Option<String>,

    /// HTTP connect timeout in seconds.
    #[serde(
        default = "default_connect_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub connect_timeout_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            manifest_path: None,
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl SourceConfig {
    /// Base URL with any trailing slash removed.
    #[must_use]
    pub fn effective_base_url(&self) -> String {
        self.base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim()
            .trim_end_matches('/')
            .to_string()
    }

    /// Manifest path with any leading slash removed.
    #[must_use]
    pub fn effective_manifest_path(&self) -> String {
        self.manifest_path
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .unwrap_or(DEFAULT_MANIFEST_PATH)
            .trim()
            .trim_start_matches('/')
            .to_string()
    }

    /// Connect timeout clamped to the accepted range.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        let secs = self
            .connect_timeout_secs
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS)
            .clamp(MIN_CONNECT_TIMEOUT_SECS, MAX_CONNECT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

/// Text-to-speech settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeechConfig {
    /// Disable to always use the fallback tone.
    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default = "default_speech_rate", skip_serializing_if = "Option::is_none")]
    pub rate: Option<f32>,

    #[serde(
        default = "default_speech_pitch",
        skip_serializing_if = "Option::is_none"
    )]
    pub pitch: Option<f32>,

    #[serde(
        default = "default_speech_volume",
        skip_serializing_if = "Option::is_none"
    )]
    pub volume: Option<f32>,

    /// Language requested from the engine (e.g., "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Speech synthesizer executable. Autodetected when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: Some(true),
            rate: default_speech_rate(),
            pitch: default_speech_pitch(),
            volume: default_speech_volume(),
            language: None,
            command: None,
        }
    }
}

impl SpeechConfig {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    #[must_use]
    pub fn effective_rate(&self) -> f32 {
        self.rate
            .unwrap_or(DEFAULT_SPEECH_RATE)
            .clamp(MIN_SPEECH_RATE, MAX_SPEECH_RATE)
    }

    #[must_use]
    pub fn effective_pitch(&self) -> f32 {
        self.pitch.unwrap_or(DEFAULT_SPEECH_PITCH).clamp(0.0, 2.0)
    }

    #[must_use]
    pub fn effective_volume(&self) -> f32 {
        self.volume.unwrap_or(DEFAULT_SPEECH_VOLUME).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn effective_language(&self) -> String {
        self.language
            .clone()
            .filter(|lang| !lang.is_empty())
            .unwrap_or_else(|| DEFAULT_SPEECH_LANGUAGE.to_string())
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub speech: SpeechConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_true() -> Option<bool> {
    Some(true)
}

fn default_connect_timeout_secs() -> Option<u64> {
    Some(DEFAULT_CONNECT_TIMEOUT_SECS)
}

fn default_speech_rate() -> Option<f32> {
    Some(DEFAULT_SPEECH_RATE)
}

fn default_speech_pitch() -> Option<f32> {
    Some(DEFAULT_SPEECH_PITCH)
}

fn default_speech_volume() -> Option<f32> {
    Some(DEFAULT_SPEECH_VOLUME)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings file");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
