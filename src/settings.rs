//! User settings storage.
//!
//! A small TOML file holds the alias and the preferred match
//! configuration. Missing files and missing fields fall back to
//! defaults; a file that exists but cannot be read or parsed is an
//! error.

use std::path::{Path, PathBuf};

use derive_more::{Display, Error, From};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// User-facing settings with their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(prefix = "with_")]
pub struct Settings {
    /// Display name used on saved match records.
    #[serde(default = "default_alias")]
    pub alias: String,

    /// Preferred player count; only 2 is functionally supported.
    #[serde(default = "default_player_count")]
    pub player_count: i32,

    /// Whether new matches run against the clock.
    #[serde(default)]
    pub timed: bool,

    /// Countdown length for timed matches.
    #[serde(default = "default_seconds")]
    pub seconds: i64,

    /// Whether the user has been through configuration at least once.
    #[serde(default)]
    pub configured: bool,
}

fn default_alias() -> String {
    "Player".to_string()
}

fn default_player_count() -> i32 {
    2
}

fn default_seconds() -> i64 {
    60
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            alias: default_alias(),
            player_count: default_player_count(),
            timed: false,
            seconds: default_seconds(),
            configured: false,
        }
    }
}

/// Settings persistence error.
#[derive(Debug, Display, Error, From)]
pub enum SettingsError {
    /// The settings file exists but could not be read or written.
    #[display("Settings io error: {}", _0)]
    Io(std::io::Error),
    /// The settings file is not valid TOML.
    #[display("Settings parse error: {}", _0)]
    Parse(toml::de::Error),
    /// The settings could not be serialized.
    #[display("Settings encode error: {}", _0)]
    Encode(toml::ser::Error),
}

/// Loads and saves [`Settings`] at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Creates a store over the given file path.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads settings, defaulting when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the file exists but cannot be read
    /// or parsed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            debug!("No settings file; using defaults");
            return Ok(Settings::default());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        let settings = toml::from_str(&raw)?;
        debug!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Writes settings to the file, replacing previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the file cannot be written.
    #[instrument(skip(self, settings), fields(path = %self.path.display()))]
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let raw = toml::to_string_pretty(settings)?;
        std::fs::write(&self.path, raw)?;
        info!("Settings saved");
        Ok(())
    }
}
