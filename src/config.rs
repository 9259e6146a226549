//! Settings types, loading, and persistence
//!
//! Settings are a flat mapping loaded once at startup, merged over hard-coded
//! defaults, and saved in full on every change. Operations take the settings as
//! an explicit value; nothing reads them from ambient state.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::insert::InsertLocation;
use crate::template::DEFAULT_TEMPLATE;

/// Persisted user settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Fall back to a date-named note when no note is targeted
    #[serde(rename = "use-daily-note")]
    pub use_daily_note: bool,

    /// Pattern producing the daily note path (moment-style date tokens)
    #[serde(rename = "daily-note-path-pattern")]
    pub daily_note_path_pattern: String,

    /// Where the rendered block goes in the target note
    #[serde(rename = "insert-location")]
    pub insert_location: InsertLocation,

    /// Heading line to search for when insert-location is heading
    #[serde(rename = "heading-name")]
    pub heading_name: String,

    /// When a live editor cursor is available, insert there and skip the
    /// insert-location logic entirely
    #[serde(rename = "insert-at-cursor")]
    pub insert_at_cursor: bool,

    /// Template rendered against each draw result
    #[serde(rename = "output-template")]
    pub output_template: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_daily_note: false,
            daily_note_path_pattern: "YYYY-MM-DD.md".to_string(),
            insert_location: InsertLocation::Append,
            heading_name: "## Tarot".to_string(),
            insert_at_cursor: false,
            output_template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl Settings {
    /// Load settings with fallback chain
    ///
    /// Explicit path, then project-local `.tarot.yml`, then
    /// `~/.config/tarot-practice/settings.yml`, then defaults. Partial files
    /// merge over defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load settings from {}", path.display()));
        }

        let local_config = PathBuf::from(".tarot.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(settings) => return Ok(settings),
                Err(e) => {
                    tracing::warn!("Failed to load settings from {}: {}", local_config.display(), e);
                }
            }
        }

        let user_config = Self::user_config_path();
        if user_config.exists() {
            match Self::load_from_file(&user_config) {
                Ok(settings) => return Ok(settings),
                Err(e) => {
                    tracing::warn!("Failed to load settings from {}: {}", user_config.display(), e);
                }
            }
        }

        tracing::info!("No settings file found, using defaults");
        Ok(Self::default())
    }

    /// Path of the user-level settings file
    pub fn user_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tarot-practice")
            .join("settings.yml")
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read settings file")?;
        let settings: Self = serde_yaml::from_str(&content).context("Failed to parse settings file")?;
        tracing::info!("Loaded settings from: {}", path.as_ref().display());
        Ok(settings)
    }

    /// Write the full mapping to `path`, creating parent directories
    ///
    /// Always a whole-file write; there are no partial or delta updates.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create settings directory")?;
        }
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;
        fs::write(path, content).context(format!("Failed to write settings to {}", path.display()))?;
        tracing::info!("Saved settings to: {}", path.display());
        Ok(())
    }

    /// Set one key from its CLI string form; used by `config set`
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "use-daily-note" => self.use_daily_note = parse_bool(key, value)?,
            "daily-note-path-pattern" => self.daily_note_path_pattern = value.to_string(),
            "insert-location" => self.insert_location = value.parse().map_err(|e: String| eyre::eyre!(e))?,
            "heading-name" => self.heading_name = value.to_string(),
            "insert-at-cursor" => self.insert_at_cursor = parse_bool(key, value)?,
            "output-template" => self.output_template = value.to_string(),
            _ => {
                return Err(eyre::eyre!(
                    "Unknown settings key: {}. Keys: use-daily-note, daily-note-path-pattern, \
                     insert-location, heading-name, insert-at-cursor, output-template",
                    key
                ));
            }
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" => Ok(true),
        "false" | "no" | "off" => Ok(false),
        _ => Err(eyre::eyre!("Invalid boolean for {}: {}", key, value)),
    }
}
