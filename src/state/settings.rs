/// User settings
///
/// Settings are read once at startup from a JSON file in the user's
/// config directory. The file is optional and never written back:
/// - Linux: ~/.config/all-about-cats/settings.json
/// - macOS: ~/Library/Application Support/all-about-cats/settings.json
/// - Windows: %APPDATA%\all-about-cats\settings.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::motion::SpringParams;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

/// All user-tunable settings. Missing fields take their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeChoice,
    /// Wrap around at the ends of the carousel instead of stopping
    pub carousel_loop: bool,
    /// How long the fact toast stays up
    pub toast_duration_ms: u64,
    /// Show the paw that follows the cursor
    pub cursor_follow: bool,
    pub spring: SpringParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Light,
            carousel_loop: false,
            toast_duration_ms: 3000,
            cursor_follow: true,
            spring: SpringParams::default(),
        }
    }
}

impl Settings {
    /// Parse from a JSON string. Unusable spring values are replaced by the defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.spring = settings.spring.sanitized();
        Ok(settings)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Ok(Self::from_json(&json)?)
    }

    /// Load from the default location, falling back to defaults on any error
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            tracing::debug!("No config directory; using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "Settings loaded");
                settings
            }
            Err(e) => {
                tracing::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Get the path where the settings file is expected
    fn settings_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("all-about-cats");
        path.push("settings.json");
        Some(path)
    }
}
