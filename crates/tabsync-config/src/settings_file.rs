//! Persisted settings
//!
//! The file location comes from [`crate::paths::settings_path`]. Missing or
//! unreadable files load as defaults.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const SETTINGS_VERSION: u32 = 1;

/// Settings metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsMeta {
    pub last_modified: DateTime<Utc>,
    pub version: u32,
}

/// Settings data - the actual persisted values
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SettingsData {
    /// Whether the browsing mode last in use was private
    #[serde(default)]
    pub last_known_mode_private: bool,
    /// Whether screenshots stay allowed while in private mode
    #[serde(default)]
    pub allow_screenshots_in_private_mode: bool,
}

/// Complete settings file with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsFile {
    pub meta: SettingsMeta,
    #[serde(default)]
    pub settings: SettingsData,
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            meta: SettingsMeta {
                last_modified: Utc::now(),
                version: SETTINGS_VERSION,
            },
            settings: SettingsData::default(),
        }
    }
}

impl SettingsFile {
    /// Load settings from a specific path, falling back to defaults
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings file at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load_from_path(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                log::warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {:?}", path))
    }

    /// Save settings to a specific path
    pub fn save_to_path(&mut self, path: &Path) -> Result<()> {
        self.meta.last_modified = Utc::now();
        let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write settings file: {:?}", path))?;

        log::debug!("Saved settings to {:?}", path);
        Ok(())
    }
}
