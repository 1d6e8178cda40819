//! Settings file paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations of the global file:
//! - Linux: `~/.config/tabsync/settings.toml`
//! - macOS: `~/Library/Application Support/tabsync/settings.toml`
//! - Windows: `%APPDATA%\tabsync\settings.toml`

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "tabsync";
const GLOBAL_SETTINGS_FILE: &str = "settings.toml";
const LOCAL_SETTINGS_FILE: &str = ".tabsync.settings.toml";

/// Settings path to use: local (in CWD) if it exists, otherwise global
pub fn settings_path() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Could not determine current directory")?;
    resolve_settings_path(&cwd, dirs::config_dir())
}

/// `cwd/.tabsync.settings.toml` if it exists, else `config_base/tabsync/settings.toml`
///
/// Nothing is created; `SettingsFile::save_to_path` creates missing directories.
pub fn resolve_settings_path(cwd: &Path, config_base: Option<PathBuf>) -> Result<PathBuf> {
    let local = cwd.join(LOCAL_SETTINGS_FILE);
    if local.exists() {
        return Ok(local);
    }
    let base = config_base.context("Could not determine config directory")?;
    Ok(base.join(APP_NAME).join(GLOBAL_SETTINGS_FILE))
}
