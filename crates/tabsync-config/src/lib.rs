//! Configuration and file management for tabsync
//!
//! This crate provides:
//! - Config directory and settings file path resolution
//! - The persisted settings file (TOML) with load/save

pub mod paths;
pub mod settings_file;

pub use settings_file::{SettingsData, SettingsFile};
