//! Settings capability
//!
//! Persisted key-value settings the synchronization core reads and writes.
//! Calls are asynchronous; the file-backed implementation performs its I/O on
//! the blocking pool so it never holds up action dispatch.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tabsync_config::{paths, SettingsData, SettingsFile};

use crate::browsing_mode::BrowsingMode;

/// Persisted settings
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; they are shared between
/// middleware workers and bindings.
#[async_trait]
pub trait Settings: Send + Sync {
    /// Browsing mode in use when the app last ran
    async fn last_known_mode(&self) -> Result<BrowsingMode>;

    async fn set_last_known_mode(&self, mode: BrowsingMode) -> Result<()>;

    /// Whether screenshots stay allowed in private mode
    async fn allow_screenshots_in_private_mode(&self) -> Result<bool>;
}

/// Settings backed by the TOML settings file
pub struct PersistedSettings {
    path: Arc<PathBuf>,
    /// Serializes read-modify-write cycles on the file
    write_lock: Arc<Mutex<()>>,
}

impl PersistedSettings {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path: Arc::new(path),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Settings at the default location (local override, else global)
    pub fn from_default_location() -> Result<Self> {
        Ok(Self::new(paths::settings_path()?))
    }

    async fn read(&self) -> Result<SettingsData> {
        let path = Arc::clone(&self.path);
        tokio::task::spawn_blocking(move || {
            if !path.exists() {
                return Ok(SettingsData::default());
            }
            SettingsFile::load_from_path(&path).map(|file| file.settings)
        })
        .await
        .context("Settings read task failed")?
    }

    async fn update(&self, apply: impl FnOnce(&mut SettingsData) + Send + 'static) -> Result<()> {
        let path = Arc::clone(&self.path);
        let write_lock = Arc::clone(&self.write_lock);
        tokio::task::spawn_blocking(move || {
            let _guard = write_lock.lock().unwrap_or_else(PoisonError::into_inner);
            let mut file = SettingsFile::load_or_default(&path);
            apply(&mut file.settings);
            file.save_to_path(&path)
        })
        .await
        .context("Settings write task failed")?
    }
}

#[async_trait]
impl Settings for PersistedSettings {
    async fn last_known_mode(&self) -> Result<BrowsingMode> {
        let data = self.read().await?;
        Ok(BrowsingMode::from_private(data.last_known_mode_private))
    }

    async fn set_last_known_mode(&self, mode: BrowsingMode) -> Result<()> {
        self.update(move |data| data.last_known_mode_private = mode.is_private())
            .await
    }

    async fn allow_screenshots_in_private_mode(&self) -> Result<bool> {
        Ok(self.read().await?.allow_screenshots_in_private_mode)
    }
}

/// Settings kept in memory, for hosts without persistence
#[derive(Default)]
pub struct InMemorySettings {
    data: Mutex<SettingsData>,
}

impl InMemorySettings {
    pub fn new(data: SettingsData) -> Self {
        Self {
            data: Mutex::new(data),
        }
    }

    pub fn snapshot(&self) -> SettingsData {
        self.data
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Settings for InMemorySettings {
    async fn last_known_mode(&self) -> Result<BrowsingMode> {
        Ok(BrowsingMode::from_private(
            self.snapshot().last_known_mode_private,
        ))
    }

    async fn set_last_known_mode(&self, mode: BrowsingMode) -> Result<()> {
        self.data
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last_known_mode_private = mode.is_private();
        Ok(())
    }

    async fn allow_screenshots_in_private_mode(&self) -> Result<bool> {
        Ok(self.snapshot().allow_screenshots_in_private_mode)
    }
}
