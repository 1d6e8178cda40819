//! Fakes and helpers shared by the app crate's tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tabsync_config::SettingsData;
use tokio::sync::Semaphore;

use crate::browsing_mode::BrowsingMode;
use crate::host::{ThemeManager, WindowHost};
use crate::settings::{InMemorySettings, Settings};

/// Records every theme applied
#[derive(Default)]
pub struct RecordingTheme {
    themes: Mutex<Vec<BrowsingMode>>,
}

impl RecordingTheme {
    pub fn applied(&self) -> Vec<BrowsingMode> {
        self.themes.lock().unwrap().clone()
    }
}

impl ThemeManager for RecordingTheme {
    fn set_current_theme(&self, mode: BrowsingMode) {
        self.themes.lock().unwrap().push(mode);
    }
}

/// Tracks the secure flag and how often it was touched
#[derive(Default)]
pub struct RecordingWindow {
    secure: AtomicBool,
    pub applied: AtomicUsize,
    pub cleared: AtomicUsize,
}

impl RecordingWindow {
    pub fn is_secure(&self) -> bool {
        self.secure.load(Ordering::SeqCst)
    }
}

impl WindowHost for RecordingWindow {
    fn apply_secure_flag(&self) {
        self.secure.store(true, Ordering::SeqCst);
        self.applied.fetch_add(1, Ordering::SeqCst);
    }

    fn clear_secure_flag(&self) {
        self.secure.store(false, Ordering::SeqCst);
        self.cleared.fetch_add(1, Ordering::SeqCst);
    }
}

/// In-memory settings whose screenshot read blocks until [`GatedSettings::open`];
/// counts every call
pub struct GatedSettings {
    inner: InMemorySettings,
    gate: Semaphore,
    /// Screenshot reads started, including ones still waiting on the gate
    pub reads: AtomicUsize,
    pub mode_reads: AtomicUsize,
    pub writes: AtomicUsize,
}

impl GatedSettings {
    pub fn new(data: SettingsData) -> Self {
        Self {
            inner: InMemorySettings::new(data),
            gate: Semaphore::new(0),
            reads: AtomicUsize::new(0),
            mode_reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
        }
    }

    /// Let pending and future reads through
    pub fn open(&self) {
        self.gate.add_permits(1);
    }

    pub fn snapshot(&self) -> SettingsData {
        self.inner.snapshot()
    }
}

#[async_trait]
impl Settings for GatedSettings {
    async fn last_known_mode(&self) -> Result<BrowsingMode> {
        let mode = self.inner.last_known_mode().await;
        self.mode_reads.fetch_add(1, Ordering::SeqCst);
        mode
    }

    async fn set_last_known_mode(&self, mode: BrowsingMode) -> Result<()> {
        self.inner.set_last_known_mode(mode).await?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn allow_screenshots_in_private_mode(&self) -> Result<bool> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let _permit = self.gate.acquire().await?;
        self.inner.allow_screenshots_in_private_mode().await
    }
}

/// Settings whose every call fails
pub struct FailingSettings;

#[async_trait]
impl Settings for FailingSettings {
    async fn last_known_mode(&self) -> Result<BrowsingMode> {
        Err(anyhow!("settings unavailable"))
    }

    async fn set_last_known_mode(&self, _mode: BrowsingMode) -> Result<()> {
        Err(anyhow!("settings unavailable"))
    }

    async fn allow_screenshots_in_private_mode(&self) -> Result<bool> {
        Err(anyhow!("settings unavailable"))
    }
}

pub async fn wait_until(condition: impl Fn() -> bool) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}

/// Give background tasks time to run
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}
