//! Private Browsing Mode Middleware
//!
//! Mirrors the browsing mode to persisted settings and seeds it back on startup.
//!
//! - `Init`: read `last_known_mode`, then dispatch `ModeChange(mode)`
//! - `ModeChange`: persist the new mode
//!
//! Both run after the action has been reduced, on a background worker that
//! handles settings jobs one at a time in the order they were issued. The
//! in-memory state never waits for persistence; if the process dies before a
//! write lands, the next `Init` restores the previously persisted mode.

use std::sync::Arc;

use tabsync_store::{Middleware, MiddlewareContext, Next};
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::actions::AppAction;
use crate::browsing_mode::BrowsingMode;
use crate::settings::Settings;
use crate::state::AppState;
use crate::AppStore;

enum SettingsJob {
    RestoreLastKnownMode(AppStore),
    PersistMode(BrowsingMode),
}

/// Middleware for browsing mode persistence
pub struct PrivateBrowsingModeMiddleware {
    jobs: mpsc::UnboundedSender<SettingsJob>,
}

impl PrivateBrowsingModeMiddleware {
    /// Create the middleware; its settings worker runs on `runtime`
    pub fn new(settings: Arc<dyn Settings>, runtime: &Handle) -> Self {
        let (jobs, rx) = mpsc::unbounded_channel();
        runtime.spawn(settings_worker(settings, rx));
        Self { jobs }
    }

    fn schedule(&self, job: SettingsJob) {
        if self.jobs.send(job).is_err() {
            log::error!("PrivateBrowsingModeMiddleware: settings worker is gone");
        }
    }
}

impl Middleware<AppState, AppAction> for PrivateBrowsingModeMiddleware {
    fn handle(
        &self,
        context: &MiddlewareContext<AppState, AppAction>,
        next: &Next<'_, AppState, AppAction>,
        action: AppAction,
    ) {
        let job = match &action {
            AppAction::Init => Some(SettingsJob::RestoreLastKnownMode(context.store())),
            AppAction::ModeChange(mode) => Some(SettingsJob::PersistMode(*mode)),
            AppAction::SelectedTabChanged(_) => None,
        };

        next.run(action);

        if let Some(job) = job {
            self.schedule(job);
        }
    }
}

async fn settings_worker(settings: Arc<dyn Settings>, mut jobs: mpsc::UnboundedReceiver<SettingsJob>) {
    while let Some(job) = jobs.recv().await {
        match job {
            SettingsJob::RestoreLastKnownMode(store) => {
                let mode = settings.last_known_mode().await.unwrap_or_else(|e| {
                    log::warn!("Failed to read last known mode, using default: {:#}", e);
                    BrowsingMode::default()
                });
                log::info!("PrivateBrowsingModeMiddleware: restoring mode {:?}", mode);
                store.dispatch(AppAction::ModeChange(mode));
            }
            SettingsJob::PersistMode(mode) => {
                if let Err(e) = settings.set_last_known_mode(mode).await {
                    log::warn!("Failed to persist last known mode {:?}: {:#}", mode, e);
                }
            }
        }
    }
    log::debug!("PrivateBrowsingModeMiddleware: settings worker stopped");
}
