//! Private Browsing Binding
//!
//! Applies the browsing mode to the host: theme, and the window secure flag.
//! Entering private mode reads `allow_screenshots_in_private_mode` first, so
//! the flag lands shortly after the mode flips. Leaving private mode clears the
//! flag before any async work.

use std::sync::Arc;

use tabsync_store::{Binding, BoxFuture};

use crate::browsing_mode::BrowsingMode;
use crate::host::{ThemeManager, WindowHost};
use crate::settings::Settings;
use crate::state::AppState;

/// AppStore mode -> theme and secure flag
pub struct PrivateBrowsingBinding {
    theme_manager: Arc<dyn ThemeManager>,
    window: Arc<dyn WindowHost>,
    settings: Arc<dyn Settings>,
}

impl PrivateBrowsingBinding {
    pub fn new(
        theme_manager: Arc<dyn ThemeManager>,
        window: Arc<dyn WindowHost>,
        settings: Arc<dyn Settings>,
    ) -> Self {
        Self {
            theme_manager,
            window,
            settings,
        }
    }

    async fn screenshots_allowed(&self) -> bool {
        match self.settings.allow_screenshots_in_private_mode().await {
            Ok(allowed) => allowed,
            Err(e) => {
                log::warn!("Failed to read screenshot setting, keeping window secure: {:#}", e);
                false
            }
        }
    }
}

impl Binding<AppState> for PrivateBrowsingBinding {
    type Key = BrowsingMode;

    fn key(&self, state: &AppState) -> BrowsingMode {
        state.mode
    }

    fn on_state<'a>(&'a self, state: AppState) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            log::debug!("PrivateBrowsingBinding: applying {:?}", state.mode);
            self.theme_manager.set_current_theme(state.mode);

            match state.mode {
                BrowsingMode::Private => {
                    if !self.screenshots_allowed().await {
                        self.window.apply_secure_flag();
                    }
                }
                BrowsingMode::Normal => self.window.clear_secure_flag(),
            }
        })
    }
}
