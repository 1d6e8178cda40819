//! Process-wide wiring of the two stores
//!
//! Stores live as long as [`Components`]; bindings are handed out to UI owners
//! that start and stop them with their own lifetime.

use std::sync::Arc;

use tabsync_browser::{browser_store, BrowserAction, BrowserState, BrowserStore};
use tabsync_store::{LoggingMiddleware, Middleware, ScopedBinding};
use tokio::runtime::Handle;

use crate::actions::AppAction;
use crate::bindings::{BrowserStoreBinding, PrivateBrowsingBinding};
use crate::host::{ThemeManager, WindowHost};
use crate::middleware::{PrivateBrowsingModeMiddleware, SelectedTabChangeMiddleware};
use crate::settings::Settings;
use crate::state::AppState;
use crate::{app_store, AppStore};

pub struct Components {
    app_store: AppStore,
    browser_store: BrowserStore,
    settings: Arc<dyn Settings>,
    runtime: Handle,
}

impl Components {
    /// Build both stores and dispatch `Init` into the app store
    ///
    /// Background work (settings persistence, bindings) runs on `runtime`.
    pub fn new(settings: Arc<dyn Settings>, runtime: Handle) -> Self {
        let app_middleware: Vec<Box<dyn Middleware<AppState, AppAction>>> = vec![
            Box::new(LoggingMiddleware::new("AppStore")),
            Box::new(PrivateBrowsingModeMiddleware::new(
                Arc::clone(&settings),
                &runtime,
            )),
        ];
        let app_store = app_store(AppState::default(), app_middleware);

        let browser_middleware: Vec<Box<dyn Middleware<BrowserState, BrowserAction>>> = vec![
            Box::new(LoggingMiddleware::new("BrowserStore")),
            Box::new(SelectedTabChangeMiddleware::new(app_store.clone())),
        ];
        let browser_store = browser_store(BrowserState::default(), browser_middleware);

        app_store.dispatch(AppAction::Init);
        log::info!("Components initialized");

        Self {
            app_store,
            browser_store,
            settings,
            runtime,
        }
    }

    pub fn app_store(&self) -> &AppStore {
        &self.app_store
    }

    pub fn browser_store(&self) -> &BrowserStore {
        &self.browser_store
    }

    /// Selection binding for a UI owner (e.g. the browser screen)
    pub fn browser_store_binding(
        &self,
    ) -> ScopedBinding<BrowserState, BrowserAction, BrowserStoreBinding> {
        ScopedBinding::new(
            self.browser_store.clone(),
            BrowserStoreBinding::new(self.app_store.clone()),
            self.runtime.clone(),
        )
    }

    /// Mode binding driving the given theme and window
    pub fn private_browsing_binding(
        &self,
        theme_manager: Arc<dyn ThemeManager>,
        window: Arc<dyn WindowHost>,
    ) -> ScopedBinding<AppState, AppAction, PrivateBrowsingBinding> {
        ScopedBinding::new(
            self.app_store.clone(),
            PrivateBrowsingBinding::new(theme_manager, window, Arc::clone(&self.settings)),
            self.runtime.clone(),
        )
    }
}
