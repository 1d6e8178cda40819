//! Selected Tab Change Middleware
//!
//! Installed on the BrowserStore. Watches `selected_tab_id` and forwards every
//! change to the AppStore as `SelectedTabChanged`, except changes caused by a
//! session restore.

use tabsync_browser::{BrowserAction, BrowserState, TabId};
use tabsync_store::{Change, ChangeDetectionMiddleware, Middleware, MiddlewareContext, Next};

use crate::actions::AppAction;
use crate::AppStore;

/// Forwards BrowserStore selection changes into the AppStore
pub struct SelectedTabChangeMiddleware {
    detector: ChangeDetectionMiddleware<BrowserState, BrowserAction, Option<TabId>>,
}

impl SelectedTabChangeMiddleware {
    pub fn new(app_store: AppStore) -> Self {
        let detector = ChangeDetectionMiddleware::new(
            |state: &BrowserState| state.selected_tab_id.clone(),
            move |_context: &MiddlewareContext<BrowserState, BrowserAction>,
                  change: Change<'_, BrowserState, BrowserAction, Option<TabId>>| {
                forward_selection(&app_store, change)
            },
        );
        Self { detector }
    }
}

fn forward_selection(
    app_store: &AppStore,
    change: Change<'_, BrowserState, BrowserAction, Option<TabId>>,
) {
    if change.action.is_restore() {
        log::debug!(
            "Selection {:?} -> {:?} came from a restore, not forwarding",
            change.pre_selection,
            change.post_selection
        );
        return;
    }

    let Some(tab_id) = change.post_selection else {
        return;
    };
    match change.post_state.find_tab(tab_id) {
        Some(tab) => app_store.dispatch(AppAction::SelectedTabChanged(tab.clone())),
        None => log::debug!("Selected tab {} no longer exists, skipping", tab_id),
    }
}

impl Middleware<BrowserState, BrowserAction> for SelectedTabChangeMiddleware {
    fn handle(
        &self,
        context: &MiddlewareContext<BrowserState, BrowserAction>,
        next: &Next<'_, BrowserState, BrowserAction>,
        action: BrowserAction,
    ) {
        self.detector.handle(context, next, action);
    }
}
