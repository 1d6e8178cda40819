//! Browser store: tab/session source of truth
//!
//! Owns the tab list and the selected tab. Other stores observe it; it never
//! observes them.

pub mod actions;
pub mod reducer;
pub mod state;

pub use actions::{BrowserAction, ContentAction, TabListAction};
pub use reducer::reduce;
pub use state::{BrowserState, ContentState, TabId, TabSessionState};

use tabsync_store::{Middleware, Store};

/// Store holding [`BrowserState`]
pub type BrowserStore = Store<BrowserState, BrowserAction>;

/// Create a browser store with the given middleware
pub fn browser_store(
    initial_state: BrowserState,
    middleware: Vec<Box<dyn Middleware<BrowserState, BrowserAction>>>,
) -> BrowserStore {
    Store::new(initial_state, reduce, middleware)
}
