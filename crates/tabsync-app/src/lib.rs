//! Application store and the bindings that keep it in sync with the browser store
//!
//! ```text
//! BrowserStore ──SelectedTabChangeMiddleware──► AppStore ──PrivateBrowsingModeMiddleware──► Settings
//!      │                                           │
//!      └──BrowserStoreBinding (UI scoped)──────────┘──PrivateBrowsingBinding──► theme, window
//! ```
//!
//! Effects only flow from the browser store into the app store. `tabsync-browser`
//! does not depend on this crate, so the reverse direction cannot be expressed.

pub mod actions;
pub mod bindings;
pub mod browsing_mode;
pub mod components;
pub mod host;
pub mod logger;
pub mod middleware;
pub mod reducer;
pub mod settings;
pub mod state;

#[cfg(test)]
mod test_support;

pub use actions::AppAction;
pub use bindings::{BrowserStoreBinding, PrivateBrowsingBinding};
pub use browsing_mode::BrowsingMode;
pub use components::Components;
pub use host::{ThemeManager, WindowHost};
pub use middleware::{PrivateBrowsingModeMiddleware, SelectedTabChangeMiddleware};
pub use reducer::reduce;
pub use settings::{InMemorySettings, PersistedSettings, Settings};
pub use state::{AppState, SelectedTabInfo};

use tabsync_store::{Middleware, Store};

/// Store holding [`AppState`]
pub type AppStore = Store<AppState, AppAction>;

/// Create an app store with the given middleware
pub fn app_store(
    initial_state: AppState,
    middleware: Vec<Box<dyn Middleware<AppState, AppAction>>>,
) -> AppStore {
    Store::new(initial_state, reduce, middleware)
}
