//! App-specific middleware
//!
//! - `PrivateBrowsingModeMiddleware` (AppStore): mirrors `mode` to settings
//! - `SelectedTabChangeMiddleware` (BrowserStore): forwards selection changes to the AppStore

pub mod private_browsing_mode_middleware;
pub mod selected_tab_change_middleware;

pub use private_browsing_mode_middleware::PrivateBrowsingModeMiddleware;
pub use selected_tab_change_middleware::SelectedTabChangeMiddleware;
