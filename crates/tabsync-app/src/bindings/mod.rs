//! Bindings started and stopped by UI owners
//!
//! - `BrowserStoreBinding`: BrowserStore selection -> AppStore, with the
//!   re-observation guard
//! - `PrivateBrowsingBinding`: AppStore mode -> theme and window secure flag
//!
//! Run them through [`tabsync_store::ScopedBinding`].

pub mod browser_store_binding;
pub mod private_browsing_binding;

pub use browser_store_binding::{new_tab_intentionally_selected, BrowserStoreBinding};
pub use private_browsing_binding::PrivateBrowsingBinding;
