//! Host capabilities the bindings drive
//!
//! Implemented by the embedding UI; calls are synchronous and idempotent.

use crate::browsing_mode::BrowsingMode;

/// Applies the theme matching a browsing mode
pub trait ThemeManager: Send + Sync {
    fn set_current_theme(&self, mode: BrowsingMode);
}

/// Window-level secure flag (blocks screenshots and recents thumbnails)
pub trait WindowHost: Send + Sync {
    fn apply_secure_flag(&self);
    fn clear_secure_flag(&self);
}
