use tabsync_browser::TabSessionState;

use crate::browsing_mode::BrowsingMode;

/// Application actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// App startup
    Init,
    /// Switch browsing mode without selecting a tab
    ModeChange(BrowsingMode),
    /// The browser store selected another tab
    SelectedTabChanged(TabSessionState),
}
