use tabsync_browser::{TabId, TabSessionState};

use crate::browsing_mode::BrowsingMode;

/// The app's cached belief about the selected tab. Replaced wholesale, never patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedTabInfo {
    pub id: TabId,
    pub mode: BrowsingMode,
}

impl SelectedTabInfo {
    pub fn from_tab(tab: &TabSessionState) -> Self {
        Self {
            id: tab.id.clone(),
            mode: BrowsingMode::from_private(tab.content.private),
        }
    }
}

/// Application state
///
/// `mode` normally equals `selected_tab_info.mode`, but a manual mode change
/// that selects no tab may leave them apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub selected_tab_info: Option<SelectedTabInfo>,
    pub mode: BrowsingMode,
}
