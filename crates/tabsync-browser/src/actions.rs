use crate::state::{TabId, TabSessionState};

/// Root browser action enum - tagged by domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserAction {
    /// Tab list mutations
    TabList(TabListAction),
    /// Per-tab content updates
    Content(ContentAction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabListAction {
    /// Add a tab; selected if `select` or if no tab is selected yet
    AddTab { tab: TabSessionState, select: bool },
    /// Select an existing tab
    SelectTab { tab_id: TabId },
    /// Remove a tab, selecting a fallback if it was selected
    RemoveTab { tab_id: TabId },
    RemoveAllPrivateTabs,
    /// Restore tabs persisted from a previous session
    RestoreAction {
        tabs: Vec<TabSessionState>,
        selected_tab_id: Option<TabId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentAction {
    UpdateUrl { tab_id: TabId, url: String },
}

impl BrowserAction {
    /// Whether this action restores a persisted session
    pub fn is_restore(&self) -> bool {
        matches!(
            self,
            BrowserAction::TabList(TabListAction::RestoreAction { .. })
        )
    }
}
