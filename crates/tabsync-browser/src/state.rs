use uuid::Uuid;

/// Tab identifier
pub type TabId = String;

/// Content of a tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentState {
    pub url: String,
    pub private: bool,
}

/// A single tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSessionState {
    pub id: TabId,
    pub content: ContentState,
}

impl TabSessionState {
    /// Create a tab with a fresh id
    pub fn new(url: impl Into<String>, private: bool) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), url, private)
    }

    pub fn with_id(id: impl Into<TabId>, url: impl Into<String>, private: bool) -> Self {
        Self {
            id: id.into(),
            content: ContentState {
                url: url.into(),
                private,
            },
        }
    }
}

/// Browser state - the tab list and which tab is selected
///
/// At most one tab is selected, and `selected_tab_id` always names a tab in
/// `tabs` when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserState {
    pub tabs: Vec<TabSessionState>,
    pub selected_tab_id: Option<TabId>,
    /// The current selection was adopted from a restored session
    pub selection_restored: bool,
}

impl BrowserState {
    /// The currently selected tab, if any
    pub fn selected_tab(&self) -> Option<&TabSessionState> {
        self.selected_tab_id
            .as_deref()
            .and_then(|id| self.find_tab(id))
    }

    /// Look up a tab by id
    pub fn find_tab(&self, id: &str) -> Option<&TabSessionState> {
        self.tabs.iter().find(|tab| tab.id == id)
    }
}
