use crate::actions::{BrowserAction, ContentAction, TabListAction};
use crate::state::{BrowserState, TabId, TabSessionState};

/// Reducer - pure function that produces new state from current state + action
///
/// Whenever the selection changes, `selection_restored` records whether a
/// restore caused it.
pub fn reduce(state: BrowserState, action: &BrowserAction) -> BrowserState {
    let previous_selection = state.selected_tab_id.clone();
    let mut state = match action {
        BrowserAction::TabList(action) => reduce_tab_list(state, action),
        BrowserAction::Content(action) => reduce_content(state, action),
    };
    if state.selected_tab_id != previous_selection {
        state.selection_restored = action.is_restore();
    }
    state
}

fn reduce_tab_list(mut state: BrowserState, action: &TabListAction) -> BrowserState {
    match action {
        TabListAction::AddTab { tab, select } => {
            if state.find_tab(&tab.id).is_some() {
                log::warn!("Ignoring AddTab for existing tab {}", tab.id);
                return state;
            }
            if *select || state.selected_tab_id.is_none() {
                state.selected_tab_id = Some(tab.id.clone());
            }
            state.tabs.push(tab.clone());
        }
        TabListAction::SelectTab { tab_id } => {
            if state.find_tab(tab_id).is_some() {
                state.selected_tab_id = Some(tab_id.clone());
            } else {
                log::debug!("Cannot select unknown tab {}", tab_id);
            }
        }
        TabListAction::RemoveTab { tab_id } => {
            state = remove_tabs(state, |tab| &tab.id == tab_id);
        }
        TabListAction::RemoveAllPrivateTabs => {
            state = remove_tabs(state, |tab| tab.content.private);
        }
        TabListAction::RestoreAction {
            tabs,
            selected_tab_id,
        } => {
            for tab in tabs {
                if state.find_tab(&tab.id).is_none() {
                    state.tabs.push(tab.clone());
                }
            }
            if state.selected_tab_id.is_none() {
                state.selected_tab_id = selected_tab_id
                    .as_ref()
                    .filter(|id| state.find_tab(id).is_some())
                    .cloned();
            }
        }
    }
    state
}

fn reduce_content(mut state: BrowserState, action: &ContentAction) -> BrowserState {
    match action {
        ContentAction::UpdateUrl { tab_id, url } => {
            if let Some(tab) = state.tabs.iter_mut().find(|tab| &tab.id == tab_id) {
                tab.content.url = url.clone();
            }
        }
    }
    state
}

/// Remove matching tabs; if the selected tab goes, pick a fallback
fn remove_tabs(
    mut state: BrowserState,
    should_remove: impl Fn(&TabSessionState) -> bool,
) -> BrowserState {
    let selected = state
        .selected_tab_id
        .as_deref()
        .and_then(|id| state.tabs.iter().position(|tab| tab.id == id))
        .map(|index| (index, state.tabs[index].clone()));

    state.tabs.retain(|tab| !should_remove(tab));

    if let Some((index, tab)) = selected {
        if should_remove(&tab) {
            state.selected_tab_id = fallback_selection(&state.tabs, index, tab.content.private);
            log::debug!(
                "Selected tab {} removed, fallback: {:?}",
                tab.id,
                state.selected_tab_id
            );
        }
    }
    state
}

/// Nearest tab (by former position) with the same privacy, else nearest tab of any kind
fn fallback_selection(tabs: &[TabSessionState], index: usize, private: bool) -> Option<TabId> {
    nearest(tabs, index, |tab| tab.content.private == private)
        .or_else(|| nearest(tabs, index, |_| true))
}

fn nearest(
    tabs: &[TabSessionState],
    index: usize,
    matches: impl Fn(&TabSessionState) -> bool,
) -> Option<TabId> {
    // `index` is where the removed tab was; tabs at or after it shifted left by one
    let after = tabs.iter().skip(index).find(|tab| matches(tab));
    let before = tabs.iter().take(index).rev().find(|tab| matches(tab));
    after.or(before).map(|tab| tab.id.clone())
}
