use crate::actions::AppAction;
use crate::state::{AppState, SelectedTabInfo};

/// Reducer - pure function that produces new state from current state + action
pub fn reduce(mut state: AppState, action: &AppAction) -> AppState {
    match action {
        AppAction::Init => {}
        AppAction::ModeChange(mode) => {
            log::debug!("Mode change: {:?} -> {:?}", state.mode, mode);
            state.mode = *mode;
        }
        AppAction::SelectedTabChanged(tab) => {
            let info = SelectedTabInfo::from_tab(tab);
            state.mode = info.mode;
            state.selected_tab_info = Some(info);
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browsing_mode::BrowsingMode;
    use tabsync_browser::TabSessionState;

    #[test]
    fn test_init_keeps_state() {
        let state = reduce(AppState::default(), &AppAction::Init);
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn test_mode_change_leaves_selection() {
        let tab = TabSessionState::with_id("a", "https://a.test", false);
        let state = reduce(AppState::default(), &AppAction::SelectedTabChanged(tab));
        let state = reduce(state, &AppAction::ModeChange(BrowsingMode::Private));

        assert_eq!(state.mode, BrowsingMode::Private);
        assert_eq!(
            state.selected_tab_info.map(|info| (info.id, info.mode)),
            Some(("a".to_string(), BrowsingMode::Normal))
        );
    }

    #[test]
    fn test_selected_tab_changed_sets_mode_from_tab() {
        let tab = TabSessionState::with_id("p", "https://p.test", true);
        let state = reduce(AppState::default(), &AppAction::SelectedTabChanged(tab));

        assert_eq!(state.mode, BrowsingMode::Private);
        assert_eq!(
            state.selected_tab_info,
            Some(SelectedTabInfo {
                id: "p".to_string(),
                mode: BrowsingMode::Private,
            })
        );
    }
}
