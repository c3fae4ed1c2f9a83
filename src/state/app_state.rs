//! Global view state with reactive update mechanisms.
//!
//! This module provides the central `AppState` container for UI view state
//! (the search filter and summary visibility) with thread-safe access and
//! broadcast notifications. Collection data itself is managed by the
//! `CollectionManager`.

use std::sync::Arc;

use {
    parking_lot::RwLock,
    tokio::sync::broadcast::{Receiver, Sender, channel},
};

/// Current checklist view state.
#[derive(Debug, Clone)]
pub struct ChecklistState {
    /// Current search filter, sanitized to digits. `None` means no filter.
    pub search_filter: Option<String>,
    /// Whether the missing-volume summary is shown.
    pub show_missing_summary: bool,
}

/// Application state change events.
#[derive(Debug, Clone)]
pub enum AppStateEvent {
    /// Search filter changed.
    SearchFilterChanged(Option<String>),
    /// Missing-summary visibility changed.
    SummaryVisibilityChanged(bool),
}

/// Central view-state container with thread-safe access.
///
/// The `AppState` holds UI state shared between the header, the checklist
/// view, and the preferences dialog, and provides a broadcast channel for
/// components to subscribe to changes.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current checklist view state.
    pub checklist: Arc<RwLock<ChecklistState>>,
    /// Broadcast channel for state change notifications.
    state_tx: Sender<AppStateEvent>,
}

impl AppState {
    /// Creates a new application state instance.
    ///
    /// # Arguments
    ///
    /// * `show_missing_summary` - Initial summary visibility, from settings.
    ///
    /// # Returns
    ///
    /// A new `AppState` instance.
    #[must_use]
    pub fn new(show_missing_summary: bool) -> Self {
        let (state_tx, _) = channel(16);

        Self {
            checklist: Arc::new(RwLock::new(ChecklistState {
                search_filter: None,
                show_missing_summary,
            })),
            state_tx,
        }
    }

    /// Updates the search filter and notifies subscribers.
    ///
    /// Empty queries normalize to `None` so subscribers only ever see a
    /// meaningful filter.
    ///
    /// # Arguments
    ///
    /// * `filter` - New sanitized search filter.
    pub fn update_search_filter(&self, filter: Option<String>) {
        let normalized = filter.filter(|query| !query.is_empty());
        self.checklist.write().search_filter = normalized.clone();
        let _ = self
            .state_tx
            .send(AppStateEvent::SearchFilterChanged(normalized));
    }

    /// Updates the missing-summary visibility and notifies subscribers.
    ///
    /// # Arguments
    ///
    /// * `visible` - Whether the summary should be shown.
    pub fn update_summary_visibility(&self, visible: bool) {
        self.checklist.write().show_missing_summary = visible;
        let _ = self
            .state_tx
            .send(AppStateEvent::SummaryVisibilityChanged(visible));
    }

    /// Gets the current search filter.
    ///
    /// # Returns
    ///
    /// The current filter, or `None` when unfiltered.
    #[must_use]
    pub fn get_search_filter(&self) -> Option<String> {
        self.checklist.read().search_filter.clone()
    }

    /// Gets the current summary visibility.
    #[must_use]
    pub fn get_summary_visibility(&self) -> bool {
        self.checklist.read().show_missing_summary
    }

    /// Subscribes to application state changes.
    ///
    /// # Returns
    ///
    /// A broadcast receiver for state change events.
    pub fn subscribe(&self) -> Receiver<AppStateEvent> {
        self.state_tx.subscribe()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use crate::state::app_state::{AppState, AppStateEvent};

    #[test]
    fn test_app_state_initial_values() {
        let app_state = AppState::new(false);
        assert!(app_state.get_search_filter().is_none());
        assert!(!app_state.get_summary_visibility());
    }

    #[test]
    fn test_update_search_filter_notifies_subscribers() {
        let app_state = AppState::default();
        let mut rx = app_state.subscribe();

        app_state.update_search_filter(Some("10".to_string()));

        assert_eq!(app_state.get_search_filter().as_deref(), Some("10"));
        match rx.try_recv().unwrap() {
            AppStateEvent::SearchFilterChanged(filter) => {
                assert_eq!(filter.as_deref(), Some("10"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_empty_filter_normalizes_to_none() {
        let app_state = AppState::default();
        app_state.update_search_filter(Some(String::new()));
        assert!(app_state.get_search_filter().is_none());
    }

    #[test]
    fn test_update_summary_visibility() {
        let app_state = AppState::new(true);
        let mut rx = app_state.subscribe();

        app_state.update_summary_visibility(false);

        assert!(!app_state.get_summary_visibility());
        assert!(matches!(
            rx.try_recv().unwrap(),
            AppStateEvent::SummaryVisibilityChanged(false)
        ));
    }
}
