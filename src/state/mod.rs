//! Centralized state management with reactive updates to UI components.
//!
//! This module provides the foundation for managing global application state
//! with thread-safe access and reactive update mechanisms: the
//! `CollectionManager` for the persisted owned set and the `AppState` for
//! transient view state.

pub mod app_state;
pub mod collection_manager;

pub use {
    app_state::{AppState, AppStateEvent, ChecklistState},
    collection_manager::{CollectionEvent, CollectionManager},
};
