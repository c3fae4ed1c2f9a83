//! Oxshelf - Volume Collection Checklist
//!
//! A desktop checklist for tracking which volumes of a numbered series you
//! own. Built with modern Rust and Libadwaita, it persists the collection
//! across runs, supports JSON backups, and keeps the whole series
//! searchable from a single window.

pub mod collection;
pub mod config;
pub mod error;
pub mod state;
pub mod ui;

// Re-export key types for convenience
pub use {
    collection::{
        backup::BackupDocument,
        set::{SERIES_TOTAL, VolumeSet},
        store::CollectionStore,
    },
    config::{SettingsManager, UserSettings},
    error::{CollectionError, Result},
    state::{AppState, AppStateEvent, CollectionEvent, CollectionManager},
    ui::OxshelfApplication,
};
