//! GNOME HIG-compliant user interface built entirely with Libadwaita.
//!
//! This module provides the Oxshelf user interface: the main application
//! window, header bar, checklist view, backup flows, and preferences.

pub mod application;
pub mod backup;
pub mod components;
pub mod header_bar;
pub mod preferences;
pub mod utils;
pub mod views;

pub use {
    application::OxshelfApplication,
    components::{ChecklistActions, EmptyState, StatsPanel, SummaryBar, VolumeCell},
    header_bar::HeaderBar,
    preferences::PreferencesDialog,
    views::ChecklistView,
};
