//! Main preferences dialog implementation.
//!
//! This module implements the `PreferencesDialog` container. Oxshelf only
//! needs the single General page.

use std::sync::Arc;

use {
    libadwaita::{
        ApplicationWindow, PreferencesDialog as LibadwaitaPreferencesDialog,
        prelude::{AdwDialogExt, PreferencesDialogExt},
    },
    tracing::debug,
};

use crate::{config::SettingsManager, state::AppState, ui::preferences::GeneralPreferencesPage};

/// Preferences dialog for the checklist.
pub struct PreferencesDialog {
    /// The underlying Libadwaita preferences dialog widget.
    pub widget: LibadwaitaPreferencesDialog,
}

impl PreferencesDialog {
    /// Creates a new preferences dialog instance.
    ///
    /// # Arguments
    ///
    /// * `app_state` - Application state reference for reactive updates
    /// * `settings_manager` - Settings manager reference for persistence
    ///
    /// # Returns
    ///
    /// A new `PreferencesDialog` instance.
    pub fn new(app_state: Arc<AppState>, settings_manager: Arc<SettingsManager>) -> Self {
        let widget = LibadwaitaPreferencesDialog::builder().build();

        widget.set_content_width(560);
        widget.set_content_height(480);

        let general_page = GeneralPreferencesPage::new(app_state, settings_manager);
        widget.add(&general_page.widget);

        debug!("PreferencesDialog: Created");

        Self { widget }
    }

    /// Shows the preferences dialog with a parent window.
    ///
    /// # Arguments
    ///
    /// * `parent` - Parent window widget for proper modal behavior
    pub fn show(&self, parent: &ApplicationWindow) {
        debug!("PreferencesDialog: Showing dialog with parent");
        self.widget.present(Some(parent));
    }
}
