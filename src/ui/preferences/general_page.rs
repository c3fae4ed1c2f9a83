//! General preferences page implementation.
//!
//! This module implements the General preferences tab with the theme
//! preference and the missing-summary visibility switch.

use std::sync::Arc;

use {
    libadwaita::{
        ComboRow, PreferencesGroup, PreferencesPage, SwitchRow,
        gtk::StringList,
        prelude::{ComboRowExt, PreferencesGroupExt, PreferencesPageExt},
    },
    tracing::debug,
};

use crate::{config::SettingsManager, state::AppState, ui::application::apply_theme_preference};

/// General preferences page with theme and summary settings.
pub struct GeneralPreferencesPage {
    /// The underlying Libadwaita preferences page widget.
    pub widget: PreferencesPage,
    /// Application state reference.
    app_state: Arc<AppState>,
    /// Settings manager reference for persistence.
    settings_manager: Arc<SettingsManager>,
}

impl GeneralPreferencesPage {
    /// Creates a new general preferences page instance.
    ///
    /// # Arguments
    ///
    /// * `app_state` - Application state reference
    /// * `settings_manager` - Settings manager reference for persistence
    ///
    /// # Returns
    ///
    /// A new `GeneralPreferencesPage` instance.
    pub fn new(app_state: Arc<AppState>, settings_manager: Arc<SettingsManager>) -> Self {
        let widget = PreferencesPage::builder()
            .title("General")
            .icon_name("preferences-system-symbolic")
            .build();

        let page = Self {
            widget,
            app_state,
            settings_manager,
        };

        page.setup_theme_preference();
        page.setup_summary_preference();

        debug!("GeneralPreferencesPage: Created");

        page
    }

    /// Sets up the theme preference combo row.
    fn setup_theme_preference(&self) {
        let group = PreferencesGroup::builder()
            .title("Appearance")
            .description("Customize the application's visual appearance")
            .build();

        let themes = vec!["System", "Light", "Dark"];
        let current_theme = self
            .settings_manager
            .get_settings()
            .theme_preference
            .clone();

        let combo_row = ComboRow::builder()
            .title("Theme")
            .subtitle("Choose light or dark theme, or follow system preference")
            .build();

        let string_list = StringList::new(&themes);
        combo_row.set_model(Some(&string_list));

        let current_index = match current_theme.as_str() {
            "system" => 0,
            "light" => 1,
            "dark" => 2,
            _ => 0,
        };
        combo_row.set_selected(current_index as u32);

        let settings_manager_clone = self.settings_manager.clone();
        combo_row.connect_selected_notify(move |row| {
            let new_theme = match row.selected() {
                1 => "light".to_string(),
                2 => "dark".to_string(),
                _ => "system".to_string(),
            };

            apply_theme_preference(&new_theme);

            let mut current_settings = settings_manager_clone.get_settings().clone();
            current_settings.theme_preference = new_theme;
            if let Err(e) = settings_manager_clone.update_settings(current_settings) {
                debug!("Failed to update theme preference: {}", e);
            }
        });

        group.add(&combo_row);
        self.widget.add(&group);
    }

    /// Sets up the missing-summary visibility switch row.
    fn setup_summary_preference(&self) {
        let group = PreferencesGroup::builder()
            .title("Checklist")
            .description("Configure what the checklist shows")
            .build();

        let current_visible = self.settings_manager.get_settings().show_missing_summary;

        let switch_row = SwitchRow::builder()
            .title("Show Missing Summary")
            .subtitle("List the missing volume numbers below the checklist")
            .active(current_visible)
            .build();

        let settings_manager_clone = self.settings_manager.clone();
        let app_state_clone = self.app_state.clone();
        switch_row.connect_active_notify(move |row| {
            let visible = row.is_active();

            app_state_clone.update_summary_visibility(visible);

            let mut current_settings = settings_manager_clone.get_settings().clone();
            current_settings.show_missing_summary = visible;
            if let Err(e) = settings_manager_clone.update_settings(current_settings) {
                debug!("Failed to update summary visibility: {}", e);
            }
        });

        group.add(&switch_row);
        self.widget.add(&group);
    }
}
