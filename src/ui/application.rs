//! Main application window and lifecycle.
//!
//! This module implements the `OxshelfApplication` which serves as the
//! main entry point for the Libadwaita-based user interface.

use std::sync::Arc;

use {
    anyhow::Context,
    libadwaita::{
        Application, ApplicationWindow, ColorScheme, StyleManager, ToastOverlay,
        gtk::{Box as GtkBox, Orientation::Vertical},
        prelude::{
            AdwApplicationWindowExt, ApplicationExt, ApplicationExtManual, BoxExt, ButtonExt,
            GtkWindowExt,
        },
    },
    tracing::info,
};

use crate::{
    collection::store::CollectionStore,
    config::SettingsManager,
    error::Result,
    state::{AppState, CollectionManager},
    ui::{
        backup::connect_backup_actions, header_bar::HeaderBar, preferences::PreferencesDialog,
        views::ChecklistView,
    },
};

/// Main application class with window management.
///
/// The `OxshelfApplication` owns the long-lived managers and coordinates
/// the UI components built on activation.
pub struct OxshelfApplication {
    /// The main application instance.
    pub app: Application,
    /// Collection manager for the owned set.
    pub collection: Arc<CollectionManager>,
    /// Application view state.
    pub app_state: Arc<AppState>,
    /// User settings manager.
    pub settings: Arc<SettingsManager>,
}

impl OxshelfApplication {
    /// Creates a new Oxshelf application instance.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `OxshelfApplication` or an error.
    ///
    /// # Errors
    ///
    /// Returns an error if settings initialization fails.
    pub fn new() -> Result<Self> {
        let settings = SettingsManager::new().context("Failed to initialize settings")?;
        let collection = CollectionManager::new(CollectionStore::new());
        let app_state = AppState::new(settings.get_settings().show_missing_summary);

        info!(
            "Starting with {} owned volumes",
            collection.snapshot().len()
        );

        let app = Application::builder()
            .application_id("com.example.oxshelf")
            .build();

        Ok(OxshelfApplication {
            app,
            collection: Arc::new(collection),
            app_state: Arc::new(app_state),
            settings: Arc::new(settings),
        })
    }

    /// Runs the application.
    ///
    /// This method starts the GTK main loop and displays the main window.
    pub fn run(&self) {
        self.app.connect_activate({
            let collection_clone = self.collection.clone();
            let app_state_clone = self.app_state.clone();
            let settings_clone = self.settings.clone();

            move |app| {
                build_ui(app, &collection_clone, &app_state_clone, &settings_clone);
            }
        });

        self.app.run();
    }
}

/// Builds the main user interface.
fn build_ui(
    app: &Application,
    collection: &Arc<CollectionManager>,
    app_state: &Arc<AppState>,
    settings: &Arc<SettingsManager>,
) {
    apply_theme_preference(&settings.get_settings().theme_preference);

    // Create the main window
    let window = ApplicationWindow::builder()
        .application(app)
        .title("Oxshelf")
        .default_width(960)
        .default_height(720)
        .build();

    let header_bar = HeaderBar::new();

    let checklist = ChecklistView::builder()
        .app_state(app_state.clone())
        .collection(collection.clone())
        .show_missing_summary(settings.get_settings().show_missing_summary)
        .build();

    // Assemble the main layout
    let main_box = GtkBox::builder().orientation(Vertical).build();
    main_box.append(&header_bar.widget);
    main_box.append(&checklist.widget);

    // Toast overlay wraps the whole content so backup flows can confirm
    let toasts = ToastOverlay::new();
    toasts.set_child(Some(&main_box));

    connect_backup_actions(
        &checklist.actions,
        &window,
        &toasts,
        collection.clone(),
        settings.clone(),
    );

    header_bar.preferences_button.connect_clicked({
        let window_clone = window.clone();
        let app_state_clone = app_state.clone();
        let settings_clone = settings.clone();

        move |_| {
            let dialog = PreferencesDialog::new(app_state_clone.clone(), settings_clone.clone());
            dialog.show(&window_clone);
        }
    });

    // Set the window content
    window.set_content(Some(&toasts));
    window.present();
}

/// Applies a theme preference through the Adwaita style manager.
///
/// # Arguments
///
/// * `theme` - One of "system", "light", or "dark"; unknown values fall
///   back to the system scheme.
pub fn apply_theme_preference(theme: &str) {
    let scheme = match theme {
        "light" => ColorScheme::ForceLight,
        "dark" => ColorScheme::ForceDark,
        _ => ColorScheme::Default,
    };
    StyleManager::default().set_color_scheme(scheme);
}
