//! Backup and clipboard flows for the checklist actions.
//!
//! This module wires the Copy Missing, Export JSON, and Import JSON buttons
//! to their file dialogs, alerts, and toasts. The pure read/write halves
//! (`export_to_path`, `import_from_path`) are kept free of GTK so they can
//! be tested directly.

use std::{
    fs::{read_to_string, write},
    path::Path,
    sync::Arc,
};

use {
    libadwaita::{
        AlertDialog, ApplicationWindow, Toast, ToastOverlay,
        glib::MainContext,
        gtk::{FileDialog, FileFilter, gio::File as GioFile},
        prelude::{AdwDialogExt, AlertDialogExt, ButtonExt, FileExt, WidgetExt},
    },
    tracing::{debug, info},
};

use crate::{
    collection::{
        backup::{BACKUP_FILE_NAME, BackupDocument, parse_backup},
        set::VolumeSet,
    },
    config::SettingsManager,
    error::CollectionError,
    state::CollectionManager,
    ui::{components::ChecklistActions, utils::join_volume_numbers},
};

/// Writes a backup of the owned set to a file.
///
/// # Arguments
///
/// * `path` - Destination file path.
/// * `set` - The owned set to back up.
///
/// # Returns
///
/// A `Result` indicating success or failure.
///
/// # Errors
///
/// Returns `CollectionError` if serialization or the write fails.
pub fn export_to_path(path: &Path, set: &VolumeSet) -> Result<(), CollectionError> {
    let document = BackupDocument::from_set(set);
    let contents = document.to_json()?;
    write(path, contents)?;
    info!("Exported {} owned volumes to {:?}", set.len(), path);
    Ok(())
}

/// Reads a backup file and replaces the collection with its contents.
///
/// # Arguments
///
/// * `path` - Backup file path.
/// * `collection` - Collection manager to update.
///
/// # Returns
///
/// The number of owned volumes after the import.
///
/// # Errors
///
/// Returns `CollectionError` if the file cannot be read, does not parse as
/// a backup document, or the imported state cannot be persisted.
pub fn import_from_path(
    path: &Path,
    collection: &CollectionManager,
) -> Result<usize, CollectionError> {
    let contents = read_to_string(path)?;
    let imported = parse_backup(&contents)?;
    let count = imported.len();
    collection.replace(imported)?;
    info!("Imported {} owned volumes from {:?}", count, path);
    Ok(count)
}

/// Connects the copy, export, and import buttons.
///
/// # Arguments
///
/// * `actions` - The action row whose buttons get wired.
/// * `window` - Parent window for dialogs and the clipboard.
/// * `toasts` - Overlay used for confirmation toasts.
/// * `collection` - Collection manager backing the checklist.
/// * `settings` - Settings manager, used to remember the backup directory.
pub fn connect_backup_actions(
    actions: &ChecklistActions,
    window: &ApplicationWindow,
    toasts: &ToastOverlay,
    collection: Arc<CollectionManager>,
    settings: Arc<SettingsManager>,
) {
    connect_copy_missing(actions, window, toasts, collection.clone());
    connect_export(actions, window, toasts, collection.clone(), settings.clone());
    connect_import(actions, window, toasts, collection, settings);
}

/// Wires the Copy Missing button to the GDK clipboard.
fn connect_copy_missing(
    actions: &ChecklistActions,
    window: &ApplicationWindow,
    toasts: &ToastOverlay,
    collection: Arc<CollectionManager>,
) {
    let window = window.clone();
    let toasts = toasts.clone();

    actions.copy_missing_button.connect_clicked(move |_| {
        let missing = collection.snapshot().missing();
        window
            .clipboard()
            .set_text(&join_volume_numbers(&missing));
        debug!("Copied {} missing volume numbers", missing.len());
        toasts.add_toast(Toast::new("Missing volume list copied"));
    });
}

/// Wires the Export JSON button to a save dialog.
fn connect_export(
    actions: &ChecklistActions,
    window: &ApplicationWindow,
    toasts: &ToastOverlay,
    collection: Arc<CollectionManager>,
    settings: Arc<SettingsManager>,
) {
    let window = window.clone();
    let toasts = toasts.clone();

    actions.export_button.connect_clicked(move |_| {
        let dialog = FileDialog::builder()
            .title("Export Collection Backup")
            .accept_label("Export")
            .initial_name(BACKUP_FILE_NAME)
            .default_filter(&json_filter())
            .modal(true)
            .build();
        seed_initial_folder(&dialog, &settings);

        let window = window.clone();
        let toasts = toasts.clone();
        let collection = collection.clone();
        let settings = settings.clone();

        MainContext::default().spawn_local(async move {
            match dialog.save_future(Some(&window)).await {
                Ok(file) => {
                    let Some(path) = file.path() else {
                        return;
                    };
                    match export_to_path(&path, &collection.snapshot()) {
                        Ok(()) => {
                            remember_backup_dir(&settings, &path);
                            toasts.add_toast(Toast::new("Backup exported"));
                        }
                        Err(e) => {
                            show_alert(&window, "Export Failed", e.user_message());
                        }
                    }
                }
                Err(e) => {
                    debug!("Export dialog dismissed: {}", e);
                }
            }
        });
    });
}

/// Wires the Import JSON button to an open dialog.
fn connect_import(
    actions: &ChecklistActions,
    window: &ApplicationWindow,
    toasts: &ToastOverlay,
    collection: Arc<CollectionManager>,
    settings: Arc<SettingsManager>,
) {
    let window = window.clone();
    let toasts = toasts.clone();

    actions.import_button.connect_clicked(move |_| {
        let dialog = FileDialog::builder()
            .title("Import Collection Backup")
            .accept_label("Import")
            .default_filter(&json_filter())
            .modal(true)
            .build();
        seed_initial_folder(&dialog, &settings);

        let window = window.clone();
        let toasts = toasts.clone();
        let collection = collection.clone();
        let settings = settings.clone();

        MainContext::default().spawn_local(async move {
            match dialog.open_future(Some(&window)).await {
                Ok(file) => {
                    let Some(path) = file.path() else {
                        return;
                    };
                    match import_from_path(&path, &collection) {
                        Ok(count) => {
                            remember_backup_dir(&settings, &path);
                            toasts.add_toast(Toast::new(&format!(
                                "Backup imported: {} volumes owned",
                                count
                            )));
                        }
                        Err(e) => {
                            show_alert(&window, "Import Failed", e.user_message());
                        }
                    }
                }
                Err(e) => {
                    debug!("Import dialog dismissed: {}", e);
                }
            }
        });
    });
}

/// File filter matching JSON backups.
fn json_filter() -> FileFilter {
    let filter = FileFilter::new();
    filter.set_name(Some("JSON backups"));
    filter.add_mime_type("application/json");
    filter.add_suffix("json");
    filter
}

/// Seeds a file dialog with the last used backup directory.
fn seed_initial_folder(dialog: &FileDialog, settings: &SettingsManager) {
    if let Some(dir) = settings.get_settings().last_backup_dir.clone() {
        dialog.set_initial_folder(Some(&GioFile::for_path(dir)));
    }
}

/// Remembers the directory of a completed backup operation.
fn remember_backup_dir(settings: &SettingsManager, path: &Path) {
    let Some(parent) = path.parent().and_then(Path::to_str) else {
        return;
    };

    let mut updated = settings.get_settings().clone();
    updated.last_backup_dir = Some(parent.to_string());
    if let Err(e) = settings.update_settings(updated) {
        debug!("Failed to remember backup directory: {}", e);
    }
}

/// Presents a modal alert over the window.
fn show_alert(window: &ApplicationWindow, heading: &str, body: &str) {
    let alert = AlertDialog::builder().heading(heading).body(body).build();
    alert.add_response("close", "Close");
    alert.present(Some(window));
}

#[cfg(test)]
mod tests {
    use {std::fs::write, tempfile::tempdir};

    use crate::{
        collection::{set::VolumeSet, store::CollectionStore},
        error::CollectionError,
        state::CollectionManager,
        ui::backup::{export_to_path, import_from_path},
    };

    fn manager_in(dir: &tempfile::TempDir) -> CollectionManager {
        CollectionManager::new(CollectionStore::with_state_path(
            dir.path().join("collection.json"),
        ))
    }

    #[test]
    fn test_export_then_import_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let backup_path = dir.path().join("oxshelf-backup.json");
        let set = VolumeSet::from_numbers(vec![5, 9, 100]);

        export_to_path(&backup_path, &set).unwrap();

        let manager = manager_in(&dir);
        let count = import_from_path(&backup_path, &manager).unwrap();
        assert_eq!(count, 3);
        assert_eq!(manager.snapshot(), set);
    }

    #[test]
    fn test_import_missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let manager = manager_in(&dir);

        let error = import_from_path(&dir.path().join("nope.json"), &manager).unwrap_err();
        assert!(matches!(error, CollectionError::IoError(_)));
        assert_eq!(error.user_message(), "Could not access the selected file.");
    }

    #[test]
    fn test_import_malformed_backup_reports_user_message() {
        let dir = tempdir().unwrap();
        let backup_path = dir.path().join("broken.json");
        write(&backup_path, "{ not json").unwrap();

        let manager = manager_in(&dir);
        let error = import_from_path(&backup_path, &manager).unwrap_err();
        assert_eq!(error.user_message(), "Could not read the JSON in that file.");
    }

    #[test]
    fn test_import_without_owned_list_reports_user_message() {
        let dir = tempdir().unwrap();
        let backup_path = dir.path().join("wrong-shape.json");
        write(&backup_path, r#"{ "volumes": [1] }"#).unwrap();

        let manager = manager_in(&dir);
        let error = import_from_path(&backup_path, &manager).unwrap_err();
        assert_eq!(
            error.user_message(),
            "Invalid file: the 'owned' list is missing."
        );
    }
}
