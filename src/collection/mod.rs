//! Volume collection model, search filtering, persistence, and backup codec.
//!
//! This module holds everything that operates on the owned-volume set
//! independently of the user interface.

pub mod backup;
pub mod filter;
pub mod set;
pub mod store;

pub use {
    backup::{BACKUP_FILE_NAME, BackupDocument, BackupError, parse_backup},
    filter::{QuerySanitizer, filter_volumes, volume_matches},
    set::{SERIES_TOTAL, VolumeSet, all_volumes},
    store::{CollectionStore, StoreError, get_state_path},
};
