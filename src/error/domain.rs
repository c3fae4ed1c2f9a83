//! Domain-specific error types using `thiserror`.
//!
//! This module aggregates the per-module error enums into the
//! `CollectionError` used by the operation layer, and maps each failure to
//! the user-facing alert text shown by the UI.

use std::{io::Error as IoStdError, result::Result as StdResult};

use {anyhow::Error, thiserror::Error};

use crate::collection::{backup::BackupError, store::StoreError};

/// Collection-level errors for backup import/export operations.
#[derive(Error, Debug)]
pub enum CollectionError {
    /// Backup codec error from the backup module.
    #[error("Backup error: {0}")]
    BackupError(#[from] BackupError),
    /// Persistence error from the state store.
    #[error("State store error: {0}")]
    StoreError(#[from] StoreError),
    /// Failed to read or write a backup file.
    #[error("IO error: {0}")]
    IoError(#[from] IoStdError),
}

impl CollectionError {
    /// Converts the error to a user-facing alert message.
    ///
    /// # Returns
    ///
    /// A short sentence suitable for an alert dialog body.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BackupError(BackupError::Malformed(_)) => "Could not read the JSON in that file.",
            Self::BackupError(BackupError::MissingOwnedField) => {
                "Invalid file: the 'owned' list is missing."
            }
            Self::StoreError(_) => "The backup was read, but saving the collection failed.",
            Self::IoError(_) => "Could not access the selected file.",
        }
    }
}

/// Operational error context propagation with `anyhow`.
///
/// This type is used for operational errors that need rich context
/// but don't require specific handling logic.
pub type Result<T> = StdResult<T, Error>;
