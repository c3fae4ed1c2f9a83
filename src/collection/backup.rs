//! JSON backup codec for the owned-volume set.
//!
//! Backups are small JSON documents of the shape `{ "owned": [1, 2, 3] }`.
//! Parsing is strict about the shape (the document must be an object with an
//! `owned` array) but tolerant about the elements: anything that is not an
//! in-range integer is dropped, and the result is deduplicated and sorted.

use {
    serde::Serialize,
    serde_json::{Error as SerdeJsonError, Value, from_str, to_string_pretty},
    thiserror::Error,
};

use crate::collection::set::VolumeSet;

/// Default file name offered when exporting a backup.
pub const BACKUP_FILE_NAME: &str = "oxshelf-backup.json";

/// Error type for backup parsing and serialization.
#[derive(Error, Debug)]
pub enum BackupError {
    /// The backup contents are not valid JSON.
    #[error("Backup is not valid JSON: {0}")]
    Malformed(#[from] SerdeJsonError),
    /// The document parsed but is not an object with an `owned` array.
    #[error("Backup has no 'owned' list")]
    MissingOwnedField,
}

/// Serializable backup document wrapping the owned set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackupDocument {
    /// Owned volume numbers, sorted ascending.
    pub owned: Vec<u16>,
}

impl BackupDocument {
    /// Builds a backup document from the current owned set.
    ///
    /// # Arguments
    ///
    /// * `set` - The owned set to back up.
    ///
    /// # Returns
    ///
    /// A `BackupDocument` holding a copy of the owned numbers.
    #[must_use]
    pub fn from_set(set: &VolumeSet) -> Self {
        Self {
            owned: set.iter().collect(),
        }
    }

    /// Serializes the document as pretty-printed JSON.
    ///
    /// # Returns
    ///
    /// The JSON text, or a `BackupError` if serialization fails.
    pub fn to_json(&self) -> Result<String, BackupError> {
        Ok(to_string_pretty(self)?)
    }
}

/// Parses backup contents into a sanitized owned set.
///
/// # Arguments
///
/// * `contents` - Raw text of the backup file.
///
/// # Returns
///
/// The validated `VolumeSet`, or a `BackupError` describing why the
/// document was rejected.
///
/// # Errors
///
/// Returns `BackupError::Malformed` for invalid JSON and
/// `BackupError::MissingOwnedField` when the `owned` array is absent.
pub fn parse_backup(contents: &str) -> Result<VolumeSet, BackupError> {
    let document: Value = from_str(contents)?;
    let owned = document
        .get("owned")
        .and_then(Value::as_array)
        .ok_or(BackupError::MissingOwnedField)?;

    Ok(VolumeSet::from_numbers(
        owned.iter().filter_map(integral_value),
    ))
}

/// Extracts the integral value of a JSON element, if it has one.
///
/// Whole-valued floats such as `3.0` count as integers; everything else
/// (fractional numbers, strings, booleans, nulls, nested values) is dropped.
fn integral_value(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && f.is_finite())
        .map(|f| f as i64)
}

#[cfg(test)]
mod tests {
    use crate::collection::{
        backup::{BackupDocument, BackupError, parse_backup},
        set::VolumeSet,
    };

    #[test]
    fn test_parse_valid_backup() {
        let set = parse_backup(r#"{ "owned": [3, 1, 2] }"#).unwrap();
        assert_eq!(set.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_parse_filters_to_sorted_deduplicated_subset_of_range() {
        let set = parse_backup(r#"{ "owned": [111, 0, 5, 5, -1, 112, 40, 5] }"#).unwrap();
        assert_eq!(set.as_slice(), &[5, 40, 111]);
    }

    #[test]
    fn test_parse_drops_non_numeric_elements() {
        let set = parse_backup(r#"{ "owned": [1, "7", true, null, [2], 9] }"#).unwrap();
        assert_eq!(set.as_slice(), &[1, 9]);
    }

    #[test]
    fn test_parse_accepts_whole_valued_floats() {
        let set = parse_backup(r#"{ "owned": [3.0, 4.5, 6] }"#).unwrap();
        assert_eq!(set.as_slice(), &[3, 6]);
    }

    #[test]
    fn test_parse_rejects_missing_owned_field() {
        let error = parse_backup(r#"{ "volumes": [1, 2] }"#).unwrap_err();
        assert!(matches!(error, BackupError::MissingOwnedField));
    }

    #[test]
    fn test_parse_rejects_non_object_document() {
        let error = parse_backup("[1, 2, 3]").unwrap_err();
        assert!(matches!(error, BackupError::MissingOwnedField));

        let error = parse_backup(r#"{ "owned": 5 }"#).unwrap_err();
        assert!(matches!(error, BackupError::MissingOwnedField));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let error = parse_backup("{ owned: oops").unwrap_err();
        assert!(matches!(error, BackupError::Malformed(_)));
    }

    #[test]
    fn test_export_then_import_preserves_set() {
        let set = VolumeSet::from_numbers(vec![1, 56, 111]);
        let json = BackupDocument::from_set(&set).to_json().unwrap();
        assert_eq!(parse_backup(&json).unwrap(), set);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            BackupError::MissingOwnedField.to_string(),
            "Backup has no 'owned' list"
        );
    }
}
