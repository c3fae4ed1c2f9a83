//! Utility functions for UI components.
//!
//! This module provides the shared text formatting used by the checklist:
//! volume labels, collection progress, and missing-volume summaries.

use crate::collection::set::SERIES_TOTAL;

/// Formats a volume number as its checklist label.
///
/// Numbers are zero-padded to three digits so labels line up in the grid:
/// 7 becomes "Vol. 007", 111 becomes "Vol. 111".
///
/// # Arguments
///
/// * `number` - Volume number to format.
///
/// # Returns
///
/// The padded label string.
#[must_use]
pub fn volume_label(number: u16) -> String {
    format!("Vol. {:03}", number)
}

/// Formats the collection progress figure for the stats panel.
///
/// Follows the `owned/total (percent%)` form with the percentage rounded to
/// the nearest whole number, e.g. "56/111 (50%)".
///
/// # Arguments
///
/// * `owned` - Number of owned volumes.
///
/// # Returns
///
/// The formatted progress string.
#[must_use]
pub fn format_collection_progress(owned: usize) -> String {
    let percent = (owned as f64 / f64::from(SERIES_TOTAL) * 100.0).round() as u32;
    format!("{}/{} ({}%)", owned, SERIES_TOTAL, percent)
}

/// Joins volume numbers into the comma-separated clipboard form.
///
/// # Arguments
///
/// * `numbers` - Volume numbers to join.
///
/// # Returns
///
/// The numbers joined with ", ", or an empty string for an empty slice.
#[must_use]
pub fn join_volume_numbers(numbers: &[u16]) -> String {
    numbers
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats the missing-volume summary line.
///
/// # Arguments
///
/// * `missing` - The missing volume numbers.
///
/// # Returns
///
/// A line of the form "Missing (3): 1, 2, 5", or "Missing (0): none" when
/// the collection is complete.
#[must_use]
pub fn format_missing_summary(missing: &[u16]) -> String {
    if missing.is_empty() {
        return "Missing (0): none".to_string();
    }
    format!(
        "Missing ({}): {}",
        missing.len(),
        join_volume_numbers(missing)
    )
}

#[cfg(test)]
mod tests {
    use crate::ui::utils::{
        format_collection_progress, format_missing_summary, join_volume_numbers, volume_label,
    };

    #[test]
    fn test_volume_label_zero_pads_to_three_digits() {
        assert_eq!(volume_label(7), "Vol. 007");
        assert_eq!(volume_label(42), "Vol. 042");
        assert_eq!(volume_label(111), "Vol. 111");
    }

    #[test]
    fn test_format_collection_progress_rounds_percent() {
        assert_eq!(format_collection_progress(0), "0/111 (0%)");
        assert_eq!(format_collection_progress(56), "56/111 (50%)");
        assert_eq!(format_collection_progress(111), "111/111 (100%)");
        // 1/111 is 0.9%, which rounds to 1
        assert_eq!(format_collection_progress(1), "1/111 (1%)");
    }

    #[test]
    fn test_join_volume_numbers() {
        assert_eq!(join_volume_numbers(&[]), "");
        assert_eq!(join_volume_numbers(&[3]), "3");
        assert_eq!(join_volume_numbers(&[1, 2, 10]), "1, 2, 10");
    }

    #[test]
    fn test_format_missing_summary() {
        assert_eq!(format_missing_summary(&[]), "Missing (0): none");
        assert_eq!(format_missing_summary(&[4, 9]), "Missing (2): 4, 9");
    }
}
