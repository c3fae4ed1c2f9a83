//! Core owned-set model for the volume checklist.
//!
//! This module defines the `VolumeSet` type that tracks which volumes of the
//! series the user owns. The set is always kept deduplicated and sorted in
//! ascending order, and every member lies within the series range.

use serde::Serialize;

/// Total number of volumes in the tracked series.
pub const SERIES_TOTAL: u16 = 111;

/// Returns an iterator over every volume number in the series, in order.
pub fn all_volumes() -> impl Iterator<Item = u16> {
    1..=SERIES_TOTAL
}

/// Deduplicated, ascending-sorted set of owned volume numbers.
///
/// The `VolumeSet` maintains its invariants on every mutation: members are
/// unique, sorted, and within `[1, SERIES_TOTAL]`. Numbers outside the range
/// are silently ignored by all operations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct VolumeSet {
    numbers: Vec<u16>,
}

impl VolumeSet {
    /// Creates a new empty volume set.
    ///
    /// # Returns
    ///
    /// A `VolumeSet` with no owned volumes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sanitized set from arbitrary numbers.
    ///
    /// Out-of-range values are dropped, duplicates are collapsed, and the
    /// result is sorted ascending. This is the single entry point used when
    /// loading persisted state and when importing a backup.
    ///
    /// # Arguments
    ///
    /// * `numbers` - Any iterator of candidate volume numbers.
    ///
    /// # Returns
    ///
    /// A `VolumeSet` holding the valid subset of `numbers`.
    #[must_use]
    pub fn from_numbers<I>(numbers: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let mut kept: Vec<u16> = numbers
            .into_iter()
            .filter_map(|n| u16::try_from(n).ok())
            .filter(|n| Self::in_range(*n))
            .collect();
        kept.sort_unstable();
        kept.dedup();
        Self { numbers: kept }
    }

    /// Checks whether a number lies within the series range.
    fn in_range(number: u16) -> bool {
        (1..=SERIES_TOTAL).contains(&number)
    }

    /// Checks whether a volume is owned.
    ///
    /// # Arguments
    ///
    /// * `number` - Volume number to look up.
    ///
    /// # Returns
    ///
    /// `true` if the volume is in the set.
    #[must_use]
    pub fn contains(&self, number: u16) -> bool {
        self.numbers.binary_search(&number).is_ok()
    }

    /// Flips the membership of a volume.
    ///
    /// Toggling the same volume twice restores the original set.
    ///
    /// # Arguments
    ///
    /// * `number` - Volume number to toggle.
    ///
    /// # Returns
    ///
    /// `true` if the set changed, `false` for out-of-range numbers.
    pub fn toggle(&mut self, number: u16) -> bool {
        if !Self::in_range(number) {
            return false;
        }
        match self.numbers.binary_search(&number) {
            Ok(index) => {
                self.numbers.remove(index);
            }
            Err(index) => {
                self.numbers.insert(index, number);
            }
        }
        true
    }

    /// Writes the membership of a volume to an explicit value.
    ///
    /// Unlike [`VolumeSet::toggle`], this reports whether anything actually
    /// changed, which lets UI checkbox handlers stay quiet when a programmatic
    /// update re-applies the current state.
    ///
    /// # Arguments
    ///
    /// * `number` - Volume number to write.
    /// * `owned` - Desired membership.
    ///
    /// # Returns
    ///
    /// `true` if the set changed.
    pub fn set_owned(&mut self, number: u16, owned: bool) -> bool {
        if !Self::in_range(number) {
            return false;
        }
        match (self.numbers.binary_search(&number), owned) {
            (Ok(_), true) | (Err(_), false) => false,
            (Ok(index), false) => {
                self.numbers.remove(index);
                true
            }
            (Err(index), true) => {
                self.numbers.insert(index, number);
                true
            }
        }
    }

    /// Marks every volume in the series as owned.
    pub fn mark_all(&mut self) {
        self.numbers = all_volumes().collect();
    }

    /// Removes every volume from the set.
    pub fn clear(&mut self) {
        self.numbers.clear();
    }

    /// Replaces the set with its complement within the series range.
    ///
    /// Applying the inversion twice returns to the original set.
    pub fn invert(&mut self) {
        let inverted: Vec<u16> = all_volumes()
            .filter(|n| self.numbers.binary_search(n).is_err())
            .collect();
        self.numbers = inverted;
    }

    /// Computes the missing volumes.
    ///
    /// # Returns
    ///
    /// The sorted complement of the owned set within the series range.
    #[must_use]
    pub fn missing(&self) -> Vec<u16> {
        all_volumes()
            .filter(|n| self.numbers.binary_search(n).is_err())
            .collect()
    }

    /// Number of owned volumes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Whether no volume is owned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Whether every volume in the series is owned.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.numbers.len() == usize::from(SERIES_TOTAL)
    }

    /// Borrows the sorted owned numbers.
    #[must_use]
    pub fn as_slice(&self) -> &[u16] {
        &self.numbers
    }

    /// Iterates over the owned numbers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.numbers.iter().copied()
    }
}
