//! Search filtering over the fixed volume range.
//!
//! The checklist search box accepts free text but only digits are
//! meaningful, matching the numeric input of the search field. Queries are
//! sanitized down to their digits and then matched as substrings of the
//! decimal rendering of each volume number.

use regex::Regex;

use crate::collection::set::all_volumes;

/// Strips non-digit characters from raw search input.
///
/// The sanitizer owns its compiled pattern so the regex is built once per
/// search surface rather than per keystroke.
#[derive(Debug)]
pub struct QuerySanitizer {
    non_digits: Regex,
}

impl QuerySanitizer {
    /// Creates a new sanitizer with the digit pattern compiled.
    ///
    /// # Returns
    ///
    /// A new `QuerySanitizer` instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            non_digits: Regex::new(r"[^0-9]").unwrap(),
        }
    }

    /// Reduces raw entry text to its digits.
    ///
    /// # Arguments
    ///
    /// * `raw` - Raw text from the search entry.
    ///
    /// # Returns
    ///
    /// The digits of `raw`, in order, with surrounding whitespace removed.
    #[must_use]
    pub fn sanitize(&self, raw: &str) -> String {
        self.non_digits.replace_all(raw.trim(), "").into_owned()
    }
}

impl Default for QuerySanitizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks whether a volume number matches a sanitized query.
///
/// An empty query matches everything; otherwise the query must appear as a
/// substring of the decimal rendering of the number, so "10" matches 10,
/// 100 through 109, and 110.
///
/// # Arguments
///
/// * `number` - Volume number to test.
/// * `query` - Sanitized (digits-only) query.
///
/// # Returns
///
/// `true` if the volume should be shown for this query.
#[must_use]
pub fn volume_matches(number: u16, query: &str) -> bool {
    query.is_empty() || number.to_string().contains(query)
}

/// Filters the full volume range by a sanitized query.
///
/// # Arguments
///
/// * `query` - Sanitized (digits-only) query.
///
/// # Returns
///
/// The matching volume numbers in ascending order.
#[must_use]
pub fn filter_volumes(query: &str) -> Vec<u16> {
    all_volumes().filter(|n| volume_matches(*n, query)).collect()
}

#[cfg(test)]
mod tests {
    use crate::collection::{
        filter::{QuerySanitizer, filter_volumes, volume_matches},
        set::SERIES_TOTAL,
    };

    #[test]
    fn test_sanitize_strips_non_digits() {
        let sanitizer = QuerySanitizer::new();
        assert_eq!(sanitizer.sanitize("  10 "), "10");
        assert_eq!(sanitizer.sanitize("vol 42"), "42");
        assert_eq!(sanitizer.sanitize("abc"), "");
        assert_eq!(sanitizer.sanitize("1a2b3"), "123");
        assert_eq!(sanitizer.sanitize(""), "");
    }

    #[test]
    fn test_empty_query_matches_full_range() {
        let matches = filter_volumes("");
        assert_eq!(matches.len(), usize::from(SERIES_TOTAL));
        assert_eq!(matches.first(), Some(&1));
        assert_eq!(matches.last(), Some(&SERIES_TOTAL));
    }

    #[test]
    fn test_substring_match_for_two_digit_query() {
        let matches = filter_volumes("10");
        assert_eq!(
            matches,
            vec![10, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110]
        );
    }

    #[test]
    fn test_exact_three_digit_query() {
        assert_eq!(filter_volumes("111"), vec![111]);
    }

    #[test]
    fn test_unmatchable_query_yields_nothing() {
        assert!(filter_volumes("999").is_empty());
    }

    #[test]
    fn test_volume_matches_single_digit() {
        assert!(volume_matches(7, "7"));
        assert!(volume_matches(17, "7"));
        assert!(volume_matches(70, "7"));
        assert!(!volume_matches(12, "7"));
    }
}
