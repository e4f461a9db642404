//! The algorithm under measurement.

use crate::dataset::Element;

/// Signed index conventionally used to report a failed search.
pub const NOT_FOUND: isize = -1;

/// Returns the index of the first element of `haystack` equal to `key`.
///
/// Elements are compared from index 0 upward and the scan stops at the first match; no ordering
/// of the input is assumed.
#[inline(never)]
pub fn linear_search(haystack: &[Element], key: Element) -> Option<usize> {
    for (i, &value) in haystack.iter().enumerate() {
        if value == key {
            return Some(i);
        }
    }
    None
}

/// Converts a search result into a signed index, using [`NOT_FOUND`] for a miss.
pub fn as_signed_index(result: Option<usize>) -> isize {
    match result {
        Some(i) => i as isize,
        None => NOT_FOUND,
    }
}

// TESTS
// ================================================================================================
