//! Binary search over a sorted slice.
//!
//! The search keeps a half-open interval `[low, high)` that is known to
//! contain the target if the target is present at all. Each probe compares
//! the element at [`midpoint`] with the target and discards the half that
//! cannot contain it:
//!
//! - element `<` target: `low = mid + 1`
//! - element `>` target: `high = mid`
//!
//! Both updates strictly shrink the interval, so the loop ends after at most
//! `floor(log2(n)) + 1` probes, including when the target lies below the
//! smallest or above the largest element.
//!
//! Sortedness is the caller's responsibility for [`binary_search`] and
//! [`binary_search_by`] (checked only by `debug_assert!`). Use
//! [`checked_binary_search`] to validate it up front at O(n) cost.

use std::cmp::Ordering;

use crate::error::{ensure_sorted, first_descent, AlgoError};
use crate::utils::midpoint;

/// Search a slice sorted ascending for `target`.
///
/// Returns the index of a matching element, or `None` if there is none. With
/// duplicate matches any one of their indices may be returned.
///
/// ```
/// use algo_drills::search::binary::binary_search;
///
/// let arr = [2, 5, 6, 9, 13, 15, 28, 30];
/// assert_eq!(binary_search(&arr, &15), Some(5));
/// assert_eq!(binary_search(&arr, &1), None);
/// assert_eq!(binary_search(&arr, &31), None);
/// ```
pub fn binary_search<T: Ord>(s: &[T], target: &T) -> Option<usize> {
    debug_assert!(first_descent(s).is_none(), "binary_search input must be sorted");
    binary_search_by(s, |elem| elem.cmp(target))
}

/// Search a sorted slice with a comparator.
///
/// `compare(elem)` must report how `elem` orders relative to the target
/// (`Less` if `elem` comes before it). The slice must be sorted consistently
/// with that comparator.
pub fn binary_search_by<T, F>(s: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("binary_search", len = s.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut low = 0usize;
    let mut high = s.len();

    while low < high {
        let mid = midpoint(low, high);
        #[cfg(feature = "tracing")]
        tracing::trace!(low, mid, high, "probe");
        match compare(&s[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}

/// Like [`binary_search`] but first verifies that `s` is sorted ascending.
///
/// Returns `Err(AlgoError::Unsorted { index })` naming the first descent
/// instead of risking a wrong answer on unsorted input.
pub fn checked_binary_search<T: Ord>(s: &[T], target: &T) -> Result<Option<usize>, AlgoError> {
    ensure_sorted(s)?;
    Ok(binary_search_by(s, |elem| elem.cmp(target)))
}
