//! Naive substring occurrence counting.
//!
//! For every offset where the needle could still fit, compare the needle
//! against the haystack element by element and count the offset only if every
//! position agrees. Overlapping occurrences are all counted, so `"aa"` occurs
//! three times in `"aaaa"`. Worst case O(n·m) comparisons.
//!
//! An empty needle is rejected with [`AlgoError::EmptyNeedle`]; it has no
//! single sensible count.

use crate::error::AlgoError;
use crate::traits::ParallelSafe;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Count occurrences of `needle` in `haystack`, overlaps included.
///
/// Matching is done on UTF-8 bytes. UTF-8 is self-synchronising, so a byte
/// match of a valid needle can only begin on a char boundary and the count is
/// the same as a char-by-char comparison.
///
/// ```
/// use algo_drills::search::substring::count_occurrences;
///
/// assert_eq!(count_occurrences("lorie loled", "lol"), Ok(1));
/// assert_eq!(count_occurrences("lorie loled", "lo"), Ok(2));
/// assert_eq!(count_occurrences("aaaa", "aa"), Ok(3));
/// ```
pub fn count_occurrences(haystack: &str, needle: &str) -> Result<usize, AlgoError> {
    count_occurrences_in(haystack.as_bytes(), needle.as_bytes())
}

/// Count occurrences of `needle` in `haystack` for any comparable elements.
///
/// A needle longer than the haystack simply has zero occurrences. Elements
/// must be `Sync` only when the `parallel` feature is enabled.
pub fn count_occurrences_in<T>(haystack: &[T], needle: &[T]) -> Result<usize, AlgoError>
where
    T: PartialEq + ParallelSafe,
{
    if needle.is_empty() {
        return Err(AlgoError::EmptyNeedle);
    }
    if needle.len() > haystack.len() {
        return Ok(0);
    }

    let last_start = haystack.len() - needle.len();

    #[cfg(feature = "parallel")]
    let count = (0..=last_start)
        .into_par_iter()
        .filter(|&start| matches_at(haystack, needle, start))
        .count();

    #[cfg(not(feature = "parallel"))]
    let count = (0..=last_start)
        .filter(|&start| matches_at(haystack, needle, start))
        .count();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        haystack_len = haystack.len(),
        needle_len = needle.len(),
        count,
        "counted occurrences"
    );

    Ok(count)
}

/// True if `needle` agrees with `haystack[start..start + needle.len()]`
/// at every position. Bails out at the first mismatch.
#[inline]
fn matches_at<T: PartialEq>(haystack: &[T], needle: &[T], start: usize) -> bool {
    for (offset, n) in needle.iter().enumerate() {
        if haystack[start + offset] != *n {
            return false;
        }
    }
    true
}
