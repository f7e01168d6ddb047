//! Two-pointer search for a pair summing to zero.
//!
//! On a sorted slice, start one pointer at each end and look at the sum of
//! the two pointed-to elements:
//!
//! - zero: done
//! - positive: the right element is too large for any remaining partner, so
//!   move the right pointer left
//! - negative: the left element is too small, so move the left pointer right
//!
//! The scan stops when the pointers meet. An element is never paired with
//! itself, so `[0]` has no pair while `[0, 0]` does.
//!
//! When several zero-sum pairs exist the one returned is the first met in this
//! scan order, which is the pair with the widest index span: for
//! `[-3, -1, 1, 3]` that is `(-3, 3)`, not `(-1, 1)`.

use std::cmp::Ordering;

use crate::error::{ensure_sorted, first_descent, AlgoError};
use crate::traits::Numeric;

/// First zero-sum pair `(left, right)` found by the two-pointer scan.
///
/// `s` must be sorted ascending.
///
/// ```
/// use algo_drills::patterns::two_pointer::zero_sum_pair;
///
/// assert_eq!(zero_sum_pair(&[-3, -2, -1, 0, 1, 2, 3]), Some((-3, 3)));
/// assert_eq!(zero_sum_pair(&[-2, 0, 1, 3]), None);
/// ```
pub fn zero_sum_pair<T: Numeric>(s: &[T]) -> Option<(T, T)> {
    zero_sum_pair_indices(s).map(|(i, j)| (s[i], s[j]))
}

/// Indices `(i, j)` with `i < j` of the first zero-sum pair found by the scan.
pub fn zero_sum_pair_indices<T: Numeric>(s: &[T]) -> Option<(usize, usize)> {
    debug_assert!(first_descent(s).is_none(), "zero_sum_pair input must be sorted");

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("zero_sum_scan", len = s.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    if s.len() < 2 {
        return None;
    }

    let mut left = 0usize;
    let mut right = s.len() - 1;

    while left < right {
        match sign_of_sum(s[left], s[right]) {
            Ordering::Equal => return Some((left, right)),
            Ordering::Greater => right -= 1,
            Ordering::Less => left += 1,
        }
    }

    None
}

/// Like [`zero_sum_pair`] but first verifies that `s` is sorted ascending.
pub fn checked_zero_sum_pair<T: Numeric>(s: &[T]) -> Result<Option<(T, T)>, AlgoError> {
    ensure_sorted(s)?;
    Ok(zero_sum_pair(s))
}

/// Sign of `a + b` relative to zero, without overflowing.
///
/// If the addition overflows, both operands share a sign and the true sum
/// has that sign too.
#[inline]
fn sign_of_sum<T: Numeric>(a: T, b: T) -> Ordering {
    match a.checked_add(b) {
        Some(sum) => sum.cmp(&T::ZERO),
        None if a.is_negative() => Ordering::Less,
        None => Ordering::Greater,
    }
}
