//! Frequency-counter comparison of two sequences.
//!
//! Instead of searching `b` once per element of `a` (O(n²)), build a table of
//! occurrence counts for each sequence and compare the tables (O(n)).
//!
//! [`same_squared`] folds A's table into a table of squares (so `-2` and `2`
//! both count towards `4`) and only looks those keys up in B's table. Because
//! the lengths are checked to be equal first, matching every square with an
//! identical count already accounts for all of B's elements, so B cannot hold
//! extra keys.

use std::collections::HashMap;
use std::hash::Hash;

use crate::traits::{Numeric, ParallelSafe};

#[cfg(feature = "parallel")]
use rayon::join;

/// Occurrence count of every distinct element of `s`.
pub fn frequency_table<T: Hash + Eq + Copy>(s: &[T]) -> HashMap<T, usize> {
    let mut table = HashMap::with_capacity(s.len());
    for &value in s {
        *table.entry(value).or_insert(0) += 1;
    }
    table
}

/// True if `b` holds exactly the squares of `a`'s elements, with matching
/// multiplicities, in any order.
///
/// Roots that share a square are pooled: `k` and `-k` both count towards
/// `k * k`. So `[-2, 2]` matches `[4, 4]` even though neither `-2` nor `2`
/// alone occurs twice, and `[-2, 2, 3]` does not match `[4, 9, 7]`.
///
/// ```
/// use algo_drills::patterns::frequency::same_squared;
///
/// assert!(same_squared(&[1, 2, 3], &[4, 1, 9]));
/// assert!(!same_squared(&[1, 2, 3], &[1, 9]));
/// assert!(!same_squared(&[1, 2, 1], &[4, 4, 1]));
/// assert!(same_squared(&[-2, 2], &[4, 4]));
/// ```
pub fn same_squared<T>(a: &[T], b: &[T]) -> bool
where
    T: Numeric + Hash + ParallelSafe,
{
    if a.len() != b.len() {
        return false;
    }

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("frequency_tables", len = a.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    #[cfg(feature = "parallel")]
    let (freq_a, freq_b) = join(|| frequency_table(a), || frequency_table(b));
    #[cfg(not(feature = "parallel"))]
    let (freq_a, freq_b) = (frequency_table(a), frequency_table(b));

    let mut squares = HashMap::with_capacity(freq_a.len());
    for (key, count) in freq_a {
        match key.checked_square() {
            Some(square) => *squares.entry(square).or_insert(0) += count,
            // b holds values of the same type, so it cannot hold this square.
            None => return false,
        }
    }

    squares
        .iter()
        .all(|(square, count)| freq_b.get(square) == Some(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_examples() {
        assert!(same_squared(&[1, 2, 3], &[4, 1, 9]));
        assert!(!same_squared(&[1, 2, 3], &[1, 9]));
        assert!(!same_squared(&[1, 2, 1], &[4, 4, 1]));
    }

    #[test]
    fn empty_inputs_match() {
        assert!(same_squared::<i32>(&[], &[]));
    }

    #[test]
    fn negative_roots_share_squares() {
        assert!(same_squared(&[-2, 2, 3], &[4, 9, 4]));
        assert!(!same_squared(&[-2, 2, 3], &[4, 9, 9]));
        // Both roots map to 4, so a stray 7 in b is caught.
        assert!(!same_squared(&[-2, 2, 3], &[4, 9, 7]));
        // Pooled: two roots of 4 against two 4s.
        assert!(same_squared(&[-2, 2], &[4, 4]));
        assert!(!same_squared(&[-2, 2], &[4, 16]));
    }

    #[test]
    fn overflowing_square_never_matches() {
        assert!(!same_squared(&[16u8], &[0]));
        assert!(same_squared(&[15u8], &[225]));
    }

    #[test]
    fn table_counts() {
        let t = frequency_table(&[3, 1, 3, 3, 2]);
        assert_eq!(t.len(), 3);
        assert_eq!(t[&3], 3);
        assert_eq!(t[&1], 1);
        assert_eq!(t[&2], 1);
    }
}
