//! Bubble sort with early exit.
//!
//! Each pass walks the unsorted prefix comparing adjacent pairs and swaps the
//! ones that are out of order. The largest unsorted element is carried to the
//! end of the prefix, so after pass `k` the last `k` elements are final and
//! the next pass can stop one position earlier.
//!
//! A pass that performs no swap proves the prefix is already sorted and ends
//! the routine. Sorted input therefore costs one pass of `n - 1` comparisons.
//!
//! Only strictly out-of-order pairs (`Greater`) are swapped, which keeps equal
//! elements in their original relative order: the sort is stable.
//!
//! Sorting happens in place. Clone the input first if the original order is
//! still needed.

use std::cmp::Ordering;

/// Work performed by one bubble sort call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortReport {
    /// Number of passes over the unsorted prefix, including the final
    /// swap-free pass that triggers the early exit.
    pub passes: usize,
    /// Number of adjacent-pair comparisons.
    pub comparisons: usize,
    /// Number of swaps.
    pub swaps: usize,
}

/// Sort `s` ascending in place.
///
/// ```
/// use algo_drills::sort::bubble::bubble_sort;
///
/// let mut v = vec![37, 45, 29, 8];
/// let report = bubble_sort(&mut v);
/// assert_eq!(v, [8, 29, 37, 45]);
/// assert_eq!(report.passes, 3);
/// ```
pub fn bubble_sort<T: Ord>(s: &mut [T]) -> SortReport {
    bubble_sort_by(s, |a, b| a.cmp(b))
}

/// Sort `s` in place by `compare`, which must define a total order.
pub fn bubble_sort_by<T, F>(s: &mut [T], mut compare: F) -> SortReport
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut report = SortReport::default();

    // Pairs (j, j + 1) with j < end are still unsorted.
    for end in (1..s.len()).rev() {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("bubble_pass", pass = report.passes, end);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        report.passes += 1;
        let mut swapped = false;

        for j in 0..end {
            report.comparisons += 1;
            if compare(&s[j], &s[j + 1]) == Ordering::Greater {
                s.swap(j, j + 1);
                report.swaps += 1;
                swapped = true;
            }
        }

        if !swapped {
            #[cfg(feature = "tracing")]
            tracing::trace!(passes = report.passes, "no swaps, stopping early");
            break;
        }
    }

    report
}
