//! Assorted utilities and helpers.

/// Midpoint of the half-open interval `[low, high)` used by binary search.
///
/// Computed as `low + (high - low) / 2` so it never overflows, and for a
/// non-empty interval the result always satisfies `low <= mid < high`.
#[inline]
pub fn midpoint(low: usize, high: usize) -> usize {
    debug_assert!(low <= high, "interval bounds crossed: {low} > {high}");
    low + (high - low) / 2
}
