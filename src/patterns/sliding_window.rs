//! Maximum sum over fixed-width windows.
//!
//! The first window's sum is computed directly and doubles as the initial
//! maximum. Every later window is derived from its predecessor by removing
//! the element that leaves and adding the one that enters, so the whole scan
//! is one pass with O(1) extra space.
//!
//! The maximum starts at the first window's sum, never at zero, so inputs
//! where every window is negative report the correct (negative) answer.
//!
//! Integer sums are carried with wrapping arithmetic. An intermediate value
//! such as `sum - leaving` may fall outside `T` even though the next window
//! sum fits, and the wrapped result is exact once it does. Window sums that
//! themselves overflow `T` wrap as well.

use crate::error::AlgoError;
use crate::traits::WindowSum;
use crate::window::Window;

/// Largest sum of any `width` consecutive elements of `s`.
///
/// Returns `None` when the question has no answer: `width == 0` or
/// `width > s.len()`.
///
/// ```
/// use algo_drills::patterns::sliding_window::max_subarray_sum;
///
/// assert_eq!(max_subarray_sum(&[1, 2, 5, 2, 8, 1, 5], 2), Some(10));
/// assert_eq!(max_subarray_sum(&[4, 2, 1, 6], 1), Some(6));
/// assert_eq!(max_subarray_sum(&[-3, -1, -7], 2), Some(-4));
/// assert_eq!(max_subarray_sum(&[1, 2], 3), None);
/// ```
pub fn max_subarray_sum<T>(s: &[T], width: usize) -> Option<T>
where
    T: WindowSum,
{
    max_window(s, width).ok().map(|w| w.sum)
}

/// Like [`max_subarray_sum`] but also reports where the best window is.
///
/// Ties resolve to the earliest window. Invalid widths are reported as
/// [`AlgoError::ZeroWidth`] or [`AlgoError::WindowTooWide`].
pub fn max_window<T>(s: &[T], width: usize) -> Result<Window<T>, AlgoError>
where
    T: WindowSum,
{
    if width == 0 {
        return Err(AlgoError::ZeroWidth);
    }
    if width > s.len() {
        return Err(AlgoError::WindowTooWide {
            width,
            len: s.len(),
        });
    }

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("slide_window", len = s.len(), width);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut sum = s[1..width]
        .iter()
        .fold(s[0], |acc, &x| acc.wrapping_add(x));
    let mut best = Window {
        start: 0,
        end: width,
        sum,
    };

    for end in width..s.len() {
        sum = sum.wrapping_sub(s[end - width]).wrapping_add(s[end]);
        if sum > best.sum {
            best = Window {
                start: end + 1 - width,
                end: end + 1,
                sum,
            };
        }
    }

    Ok(best)
}
