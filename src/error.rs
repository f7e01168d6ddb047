//! Error type shared by the checked entry points.
//!
//! Not-found results are never errors: every search returns `Option`.
//! [`AlgoError`] is reserved for inputs that violate a routine's
//! precondition, where answering anyway would produce a wrong number.

use thiserror::Error;

/// Precondition violations reported by the `checked_*` / `try`-style routines.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum AlgoError {
    /// Substring counting was asked to look for an empty needle.
    #[error("needle must not be empty")]
    EmptyNeedle,
    /// Input that must be sorted ascending is not.
    #[error("input is not sorted: element {index} is greater than element {}", .index + 1)]
    Unsorted {
        /// Position of the first element that is greater than its successor.
        index: usize,
    },
    /// A sliding window of width zero has no sum.
    #[error("window width must be positive")]
    ZeroWidth,
    /// The window does not fit inside the input.
    #[error("window width {width} exceeds input length {len}")]
    WindowTooWide {
        /// Requested window width.
        width: usize,
        /// Length of the input sequence.
        len: usize,
    },
}

/// Find the first descent in `s`, i.e. the smallest `i` with `s[i] > s[i + 1]`.
pub(crate) fn first_descent<T: PartialOrd>(s: &[T]) -> Option<usize> {
    s.windows(2).position(|w| w[0] > w[1])
}

/// Validate that `s` is sorted ascending.
pub(crate) fn ensure_sorted<T: PartialOrd>(s: &[T]) -> Result<(), AlgoError> {
    match first_descent(s) {
        Some(index) => Err(AlgoError::Unsorted { index }),
        None => Ok(()),
    }
}
