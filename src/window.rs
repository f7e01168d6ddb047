//! Window type returned by the sliding-window routines.
//!
//! A `Window` represents a contiguous range [start, end) of the input and
//! the sum of the elements inside it.

/// Contiguous, fixed-width subrange of a sequence together with its sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window<T> {
    /// Inclusive start index.
    pub start: usize,
    /// Exclusive end index; the window covers [start, end).
    pub end: usize,
    /// Sum of the elements in [start, end).
    pub sum: T,
}

impl<T> Window<T> {
    /// Width of the window in elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the window covers no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the covered elements out of the sequence the window was taken from.
    ///
    /// # Panics
    /// Panics if the window does not lie inside `s`.
    #[inline]
    pub fn slice<'a, U>(&self, s: &'a [U]) -> &'a [U] {
        &s[self.start..self.end]
    }
}
