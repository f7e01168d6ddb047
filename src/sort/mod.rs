//! Sorting routines.
//!
//! - [`bubble`] : in-place, stable bubble sort with early exit.

pub mod bubble;
