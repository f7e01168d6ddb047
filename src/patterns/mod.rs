//! Array problem-solving patterns.
//!
//! Each module replaces a nested-loop O(n²) or O(n·w) solution with a
//! single linear pass:
//! - [`sliding_window`] : maximum sum over fixed-width contiguous windows.
//! - [`two_pointer`]    : zero-sum pair in a sorted sequence.
//! - [`frequency`]      : squared-value correspondence via frequency tables.

pub mod frequency;
pub mod sliding_window;
pub mod two_pointer;
