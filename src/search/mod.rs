//! Searching routines.
//!
//! - [`linear`]    : first-match scan over any sequence, O(n).
//! - [`binary`]    : halving search over a sorted sequence, O(log n).
//! - [`substring`] : naive count of (possibly overlapping) needle occurrences.

pub mod binary;
pub mod linear;
pub mod substring;
