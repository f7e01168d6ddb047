//! Algorithm Drills
//!
//! Small, independent implementations of the classic introductory algorithm
//! patterns, each written as a pure function (or an in-place sort) with an
//! explicit contract for not-found results and invalid input.
//!
//! ## Routines
//! - [`search::linear`]           : first match by equality or predicate, O(n).
//! - [`search::binary`]           : halving search over sorted input, O(log n).
//! - [`search::substring`]        : naive overlapping occurrence count, O(n·m).
//! - [`sort::bubble`]             : stable in-place bubble sort with early exit.
//! - [`patterns::sliding_window`] : maximum fixed-width window sum, O(n).
//! - [`patterns::two_pointer`]    : zero-sum pair in sorted input, O(n).
//! - [`patterns::frequency`]      : squared correspondence via frequency tables, O(n).
//! - [`complexity`]               : the O(n) vs O(1) "add up to n" pair and
//!   growth-class helpers.
//!
//! ## Conventions
//! - "Not found" is `None`, never an error.
//! - Inputs that break a precondition (unsorted where sorted is required, a
//!   window wider than the input, an empty needle) produce `None` or an
//!   [`AlgoError`], never a silently wrong answer.
//! - No routine keeps state between calls.
//!
//! ## Quick start
//! ```
//! use algo_drills::{binary_search, bubble_sort, max_subarray_sum, zero_sum_pair};
//!
//! let mut v = vec![9, -3, 4, 3, -1];
//! let report = bubble_sort(&mut v);
//! assert_eq!(v, [-3, -1, 3, 4, 9]);
//! assert!(report.passes >= 1);
//!
//! assert_eq!(binary_search(&v, &4), Some(3));
//! assert_eq!(zero_sum_pair(&v), Some((-3, 3)));
//! assert_eq!(max_subarray_sum(&v, 2), Some(13));
//! ```
//!
//! ## Features
//! - `parallel` : scan substring offsets and build frequency tables with rayon.
//! - `tracing`  : emit `tracing` spans and events from the routines.
//! - `heavy`    : enable the large stress tests.

pub mod complexity;
pub mod error;
pub mod patterns;
pub mod search;
pub mod sort;
pub mod traits;
pub mod utils;
pub mod window;

pub use crate::error::AlgoError;
pub use crate::patterns::frequency::{frequency_table, same_squared};
pub use crate::patterns::sliding_window::{max_subarray_sum, max_window};
pub use crate::patterns::two_pointer::{zero_sum_pair, zero_sum_pair_indices};
pub use crate::search::binary::{binary_search, binary_search_by, checked_binary_search};
pub use crate::search::linear::{linear_search, linear_search_by};
pub use crate::search::substring::{count_occurrences, count_occurrences_in};
pub use crate::sort::bubble::{bubble_sort, bubble_sort_by, SortReport};
pub use crate::traits::{Numeric, ParallelSafe, WindowSum};
pub use crate::window::Window;
