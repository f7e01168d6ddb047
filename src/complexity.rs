//! Growth-rate helpers.
//!
//! [`add_up_to_iterative`] and [`add_up_to_closed_form`] compute the same
//! value, `1 + 2 + ... + n`, with O(n) and O(1) work respectively. They are
//! the smallest possible demonstration that two correct routines can have
//! very different costs.
//!
//! [`Complexity`] names the growth classes the rest of the crate falls into.
//! The `scale_probe` binary uses it to print the expected slowdown between
//! two input sizes next to the measured one.

use std::fmt;

/// Sum of `1..=n` by looping over every term. O(n) time.
pub fn add_up_to_iterative(n: u64) -> u128 {
    let mut total = 0u128;
    for i in 1..=n {
        total += i as u128;
    }
    total
}

/// Sum of `1..=n` via `n(n + 1) / 2`. O(1) time.
///
/// Evaluated in `u128`, which cannot overflow for any `u64` input.
#[inline]
pub fn add_up_to_closed_form(n: u64) -> u128 {
    let n = n as u128;
    n * (n + 1) / 2
}

/// Asymptotic growth class of a routine's running time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Complexity {
    /// O(1)
    Constant,
    /// O(log n)
    Logarithmic,
    /// O(n)
    Linear,
    /// O(n²)
    Quadratic,
}

impl Complexity {
    /// Big-O label, e.g. `"O(log n)"`.
    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Constant => "O(1)",
            Complexity::Logarithmic => "O(log n)",
            Complexity::Linear => "O(n)",
            Complexity::Quadratic => "O(n^2)",
        }
    }

    /// Unitless cost of an input of size `n` under this class.
    ///
    /// Only ratios of two `growth` values are meaningful.
    pub fn growth(&self, n: usize) -> f64 {
        let n = n.max(1) as f64;
        match self {
            Complexity::Constant => 1.0,
            Complexity::Logarithmic => n.log2().max(1.0),
            Complexity::Linear => n,
            Complexity::Quadratic => n * n,
        }
    }

    /// Expected slowdown when the input grows from `from` to `to` elements.
    pub fn expected_ratio(&self, from: usize, to: usize) -> f64 {
        self.growth(to) / self.growth(from)
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_sums_agree_on_small_n() {
        for n in 0..2_000u64 {
            assert_eq!(add_up_to_iterative(n), add_up_to_closed_form(n), "n={n}");
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(add_up_to_closed_form(0), 0);
        assert_eq!(add_up_to_closed_form(1), 1);
        assert_eq!(add_up_to_closed_form(100), 5050);
        assert_eq!(add_up_to_closed_form(1_000_000_000), 500_000_000_500_000_000);
    }

    #[test]
    fn closed_form_handles_u64_max() {
        // n + 1 == 2^64, so the sum is n * 2^63.
        assert_eq!(add_up_to_closed_form(u64::MAX), (u64::MAX as u128) << 63);
    }

    #[test]
    fn growth_ratios() {
        assert_eq!(Complexity::Constant.expected_ratio(10, 10_000), 1.0);
        assert_eq!(Complexity::Linear.expected_ratio(1_000, 4_000), 4.0);
        assert_eq!(Complexity::Quadratic.expected_ratio(100, 200), 4.0);
        assert_eq!(Complexity::Logarithmic.expected_ratio(256, 65_536), 2.0);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Complexity::Logarithmic.to_string(), "O(log n)");
        assert_eq!(format!("{}", Complexity::Quadratic), "O(n^2)");
    }
}
