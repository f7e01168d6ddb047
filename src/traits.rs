//! Arithmetic trait shared by the pair-finding and frequency routines.
//!
//! The two-pointer scan needs a zero to compare sums against and a way to add
//! two elements without panicking on overflow. The frequency check needs a
//! square that reports overflow instead of wrapping. [`Numeric`] bundles
//! exactly those primitives and is implemented for every primitive integer.
//!
//! The sliding window only needs `+`, `-` and ordering, so [`WindowSum`] is
//! implemented for floats as well. Integer running sums wrap: a partial sum
//! may leave the range of `T` mid-slide even when every window sum fits, and
//! wrapping arithmetic lands back on the exact value once it does.
//!
//! [`ParallelSafe`] is `Send + Sync` with the `parallel` feature and empty
//! without it, so the sequential build puts no thread bounds on callers.

/// Integer-like element type usable by [`crate::patterns::two_pointer`] and
/// [`crate::patterns::frequency`].
pub trait Numeric: Copy + Ord {
    /// Additive identity.
    const ZERO: Self;

    /// `self + rhs`, or `None` on overflow.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `self * rhs`, or `None` on overflow.
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// True when `self < ZERO`. Always false for unsigned types.
    #[inline]
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }

    /// `self * self`, or `None` on overflow.
    #[inline]
    fn checked_square(self) -> Option<Self> {
        self.checked_mul(self)
    }
}

macro_rules! impl_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0;

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }
            }
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Element type the sliding window can keep a running sum of.
pub trait WindowSum: Copy + PartialOrd {
    /// `self + rhs`, wrapping on integer overflow.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// `self - rhs`, wrapping on integer overflow.
    fn wrapping_sub(self, rhs: Self) -> Self;
}

macro_rules! impl_window_sum_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl WindowSum for $t {
                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_window_sum_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl WindowSum for $t {
                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    self - rhs
                }
            }
        )*
    };
}

impl_window_sum_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_window_sum_float!(f32, f64);

/// Thread bounds needed by the rayon code paths.
#[cfg(feature = "parallel")]
pub trait ParallelSafe: Send + Sync {}

#[cfg(feature = "parallel")]
impl<T: Send + Sync + ?Sized> ParallelSafe for T {}

/// Thread bounds needed by the rayon code paths (none without `parallel`).
#[cfg(not(feature = "parallel"))]
pub trait ParallelSafe {}

#[cfg(not(feature = "parallel"))]
impl<T: ?Sized> ParallelSafe for T {}

#[cfg(test)]
mod tests {
    use super::{Numeric, WindowSum};

    #[test]
    fn zero_and_sign() {
        assert_eq!(<i32 as Numeric>::ZERO, 0);
        assert!((-3i64).is_negative());
        assert!(!0i8.is_negative());
        assert!(!u32::MAX.is_negative());
    }

    #[test]
    fn checked_ops_report_overflow() {
        assert_eq!(Numeric::checked_add(i8::MAX, 1), None);
        assert_eq!(Numeric::checked_add(-5i8, 3), Some(-2));
        assert_eq!(16u8.checked_square(), None);
        assert_eq!(15u8.checked_square(), Some(225));
        assert_eq!((-12i16).checked_square(), Some(144));
    }

    #[test]
    fn window_sums_wrap_back_into_range() {
        let up = WindowSum::wrapping_add(i32::MAX, 1);
        assert_eq!(up, i32::MIN);
        assert_eq!(WindowSum::wrapping_sub(up, 1), i32::MAX);
        assert_eq!(WindowSum::wrapping_add(1.5f64, -0.25), 1.25);
    }
}
