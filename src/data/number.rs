//! Instances for the primitive numeric types.
//!
//! Each instance is a unit struct implementing its class for every type of
//! the sealed [`Number`] trait, so `NumberSum` combines `u8`s, `i64`s and
//! `f64`s alike.
//!
//! Integer addition and multiplication wrap on overflow. Floats are ordered
//! with [`f64::total_cmp`], which puts `-0.0` before `0.0` and sorts NaNs
//! to the ends. Their bounds are the outermost NaNs of that order, so every
//! float, NaN included, lies between them.
//!
//! # Examples
//!
//! ```rust
//! use kinded::prelude::*;
//!
//! assert_eq!(NumberSum.combine_all(vec![1_u64, 2, 3]), 6);
//! assert_eq!(NumberMultiply.combine_all(vec![2.0, 4.0]), 8.0);
//! assert_eq!(NumberMax.combine_all(vec![-3_i8, 7, 2]), 7);
//! assert_eq!(NumberMin.combine_all(Vec::<u16>::new()), u16::MAX);
//! ```

use std::cmp::Ordering;

use crate::typeclass::{Bounded, Monoid, Order, Semigroup};

mod sealed {
    pub trait Sealed {}
}

/// The primitive numeric types the number instances are defined for.
///
/// This trait is sealed.
pub trait Number: sealed::Sealed + Copy + 'static {
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;
    /// The least value under [`NumberOrder`].
    const LOWEST: Self;
    /// The greatest value under [`NumberOrder`].
    const HIGHEST: Self;

    /// Adds, wrapping for integers.
    fn plus(self, other: Self) -> Self;

    /// Multiplies, wrapping for integers.
    fn times(self, other: Self) -> Self;

    /// Compares as a total order.
    fn total_order(&self, other: &Self) -> Ordering;
}

macro_rules! impl_integer {
    ($($number:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $number {}

            impl Number for $number {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const LOWEST: Self = <$number>::MIN;
                const HIGHEST: Self = <$number>::MAX;

                #[inline]
                fn plus(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }

                #[inline]
                fn times(self, other: Self) -> Self {
                    self.wrapping_mul(other)
                }

                #[inline]
                fn total_order(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )+
    };
}

macro_rules! impl_float {
    ($($number:ty => $bits:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $number {}

            impl Number for $number {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                // Negative and positive quiet NaNs with every payload bit set.
                const LOWEST: Self = <$number>::from_bits(<$bits>::MAX);
                const HIGHEST: Self = <$number>::from_bits(<$bits>::MAX >> 1);

                #[inline]
                fn plus(self, other: Self) -> Self {
                    self + other
                }

                #[inline]
                fn times(self, other: Self) -> Self {
                    self * other
                }

                #[inline]
                fn total_order(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32 => u32, f64 => u64);

/// The additive semigroup and monoid; the identity is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NumberSum;

impl<N: Number> Semigroup<N> for NumberSum {
    #[inline]
    fn combine(&self, first: N, second: N) -> N {
        first.plus(second)
    }
}

impl<N: Number> Monoid<N> for NumberSum {
    #[inline]
    fn empty(&self) -> N {
        N::ZERO
    }
}

/// The multiplicative semigroup and monoid; the identity is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NumberMultiply;

impl<N: Number> Semigroup<N> for NumberMultiply {
    #[inline]
    fn combine(&self, first: N, second: N) -> N {
        first.times(second)
    }
}

impl<N: Number> Monoid<N> for NumberMultiply {
    #[inline]
    fn empty(&self) -> N {
        N::ONE
    }
}

/// Keeps the smaller number; the identity is the upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NumberMin;

impl<N: Number> Semigroup<N> for NumberMin {
    #[inline]
    fn combine(&self, first: N, second: N) -> N {
        NumberOrder.min(first, second)
    }
}

impl<N: Number> Monoid<N> for NumberMin {
    #[inline]
    fn empty(&self) -> N {
        N::HIGHEST
    }
}

/// Keeps the larger number; the identity is the lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NumberMax;

impl<N: Number> Semigroup<N> for NumberMax {
    #[inline]
    fn combine(&self, first: N, second: N) -> N {
        NumberOrder.max(first, second)
    }
}

impl<N: Number> Monoid<N> for NumberMax {
    #[inline]
    fn empty(&self) -> N {
        N::LOWEST
    }
}

/// The numeric order, bounded by each type's extreme values.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
/// use std::cmp::Ordering;
///
/// assert_eq!(NumberOrder.compare(&1.5, &-2.0), Ordering::Greater);
/// assert!(NumberOrder.between(&5_u8, &1, &9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NumberOrder;

impl<N: Number> Order<N> for NumberOrder {
    #[inline]
    fn compare(&self, first: &N, second: &N) -> Ordering {
        first.total_order(second)
    }
}

impl<N: Number> Bounded<N> for NumberOrder {
    #[inline]
    fn max_bound(&self) -> N {
        N::HIGHEST
    }

    #[inline]
    fn min_bound(&self) -> N {
        N::LOWEST
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sum_wraps_on_overflow() {
        assert_eq!(NumberSum.combine(u8::MAX, 1), 0);
    }

    #[rstest]
    fn multiply_identity_is_one() {
        assert_eq!(Monoid::<i32>::empty(&NumberMultiply), 1);
        assert_eq!(NumberMultiply.combine_all(Vec::<f32>::new()), 1.0);
    }

    #[rstest]
    #[case(vec![3, -1, 2], -1)]
    #[case(Vec::new(), i32::MAX)]
    fn min_monoid(#[case] values: Vec<i32>, #[case] expected: i32) {
        assert_eq!(NumberMin.combine_all(values), expected);
    }

    #[rstest]
    fn max_monoid_of_floats_starts_from_lowest_bound() {
        let empty: f64 = NumberMax.combine_all(Vec::new());
        assert_eq!(empty.to_bits(), Bounded::<f64>::min_bound(&NumberOrder).to_bits());
        assert_eq!(NumberMax.combine_all(vec![-1.0, 2.5]), 2.5);
        assert_eq!(NumberMax.combine_all(vec![f64::NEG_INFINITY]), f64::NEG_INFINITY);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(-f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    #[case(-0.0)]
    fn float_identities_hold_for_extreme_values(#[case] value: f64) {
        let bits = value.to_bits();
        assert_eq!(NumberMax.combine(value, NumberMax.empty()).to_bits(), bits);
        assert_eq!(NumberMax.combine(NumberMax.empty(), value).to_bits(), bits);
        assert_eq!(NumberMin.combine(value, NumberMin.empty()).to_bits(), bits);
        assert_eq!(NumberMin.combine(NumberMin.empty(), value).to_bits(), bits);
    }

    #[rstest]
    #[case(f32::NAN)]
    #[case(-f32::NAN)]
    #[case(f32::MAX)]
    #[case(f32::NEG_INFINITY)]
    fn float_values_lie_within_bounds(#[case] value: f32) {
        assert!(NumberOrder.between(&value, &NumberOrder.min_bound(), &NumberOrder.max_bound()));
        assert_ne!(NumberOrder.compare(&value, &NumberOrder.max_bound()), Ordering::Greater);
    }

    #[rstest]
    fn float_order_is_total() {
        assert_eq!(NumberOrder.compare(&-0.0_f64, &0.0), Ordering::Less);
        assert_eq!(NumberOrder.compare(&f64::NAN, &f64::NAN), Ordering::Equal);
    }

    #[rstest]
    #[case(i64::MIN)]
    #[case(0)]
    #[case(i64::MAX)]
    fn integer_values_lie_within_bounds(#[case] value: i64) {
        assert!(NumberOrder.between(&value, &NumberOrder.min_bound(), &NumberOrder.max_bound()));
    }
}
