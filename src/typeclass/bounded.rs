//! Bounded type class - an order with a least and a greatest element.
//!
//! The bounds give the `min` and `max` semigroups an identity:
//! [`monoid::min`](super::monoid::min) starts from
//! [`max_bound`](Bounded::max_bound) and [`monoid::max`](super::monoid::max)
//! from [`min_bound`](Bounded::min_bound).
//!
//! # Laws
//!
//! For every `a`:
//!
//! ```text
//! less_than_or_equal_to(min_bound(), a)
//! less_than_or_equal_to(a, max_bound())
//! ```

use super::order::{Order, Reverse};

/// An [`Order`] whose values lie between two bounds.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// assert_eq!(Bounded::<u8>::max_bound(&NumberOrder), 255);
/// assert_eq!(Bounded::<u8>::min_bound(&NumberOrder), 0);
/// ```
pub trait Bounded<A>: Order<A> {
    /// The greatest value.
    fn max_bound(&self) -> A;

    /// The least value.
    fn min_bound(&self) -> A;
}

impl<A, B> Bounded<A> for &B
where
    B: Bounded<A> + ?Sized,
{
    #[inline]
    fn max_bound(&self) -> A {
        (**self).max_bound()
    }

    #[inline]
    fn min_bound(&self) -> A {
        (**self).min_bound()
    }
}

/// Reversing an order swaps its bounds.
impl<A, B> Bounded<A> for Reverse<B>
where
    B: Bounded<A>,
{
    #[inline]
    fn max_bound(&self) -> A {
        self.0.min_bound()
    }

    #[inline]
    fn min_bound(&self) -> A {
        self.0.max_bound()
    }
}

#[cfg(all(test, feature = "data"))]
mod tests {
    use super::*;
    use crate::data::{BooleanOrder, NumberOrder};
    use crate::typeclass::order;
    use rstest::rstest;

    #[rstest]
    fn reverse_swaps_bounds() {
        let reversed = order::reverse(NumberOrder);
        assert_eq!(Bounded::<i8>::max_bound(&reversed), i8::MIN);
        assert_eq!(Bounded::<i8>::min_bound(&reversed), i8::MAX);
    }

    #[rstest]
    fn boolean_bounds() {
        assert!(BooleanOrder.max_bound());
        assert!(!BooleanOrder.min_bound());
    }

    #[rstest]
    #[case(0.5)]
    #[case(-1e300)]
    fn float_values_lie_within_bounds(#[case] value: f64) {
        assert!(NumberOrder.less_than_or_equal_to(&Bounded::<f64>::min_bound(&NumberOrder), &value));
        assert!(NumberOrder.less_than_or_equal_to(&value, &Bounded::<f64>::max_bound(&NumberOrder)));
    }
}
