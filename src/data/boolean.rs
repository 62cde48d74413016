//! Instances for `bool`.
//!
//! | Instance       | `combine`  | `empty` |
//! |----------------|------------|---------|
//! | [`BooleanAll`] | `a && b`   | `true`  |
//! | [`BooleanAny`] | `a \|\| b` | `false` |
//! | [`BooleanXor`] | `a != b`   | `false` |
//! | [`BooleanEqv`] | `a == b`   | `true`  |

use std::cmp::Ordering;

use crate::typeclass::{Bounded, Monoid, Order, Semigroup};

/// Conjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BooleanAll;

impl Semigroup<bool> for BooleanAll {
    #[inline]
    fn combine(&self, first: bool, second: bool) -> bool {
        first && second
    }

    fn combine_many<I>(&self, start: bool, collection: I) -> bool
    where
        I: IntoIterator<Item = bool>,
    {
        start && collection.into_iter().all(|value| value)
    }
}

impl Monoid<bool> for BooleanAll {
    #[inline]
    fn empty(&self) -> bool {
        true
    }
}

/// Disjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BooleanAny;

impl Semigroup<bool> for BooleanAny {
    #[inline]
    fn combine(&self, first: bool, second: bool) -> bool {
        first || second
    }

    fn combine_many<I>(&self, start: bool, collection: I) -> bool
    where
        I: IntoIterator<Item = bool>,
    {
        start || collection.into_iter().any(|value| value)
    }
}

impl Monoid<bool> for BooleanAny {
    #[inline]
    fn empty(&self) -> bool {
        false
    }
}

/// Exclusive or.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BooleanXor;

impl Semigroup<bool> for BooleanXor {
    #[inline]
    fn combine(&self, first: bool, second: bool) -> bool {
        first != second
    }
}

impl Monoid<bool> for BooleanXor {
    #[inline]
    fn empty(&self) -> bool {
        false
    }
}

/// Logical equivalence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BooleanEqv;

impl Semigroup<bool> for BooleanEqv {
    #[inline]
    fn combine(&self, first: bool, second: bool) -> bool {
        first == second
    }
}

impl Monoid<bool> for BooleanEqv {
    #[inline]
    fn empty(&self) -> bool {
        true
    }
}

/// `false` before `true`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
/// use std::cmp::Ordering;
///
/// assert_eq!(BooleanOrder.compare(&false, &true), Ordering::Less);
/// assert!(BooleanOrder.max_bound());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BooleanOrder;

impl Order<bool> for BooleanOrder {
    #[inline]
    fn compare(&self, first: &bool, second: &bool) -> Ordering {
        first.cmp(second)
    }
}

impl Bounded<bool> for BooleanOrder {
    #[inline]
    fn max_bound(&self) -> bool {
        true
    }

    #[inline]
    fn min_bound(&self) -> bool {
        false
    }
}
