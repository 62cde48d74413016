//! Foldable type class - folding over data structures.
//!
//! This module provides the `Foldable` trait, for type lambdas whose values
//! can be reduced into a single summary value, and the folds derived from it.
//!
//! # Laws
//!
//! `Foldable` has no laws beyond being a genuine fold: `reduce` visits values
//! left to right and `reduce_right` right to left, so non-commutative
//! functions observe the order.
//!
//! ```text
//! reduce(fa, b, f)       == to_vec(fa).into_iter().fold(b, f)
//! reduce_right(fa, b, f) == to_vec(fa).into_iter().rev().fold(b, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kinded::prelude::*;
//!
//! let digits = VecTypeLambda::reduce::<(), (), _, _, _>(vec![1, 2, 3], 0, |accumulator, n| accumulator * 10 + n);
//! assert_eq!(digits, 123);
//!
//! let reversed = VecTypeLambda::reduce_right::<(), (), _, _, _>(vec![1, 2, 3], 0, |accumulator, n| accumulator * 10 + n);
//! assert_eq!(reversed, 321);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::flat_map::FlatMap;
use super::higher::{Kind, TypeLambda};
use super::monoid::Monoid;
use super::of::Of;

/// A type class for type lambdas whose values can be folded.
pub trait Foldable: TypeLambda {
    /// Folds the value(s) of `fa` from left to right.
    fn reduce<R, E, A, B, F>(fa: Kind<Self, R, E, A>, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B;

    /// Folds the value(s) of `fa` from right to left.
    ///
    /// The function receives the accumulator first, as in [`reduce`](Self::reduce).
    fn reduce_right<R, E, A, B, F>(fa: Kind<Self, R, E, A>, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B;
}

/// Collects the value(s) of `fa` into a vector, in fold order.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// assert_eq!(foldable::to_vec::<OptionTypeLambda, (), (), _>(Some(1)), vec![1]);
/// assert_eq!(foldable::to_vec::<OptionTypeLambda, (), (), i32>(None), Vec::<i32>::new());
/// ```
#[inline]
pub fn to_vec<F, R, E, A>(fa: Kind<F, R, E, A>) -> Vec<A>
where
    F: Foldable,
{
    F::reduce::<R, E, A, Vec<A>, _>(fa, Vec::new(), |mut values, a| {
        values.push(a);
        values
    })
}

/// Maps each value into a monoid and combines the results.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let total_length = foldable::combine_map::<VecTypeLambda, (), (), _, _, _, _>(
///     vec!["ab", "cde"],
///     &NumberSum,
///     |text: &str| text.len(),
/// );
/// assert_eq!(total_length, 5);
/// ```
pub fn combine_map<F, R, E, A, M, Mon, Func>(fa: Kind<F, R, E, A>, monoid: &Mon, mut function: Func) -> M
where
    F: Foldable,
    Mon: Monoid<M>,
    Func: FnMut(A) -> M,
{
    F::reduce::<R, E, A, M, _>(fa, monoid.empty(), |accumulator, a| {
        monoid.combine(accumulator, function(a))
    })
}

/// Folds with an effectful function, sequencing the effects of `G`.
///
/// Starts from `of(initial)` and chains one `flat_map` per value.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let checked_sum = |values: Vec<i32>| {
///     foldable::reduce_kind::<VecTypeLambda, OptionTypeLambda, (), (), (), (), _, _, _>(
///         values,
///         0,
///         |total: i32, n: i32| total.checked_add(n),
///     )
/// };
/// assert_eq!(checked_sum(vec![1, 2, 3]), Some(6));
/// assert_eq!(checked_sum(vec![i32::MAX, 1]), None);
/// ```
pub fn reduce_kind<F, G, R, E, GR, GE, A, B, Func>(
    fa: Kind<F, R, E, A>,
    initial: B,
    function: Func,
) -> Kind<G, GR, GE, B>
where
    F: Foldable,
    G: Of + FlatMap,
    GR: 'static,
    GE: 'static,
    A: Clone + 'static,
    B: 'static,
    Func: FnMut(B, A) -> Kind<G, GR, GE, B> + 'static,
{
    let shared = Rc::new(RefCell::new(function));
    F::reduce::<R, E, A, Kind<G, GR, GE, B>, _>(
        fa,
        G::of::<GR, GE, B>(initial),
        |accumulator, a| {
            let shared = Rc::clone(&shared);
            G::flat_map::<GR, GE, B, B, _>(accumulator, move |b| {
                let mut function = shared.borrow_mut();
                (*function)(b, a.clone())
            })
        },
    )
}

/// Folds through two nested foldable layers, left to right.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let nested = vec![Some(1), None, Some(3)];
/// let sum = foldable::reduce_composition::<VecTypeLambda, OptionTypeLambda, (), (), _, _, _>(
///     nested,
///     0,
///     |accumulator, n| accumulator + n,
/// );
/// assert_eq!(sum, 4);
/// ```
pub fn reduce_composition<F, G, R, E, A, B, Func>(
    fga: Kind<F, R, E, Kind<G, R, E, A>>,
    initial: B,
    mut function: Func,
) -> B
where
    F: Foldable,
    G: Foldable,
    Func: FnMut(B, A) -> B,
{
    F::reduce::<R, E, Kind<G, R, E, A>, B, _>(fga, initial, |accumulator, ga| {
        G::reduce::<R, E, A, B, _>(ga, accumulator, &mut function)
    })
}
