//! Instances for [`Vec`].
//!
//! [`VecTypeLambda`] maps `Out1` to `Vec<Out1>`. It is covariant, pointed,
//! monadic (`flat_map` concatenates the results), foldable and traversable,
//! and its coproduct is concatenation with the empty vector as zero.
//!
//! The cartesian product of two vectors repeats every element of each side,
//! which needs `Clone`. The lambda-level classes do not carry that bound, so
//! `VecTypeLambda` has no [`SemiProduct`](crate::typeclass::SemiProduct)
//! instance; [`product`] and [`product_all`] provide the cartesian product
//! as plain functions instead.

use std::marker::PhantomData;

use crate::typeclass::{
    Applicative, Coproduct, Covariant, FlatMap, Foldable, Invariant, Kind, Monoid, Of,
    SemiCoproduct, Semigroup, Traversable, TypeLambda, covariant,
    equivalence::{self, ArrayEquivalence},
    order::{self, ArrayOrder},
};

/// The type lambda of `Vec`: `Out1 => Vec<Out1>`.
pub enum VecTypeLambda {}

impl TypeLambda for VecTypeLambda {
    type Type<In, Out2, Out1> = Vec<Out1>;
}

impl Invariant for VecTypeLambda {
    #[inline]
    fn imap<R, E, A, B, To, From>(fa: Vec<A>, to: To, from: From) -> Vec<B>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
        To: Fn(A) -> B + 'static,
        From: Fn(&B) -> A + 'static,
    {
        covariant::imap::<Self, R, E, A, B, To, From>(fa, to, from)
    }
}

impl Covariant for VecTypeLambda {
    #[inline]
    fn map<R, E, A, B, F>(fa: Vec<A>, function: F) -> Vec<B>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        fa.into_iter().map(function).collect()
    }
}

impl Of for VecTypeLambda {
    #[inline]
    fn of<R, E, A>(a: A) -> Vec<A>
    where
        R: 'static,
        E: 'static,
        A: 'static,
    {
        vec![a]
    }
}

impl FlatMap for VecTypeLambda {
    #[inline]
    fn flat_map<R, E, A, B, F>(fa: Vec<A>, function: F) -> Vec<B>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Vec<B> + 'static,
    {
        fa.into_iter().flat_map(function).collect()
    }
}

impl Foldable for VecTypeLambda {
    #[inline]
    fn reduce<R, E, A, B, F>(fa: Vec<A>, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        fa.into_iter().fold(initial, function)
    }

    #[inline]
    fn reduce_right<R, E, A, B, F>(fa: Vec<A>, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        fa.into_iter().rev().fold(initial, function)
    }
}

impl Traversable for VecTypeLambda {
    /// Runs the effects left to right, pushing each result onto an
    /// accumulated vector inside `G`.
    fn traverse<G, R, E, GR, GE, A, B, Func>(fa: Vec<A>, mut function: Func) -> Kind<G, GR, GE, Vec<B>>
    where
        G: Applicative,
        R: 'static,
        E: 'static,
        GR: 'static,
        GE: 'static,
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> Kind<G, GR, GE, B> + 'static,
    {
        let capacity = fa.len();
        fa.into_iter().fold(
            G::of::<GR, GE, Vec<B>>(Vec::with_capacity(capacity)),
            |accumulator, a| {
                let paired = G::product::<GR, GE, Vec<B>, B>(accumulator, function(a));
                G::map::<GR, GE, (Vec<B>, B), Vec<B>, _>(paired, |(mut values, b)| {
                    values.push(b);
                    values
                })
            },
        )
    }
}

impl SemiCoproduct for VecTypeLambda {
    #[inline]
    fn coproduct<R, E1, E2, A>(mut fa: Vec<A>, fb: Vec<A>) -> Vec<A>
    where
        R: 'static,
        E1: 'static,
        E2: 'static,
        A: 'static,
    {
        fa.extend(fb);
        fa
    }

    fn coproduct_many<R, E, A, I>(first: Vec<A>, rest: I) -> Vec<A>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Vec<A>>,
    {
        std::iter::once(first).chain(rest).flatten().collect()
    }
}

impl Coproduct for VecTypeLambda {
    #[inline]
    fn zero<R, E, A>() -> Vec<A>
    where
        R: 'static,
        E: 'static,
        A: 'static,
    {
        Vec::new()
    }

    fn coproduct_all<R, E, A, I>(collection: I) -> Vec<A>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Vec<A>>,
    {
        collection.into_iter().flatten().collect()
    }
}

// =============================================================================
// Cartesian product
// =============================================================================

/// Pairs every element of `fa` with every element of `fb`, in row-major
/// order.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// assert_eq!(
///     vec::product(vec![1, 2], vec!['a', 'b']),
///     vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]
/// );
/// assert!(vec::product(Vec::<i32>::new(), vec!['a']).is_empty());
/// ```
pub fn product<A, B>(fa: Vec<A>, fb: Vec<B>) -> Vec<(A, B)>
where
    A: Clone,
    B: Clone,
{
    fa.into_iter()
        .flat_map(|a| fb.iter().map(move |b| (a.clone(), b.clone())))
        .collect()
}

/// The cartesian product of every vector in `collection`.
///
/// The product of no vectors is `vec![vec![]]`, the single empty
/// combination.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// assert_eq!(
///     vec::product_all(vec![vec![1, 2], vec![3]]),
///     vec![vec![1, 3], vec![2, 3]]
/// );
/// assert_eq!(vec::product_all(Vec::<Vec<i32>>::new()), vec![Vec::<i32>::new()]);
/// ```
pub fn product_all<A, I>(collection: I) -> Vec<Vec<A>>
where
    A: Clone,
    I: IntoIterator<Item = Vec<A>>,
{
    collection
        .into_iter()
        .fold(vec![Vec::new()], |combinations, values| {
            combinations
                .into_iter()
                .flat_map(|prefix| {
                    values.iter().map(move |value| {
                        let mut combination = prefix.clone();
                        combination.push(value.clone());
                        combination
                    })
                })
                .collect()
        })
}

// =============================================================================
// Helper instances
// =============================================================================

/// The concatenation semigroup and monoid on `Vec<A>`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let concat = vec::Concat::new();
/// assert_eq!(concat.combine_all(vec![vec![1], vec![], vec![2, 3]]), vec![1, 2, 3]);
/// ```
pub struct Concat<A> {
    marker: PhantomData<fn() -> A>,
}

impl<A> Concat<A> {
    /// Creates the concatenation instance.
    #[inline]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<A> Default for Concat<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for Concat<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Concat<A> {}

impl<A> Semigroup<Vec<A>> for Concat<A> {
    #[inline]
    fn combine(&self, mut first: Vec<A>, second: Vec<A>) -> Vec<A> {
        first.extend(second);
        first
    }

    fn combine_many<I>(&self, mut start: Vec<A>, collection: I) -> Vec<A>
    where
        I: IntoIterator<Item = Vec<A>>,
    {
        for values in collection {
            start.extend(values);
        }
        start
    }
}

impl<A> Monoid<Vec<A>> for Concat<A> {
    #[inline]
    fn empty(&self) -> Vec<A> {
        Vec::new()
    }
}

/// The lexicographic order on vectors built from an element order.
#[inline]
pub const fn get_order<O>(order: O) -> ArrayOrder<O> {
    order::array(order)
}

/// Element-wise equivalence of vectors of the same length.
#[inline]
pub const fn get_equivalence<Q>(equivalence: Q) -> ArrayEquivalence<Q> {
    equivalence::array(equivalence)
}
