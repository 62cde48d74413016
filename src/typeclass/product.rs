//! Product type class - `SemiProduct` with an identity.
//!
//! A [`Product`] can collect a possibly empty collection of computations.
//! The empty collection yields `of(vec![])`, the identity for `product`.
//!
//! # Laws
//!
//! ```text
//! product_all([])        == of(vec![])
//! product(of(a), fb)     ~  map(fb, |b| (a, b))
//! ```

use super::applicative::Applicative;
use super::higher::Kind;
use super::of::Of;
use super::semi_product::SemiProduct;

/// A [`SemiProduct`] that can also collect an empty collection.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let empty: Vec<Option<i32>> = Vec::new();
/// assert_eq!(OptionTypeLambda::product_all::<(), (), _, _>(empty), Some(vec![]));
/// assert_eq!(
///     OptionTypeLambda::product_all::<(), (), _, _>(vec![Some(1), Some(2)]),
///     Some(vec![1, 2])
/// );
/// ```
pub trait Product: SemiProduct + Of {
    /// Collects every computation of `collection` into one computation of a
    /// vector.
    fn product_all<R, E, A, I>(collection: I) -> Kind<Self, R, E, Vec<A>>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Kind<Self, R, E, A>>;
}

/// Derives `product_all` from `product_many` and `of`.
#[inline]
pub fn product_all_from_product<F, R, E, A, I>(collection: I) -> Kind<F, R, E, Vec<A>>
where
    F: SemiProduct + Of,
    R: 'static,
    E: 'static,
    A: 'static,
    I: IntoIterator<Item = Kind<F, R, E, A>>,
{
    let mut iterator = collection.into_iter();
    match iterator.next() {
        None => F::of::<R, E, Vec<A>>(Vec::new()),
        Some(first) => F::product_many::<R, E, A, _>(first, iterator),
    }
}

/// Collects nested computations into `F<G<Vec<A>>>`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let collected = product::product_all_composition::<OptionTypeLambda, ResultTypeLambda, (), String, _, _>(
///     vec![Some(Ok(1)), Some(Ok(3))],
/// );
/// assert_eq!(collected, Some(Ok(vec![1, 3])));
/// ```
pub fn product_all_composition<F, G, R, E, A, I>(collection: I) -> Kind<F, R, E, Kind<G, R, E, Vec<A>>>
where
    F: Applicative,
    G: Product,
    R: 'static,
    E: 'static,
    A: 'static,
    I: IntoIterator<Item = Kind<F, R, E, Kind<G, R, E, A>>>,
{
    F::map::<R, E, Vec<Kind<G, R, E, A>>, Kind<G, R, E, Vec<A>>, _>(
        F::product_all::<R, E, Kind<G, R, E, A>, _>(collection),
        |gas| G::product_all::<R, E, A, _>(gas),
    )
}
