//! `SemiProduct` type class - conjoining independent computations.
//!
//! `product` pairs two computations of the same type lambda. Both operands
//! must agree on the `In` and `Out2` slots; the result carries the same
//! slots. `product_many` folds a non-empty sequence into a computation of a
//! vector.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! product(product(fa, fb), fc) ~ product(fa, product(fb, fc))
//! ```
//!
//! where `~` means equal up to re-nesting of the tuple.
//!
//! # Examples
//!
//! ```rust
//! use kinded::prelude::*;
//!
//! assert_eq!(OptionTypeLambda::product::<(), (), _, _>(Some(1), Some("a")), Some((1, "a")));
//! assert_eq!(OptionTypeLambda::product::<(), (), _, _>(Some(1), None::<&str>), None);
//! ```

use super::covariant::Covariant;
use super::higher::Kind;
use super::invariant::Invariant;
use super::semi_applicative::SemiApplicative;

/// A type class for type lambdas whose computations can be paired.
pub trait SemiProduct: Invariant {
    /// Pairs the results of `fa` and `fb`.
    fn product<R, E, A, B>(
        fa: Kind<Self, R, E, A>,
        fb: Kind<Self, R, E, B>,
    ) -> Kind<Self, R, E, (A, B)>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static;

    /// Collects `first` followed by every element of `rest`.
    ///
    /// The resulting vector is never empty.
    fn product_many<R, E, A, I>(first: Kind<Self, R, E, A>, rest: I) -> Kind<Self, R, E, Vec<A>>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Kind<Self, R, E, A>>;
}

/// Derives `product_many` from `product` and `map`.
///
/// Each element of `rest` is paired with the accumulated vector and pushed
/// onto its end.
pub fn product_many_from_product<F, R, E, A, I>(
    first: Kind<F, R, E, A>,
    rest: I,
) -> Kind<F, R, E, Vec<A>>
where
    F: SemiProduct + Covariant,
    R: 'static,
    E: 'static,
    A: 'static,
    I: IntoIterator<Item = Kind<F, R, E, A>>,
{
    let initial = F::map::<R, E, A, Vec<A>, _>(first, |a| vec![a]);
    rest.into_iter().fold(initial, |accumulator, fa| {
        F::map::<R, E, (Vec<A>, A), Vec<A>, _>(
            F::product::<R, E, Vec<A>, A>(accumulator, fa),
            |(mut values, a)| {
                values.push(a);
                values
            },
        )
    })
}

/// Pairs two nested computations, `F<G<A>>` and `F<G<B>>` into `F<G<(A, B)>>`.
///
/// The outer layers are paired first and the inner layers are paired one
/// level down.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let paired = semi_product::product_composition::<OptionTypeLambda, ResultTypeLambda, (), String, _, _>(
///     Some(Ok(1)),
///     Some(Ok("a")),
/// );
/// assert_eq!(paired, Some(Ok((1, "a"))));
/// ```
pub fn product_composition<F, G, R, E, A, B>(
    fga: Kind<F, R, E, Kind<G, R, E, A>>,
    fgb: Kind<F, R, E, Kind<G, R, E, B>>,
) -> Kind<F, R, E, Kind<G, R, E, (A, B)>>
where
    F: SemiApplicative,
    G: SemiProduct,
    R: 'static,
    E: 'static,
    A: 'static,
    B: 'static,
{
    F::map::<R, E, (Kind<G, R, E, A>, Kind<G, R, E, B>), Kind<G, R, E, (A, B)>, _>(
        F::product::<R, E, Kind<G, R, E, A>, Kind<G, R, E, B>>(fga, fgb),
        |(ga, gb)| G::product::<R, E, A, B>(ga, gb),
    )
}

/// Collects a non-empty sequence of nested computations into `F<G<Vec<A>>>`.
pub fn product_many_composition<F, G, R, E, A, I>(
    first: Kind<F, R, E, Kind<G, R, E, A>>,
    rest: I,
) -> Kind<F, R, E, Kind<G, R, E, Vec<A>>>
where
    F: SemiApplicative,
    G: SemiProduct,
    R: 'static,
    E: 'static,
    A: 'static,
    I: IntoIterator<Item = Kind<F, R, E, Kind<G, R, E, A>>>,
{
    let mut rest = rest.into_iter();
    match rest.next() {
        None => F::map::<R, E, Kind<G, R, E, A>, Kind<G, R, E, Vec<A>>, _>(first, |ga| {
            G::product_many::<R, E, A, _>(ga, std::iter::empty())
        }),
        Some(second) => F::map::<
            R,
            E,
            (Kind<G, R, E, A>, Vec<Kind<G, R, E, A>>),
            Kind<G, R, E, Vec<A>>,
            _,
        >(
            F::product::<R, E, Kind<G, R, E, A>, Vec<Kind<G, R, E, A>>>(
                first,
                F::product_many::<R, E, Kind<G, R, E, A>, _>(second, rest),
            ),
            |(ga, gas)| G::product_many::<R, E, A, _>(ga, gas),
        ),
    }
}
