//! Chainable - `FlatMap` together with `Covariant`.
//!
//! Provides the dependent-sequencing combinators: `tap` and the
//! do-notation step `bind`.

use super::append::Append;
use super::covariant::Covariant;
use super::flat_map::FlatMap;
use super::higher::Kind;

/// A type lambda that can both map and sequence computations.
///
/// Implemented automatically for every type lambda that is both [`FlatMap`]
/// and [`Covariant`].
pub trait Chainable: FlatMap + Covariant {}

impl<F> Chainable for F where F: FlatMap + Covariant {}

/// Runs an effectful function on the value(s) of `fa` and keeps the
/// original value(s).
///
/// The effect of `function` is kept; only its value is discarded.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let checked = chainable::tap::<ResultTypeLambda, (), String, _, _, _>(Ok(5), |n: i32| {
///     if n > 0 { Ok(()) } else { Err("not positive".to_string()) }
/// });
/// assert_eq!(checked, Ok(5));
/// ```
pub fn tap<F, R, E, A, B, Func>(fa: Kind<F, R, E, A>, mut function: Func) -> Kind<F, R, E, A>
where
    F: Chainable,
    R: 'static,
    E: 'static,
    A: Clone + 'static,
    B: 'static,
    Func: FnMut(A) -> Kind<F, R, E, B> + 'static,
{
    F::flat_map::<R, E, A, A, _>(fa, move |a| {
        let effect = function(a.clone());
        F::map::<R, E, B, A, _>(effect, move |_| a.clone())
    })
}

/// Appends the result of a dependent computation to the record in `fa`.
///
/// `bind(fa, f) == flat_map(fa, |record| map(f(&record), |b| record.append(b)))`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let record = covariant::bind_to::<OptionTypeLambda, (), (), _>(Some(2));
/// let record = chainable::bind::<OptionTypeLambda, (), (), _, _, _>(record, |(n,): &(i32,)| Some(n * 3));
/// let record = covariant::let_::<OptionTypeLambda, (), (), _, _, _>(record, |(a, b): &(i32, i32)| a + b);
/// assert_eq!(record, Some((2, 6, 8)));
/// ```
pub fn bind<F, R, E, S, B, Func>(fa: Kind<F, R, E, S>, mut function: Func) -> Kind<F, R, E, S::Output>
where
    F: Chainable,
    R: 'static,
    E: 'static,
    S: Append<B> + Clone + 'static,
    S::Output: 'static,
    B: 'static,
    Func: FnMut(&S) -> Kind<F, R, E, B> + 'static,
{
    F::flat_map::<R, E, S, S::Output, _>(fa, move |record| {
        let next = function(&record);
        F::map::<R, E, B, S::Output, _>(next, move |b| record.clone().append(b))
    })
}
