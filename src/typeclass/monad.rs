//! Monad - `Pointed` together with `FlatMap`.
//!
//! A monad can lift plain values, map, and sequence computations where each
//! step depends on the result of the previous one.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! flat_map(of(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! flat_map(m, of) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! flat_map(flat_map(m, f), g) == flat_map(m, |x| flat_map(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kinded::prelude::*;
//!
//! fn parse_positive(text: &str) -> Option<i32> {
//!     text.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = OptionTypeLambda::flat_map::<(), (), _, _, _>(
//!     OptionTypeLambda::flat_map::<(), (), _, _, _>(Some("42"), parse_positive),
//!     |n: i32| OptionTypeLambda::of::<(), (), _>(n * 2),
//! );
//! assert_eq!(result, Some(84));
//! ```

use super::flat_map::FlatMap;
use super::higher::Kind;
use super::of::Of;
use super::pointed::Pointed;

/// A type class for type lambdas that support sequencing of computations.
///
/// Implemented automatically for every type lambda that is both [`Pointed`]
/// and [`FlatMap`].
pub trait Monad: Pointed + FlatMap {}

impl<F> Monad for F where F: Pointed + FlatMap {}

/// Derives `map` from `flat_map` and `of`.
///
/// For a lawful monad this agrees with [`Covariant::map`](super::Covariant::map).
#[inline]
pub fn map_from_flat_map<F, R, E, A, B, Func>(fa: Kind<F, R, E, A>, mut function: Func) -> Kind<F, R, E, B>
where
    F: Of + FlatMap,
    R: 'static,
    E: 'static,
    A: 'static,
    B: 'static,
    Func: FnMut(A) -> B + 'static,
{
    F::flat_map::<R, E, A, B, _>(fa, move |a| F::of::<R, E, B>(function(a)))
}
