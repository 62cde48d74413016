//! Alternative - coproduct structure on covariant type lambdas.
//!
//! This module provides the `SemiAlternative` and `Alternative` bundles and
//! the combinators built on them:
//!
//! - Filter computations based on conditions (`guard`)
//! - Make computations optional (`optional`)
//! - Choose from multiple alternatives (`choice`)
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! coproduct(zero(), x) == x
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! coproduct(x, zero()) == x
//! ```
//!
//! ## Left Distributivity
//!
//! ```text
//! map(coproduct(fa, fb), f) == coproduct(map(fa, f), map(fb, f))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kinded::prelude::*;
//!
//! fn filter_positive(n: i32) -> Option<i32> {
//!     OptionTypeLambda::map::<(), (), _, _, _>(alternative::guard::<OptionTypeLambda, (), ()>(n > 0), move |()| n)
//! }
//!
//! assert_eq!(filter_positive(5), Some(5));
//! assert_eq!(filter_positive(-3), None);
//! ```

use super::coproduct::Coproduct;
use super::covariant::Covariant;
use super::higher::Kind;
use super::of::Of;
use super::semi_coproduct::SemiCoproduct;

/// A covariant type lambda with a fallback combination.
///
/// Implemented automatically for every type lambda that is both
/// [`SemiCoproduct`] and [`Covariant`].
pub trait SemiAlternative: SemiCoproduct + Covariant {}

impl<F> SemiAlternative for F where F: SemiCoproduct + Covariant {}

/// A [`SemiAlternative`] with an identity for `coproduct`.
///
/// Implemented automatically for every type lambda that is both
/// [`SemiAlternative`] and [`Coproduct`].
pub trait Alternative: SemiAlternative + Coproduct {}

impl<F> Alternative for F where F: SemiAlternative + Coproduct {}

/// Conditional success.
///
/// `of(())` if `condition` is true, `zero()` otherwise.
#[inline]
pub fn guard<F, R, E>(condition: bool) -> Kind<F, R, E, ()>
where
    F: Alternative + Of,
    R: 'static,
    E: 'static,
{
    if condition {
        F::of::<R, E, ()>(())
    } else {
        F::zero::<R, E, ()>()
    }
}

/// Makes a computation optional, converting failure to `None`.
///
/// Returns `coproduct(map(fa, Some), of(None))`, which always succeeds but
/// wraps each result in `Option`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// assert_eq!(alternative::optional::<OptionTypeLambda, (), (), _>(Some(42)), Some(Some(42)));
/// assert_eq!(alternative::optional::<OptionTypeLambda, (), (), i32>(None), Some(None));
/// assert_eq!(alternative::optional::<VecTypeLambda, (), (), _>(vec![1]), vec![Some(1), None]);
/// ```
#[inline]
pub fn optional<F, R, E, A>(fa: Kind<F, R, E, A>) -> Kind<F, R, E, Option<A>>
where
    F: Alternative + Of,
    R: 'static,
    E: 'static,
    A: 'static,
{
    F::coproduct::<R, E, E, Option<A>>(
        F::map::<R, E, A, Option<A>, _>(fa, Some),
        F::of::<R, E, Option<A>>(None),
    )
}

/// Chooses from multiple alternatives.
///
/// Folds over the alternatives with `coproduct`, starting from `zero`. For
/// `Option` this returns the first `Some`; for `Vec` it concatenates.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let result = alternative::choice::<OptionTypeLambda, (), (), _, _>(vec![None, Some(1), Some(2)]);
/// assert_eq!(result, Some(1));
/// ```
#[inline]
pub fn choice<F, R, E, A, I>(alternatives: I) -> Kind<F, R, E, A>
where
    F: Alternative,
    R: 'static,
    E: 'static,
    A: 'static,
    I: IntoIterator<Item = Kind<F, R, E, A>>,
{
    F::coproduct_all::<R, E, A, I>(alternatives)
}
