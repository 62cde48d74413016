//! `SemiCoproduct` type class - trying one computation, then another.
//!
//! `coproduct(fa, fb)` yields `fa` if it succeeds and falls back to `fb`
//! otherwise. The two operands may differ in their `Out2` slot: if the
//! fallback runs, its error channel is the one that can surface, so the
//! result takes the second operand's `Out2` type rather than a combination
//! of both.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! coproduct(coproduct(fa, fb), fc) == coproduct(fa, coproduct(fb, fc))
//! ```

use std::marker::PhantomData;

use super::higher::Kind;
use super::invariant::Invariant;
use super::semigroup::Semigroup;

/// A type class for type lambdas with a fallback combination.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let recovered: Result<i32, &str> =
///     ResultTypeLambda::coproduct::<(), String, _, _>(Err("first failed".to_string()), Ok(2));
/// assert_eq!(recovered, Ok(2));
///
/// assert_eq!(OptionTypeLambda::coproduct::<(), (), (), _>(Some(1), Some(2)), Some(1));
/// ```
pub trait SemiCoproduct: Invariant {
    /// Returns `fa` if it succeeds, otherwise `fb`.
    ///
    /// The result takes the `Out2` slot of `fb`.
    fn coproduct<R, E1, E2, A>(
        fa: Kind<Self, R, E1, A>,
        fb: Kind<Self, R, E2, A>,
    ) -> Kind<Self, R, E2, A>
    where
        R: 'static,
        E1: 'static,
        E2: 'static,
        A: 'static;

    /// Folds `first` and every element of `rest` with `coproduct`.
    fn coproduct_many<R, E, A, I>(first: Kind<Self, R, E, A>, rest: I) -> Kind<Self, R, E, A>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Kind<Self, R, E, A>>;
}

/// The semigroup (and, for [`Coproduct`](super::Coproduct), monoid) whose
/// `combine` is `coproduct`.
///
/// Built with [`get_semigroup`] or [`coproduct::get_monoid`](super::coproduct::get_monoid).
pub struct CoproductInstance<F, R, E, A> {
    marker: PhantomData<fn() -> (F, R, E, A)>,
}

impl<F, R, E, A> CoproductInstance<F, R, E, A> {
    pub(crate) const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<F, R, E, A> Clone for CoproductInstance<F, R, E, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F, R, E, A> Copy for CoproductInstance<F, R, E, A> {}

impl<F, R, E, A> Semigroup<Kind<F, R, E, A>> for CoproductInstance<F, R, E, A>
where
    F: SemiCoproduct,
    R: 'static,
    E: 'static,
    A: 'static,
{
    #[inline]
    fn combine(&self, first: Kind<F, R, E, A>, second: Kind<F, R, E, A>) -> Kind<F, R, E, A> {
        F::coproduct::<R, E, E, A>(first, second)
    }

    #[inline]
    fn combine_many<I>(&self, start: Kind<F, R, E, A>, collection: I) -> Kind<F, R, E, A>
    where
        I: IntoIterator<Item = Kind<F, R, E, A>>,
    {
        F::coproduct_many::<R, E, A, I>(start, collection)
    }
}

/// Returns the semigroup whose `combine` is `coproduct`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let first_some = semi_coproduct::get_semigroup::<OptionTypeLambda, (), (), i32>();
/// assert_eq!(first_some.combine(None, Some(2)), Some(2));
/// assert_eq!(first_some.combine_many(None, vec![None, Some(3), Some(4)]), Some(3));
/// ```
#[inline]
pub const fn get_semigroup<F, R, E, A>() -> CoproductInstance<F, R, E, A>
where
    F: SemiCoproduct,
{
    CoproductInstance::new()
}
