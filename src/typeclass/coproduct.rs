//! Coproduct type class - `SemiCoproduct` with an identity.

use super::higher::Kind;
use super::monoid::Monoid;
use super::semi_coproduct::{CoproductInstance, SemiCoproduct};

/// A [`SemiCoproduct`] with a `zero` computation that always falls through.
///
/// # Laws
///
/// ```text
/// coproduct(zero(), fa) == fa
/// coproduct(fa, zero()) == fa
/// coproduct_all([])     == zero()
/// ```
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// assert_eq!(OptionTypeLambda::zero::<(), (), i32>(), None);
/// assert_eq!(OptionTypeLambda::coproduct_all::<(), (), _, _>(vec![None, Some(2), Some(3)]), Some(2));
/// assert_eq!(VecTypeLambda::coproduct_all::<(), (), _, _>(vec![vec![1], vec![2, 3]]), vec![1, 2, 3]);
/// ```
pub trait Coproduct: SemiCoproduct {
    /// The computation that never succeeds.
    fn zero<R, E, A>() -> Kind<Self, R, E, A>
    where
        R: 'static,
        E: 'static,
        A: 'static;

    /// Folds every computation of `collection` with `coproduct`, starting
    /// from `zero`.
    fn coproduct_all<R, E, A, I>(collection: I) -> Kind<Self, R, E, A>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Kind<Self, R, E, A>>;
}

impl<F, R, E, A> Monoid<Kind<F, R, E, A>> for CoproductInstance<F, R, E, A>
where
    F: Coproduct,
    R: 'static,
    E: 'static,
    A: 'static,
{
    #[inline]
    fn empty(&self) -> Kind<F, R, E, A> {
        F::zero::<R, E, A>()
    }

    #[inline]
    fn combine_all<I>(&self, collection: I) -> Kind<F, R, E, A>
    where
        I: IntoIterator<Item = Kind<F, R, E, A>>,
    {
        F::coproduct_all::<R, E, A, I>(collection)
    }
}

/// Returns the monoid whose `combine` is `coproduct` and whose `empty` is
/// `zero`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let first_some = coproduct::get_monoid::<OptionTypeLambda, (), (), i32>();
/// assert_eq!(first_some.combine_all(Vec::new()), None);
/// assert_eq!(first_some.combine_all(vec![None, Some(1)]), Some(1));
/// ```
#[inline]
pub const fn get_monoid<F, R, E, A>() -> CoproductInstance<F, R, E, A>
where
    F: Coproduct,
{
    CoproductInstance::new()
}
