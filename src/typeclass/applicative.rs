//! Applicative - `SemiApplicative` with an identity.
//!
//! An applicative type lambda can lift plain values (`of`), pair any number
//! of computations including none (`product_all`) and map over the result.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! ap(of(|x| x), fa) == fa
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! ap(of(f), of(a)) == of(f(a))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! ap(fab, of(a)) == ap(of(|f| f(a)), fab)
//! ```

use super::higher::Kind;
use super::monoid::Monoid;
use super::product::Product;
use super::semi_applicative::{Lifted, SemiApplicative};

/// A [`SemiApplicative`] that is also a [`Product`].
///
/// Implemented automatically for every qualifying type lambda.
pub trait Applicative: SemiApplicative + Product {}

impl<F> Applicative for F where F: SemiApplicative + Product {}

impl<F, R, E, A, S> Monoid<Kind<F, R, E, A>> for Lifted<F, R, E, A, S>
where
    F: Applicative,
    R: 'static,
    E: 'static,
    A: 'static,
    S: Monoid<A> + 'static,
{
    fn empty(&self) -> Kind<F, R, E, A> {
        F::of::<R, E, A>(self.instance.empty())
    }
}

/// Lifts a monoid over `A` into a monoid over `F<A>`.
///
/// `empty` is `of(M.empty())` and `combine` follows
/// [`lift_semigroup`](super::semi_applicative::lift_semigroup).
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let lifted = applicative::lift_monoid::<OptionTypeLambda, (), (), i32, _>(NumberSum);
/// assert_eq!(lifted.empty(), Some(0));
/// assert_eq!(lifted.combine_all(vec![Some(1), Some(2), Some(3)]), Some(6));
/// assert_eq!(lifted.combine_all(vec![Some(1), None]), None);
/// ```
#[inline]
pub fn lift_monoid<F, R, E, A, M>(monoid: M) -> Lifted<F, R, E, A, M>
where
    F: Applicative,
    M: Monoid<A>,
{
    Lifted::new(monoid)
}

#[cfg(all(test, feature = "data"))]
mod tests {
    use super::*;
    use crate::data::{OptionTypeLambda, ResultTypeLambda, StringConcat};
    use crate::typeclass::semi_applicative::ap;
    use crate::typeclass::{Of, Semigroup};
    use rstest::rstest;

    #[rstest]
    fn lift_monoid_empty_is_identity() {
        let lifted = lift_monoid::<ResultTypeLambda, (), String, String, _>(StringConcat);
        let value: Result<String, String> = Ok("abc".to_string());
        assert_eq!(lifted.combine(lifted.empty(), value.clone()), value);
        assert_eq!(lifted.combine(value.clone(), lifted.empty()), value);
    }

    #[rstest]
    fn lift_monoid_combine_all_of_nothing_is_empty() {
        let lifted = lift_monoid::<OptionTypeLambda, (), (), String, _>(StringConcat);
        assert_eq!(lifted.combine_all(Vec::new()), Some(String::new()));
    }

    #[rstest]
    fn homomorphism_law_for_option() {
        let function = |n: i32| n + 1;
        let left = ap::<OptionTypeLambda, (), (), _, _, _>(
            OptionTypeLambda::of::<(), (), _>(function),
            OptionTypeLambda::of::<(), (), _>(41),
        );
        assert_eq!(left, OptionTypeLambda::of::<(), (), _>(function(41)));
    }
}
