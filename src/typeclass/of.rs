//! Of type class - lifting a plain value into a type lambda.

use super::higher::{Kind, TypeLambda};

/// A type class for type lambdas that can wrap a single value.
///
/// `of` places its argument into the minimal context of `Self`: `Some(a)`
/// for `Option`, `Ok(a)` for `Result`, `vec![a]` for `Vec`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// assert_eq!(OptionTypeLambda::of::<(), (), _>(42), Some(42));
/// assert_eq!(VecTypeLambda::of::<(), (), _>("a"), vec!["a"]);
/// ```
pub trait Of: TypeLambda {
    /// Wraps `a` into the minimal context of this type lambda.
    fn of<R, E, A>(a: A) -> Kind<Self, R, E, A>
    where
        R: 'static,
        E: 'static,
        A: 'static;
}

/// Lifts the unit value.
#[inline]
pub fn unit<F, R, E>() -> Kind<F, R, E, ()>
where
    F: Of,
    R: 'static,
    E: 'static,
{
    F::of::<R, E, ()>(())
}

/// Starts do-notation from an empty record.
///
/// The empty tuple grows one element per `bind` / `let_` step.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let start = of::do_::<OptionTypeLambda, (), ()>();
/// let record = chainable::bind::<OptionTypeLambda, (), (), _, _, _>(start, |_: &()| Some(1));
/// assert_eq!(record, Some((1,)));
/// ```
#[inline]
pub fn do_<F, R, E>() -> Kind<F, R, E, ()>
where
    F: Of,
    R: 'static,
    E: 'static,
{
    F::of::<R, E, ()>(())
}

/// Lifts a value through two layers, `A` to `F<G<A>>`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let nested = of::of_composition::<VecTypeLambda, OptionTypeLambda, (), (), _>(7);
/// assert_eq!(nested, vec![Some(7)]);
/// ```
#[inline]
pub fn of_composition<F, G, R, E, A>(a: A) -> Kind<F, R, E, Kind<G, R, E, A>>
where
    F: Of,
    G: Of,
    R: 'static,
    E: 'static,
    A: 'static,
{
    F::of::<R, E, Kind<G, R, E, A>>(G::of::<R, E, A>(a))
}

#[cfg(all(test, feature = "data"))]
mod tests {
    use super::*;
    use crate::data::{OptionTypeLambda, ResultTypeLambda, VecTypeLambda};
    use rstest::rstest;

    #[rstest]
    fn unit_wraps_unit() {
        assert_eq!(unit::<OptionTypeLambda, (), ()>(), Some(()));
        assert_eq!(unit::<VecTypeLambda, (), ()>(), vec![()]);
    }

    #[rstest]
    fn do_starts_from_empty_record() {
        let start: Result<(), String> = do_::<ResultTypeLambda, (), String>();
        assert_eq!(start, Ok(()));
    }

    #[rstest]
    fn of_composition_nests_inner_inside_outer() {
        let nested = of_composition::<OptionTypeLambda, ResultTypeLambda, (), String, _>(3);
        assert_eq!(nested, Some(Ok(3)));
    }
}
