//! `SemiApplicative` - `SemiProduct` together with `Covariant`.
//!
//! With both pairing and mapping available, functions of any arity can be
//! lifted over independent computations. Every combinator here is derived
//! from `product` followed by `map`; none of them is primitive. In particular
//! `ap` is always
//!
//! ```text
//! ap(fab, fa) == map(product(fab, fa), |(f, a)| f(a))
//! ```
//!
//! so there is a single definition of how two independent effects combine.
//!
//! # Examples
//!
//! ```rust
//! use kinded::prelude::*;
//!
//! let add = |a: i32| move |b: i32| a + b;
//! let partially_applied = OptionTypeLambda::map::<(), (), _, _, _>(Some(1), add);
//! assert_eq!(semi_applicative::ap::<OptionTypeLambda, (), (), _, _, _>(partially_applied, Some(2)), Some(3));
//! ```

use std::marker::PhantomData;
use std::rc::Rc;

use super::append::Append;
use super::covariant::Covariant;
use super::higher::Kind;
use super::semi_product::SemiProduct;
use super::semigroup::Semigroup;

/// A type lambda that can both pair and map computations.
///
/// Implemented automatically for every type lambda that is both
/// [`SemiProduct`] and [`Covariant`].
pub trait SemiApplicative: SemiProduct + Covariant {}

impl<F> SemiApplicative for F where F: SemiProduct + Covariant {}

// =============================================================================
// Lifting
// =============================================================================

/// Applies the function(s) inside `fab` to the value(s) inside `fa`.
#[inline]
pub fn ap<F, R, E, A, B, Func>(fab: Kind<F, R, E, Func>, fa: Kind<F, R, E, A>) -> Kind<F, R, E, B>
where
    F: SemiApplicative,
    R: 'static,
    E: 'static,
    A: 'static,
    B: 'static,
    Func: FnOnce(A) -> B + 'static,
{
    F::map::<R, E, (Func, A), B, _>(F::product::<R, E, Func, A>(fab, fa), |(function, a)| {
        function(a)
    })
}

/// Lifts a binary function to operate on two computations.
///
/// The result keeps the `In` and `Out2` slots of its arguments unchanged.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let concat = semi_applicative::lift2::<ResultTypeLambda, (), String, _, _, _, _>(
///     |a: i32, b: i32| format!("{a}{b}"),
/// );
/// assert_eq!(concat(Ok(1), Ok(2)), Ok("12".to_string()));
/// assert_eq!(concat(Ok(1), Err("failed".to_string())), Err("failed".to_string()));
/// ```
pub fn lift2<F, R, E, A, B, C, Func>(
    function: Func,
) -> impl Fn(Kind<F, R, E, A>, Kind<F, R, E, B>) -> Kind<F, R, E, C>
where
    F: SemiApplicative,
    R: 'static,
    E: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    Func: Fn(A, B) -> C + 'static,
{
    let shared = Rc::new(function);
    move |fa, fb| {
        let function = Rc::clone(&shared);
        F::map::<R, E, (A, B), C, _>(F::product::<R, E, A, B>(fa, fb), move |(a, b)| {
            function(a, b)
        })
    }
}

/// Lifts a ternary function to operate on three computations.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let sum3 = semi_applicative::lift3::<OptionTypeLambda, (), (), _, _, _, _, _>(
///     |a: i32, b: i32, c: i32| a + b + c,
/// );
/// assert_eq!(sum3(Some(1), Some(2), Some(3)), Some(6));
/// assert_eq!(sum3(Some(1), None, Some(3)), None);
/// ```
pub fn lift3<F, R, E, A, B, C, D, Func>(
    function: Func,
) -> impl Fn(Kind<F, R, E, A>, Kind<F, R, E, B>, Kind<F, R, E, C>) -> Kind<F, R, E, D>
where
    F: SemiApplicative,
    R: 'static,
    E: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    Func: Fn(A, B, C) -> D + 'static,
{
    let shared = Rc::new(function);
    move |fa, fb, fc| {
        let function = Rc::clone(&shared);
        F::map::<R, E, ((A, B), C), D, _>(
            F::product::<R, E, (A, B), C>(F::product::<R, E, A, B>(fa, fb), fc),
            move |((a, b), c)| function(a, b, c),
        )
    }
}

/// Combines two computations with a binary function.
///
/// The data-first counterpart of [`lift2`].
#[inline]
pub fn zip_with<F, R, E, A, B, C, Func>(
    fa: Kind<F, R, E, A>,
    fb: Kind<F, R, E, B>,
    mut function: Func,
) -> Kind<F, R, E, C>
where
    F: SemiApplicative,
    R: 'static,
    E: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    Func: FnMut(A, B) -> C + 'static,
{
    F::map::<R, E, (A, B), C, _>(F::product::<R, E, A, B>(fa, fb), move |(a, b)| {
        function(a, b)
    })
}

// =============================================================================
// Sequencing
// =============================================================================

/// Runs both computations and keeps the result of the first.
#[inline]
pub fn and_then_discard<F, R, E, A, B>(fa: Kind<F, R, E, A>, fb: Kind<F, R, E, B>) -> Kind<F, R, E, A>
where
    F: SemiApplicative,
    R: 'static,
    E: 'static,
    A: 'static,
    B: 'static,
{
    F::map::<R, E, (A, B), A, _>(F::product::<R, E, A, B>(fa, fb), |(a, _)| a)
}

/// Runs both computations and keeps the result of the second.
#[inline]
pub fn and_then<F, R, E, A, B>(fa: Kind<F, R, E, A>, fb: Kind<F, R, E, B>) -> Kind<F, R, E, B>
where
    F: SemiApplicative,
    R: 'static,
    E: 'static,
    A: 'static,
    B: 'static,
{
    F::map::<R, E, (A, B), B, _>(F::product::<R, E, A, B>(fa, fb), |(_, b)| b)
}

/// Appends the result of an independent computation to the record in `fa`.
///
/// The applicative counterpart of [`chainable::bind`](super::chainable::bind):
/// `fb` does not depend on the record.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let record = of::do_::<OptionTypeLambda, (), ()>();
/// let record = semi_applicative::and_then_bind::<OptionTypeLambda, (), (), _, _>(record, Some(1));
/// let record = semi_applicative::and_then_bind::<OptionTypeLambda, (), (), _, _>(record, Some("two"));
/// assert_eq!(record, Some((1, "two")));
/// ```
#[inline]
pub fn and_then_bind<F, R, E, S, B>(fa: Kind<F, R, E, S>, fb: Kind<F, R, E, B>) -> Kind<F, R, E, S::Output>
where
    F: SemiApplicative,
    R: 'static,
    E: 'static,
    S: Append<B> + 'static,
    S::Output: 'static,
    B: 'static,
{
    F::map::<R, E, (S, B), S::Output, _>(F::product::<R, E, S, B>(fa, fb), |(record, b)| {
        record.append(b)
    })
}

// =============================================================================
// Lifted semigroup
// =============================================================================

/// A semigroup over computations, built by [`lift_semigroup`].
///
/// Combining pairs both computations with `product` and then combines the
/// inner values with the wrapped semigroup, passing the second value first:
/// `combine(x, y) == map(product(x, y), |(a1, a2)| S.combine(a2, a1))`.
/// The same wrapper is a [`Monoid`](super::Monoid) when the type lambda is
/// [`Applicative`](super::Applicative), see
/// [`applicative::lift_monoid`](super::applicative::lift_monoid).
pub struct Lifted<F, R, E, A, S> {
    pub(crate) instance: Rc<S>,
    marker: PhantomData<fn() -> (F, R, E, A)>,
}

impl<F, R, E, A, S> Lifted<F, R, E, A, S> {
    pub(crate) fn new(instance: S) -> Self {
        Self {
            instance: Rc::new(instance),
            marker: PhantomData,
        }
    }
}

impl<F, R, E, A, S> Clone for Lifted<F, R, E, A, S> {
    fn clone(&self) -> Self {
        Self {
            instance: Rc::clone(&self.instance),
            marker: PhantomData,
        }
    }
}

impl<F, R, E, A, S> Semigroup<Kind<F, R, E, A>> for Lifted<F, R, E, A, S>
where
    F: SemiApplicative,
    R: 'static,
    E: 'static,
    A: 'static,
    S: Semigroup<A> + 'static,
{
    fn combine(&self, first: Kind<F, R, E, A>, second: Kind<F, R, E, A>) -> Kind<F, R, E, A> {
        let instance = Rc::clone(&self.instance);
        F::map::<R, E, (A, A), A, _>(F::product::<R, E, A, A>(first, second), move |(a1, a2)| {
            instance.combine(a2, a1)
        })
    }
}

/// Lifts a semigroup over `A` into a semigroup over `F<A>`.
///
/// The inner values are combined second-first, see [`Lifted`].
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let lifted = semi_applicative::lift_semigroup::<OptionTypeLambda, (), (), String, _>(StringConcat);
/// assert_eq!(
///     lifted.combine(Some("a".to_string()), Some("b".to_string())),
///     Some("ba".to_string())
/// );
/// assert_eq!(lifted.combine(Some("a".to_string()), None), None);
/// ```
#[inline]
pub fn lift_semigroup<F, R, E, A, S>(semigroup: S) -> Lifted<F, R, E, A, S>
where
    F: SemiApplicative,
    S: Semigroup<A>,
{
    Lifted::new(semigroup)
}

#[cfg(all(test, feature = "data"))]
mod tests {
    use super::*;
    use crate::data::{NumberSum, OptionTypeLambda, ResultTypeLambda, StringConcat};
    use rstest::rstest;

    #[rstest]
    fn ap_equals_product_then_map() {
        let fab: Option<fn(i32) -> i32> = Some(|n| n * 2);
        let derived = OptionTypeLambda::map::<(), (), _, _, _>(
            OptionTypeLambda::product::<(), (), _, _>(fab, Some(21)),
            |(function, a): (fn(i32) -> i32, i32)| function(a),
        );
        assert_eq!(ap::<OptionTypeLambda, (), (), _, _, _>(fab, Some(21)), derived);
        assert_eq!(derived, Some(42));
    }

    #[rstest]
    fn lift2_result_keeps_first_error() {
        let add = lift2::<ResultTypeLambda, (), String, _, _, _, _>(|a: i32, b: i32| a + b);
        assert_eq!(add(Ok(1), Ok(2)), Ok(3));
        assert_eq!(
            add(Err("left".to_string()), Err("right".to_string())),
            Err("left".to_string())
        );
    }

    #[rstest]
    fn lift2_can_be_called_repeatedly() {
        let multiply = lift2::<OptionTypeLambda, (), (), _, _, _, _>(|a: i32, b: i32| a * b);
        assert_eq!(multiply(Some(2), Some(3)), Some(6));
        assert_eq!(multiply(Some(4), Some(5)), Some(20));
    }

    #[rstest]
    #[case(Some(1), Some(2), Some(3))]
    #[case(None, Some(2), None)]
    #[case(Some(1), None, None)]
    fn zip_with_option(#[case] first: Option<i32>, #[case] second: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(
            zip_with::<OptionTypeLambda, (), (), _, _, _, _>(first, second, |a: i32, b: i32| a + b),
            expected
        );
    }

    #[rstest]
    fn and_then_discard_keeps_first_value() {
        assert_eq!(and_then_discard::<OptionTypeLambda, (), (), _, _>(Some(1), Some("x")), Some(1));
        assert_eq!(and_then_discard::<OptionTypeLambda, (), (), _, _>(Some(1), None::<&str>), None);
    }

    #[rstest]
    fn and_then_keeps_second_value() {
        let result: Result<&str, String> =
            and_then::<ResultTypeLambda, (), String, _, _>(Ok(1), Ok("x"));
        assert_eq!(result, Ok("x"));
    }

    #[rstest]
    fn lift_semigroup_combines_second_first() {
        let lifted = lift_semigroup::<ResultTypeLambda, (), String, String, _>(StringConcat);
        assert_eq!(
            lifted.combine(Ok("x".to_string()), Ok("y".to_string())),
            Ok("yx".to_string())
        );
    }

    #[rstest]
    fn lift_semigroup_commutative_inner_is_unaffected_by_order() {
        let lifted = lift_semigroup::<OptionTypeLambda, (), (), i32, _>(NumberSum);
        assert_eq!(lifted.combine(Some(1), Some(2)), Some(3));
        assert_eq!(lifted.combine_many(Some(1), vec![Some(2), Some(3)]), Some(6));
    }
}
