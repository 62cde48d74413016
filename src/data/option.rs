//! Instances for [`Option`].
//!
//! [`OptionTypeLambda`] maps `Out1` to `Option<Out1>`; the `In` and `Out2`
//! slots are unused. `None` short-circuits products and sequencing, and
//! `coproduct` keeps the first `Some`.
//!
//! The helper instances lift an instance for `A` to `Option<A>`.

use std::cmp::Ordering;

use crate::typeclass::{
    Applicative, Coproduct, Covariant, Equivalence, FlatMap, Foldable, Invariant, Kind, Monoid,
    Of, Order, Product, SemiCoproduct, SemiProduct, Semigroup, Traversable, TypeLambda, covariant,
};

/// The type lambda of `Option`: `Out1 => Option<Out1>`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let parsed = OptionTypeLambda::flat_map::<(), (), _, _, _>(Some("42"), |text: &str| text.parse::<i32>().ok());
/// assert_eq!(parsed, Some(42));
/// ```
pub enum OptionTypeLambda {}

impl TypeLambda for OptionTypeLambda {
    type Type<In, Out2, Out1> = Option<Out1>;
}

// =============================================================================
// Mapping
// =============================================================================

impl Invariant for OptionTypeLambda {
    #[inline]
    fn imap<R, E, A, B, To, From>(fa: Option<A>, to: To, from: From) -> Option<B>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
        To: Fn(A) -> B + 'static,
        From: Fn(&B) -> A + 'static,
    {
        covariant::imap::<Self, R, E, A, B, To, From>(fa, to, from)
    }
}

impl Covariant for OptionTypeLambda {
    #[inline]
    fn map<R, E, A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Of for OptionTypeLambda {
    #[inline]
    fn of<R, E, A>(a: A) -> Option<A>
    where
        R: 'static,
        E: 'static,
        A: 'static,
    {
        Some(a)
    }
}

// =============================================================================
// Products
// =============================================================================

impl SemiProduct for OptionTypeLambda {
    #[inline]
    fn product<R, E, A, B>(fa: Option<A>, fb: Option<B>) -> Option<(A, B)>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
    {
        fa.zip(fb)
    }

    fn product_many<R, E, A, I>(first: Option<A>, rest: I) -> Option<Vec<A>>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Option<A>>,
    {
        std::iter::once(first).chain(rest).collect()
    }
}

impl Product for OptionTypeLambda {
    fn product_all<R, E, A, I>(collection: I) -> Option<Vec<A>>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Option<A>>,
    {
        collection.into_iter().collect()
    }
}

// =============================================================================
// Sequencing and traversal
// =============================================================================

impl FlatMap for OptionTypeLambda {
    #[inline]
    fn flat_map<R, E, A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Option<B> + 'static,
    {
        fa.and_then(function)
    }
}

impl Foldable for OptionTypeLambda {
    #[inline]
    fn reduce<R, E, A, B, F>(fa: Option<A>, initial: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match fa {
            Some(a) => function(initial, a),
            None => initial,
        }
    }

    #[inline]
    fn reduce_right<R, E, A, B, F>(fa: Option<A>, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        Self::reduce::<R, E, A, B, F>(fa, initial, function)
    }
}

impl Traversable for OptionTypeLambda {
    fn traverse<G, R, E, GR, GE, A, B, Func>(
        fa: Option<A>,
        mut function: Func,
    ) -> Kind<G, GR, GE, Option<B>>
    where
        G: Applicative,
        R: 'static,
        E: 'static,
        GR: 'static,
        GE: 'static,
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> Kind<G, GR, GE, B> + 'static,
    {
        match fa {
            Some(a) => G::map::<GR, GE, B, Option<B>, _>(function(a), Some),
            None => G::of::<GR, GE, Option<B>>(None),
        }
    }
}

// =============================================================================
// Alternatives
// =============================================================================

impl SemiCoproduct for OptionTypeLambda {
    #[inline]
    fn coproduct<R, E1, E2, A>(fa: Option<A>, fb: Option<A>) -> Option<A>
    where
        R: 'static,
        E1: 'static,
        E2: 'static,
        A: 'static,
    {
        fa.or(fb)
    }

    fn coproduct_many<R, E, A, I>(first: Option<A>, rest: I) -> Option<A>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Option<A>>,
    {
        std::iter::once(first).chain(rest).flatten().next()
    }
}

impl Coproduct for OptionTypeLambda {
    #[inline]
    fn zero<R, E, A>() -> Option<A>
    where
        R: 'static,
        E: 'static,
        A: 'static,
    {
        None
    }

    fn coproduct_all<R, E, A, I>(collection: I) -> Option<A>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Option<A>>,
    {
        collection.into_iter().flatten().next()
    }
}

// =============================================================================
// Helper instances
// =============================================================================

/// Orders `None` before every `Some`, and `Some`s by the inner order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionOrder<O>(O);

impl<A, O> Order<Option<A>> for OptionOrder<O>
where
    O: Order<A>,
{
    fn compare(&self, first: &Option<A>, second: &Option<A>) -> Ordering {
        match (first, second) {
            (Some(a), Some(b)) => self.0.compare(a, b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Lifts an order on `A` to `Option<A>`, with `None` first.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let order = option::get_order(NumberOrder);
/// let mut values = vec![Some(2), None, Some(1)];
/// values.sort_by(|a, b| order.compare(a, b));
/// assert_eq!(values, vec![None, Some(1), Some(2)]);
/// ```
#[inline]
pub const fn get_order<O>(order: O) -> OptionOrder<O> {
    OptionOrder(order)
}

/// Two options are equivalent when both are `None` or both hold equivalent
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionEquivalence<Q>(Q);

impl<A, Q> Equivalence<Option<A>> for OptionEquivalence<Q>
where
    Q: Equivalence<A>,
{
    fn equals(&self, first: &Option<A>, second: &Option<A>) -> bool {
        match (first, second) {
            (Some(a), Some(b)) => self.0.equals(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Lifts an equivalence on `A` to `Option<A>`.
#[inline]
pub const fn get_equivalence<Q>(equivalence: Q) -> OptionEquivalence<Q> {
    OptionEquivalence(equivalence)
}

/// Combines two `Some`s with the inner semigroup; a `None` operand is
/// skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionSemigroup<S>(S);

impl<A, S> Semigroup<Option<A>> for OptionSemigroup<S>
where
    S: Semigroup<A>,
{
    fn combine(&self, first: Option<A>, second: Option<A>) -> Option<A> {
        match (first, second) {
            (Some(a), Some(b)) => Some(self.0.combine(a, b)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl<A, S> Monoid<Option<A>> for OptionSemigroup<S>
where
    S: Semigroup<A>,
{
    #[inline]
    fn empty(&self) -> Option<A> {
        None
    }
}

/// Lifts a semigroup on `A` to `Option<A>`.
#[inline]
pub const fn get_semigroup<S>(semigroup: S) -> OptionSemigroup<S> {
    OptionSemigroup(semigroup)
}

/// Lifts a semigroup on `A` to a monoid on `Option<A>` with `None` as the
/// identity.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let monoid = option::get_monoid(NumberSum);
/// assert_eq!(monoid.combine_all(vec![Some(1), None, Some(4)]), Some(5));
/// assert_eq!(monoid.combine_all(Vec::<Option<i32>>::new()), None);
/// ```
#[inline]
pub const fn get_monoid<S>(semigroup: S) -> OptionSemigroup<S> {
    OptionSemigroup(semigroup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{NumberOrder, NumberSum, ResultTypeLambda, StringConcat};
    use crate::typeclass::{Strict, foldable};
    use rstest::rstest;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(Kind<OptionTypeLambda, (), (), i32>, Option<i32>);
    assert_type_eq_all!(Kind<OptionTypeLambda, String, u8, bool>, Option<bool>);

    #[rstest]
    #[case(Some(1), Some(2), Some((1, 2)))]
    #[case(Some(1), None, None)]
    #[case(None, Some(2), None)]
    fn product_requires_both(
        #[case] fa: Option<i32>,
        #[case] fb: Option<i32>,
        #[case] expected: Option<(i32, i32)>,
    ) {
        assert_eq!(OptionTypeLambda::product::<(), (), _, _>(fa, fb), expected);
    }

    #[rstest]
    fn product_many_fails_on_any_none() {
        assert_eq!(
            OptionTypeLambda::product_many::<(), (), _, _>(Some(1), vec![Some(2), None]),
            None
        );
        assert_eq!(
            OptionTypeLambda::product_many::<(), (), _, _>(Some(1), vec![Some(2)]),
            Some(vec![1, 2])
        );
    }

    #[rstest]
    fn coproduct_many_takes_first_some() {
        assert_eq!(
            OptionTypeLambda::coproduct_many::<(), (), _, _>(None, vec![None, Some(3), Some(4)]),
            Some(3)
        );
    }

    #[rstest]
    fn traverse_some_maps_inside_effect() {
        let result = OptionTypeLambda::traverse::<ResultTypeLambda, (), (), (), String, _, _, _>(
            Some("7"),
            |text: &str| text.parse::<i32>().map_err(|error| error.to_string()),
        );
        assert_eq!(result, Ok(Some(7)));
    }

    #[rstest]
    fn reduce_right_matches_reduce() {
        assert_eq!(foldable::to_vec::<OptionTypeLambda, (), (), _>(Some('x')), vec!['x']);
        assert_eq!(
            OptionTypeLambda::reduce_right::<(), (), _, _, _>(Some(2), 10, |total, n| total - n),
            8
        );
    }

    #[rstest]
    fn get_order_places_none_first() {
        let order = get_order(NumberOrder);
        assert_eq!(order.compare(&None, &Some(i32::MIN)), Ordering::Less);
        assert_eq!(order.compare(&Some(3), &Some(2)), Ordering::Greater);
    }

    #[rstest]
    fn get_equivalence_compares_contents() {
        let equivalence = get_equivalence(Strict);
        assert!(equivalence.equals(&Some(1), &Some(1)));
        assert!(equivalence.equals(&None::<i32>, &None));
        assert!(!equivalence.equals(&Some(1), &None));
    }

    #[rstest]
    fn get_semigroup_skips_none() {
        let semigroup = get_semigroup(StringConcat);
        assert_eq!(
            semigroup.combine(Some("a".to_string()), None),
            Some("a".to_string())
        );
        assert_eq!(
            semigroup.combine(Some("a".to_string()), Some("b".to_string())),
            Some("ab".to_string())
        );
    }

    #[rstest]
    fn get_monoid_identity_is_none() {
        let monoid = get_monoid(NumberSum);
        assert_eq!(monoid.combine(monoid.empty(), Some(3)), Some(3));
    }
}
