//! Equivalence type class - equality relations as values.
//!
//! An [`Equivalence<A>`] decides whether two borrowed `A`s are equivalent.
//! It is to [`PartialEq`] what [`Order`](super::Order) is to [`Ord`]: a
//! relation chosen per use site, which can be projected with [`contramap`]
//! and combined.
//!
//! # Laws
//!
//! ```text
//! equals(a, a)                                  (reflexivity)
//! equals(a, b) == equals(b, a)                  (symmetry)
//! equals(a, b) && equals(b, c) implies equals(a, c)   (transitivity)
//! ```

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::rc::Rc;

use super::contravariant::{self, Contravariant};
use super::higher::{Kind, TypeLambda};
use super::invariant::Invariant;
use super::monoid::Monoid;
use super::of::Of;
use super::order::Order;
use super::product::Product;
use super::semi_product::SemiProduct;
use super::semigroup::Semigroup;
use super::tuple::Tuple;

/// An equivalence relation on `A`, as a value.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let case_insensitive = equivalence::contramap(Strict, |text: &String| text.to_lowercase());
/// assert!(case_insensitive.equals(&"Hello".to_string(), &"hELLO".to_string()));
/// ```
pub trait Equivalence<A: ?Sized> {
    /// Returns `true` if the two values are equivalent.
    fn equals(&self, first: &A, second: &A) -> bool;
}

impl<A, Q> Equivalence<A> for &Q
where
    A: ?Sized,
    Q: Equivalence<A> + ?Sized,
{
    #[inline]
    fn equals(&self, first: &A, second: &A) -> bool {
        (**self).equals(first, second)
    }
}

impl<A, Q> Equivalence<A> for Box<Q>
where
    A: ?Sized,
    Q: Equivalence<A> + ?Sized,
{
    #[inline]
    fn equals(&self, first: &A, second: &A) -> bool {
        (**self).equals(first, second)
    }
}

impl<A, Q> Equivalence<A> for Rc<Q>
where
    A: ?Sized,
    Q: Equivalence<A> + ?Sized,
{
    #[inline]
    fn equals(&self, first: &A, second: &A) -> bool {
        (**self).equals(first, second)
    }
}

/// The equivalence given by a type's [`PartialEq`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Strict;

impl<A> Equivalence<A> for Strict
where
    A: PartialEq + ?Sized,
{
    #[inline]
    fn equals(&self, first: &A, second: &A) -> bool {
        first == second
    }
}

/// The equivalence under which all values are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Always;

impl<A: ?Sized> Equivalence<A> for Always {
    #[inline]
    fn equals(&self, _first: &A, _second: &A) -> bool {
        true
    }
}

/// An equivalence backed by a predicate, built by [`make`].
#[derive(Debug, Clone, Copy)]
pub struct FnEquivalence<F>(F);

impl<A, F> Equivalence<A> for FnEquivalence<F>
where
    A: ?Sized,
    F: Fn(&A, &A) -> bool,
{
    #[inline]
    fn equals(&self, first: &A, second: &A) -> bool {
        std::ptr::eq(first, second) || (self.0)(first, second)
    }
}

/// Creates an equivalence from a predicate.
///
/// A value is equivalent to itself (the same reference) without calling the
/// predicate.
#[inline]
pub const fn make<A, F>(equals: F) -> FnEquivalence<F>
where
    A: ?Sized,
    F: Fn(&A, &A) -> bool,
{
    FnEquivalence(equals)
}

/// The equivalence induced by an order, built by [`from_order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FromOrder<O>(O);

impl<A, O> Equivalence<A> for FromOrder<O>
where
    A: ?Sized,
    O: Order<A>,
{
    #[inline]
    fn equals(&self, first: &A, second: &A) -> bool {
        self.0.compare(first, second) == Ordering::Equal
    }
}

/// Treats values as equivalent when `order` compares them `Equal`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let same_number = equivalence::from_order(NumberOrder);
/// assert!(same_number.equals(&0.0_f64, &0.0_f64));
/// assert!(!same_number.equals(&1.0_f64, &2.0_f64));
/// ```
#[inline]
pub const fn from_order<O>(order: O) -> FromOrder<O> {
    FromOrder(order)
}

/// An equivalence on `B` obtained by projecting to `A`, built by [`contramap`].
pub struct Contramap<Q, F, A> {
    equivalence: Q,
    function: F,
    marker: PhantomData<fn() -> A>,
}

impl<A, B, Q, F> Equivalence<B> for Contramap<Q, F, A>
where
    B: ?Sized,
    Q: Equivalence<A>,
    F: Fn(&B) -> A,
{
    #[inline]
    fn equals(&self, first: &B, second: &B) -> bool {
        self.equivalence
            .equals(&(self.function)(first), &(self.function)(second))
    }
}

/// Compares `B`s by the `A` that `function` projects out of them.
#[inline]
pub const fn contramap<A, B, Q, F>(equivalence: Q, function: F) -> Contramap<Q, F, A>
where
    B: ?Sized,
    Q: Equivalence<A>,
    F: Fn(&B) -> A,
{
    Contramap {
        equivalence,
        function,
        marker: PhantomData,
    }
}

/// Two equivalences that must both hold, built by [`combine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combine<Q1, Q2> {
    first: Q1,
    second: Q2,
}

impl<A, Q1, Q2> Equivalence<A> for Combine<Q1, Q2>
where
    A: ?Sized,
    Q1: Equivalence<A>,
    Q2: Equivalence<A>,
{
    #[inline]
    fn equals(&self, first: &A, second: &A) -> bool {
        self.first.equals(first, second) && self.second.equals(first, second)
    }
}

/// Requires both `first` and `second` to hold.
#[inline]
pub const fn combine<Q1, Q2>(first: Q1, second: Q2) -> Combine<Q1, Q2> {
    Combine { first, second }
}

/// Compares tuples position by position, see [`Tuple`].
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let pair = equivalence::tuple((Strict, equivalence::from_order(NumberOrder)));
/// assert!(pair.equals(&("a", 1.0_f64), &("a", 1.0_f64)));
/// assert!(!pair.equals(&("a", 1.0_f64), &("b", 1.0_f64)));
/// ```
#[inline]
pub const fn tuple<T>(instances: T) -> Tuple<T> {
    Tuple(instances)
}

macro_rules! impl_tuple_equivalence {
    ($(($($instance:ident : $value:ident : $index:tt),*)),+ $(,)?) => {
        $(
            impl<$($instance, $value),*> Equivalence<($($value,)*)> for Tuple<($($instance,)*)>
            where
                $($instance: Equivalence<$value>,)*
            {
                #[inline]
                #[allow(unused_variables)]
                fn equals(&self, first: &($($value,)*), second: &($($value,)*)) -> bool {
                    true $(&& self.0.$index.equals(&first.$index, &second.$index))*
                }
            }
        )+
    };
}

impl_tuple_equivalence!(
    (),
    (Q0: A0: 0),
    (Q0: A0: 0, Q1: A1: 1),
    (Q0: A0: 0, Q1: A1: 1, Q2: A2: 2),
    (Q0: A0: 0, Q1: A1: 1, Q2: A2: 2, Q3: A3: 3),
    (Q0: A0: 0, Q1: A1: 1, Q2: A2: 2, Q3: A3: 3, Q4: A4: 4),
    (Q0: A0: 0, Q1: A1: 1, Q2: A2: 2, Q3: A3: 3, Q4: A4: 4, Q5: A5: 5),
    (Q0: A0: 0, Q1: A1: 1, Q2: A2: 2, Q3: A3: 3, Q4: A4: 4, Q5: A5: 5, Q6: A6: 6),
    (Q0: A0: 0, Q1: A1: 1, Q2: A2: 2, Q3: A3: 3, Q4: A4: 4, Q5: A5: 5, Q6: A6: 6, Q7: A7: 7),
);

/// Element-wise equivalence of sequences of the same length, built by [`array`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArrayEquivalence<Q>(Q);

impl<A, Q> Equivalence<[A]> for ArrayEquivalence<Q>
where
    Q: Equivalence<A>,
{
    fn equals(&self, first: &[A], second: &[A]) -> bool {
        first.len() == second.len()
            && first
                .iter()
                .zip(second)
                .all(|(a, b)| self.0.equals(a, b))
    }
}

impl<A, Q> Equivalence<Vec<A>> for ArrayEquivalence<Q>
where
    Q: Equivalence<A>,
{
    #[inline]
    fn equals(&self, first: &Vec<A>, second: &Vec<A>) -> bool {
        Equivalence::<[A]>::equals(self, first.as_slice(), second.as_slice())
    }
}

/// Lifts an element equivalence to slices and vectors.
#[inline]
pub const fn array<Q>(equivalence: Q) -> ArrayEquivalence<Q> {
    ArrayEquivalence(equivalence)
}

/// Compares vectors position by position with one equivalence per position.
///
/// Only positions present in both vectors and covered by an instance are
/// tested.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct All<Q> {
    instances: Vec<Q>,
}

impl<A, Q> Equivalence<Vec<A>> for All<Q>
where
    Q: Equivalence<A>,
{
    fn equals(&self, first: &Vec<A>, second: &Vec<A>) -> bool {
        self.instances
            .iter()
            .zip(first.iter().zip(second))
            .all(|(equivalence, (a, b))| equivalence.equals(a, b))
    }
}

/// Builds the position-wise equivalence over vectors.
#[inline]
pub fn all<Q, I>(instances: I) -> All<Q>
where
    I: IntoIterator<Item = Q>,
{
    All {
        instances: instances.into_iter().collect(),
    }
}

/// The semigroup and monoid of boxed equivalences: conjunction, with
/// [`Always`] as identity.
pub struct EquivalenceInstances<A> {
    marker: PhantomData<fn() -> A>,
}

impl<A> Clone for EquivalenceInstances<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for EquivalenceInstances<A> {}

impl<A: 'static> Semigroup<DynEquivalence<A>> for EquivalenceInstances<A> {
    #[inline]
    fn combine(&self, first: DynEquivalence<A>, second: DynEquivalence<A>) -> DynEquivalence<A> {
        Box::new(combine(first, second))
    }
}

impl<A: 'static> Monoid<DynEquivalence<A>> for EquivalenceInstances<A> {
    #[inline]
    fn empty(&self) -> DynEquivalence<A> {
        Box::new(Always)
    }
}

/// Returns the semigroup that conjoins equivalences.
#[inline]
pub const fn get_semigroup<A: 'static>() -> EquivalenceInstances<A> {
    EquivalenceInstances {
        marker: PhantomData,
    }
}

/// Returns the monoid that conjoins equivalences.
#[inline]
pub const fn get_monoid<A: 'static>() -> EquivalenceInstances<A> {
    get_semigroup()
}

/// Derives an equivalence for a struct from equivalences of the listed fields.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
/// use kinded::equivalence_struct;
///
/// struct User {
///     id: u64,
///     name: String,
/// }
///
/// let same_user = equivalence_struct!(User { id: Strict });
/// let first = User { id: 1, name: "a".to_string() };
/// let renamed = User { id: 1, name: "b".to_string() };
/// assert!(same_user.equals(&first, &renamed));
/// ```
#[macro_export]
macro_rules! equivalence_struct {
    ($name:ident { $($field:ident : $instance:expr),+ $(,)? }) => {{
        $(let $field = $instance;)+
        $crate::typeclass::equivalence::make::<$name, _>(move |first: &$name, second: &$name| {
            true $(&& $crate::typeclass::Equivalence::equals(&$field, &first.$field, &second.$field))+
        })
    }};
}

// =============================================================================
// EquivalenceTypeLambda
// =============================================================================

/// A boxed equivalence.
pub type DynEquivalence<A> = Box<dyn Equivalence<A>>;

/// The type lambda of equivalences, `Out1 => DynEquivalence<Out1>`.
pub enum EquivalenceTypeLambda {}

impl TypeLambda for EquivalenceTypeLambda {
    type Type<In, Out2, Out1> = DynEquivalence<Out1>;
}

impl Invariant for EquivalenceTypeLambda {
    #[inline]
    fn imap<R, E, A, B, To, From>(fa: Kind<Self, R, E, A>, to: To, from: From) -> Kind<Self, R, E, B>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
        To: Fn(A) -> B + 'static,
        From: Fn(&B) -> A + 'static,
    {
        contravariant::imap::<Self, R, E, A, B, To, From>(fa, to, from)
    }
}

impl Contravariant for EquivalenceTypeLambda {
    #[inline]
    fn contramap<R, E, A, B, F>(fa: Kind<Self, R, E, A>, function: F) -> Kind<Self, R, E, B>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
        F: Fn(&B) -> A + 'static,
    {
        Box::new(contramap(fa, function))
    }
}

impl Of for EquivalenceTypeLambda {
    #[inline]
    fn of<R, E, A>(_a: A) -> Kind<Self, R, E, A>
    where
        R: 'static,
        E: 'static,
        A: 'static,
    {
        Box::new(Always)
    }
}

impl SemiProduct for EquivalenceTypeLambda {
    #[inline]
    fn product<R, E, A, B>(fa: Kind<Self, R, E, A>, fb: Kind<Self, R, E, B>) -> Kind<Self, R, E, (A, B)>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
    {
        Box::new(Tuple((fa, fb)))
    }

    #[inline]
    fn product_many<R, E, A, I>(first: Kind<Self, R, E, A>, rest: I) -> Kind<Self, R, E, Vec<A>>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Kind<Self, R, E, A>>,
    {
        Box::new(all(std::iter::once(first).chain(rest)))
    }
}

impl Product for EquivalenceTypeLambda {
    #[inline]
    fn product_all<R, E, A, I>(collection: I) -> Kind<Self, R, E, Vec<A>>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Kind<Self, R, E, A>>,
    {
        Box::new(all(collection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::order::Natural;
    use rstest::rstest;

    #[rstest]
    #[case(1, 1, true)]
    #[case(1, 2, false)]
    fn strict_follows_partial_eq(#[case] first: i32, #[case] second: i32, #[case] expected: bool) {
        assert_eq!(Strict.equals(&first, &second), expected);
    }

    #[rstest]
    fn strict_works_on_unsized_values() {
        assert!(Strict.equals("abc", "abc"));
    }

    #[rstest]
    fn make_short_circuits_on_same_reference() {
        let never = make(|_: &i32, _: &i32| false);
        let value = 1;
        assert!(never.equals(&value, &value));
        assert!(!never.equals(&value, &1));
    }

    #[rstest]
    fn combine_requires_both() {
        let both = combine(
            contramap(Strict, |pair: &(i32, i32)| pair.0),
            contramap(Strict, |pair: &(i32, i32)| pair.1),
        );
        assert!(both.equals(&(1, 2), &(1, 2)));
        assert!(!both.equals(&(1, 2), &(1, 3)));
    }

    #[rstest]
    fn array_requires_same_length() {
        let equivalence = array(Strict);
        assert!(equivalence.equals(&vec![1, 2], &vec![1, 2]));
        assert!(!equivalence.equals(&vec![1, 2], &vec![1, 2, 3]));
    }

    #[rstest]
    fn from_order_matches_equal_ordering() {
        assert!(from_order(Natural).equals(&3, &3));
        assert!(!from_order(Natural).equals(&3, &4));
    }

    #[rstest]
    fn monoid_of_nothing_accepts_everything() {
        let monoid = get_monoid::<i32>();
        let equivalence = monoid.combine_all(Vec::new());
        assert!(equivalence.equals(&1, &2));
    }

    #[rstest]
    fn lambda_product_pairs_components() {
        let numbers: DynEquivalence<i32> = Box::new(Strict);
        let parity: DynEquivalence<i32> = Box::new(contramap(Strict, |n: &i32| n % 2));
        let pair = EquivalenceTypeLambda::product::<(), (), _, _>(numbers, parity);
        assert!(pair.equals(&(1, 3), &(1, 5)));
        assert!(!pair.equals(&(1, 3), &(1, 4)));
    }

    #[rstest]
    fn struct_macro_checks_listed_fields() {
        struct Account {
            owner: &'static str,
            balance: i64,
        }
        let same = crate::equivalence_struct!(Account { owner: Strict, balance: Strict });
        let account = Account { owner: "a", balance: 1 };
        assert!(same.equals(&account, &Account { owner: "a", balance: 1 }));
        assert!(!same.equals(&account, &Account { owner: "a", balance: 2 }));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_contramap_is_symmetric(a in any::<i16>(), b in any::<i16>()) {
            let by_sign = contramap(Strict, |n: &i16| n.signum());
            prop_assert_eq!(by_sign.equals(&a, &b), by_sign.equals(&b, &a));
        }

        #[test]
        fn prop_array_agrees_with_vec_eq(a in prop::collection::vec(0u8..3, 0..4), b in prop::collection::vec(0u8..3, 0..4)) {
            prop_assert_eq!(array(Strict).equals(&a, &b), a == b);
        }
    }
}
