//! Monoid type class - a semigroup with an identity element.
//!
//! # Laws
//!
//! In addition to associativity, for every `a`:
//!
//! ```text
//! combine(empty(), a) == a
//! combine(a, empty()) == a
//! ```
//!
//! `combine_all(collection)` folds `collection` starting from `empty()`, so
//! an empty collection yields the identity rather than failing.
//!
//! # Examples
//!
//! ```rust
//! use kinded::prelude::*;
//!
//! assert_eq!(NumberSum.combine_all(vec![1, 2, 3]), 6);
//! assert_eq!(NumberSum.combine_all(Vec::<i32>::new()), 0);
//! assert_eq!(StringConcat.combine_all(Vec::new()), "");
//! ```

use std::rc::Rc;

use super::bounded::Bounded;
use super::higher::{Kind, TypeLambda};
use super::invariant::Invariant;
use super::semi_product::SemiProduct;
use super::semigroup::{self, All, Imap, Max, Min, Reverse, Semigroup};
use super::tuple::Tuple;

/// A [`Semigroup`] with an identity element.
///
/// # Laws
///
/// ## Left identity
/// ```text
/// combine(empty(), a) == a
/// ```
///
/// ## Right identity
/// ```text
/// combine(a, empty()) == a
/// ```
pub trait Monoid<A>: Semigroup<A> {
    /// The identity element.
    fn empty(&self) -> A;

    /// Combines every element of `collection`, starting from [`empty`](Self::empty).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::prelude::*;
    ///
    /// assert_eq!(BooleanAll.combine_all(vec![true, true]), true);
    /// assert_eq!(BooleanAny.combine_all(Vec::new()), false);
    /// ```
    fn combine_all<I>(&self, collection: I) -> A
    where
        I: IntoIterator<Item = A>,
        Self: Sized,
    {
        self.combine_many(self.empty(), collection)
    }
}

impl<A, M> Monoid<A> for &M
where
    M: Monoid<A> + ?Sized,
{
    #[inline]
    fn empty(&self) -> A {
        (**self).empty()
    }
}

impl<A, M> Monoid<A> for Box<M>
where
    M: Monoid<A> + ?Sized,
{
    #[inline]
    fn empty(&self) -> A {
        (**self).empty()
    }
}

impl<A, M> Monoid<A> for Rc<M>
where
    M: Monoid<A> + ?Sized,
{
    #[inline]
    fn empty(&self) -> A {
        (**self).empty()
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// A monoid built from a combining function and an identity producer.
///
/// Built by [`make`] and [`make_lazy`].
#[derive(Debug, Clone, Copy)]
pub struct FnMonoid<C, E> {
    combine: C,
    empty: E,
}

impl<A, C, E> Semigroup<A> for FnMonoid<C, E>
where
    C: Fn(A, A) -> A,
{
    #[inline]
    fn combine(&self, first: A, second: A) -> A {
        (self.combine)(first, second)
    }
}

impl<A, C, E> Monoid<A> for FnMonoid<C, E>
where
    C: Fn(A, A) -> A,
    E: Fn() -> A,
{
    #[inline]
    fn empty(&self) -> A {
        (self.empty)()
    }
}

/// Creates a monoid from a combining function and its identity.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let longest = monoid::make(
///     |first: String, second: String| if second.len() > first.len() { second } else { first },
///     String::new(),
/// );
/// assert_eq!(longest.combine_all(vec!["ab".to_string(), "abc".to_string(), "a".to_string()]), "abc");
/// assert_eq!(longest.combine_all(Vec::new()), "");
/// ```
#[inline]
pub fn make<A, C>(combine: C, empty: A) -> FnMonoid<C, impl Fn() -> A>
where
    A: Clone,
    C: Fn(A, A) -> A,
{
    make_lazy(combine, move || empty.clone())
}

/// Creates a monoid whose identity is produced on demand, for element types
/// that are not [`Clone`].
#[inline]
pub const fn make_lazy<A, C, E>(combine: C, empty: E) -> FnMonoid<C, E>
where
    C: Fn(A, A) -> A,
    E: Fn() -> A,
{
    FnMonoid { combine, empty }
}

/// A semigroup paired with an identity value, built by [`from_semigroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromSemigroup<S, A> {
    semigroup: S,
    empty: A,
}

impl<A, S> Semigroup<A> for FromSemigroup<S, A>
where
    S: Semigroup<A>,
{
    #[inline]
    fn combine(&self, first: A, second: A) -> A {
        self.semigroup.combine(first, second)
    }
}

impl<A, S> Monoid<A> for FromSemigroup<S, A>
where
    S: Semigroup<A>,
    A: Clone,
{
    #[inline]
    fn empty(&self) -> A {
        self.empty.clone()
    }
}

/// Extends `semigroup` with `empty`, which must be its identity.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let at_least_ten = monoid::from_semigroup(semigroup::max(NumberOrder), 10);
/// assert_eq!(at_least_ten.combine_all(vec![3, 12]), 12);
/// assert_eq!(at_least_ten.combine_all(vec![3, 4]), 10);
/// ```
#[inline]
pub const fn from_semigroup<A, S>(semigroup: S, empty: A) -> FromSemigroup<S, A>
where
    S: Semigroup<A>,
    A: Clone,
{
    FromSemigroup { semigroup, empty }
}

impl<A, M> Monoid<A> for Reverse<M>
where
    M: Monoid<A>,
{
    #[inline]
    fn empty(&self) -> A {
        self.0.empty()
    }
}

/// Swaps the operands of `monoid`; the identity is unchanged.
#[inline]
pub const fn reverse<M>(monoid: M) -> Reverse<M> {
    Reverse(monoid)
}

/// The minimum under a bounded order; the identity is the upper bound.
impl<A, B> Monoid<A> for Min<B>
where
    B: Bounded<A>,
{
    #[inline]
    fn empty(&self) -> A {
        self.0.max_bound()
    }
}

/// The maximum under a bounded order; the identity is the lower bound.
impl<A, B> Monoid<A> for Max<B>
where
    B: Bounded<A>,
{
    #[inline]
    fn empty(&self) -> A {
        self.0.min_bound()
    }
}

/// Returns the monoid that keeps the minimum under `bounded`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let smallest = monoid::min(NumberOrder);
/// assert_eq!(smallest.combine_all(vec![4_u8, 2, 9]), 2);
/// assert_eq!(smallest.combine_all(Vec::<u8>::new()), u8::MAX);
/// ```
#[inline]
pub const fn min<B>(bounded: B) -> Min<B> {
    semigroup::min(bounded)
}

/// Returns the monoid that keeps the maximum under `bounded`.
#[inline]
pub const fn max<B>(bounded: B) -> Max<B> {
    semigroup::max(bounded)
}

impl<A, B, M, To, From> Monoid<B> for Imap<M, To, From, A>
where
    M: Monoid<A>,
    To: Fn(A) -> B,
    From: Fn(&B) -> A,
{
    #[inline]
    fn empty(&self) -> B {
        (self.to)(self.inner.empty())
    }
}

/// Combines tuples position by position; the identity is the tuple of
/// identities.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let pair = monoid::tuple((StringConcat, NumberSum));
/// assert_eq!(pair.combine_all(Vec::<(String, i32)>::new()), (String::new(), 0));
/// ```
#[inline]
pub const fn tuple<T>(instances: T) -> Tuple<T> {
    Tuple(instances)
}

macro_rules! impl_tuple_monoid {
    ($(($($instance:ident : $value:ident : $index:tt),*)),+ $(,)?) => {
        $(
            impl<$($instance, $value),*> Monoid<($($value,)*)> for Tuple<($($instance,)*)>
            where
                $($instance: Monoid<$value>,)*
            {
                #[inline]
                #[allow(clippy::unused_unit)]
                fn empty(&self) -> ($($value,)*) {
                    ($(self.0.$index.empty(),)*)
                }
            }
        )+
    };
}

impl_tuple_monoid!(
    (),
    (M0: A0: 0),
    (M0: A0: 0, M1: A1: 1),
    (M0: A0: 0, M1: A1: 1, M2: A2: 2),
    (M0: A0: 0, M1: A1: 1, M2: A2: 2, M3: A3: 3),
    (M0: A0: 0, M1: A1: 1, M2: A2: 2, M3: A3: 3, M4: A4: 4),
    (M0: A0: 0, M1: A1: 1, M2: A2: 2, M3: A3: 3, M4: A4: 4, M5: A5: 5),
    (M0: A0: 0, M1: A1: 1, M2: A2: 2, M3: A3: 3, M4: A4: 4, M5: A5: 5, M6: A6: 6),
    (M0: A0: 0, M1: A1: 1, M2: A2: 2, M3: A3: 3, M4: A4: 4, M5: A5: 5, M6: A6: 6, M7: A7: 7),
);

/// The identity of the position-wise monoid has one `empty` per instance.
impl<A, M> Monoid<Vec<A>> for All<M>
where
    M: Monoid<A>,
{
    fn empty(&self) -> Vec<A> {
        self.instances.iter().map(Monoid::empty).collect()
    }
}

/// Builds the position-wise monoid over vectors.
///
/// With no instances the identity is the empty vector.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let instances: Vec<DynMonoid<i32>> = vec![Box::new(NumberSum), Box::new(NumberMultiply)];
/// let positional = monoid::all(instances);
/// assert_eq!(positional.empty(), vec![0, 1]);
/// assert_eq!(positional.combine_all(vec![vec![2, 2], vec![3, 3]]), vec![5, 6]);
///
/// let nothing = monoid::all(Vec::<DynMonoid<i32>>::new());
/// assert_eq!(nothing.combine_all(Vec::new()), Vec::<i32>::new());
/// ```
#[inline]
pub fn all<M, I>(instances: I) -> All<M>
where
    I: IntoIterator<Item = M>,
{
    semigroup::all(instances)
}

/// Derives a monoid for a struct from monoids of its fields.
///
/// Every field of the struct must be listed. The identity is the struct of
/// field identities.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
/// use kinded::monoid_struct;
///
/// #[derive(Debug, PartialEq)]
/// struct Summary {
///     a: String,
///     b: i32,
/// }
///
/// let summary = monoid_struct!(Summary { a: StringConcat, b: NumberSum });
/// assert_eq!(summary.combine_all(Vec::new()), Summary { a: String::new(), b: 0 });
/// ```
#[macro_export]
macro_rules! monoid_struct {
    ($name:ident { $($field:ident : $instance:expr),+ $(,)? }) => {{
        $(let $field = ::std::rc::Rc::new($instance);)+
        let combine = {
            $(let $field = ::std::rc::Rc::clone(&$field);)+
            move |first: $name, second: $name| $name {
                $($field: $crate::typeclass::Semigroup::combine(&$field, first.$field, second.$field),)+
            }
        };
        let empty = move || $name {
            $($field: $crate::typeclass::Monoid::empty(&$field),)+
        };
        $crate::typeclass::monoid::make_lazy::<$name, _, _>(combine, empty)
    }};
}

// =============================================================================
// MonoidTypeLambda
// =============================================================================

/// A boxed monoid instance.
pub type DynMonoid<A> = Box<dyn Monoid<A>>;

/// The type lambda of monoid instances, `Out1 => DynMonoid<Out1>`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let text: DynMonoid<String> = Box::new(StringConcat);
/// let count: DynMonoid<i32> = Box::new(NumberSum);
/// let both = MonoidTypeLambda::product::<(), (), _, _>(text, count);
/// assert_eq!(both.empty(), (String::new(), 0));
/// ```
pub enum MonoidTypeLambda {}

impl TypeLambda for MonoidTypeLambda {
    type Type<In, Out2, Out1> = DynMonoid<Out1>;
}

impl Invariant for MonoidTypeLambda {
    fn imap<R, E, A, B, To, From>(fa: Kind<Self, R, E, A>, to: To, from: From) -> Kind<Self, R, E, B>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
        To: Fn(A) -> B + 'static,
        From: Fn(&B) -> A + 'static,
    {
        Box::new(semigroup::imap(fa, to, from))
    }
}

impl SemiProduct for MonoidTypeLambda {
    fn product<R, E, A, B>(fa: Kind<Self, R, E, A>, fb: Kind<Self, R, E, B>) -> Kind<Self, R, E, (A, B)>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
    {
        Box::new(Tuple((fa, fb)))
    }

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

/// Collects monoid instances into the position-wise monoid over vectors.
///
/// An empty collection gives the monoid whose identity is the empty vector.
#[inline]
pub fn product_all<A, I>(collection: I) -> DynMonoid<Vec<A>>
where
    A: 'static,
    I: IntoIterator<Item = DynMonoid<A>>,
{
    Box::new(all(collection))
}

#[cfg(all(test, feature = "data"))]
mod tests {
    use super::*;
    use crate::data::{NumberMultiply, NumberOrder, NumberSum, StringConcat};
    use rstest::rstest;

    #[rstest]
    fn forwarding_instances_agree() {
        let boxed: DynMonoid<i32> = Box::new(NumberMultiply);
        let shared = Rc::new(NumberMultiply);
        assert_eq!(boxed.empty(), 1);
        assert_eq!(Monoid::<i32>::empty(&shared), 1);
        assert_eq!((&NumberMultiply).combine_all(vec![2, 3]), 6);
    }

    #[rstest]
    fn make_lazy_for_non_clone_values() {
        struct Counter(u32);
        let counters = make_lazy(|first: Counter, second: Counter| Counter(first.0 + second.0), || Counter(0));
        assert_eq!(counters.combine_all(vec![Counter(2), Counter(5)]).0, 7);
        assert_eq!(counters.combine_all(Vec::new()).0, 0);
    }

    #[rstest]
    fn reverse_keeps_identity() {
        let prepend = reverse(StringConcat);
        assert_eq!(prepend.combine_all(vec!["a".to_string(), "b".to_string()]), "ba");
        assert_eq!(prepend.empty(), "");
    }

    #[rstest]
    #[case(Vec::new(), i64::MIN)]
    #[case(vec![-4, 9, 2], 9)]
    fn max_monoid_starts_from_lower_bound(#[case] values: Vec<i64>, #[case] expected: i64) {
        assert_eq!(max(NumberOrder).combine_all(values), expected);
    }

    #[rstest]
    fn imap_maps_identity() {
        let lengths = semigroup::imap(NumberSum, |count: usize| "x".repeat(count), |text: &String| text.len());
        assert_eq!(lengths.empty(), "");
    }

    #[rstest]
    fn all_of_nothing_has_empty_identity() {
        let nothing = all(Vec::<DynMonoid<i32>>::new());
        assert_eq!(nothing.empty(), Vec::<i32>::new());
    }

    #[rstest]
    fn product_all_of_nothing_is_identity() {
        let monoid = product_all::<i32, _>(Vec::new());
        assert_eq!(monoid.empty(), Vec::<i32>::new());
        assert_eq!(monoid.combine(Vec::new(), Vec::new()), Vec::<i32>::new());
    }

    #[rstest]
    fn lambda_imap_preserves_laws() {
        let sum: DynMonoid<i32> = Box::new(NumberSum);
        let wrapped = MonoidTypeLambda::imap::<(), (), _, _, _, _>(sum, |n: i32| (n,), |pair: &(i32,)| pair.0);
        assert_eq!(wrapped.combine_all(vec![(1,), (2,)]), (3,));
        assert_eq!(wrapped.empty(), (0,));
    }

    #[rstest]
    fn struct_macro_combines_all_fields() {
        #[derive(Debug, PartialEq)]
        struct Totals {
            names: String,
            count: i32,
        }
        let totals = crate::monoid_struct!(Totals { names: StringConcat, count: NumberSum });
        let combined = totals.combine_all(vec![
            Totals { names: "a".to_string(), count: 1 },
            Totals { names: "b".to_string(), count: 2 },
        ]);
        assert_eq!(combined, Totals { names: "ab".to_string(), count: 3 });
    }
}

#[cfg(all(test, feature = "data"))]
mod property_tests {
    use super::*;
    use crate::data::{NumberSum, StringConcat};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_tuple_identity(text in ".{0,8}", n in any::<i32>()) {
            let pair = tuple((StringConcat, NumberSum));
            let value = (text, i64::from(n));
            prop_assert_eq!(pair.combine(pair.empty(), value.clone()), value.clone());
            prop_assert_eq!(pair.combine(value.clone(), pair.empty()), value);
        }

        #[test]
        fn prop_combine_all_is_combine_many_from_empty(values in prop::collection::vec(".{0,4}", 0..6)) {
            let expected = StringConcat.combine_many(String::new(), values.clone());
            prop_assert_eq!(StringConcat.combine_all(values), expected);
        }
    }
}
