//! Semigroup type class - an associative binary operation.
//!
//! A semigroup instance is a *value* that knows how to combine two `A`s.
//! Several instances can exist for the same `A` (sum and product for
//! numbers, concatenation and "keep first" for strings), so the instance is
//! passed explicitly rather than selected by type.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `A`:
//!
//! ## Associativity
//!
//! ```text
//! combine(combine(a, b), c) == combine(a, combine(b, c))
//! ```
//!
//! `combine_many(a, [b1, .., bn])` must equal the left-to-right repeated
//! `combine`.
//!
//! # Examples
//!
//! ```rust
//! use kinded::prelude::*;
//!
//! assert_eq!(NumberSum.combine(1, 2), 3);
//! assert_eq!(StringConcat.combine_many("a".to_string(), vec!["b".to_string(), "c".to_string()]), "abc");
//!
//! let longest = semigroup::max(order::contramap(NumberOrder, |text: &&str| text.len()));
//! assert_eq!(longest.combine("ab", "abc"), "abc");
//! ```

use std::marker::PhantomData;
use std::rc::Rc;

use super::higher::{Kind, TypeLambda};
use super::invariant::Invariant;
use super::order::Order;
use super::semi_product::SemiProduct;
use super::tuple::Tuple;

/// A type class for values that combine two `A`s associatively.
///
/// # Laws
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// combine(combine(a, b), c) == combine(a, combine(b, c))
/// ```
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let concat = semigroup::make(|first: Vec<i32>, second: Vec<i32>| [first, second].concat());
/// assert_eq!(concat.combine(vec![1], vec![2, 3]), vec![1, 2, 3]);
/// ```
pub trait Semigroup<A> {
    /// Combines two values into one.
    fn combine(&self, first: A, second: A) -> A;

    /// Combines `start` with every element of `collection`, left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::prelude::*;
    ///
    /// let product = NumberMultiply.combine_many(2, vec![3, 4]);
    /// assert_eq!(product, 24);
    /// ```
    fn combine_many<I>(&self, start: A, collection: I) -> A
    where
        I: IntoIterator<Item = A>,
        Self: Sized,
    {
        collection
            .into_iter()
            .fold(start, |accumulator, element| self.combine(accumulator, element))
    }

    /// The data-last form of [`combine`](Self::combine): fixes the second
    /// operand and waits for the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::prelude::*;
    ///
    /// let append_world = StringConcat.combine_with(" world".to_string());
    /// assert_eq!(append_world("hello".to_string()), "hello world");
    /// ```
    fn combine_with(&self, second: A) -> impl FnOnce(A) -> A
    where
        Self: Sized,
    {
        move |first| self.combine(first, second)
    }
}

impl<A, S> Semigroup<A> for &S
where
    S: Semigroup<A> + ?Sized,
{
    #[inline]
    fn combine(&self, first: A, second: A) -> A {
        (**self).combine(first, second)
    }
}

impl<A, S> Semigroup<A> for Box<S>
where
    S: Semigroup<A> + ?Sized,
{
    #[inline]
    fn combine(&self, first: A, second: A) -> A {
        (**self).combine(first, second)
    }
}

impl<A, S> Semigroup<A> for Rc<S>
where
    S: Semigroup<A> + ?Sized,
{
    #[inline]
    fn combine(&self, first: A, second: A) -> A {
        (**self).combine(first, second)
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// A semigroup backed by a combining function, built by [`make`].
#[derive(Debug, Clone, Copy)]
pub struct FnSemigroup<F>(F);

impl<A, F> Semigroup<A> for FnSemigroup<F>
where
    F: Fn(A, A) -> A,
{
    #[inline]
    fn combine(&self, first: A, second: A) -> A {
        (self.0)(first, second)
    }
}

/// Creates a semigroup from a combining function.
///
/// The function must be associative.
#[inline]
pub const fn make<A, F>(combine: F) -> FnSemigroup<F>
where
    F: Fn(A, A) -> A,
{
    FnSemigroup(combine)
}

/// An instance with its operands swapped.
///
/// As a semigroup `combine(a, b)` is `inner.combine(b, a)`; as an order
/// `compare(a, b)` is `inner.compare(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reverse<T>(pub T);

impl<A, S> Semigroup<A> for Reverse<S>
where
    S: Semigroup<A>,
{
    #[inline]
    fn combine(&self, first: A, second: A) -> A {
        self.0.combine(second, first)
    }
}

/// Swaps the operands of `semigroup`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let prepend = semigroup::reverse(StringConcat);
/// assert_eq!(prepend.combine("a".to_string(), "b".to_string()), "ba");
/// ```
#[inline]
pub const fn reverse<S>(semigroup: S) -> Reverse<S> {
    Reverse(semigroup)
}

/// The semigroup that always keeps its first operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct First;

impl<A> Semigroup<A> for First {
    #[inline]
    fn combine(&self, first: A, _second: A) -> A {
        first
    }

    #[inline]
    fn combine_many<I>(&self, start: A, _collection: I) -> A
    where
        I: IntoIterator<Item = A>,
    {
        start
    }
}

/// Returns the semigroup that always keeps its first operand.
#[inline]
pub const fn first() -> First {
    First
}

/// The semigroup that always keeps its second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Last;

impl<A> Semigroup<A> for Last {
    #[inline]
    fn combine(&self, _first: A, second: A) -> A {
        second
    }

    #[inline]
    fn combine_many<I>(&self, start: A, collection: I) -> A
    where
        I: IntoIterator<Item = A>,
    {
        collection.into_iter().last().unwrap_or(start)
    }
}

/// Returns the semigroup that always keeps its second operand.
#[inline]
pub const fn last() -> Last {
    Last
}

/// The semigroup that ignores both operands and yields a fixed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant<A>(A);

impl<A> Semigroup<A> for Constant<A>
where
    A: Clone,
{
    #[inline]
    fn combine(&self, _first: A, _second: A) -> A {
        self.0.clone()
    }
}

/// Returns the semigroup that always yields `value`.
#[inline]
pub const fn constant<A>(value: A) -> Constant<A>
where
    A: Clone,
{
    Constant(value)
}

/// The semigroup keeping the smaller operand under an [`Order`].
///
/// Ties keep the first operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Min<O>(pub O);

impl<A, O> Semigroup<A> for Min<O>
where
    O: Order<A>,
{
    #[inline]
    fn combine(&self, first: A, second: A) -> A {
        if self.0.less_than_or_equal_to(&first, &second) {
            first
        } else {
            second
        }
    }
}

/// Returns the semigroup that keeps the minimum under `order`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let smallest = semigroup::min(NumberOrder);
/// assert_eq!(smallest.combine_many(5, vec![3, 8, 1]), 1);
/// ```
#[inline]
pub const fn min<O>(order: O) -> Min<O> {
    Min(order)
}

/// The semigroup keeping the larger operand under an [`Order`].
///
/// Ties keep the first operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Max<O>(pub O);

impl<A, O> Semigroup<A> for Max<O>
where
    O: Order<A>,
{
    #[inline]
    fn combine(&self, first: A, second: A) -> A {
        if self.0.greater_than_or_equal_to(&first, &second) {
            first
        } else {
            second
        }
    }
}

/// Returns the semigroup that keeps the maximum under `order`.
#[inline]
pub const fn max<O>(order: O) -> Max<O> {
    Max(order)
}

/// A semigroup that places a separator between its operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intercalate<S, A> {
    semigroup: S,
    middle: A,
}

impl<A, S> Semigroup<A> for Intercalate<S, A>
where
    S: Semigroup<A>,
    A: Clone,
{
    #[inline]
    fn combine(&self, first: A, second: A) -> A {
        self.semigroup
            .combine(first, self.semigroup.combine(self.middle.clone(), second))
    }
}

/// Places `middle` between the two operands of `semigroup`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let comma_separated = semigroup::intercalate(StringConcat, ", ".to_string());
/// assert_eq!(
///     comma_separated.combine_many("a".to_string(), vec!["b".to_string(), "c".to_string()]),
///     "a, b, c"
/// );
/// ```
#[inline]
pub const fn intercalate<S, A>(semigroup: S, middle: A) -> Intercalate<S, A>
where
    S: Semigroup<A>,
    A: Clone,
{
    Intercalate { semigroup, middle }
}

/// A semigroup carried over to another type, built by [`imap`].
pub struct Imap<S, To, From, A> {
    pub(crate) inner: S,
    pub(crate) to: To,
    pub(crate) from: From,
    marker: PhantomData<fn() -> A>,
}

impl<A, B, S, To, From> Semigroup<B> for Imap<S, To, From, A>
where
    S: Semigroup<A>,
    To: Fn(A) -> B,
    From: Fn(&B) -> A,
{
    #[inline]
    fn combine(&self, first: B, second: B) -> B {
        (self.to)(self.inner.combine((self.from)(&first), (self.from)(&second)))
    }
}

/// Carries `semigroup` over to `B` through a pair of conversions.
///
/// `combine(b1, b2) == to(semigroup.combine(from(&b1), from(&b2)))`.
#[inline]
pub const fn imap<A, B, S, To, From>(semigroup: S, to: To, from: From) -> Imap<S, To, From, A>
where
    S: Semigroup<A>,
    To: Fn(A) -> B,
    From: Fn(&B) -> A,
{
    Imap {
        inner: semigroup,
        to,
        from,
        marker: PhantomData,
    }
}

/// Combines tuples position by position, see [`Tuple`].
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let pair = semigroup::tuple((StringConcat, NumberSum));
/// assert_eq!(pair.combine(("a".to_string(), 1), ("b".to_string(), 2)), ("ab".to_string(), 3));
/// ```
#[inline]
pub const fn tuple<T>(instances: T) -> Tuple<T> {
    Tuple(instances)
}

macro_rules! impl_tuple_semigroup {
    ($(($($instance:ident : $value:ident : $index:tt),*)),+ $(,)?) => {
        $(
            impl<$($instance, $value),*> Semigroup<($($value,)*)> for Tuple<($($instance,)*)>
            where
                $($instance: Semigroup<$value>,)*
            {
                #[inline]
                #[allow(unused_variables, clippy::unused_unit)]
                fn combine(&self, first: ($($value,)*), second: ($($value,)*)) -> ($($value,)*) {
                    ($(self.0.$index.combine(first.$index, second.$index),)*)
                }
            }
        )+
    };
}

impl_tuple_semigroup!(
    (),
    (S0: A0: 0),
    (S0: A0: 0, S1: A1: 1),
    (S0: A0: 0, S1: A1: 1, S2: A2: 2),
    (S0: A0: 0, S1: A1: 1, S2: A2: 2, S3: A3: 3),
    (S0: A0: 0, S1: A1: 1, S2: A2: 2, S3: A3: 3, S4: A4: 4),
    (S0: A0: 0, S1: A1: 1, S2: A2: 2, S3: A3: 3, S4: A4: 4, S5: A5: 5),
    (S0: A0: 0, S1: A1: 1, S2: A2: 2, S3: A3: 3, S4: A4: 4, S5: A5: 5, S6: A6: 6),
    (S0: A0: 0, S1: A1: 1, S2: A2: 2, S3: A3: 3, S4: A4: 4, S5: A5: 5, S6: A6: 6, S7: A7: 7),
);

/// Combines vectors position by position, one instance per position.
///
/// Positions beyond the number of instances are dropped; a position present
/// in only one operand is kept as is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct All<S> {
    pub(crate) instances: Vec<S>,
}

impl<A, S> Semigroup<Vec<A>> for All<S>
where
    S: Semigroup<A>,
{
    fn combine(&self, first: Vec<A>, second: Vec<A>) -> Vec<A> {
        let mut first = first.into_iter();
        let mut second = second.into_iter();
        self.instances
            .iter()
            .map_while(|instance| match (first.next(), second.next()) {
                (Some(a), Some(b)) => Some(instance.combine(a, b)),
                (Some(value), None) | (None, Some(value)) => Some(value),
                (None, None) => None,
            })
            .collect()
    }
}

/// Builds the position-wise semigroup over vectors from a collection of
/// instances.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let instances: Vec<DynSemigroup<i32>> = vec![Box::new(NumberSum), Box::new(NumberMultiply)];
/// let positional = semigroup::all(instances);
/// assert_eq!(positional.combine(vec![2, 3], vec![4, 5]), vec![6, 15]);
/// ```
#[inline]
pub fn all<S, I>(instances: I) -> All<S>
where
    I: IntoIterator<Item = S>,
{
    All {
        instances: instances.into_iter().collect(),
    }
}

/// Derives a semigroup for a struct from semigroups of its fields.
///
/// Every field of the struct must be listed.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
/// use kinded::semigroup_struct;
///
/// #[derive(Debug, PartialEq)]
/// struct Stats {
///     hits: u64,
///     peak: u64,
/// }
///
/// let stats = semigroup_struct!(Stats { hits: NumberSum, peak: NumberMax });
/// assert_eq!(
///     stats.combine(Stats { hits: 1, peak: 7 }, Stats { hits: 2, peak: 3 }),
///     Stats { hits: 3, peak: 7 }
/// );
/// ```
#[macro_export]
macro_rules! semigroup_struct {
    ($name:ident { $($field:ident : $instance:expr),+ $(,)? }) => {{
        $(let $field = $instance;)+
        $crate::typeclass::semigroup::make::<$name, _>(move |first: $name, second: $name| $name {
            $($field: $crate::typeclass::Semigroup::combine(&$field, first.$field, second.$field),)+
        })
    }};
}

// =============================================================================
// SemigroupTypeLambda
// =============================================================================

/// A boxed semigroup instance.
pub type DynSemigroup<A> = Box<dyn Semigroup<A>>;

/// The type lambda of semigroup instances, `Out1 => DynSemigroup<Out1>`.
///
/// Semigroups both consume and produce their parameter, so the lambda is
/// [`Invariant`]; [`SemiProduct`] pairs two instances into a tuple instance.
pub enum SemigroupTypeLambda {}

impl TypeLambda for SemigroupTypeLambda {
    type Type<In, Out2, Out1> = DynSemigroup<Out1>;
}

impl Invariant for SemigroupTypeLambda {
    fn imap<R, E, A, B, To, From>(fa: Kind<Self, R, E, A>, to: To, from: From) -> Kind<Self, R, E, B>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
        To: Fn(A) -> B + 'static,
        From: Fn(&B) -> A + 'static,
    {
        Box::new(imap(fa, to, from))
    }
}

impl SemiProduct for SemigroupTypeLambda {
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

#[cfg(all(test, feature = "data"))]
mod tests {
    use super::*;
    use crate::data::{NumberMultiply, NumberOrder, NumberSum, StringConcat};
    use rstest::rstest;

    #[rstest]
    fn make_uses_the_function() {
        let subtract_free = make(|first: i32, second: i32| first.max(second));
        assert_eq!(subtract_free.combine(3, 7), 7);
    }

    #[rstest]
    fn forwarding_instances_agree() {
        let boxed: DynSemigroup<i32> = Box::new(NumberSum);
        let shared = Rc::new(NumberSum);
        assert_eq!((&NumberSum).combine(1, 2), 3);
        assert_eq!(boxed.combine(1, 2), 3);
        assert_eq!(shared.combine(1, 2), 3);
    }

    #[rstest]
    #[case(Vec::new(), "a")]
    #[case(vec!["b"], "b")]
    #[case(vec!["b", "c"], "c")]
    fn last_combine_many_keeps_last(#[case] rest: Vec<&'static str>, #[case] expected: &str) {
        assert_eq!(last().combine_many("a", rest), expected);
    }

    #[rstest]
    fn first_combine_many_keeps_start() {
        assert_eq!(first().combine_many(1, vec![2, 3]), 1);
    }

    #[rstest]
    fn constant_ignores_operands() {
        assert_eq!(constant(0).combine(4, 5), 0);
    }

    #[rstest]
    fn min_and_max_keep_first_on_ties() {
        let by_length = crate::typeclass::order::contramap(NumberOrder, |pair: &(usize, char)| pair.0);
        assert_eq!(min(&by_length).combine((1, 'a'), (1, 'b')), (1, 'a'));
        assert_eq!(max(&by_length).combine((1, 'a'), (1, 'b')), (1, 'a'));
        assert_eq!(max(&by_length).combine((1, 'a'), (2, 'b')), (2, 'b'));
    }

    #[rstest]
    fn imap_converts_through_inner_semigroup() {
        let lengths = imap(NumberSum, |count: usize| "x".repeat(count), |text: &String| text.len());
        assert_eq!(lengths.combine("ab".to_string(), "c".to_string()), "xxx");
    }

    #[rstest]
    fn reverse_of_reverse_is_original() {
        let twice = reverse(reverse(StringConcat));
        assert_eq!(twice.combine("a".to_string(), "b".to_string()), "ab");
    }

    #[rstest]
    fn empty_tuple_semigroup_combines_units() {
        assert_eq!(tuple(()).combine((), ()), ());
    }

    #[rstest]
    fn all_keeps_unmatched_positions_and_drops_extra() {
        let positional = all(vec![NumberSum, NumberSum]);
        assert_eq!(positional.combine(vec![1], vec![2, 3]), vec![3, 3]);
        assert_eq!(positional.combine(vec![1, 1, 1], vec![1, 1, 1]), vec![2, 2]);
    }

    #[rstest]
    fn lambda_product_pairs_instances() {
        let sum: DynSemigroup<i32> = Box::new(NumberSum);
        let multiply: DynSemigroup<i32> = Box::new(NumberMultiply);
        let pair = SemigroupTypeLambda::product::<(), (), _, _>(sum, multiply);
        assert_eq!(pair.combine((2, 2), (3, 3)), (5, 6));
    }

    #[rstest]
    fn lambda_product_many_is_positional() {
        let sum: DynSemigroup<i32> = Box::new(NumberSum);
        let multiply: DynSemigroup<i32> = Box::new(NumberMultiply);
        let positional = SemigroupTypeLambda::product_many::<(), (), _, _>(sum, vec![multiply]);
        assert_eq!(positional.combine(vec![2, 2], vec![3, 3]), vec![5, 6]);
    }
}
