//! Order type class - total orderings as values.
//!
//! An [`Order<A>`] instance compares two borrowed `A`s. Unlike [`Ord`], the
//! ordering is a value: the same type can be ordered in several ways, and
//! orders can be reversed, combined and carried over to other types with
//! [`contramap`].
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! compare(a, a) == Equal                                   (reflexivity)
//! compare(a, b) == compare(b, a).reverse()                 (antisymmetry)
//! compare(a, b) != Greater && compare(b, c) != Greater
//!     implies compare(a, c) != Greater                     (transitivity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kinded::prelude::*;
//! use std::cmp::Ordering;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let by_age_then_name = order::combine(
//!     order::contramap(NumberOrder, |person: &Person| person.age),
//!     order::contramap(StringOrder, |person: &Person| person.name.clone()),
//! );
//!
//! let alice = Person { name: "Alice".to_string(), age: 30 };
//! let bob = Person { name: "Bob".to_string(), age: 30 };
//! assert_eq!(by_age_then_name.compare(&alice, &bob), Ordering::Less);
//! ```

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::rc::Rc;

use super::contravariant::{self, Contravariant};
use super::higher::{Kind, TypeLambda};
use super::invariant::Invariant;
use super::monoid::Monoid;
use super::of::Of;
use super::product::Product;
use super::semi_product::SemiProduct;
use super::semigroup::Semigroup;
use super::tuple::Tuple;

pub use super::semigroup::Reverse;

/// A total order on `A`, as a value.
///
/// Only [`compare`](Self::compare) is required; the comparisons and
/// `min`/`max`/`clamp` are derived from it.
pub trait Order<A: ?Sized> {
    /// Compares two values.
    fn compare(&self, first: &A, second: &A) -> Ordering;

    /// Returns `true` if `first` is strictly less than `second`.
    #[inline]
    fn less_than(&self, first: &A, second: &A) -> bool {
        self.compare(first, second) == Ordering::Less
    }

    /// Returns `true` if `first` is less than or equal to `second`.
    #[inline]
    fn less_than_or_equal_to(&self, first: &A, second: &A) -> bool {
        self.compare(first, second) != Ordering::Greater
    }

    /// Returns `true` if `first` is strictly greater than `second`.
    #[inline]
    fn greater_than(&self, first: &A, second: &A) -> bool {
        self.compare(first, second) == Ordering::Greater
    }

    /// Returns `true` if `first` is greater than or equal to `second`.
    #[inline]
    fn greater_than_or_equal_to(&self, first: &A, second: &A) -> bool {
        self.compare(first, second) != Ordering::Less
    }

    /// Returns the smaller value; `first` when they are equal.
    #[inline]
    fn min(&self, first: A, second: A) -> A
    where
        A: Sized,
    {
        if self.less_than_or_equal_to(&first, &second) {
            first
        } else {
            second
        }
    }

    /// Returns the larger value; `first` when they are equal.
    #[inline]
    fn max(&self, first: A, second: A) -> A
    where
        A: Sized,
    {
        if self.greater_than_or_equal_to(&first, &second) {
            first
        } else {
            second
        }
    }

    /// Restricts `value` to the inclusive range `[low, high]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::prelude::*;
    ///
    /// assert_eq!(NumberOrder.clamp(15, 0, 10), 10);
    /// assert_eq!(NumberOrder.clamp(-3, 0, 10), 0);
    /// assert_eq!(NumberOrder.clamp(4, 0, 10), 4);
    /// ```
    #[inline]
    fn clamp(&self, value: A, low: A, high: A) -> A
    where
        A: Sized,
    {
        self.min(self.max(value, low), high)
    }

    /// Returns `true` if `low <= value <= high`.
    #[inline]
    fn between(&self, value: &A, low: &A, high: &A) -> bool {
        self.greater_than_or_equal_to(value, low) && self.less_than_or_equal_to(value, high)
    }
}

impl<A, O> Order<A> for &O
where
    A: ?Sized,
    O: Order<A> + ?Sized,
{
    #[inline]
    fn compare(&self, first: &A, second: &A) -> Ordering {
        (**self).compare(first, second)
    }
}

impl<A, O> Order<A> for Box<O>
where
    A: ?Sized,
    O: Order<A> + ?Sized,
{
    #[inline]
    fn compare(&self, first: &A, second: &A) -> Ordering {
        (**self).compare(first, second)
    }
}

impl<A, O> Order<A> for Rc<O>
where
    A: ?Sized,
    O: Order<A> + ?Sized,
{
    #[inline]
    fn compare(&self, first: &A, second: &A) -> Ordering {
        (**self).compare(first, second)
    }
}

/// The order given by a type's [`Ord`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Natural;

impl<A> Order<A> for Natural
where
    A: Ord + ?Sized,
{
    #[inline]
    fn compare(&self, first: &A, second: &A) -> Ordering {
        first.cmp(second)
    }
}

/// The order that considers every pair of values equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Trivial;

impl<A: ?Sized> Order<A> for Trivial {
    #[inline]
    fn compare(&self, _first: &A, _second: &A) -> Ordering {
        Ordering::Equal
    }
}

/// An order backed by a comparison function, built by [`make`].
#[derive(Debug, Clone, Copy)]
pub struct FnOrder<F>(F);

impl<A, F> Order<A> for FnOrder<F>
where
    A: ?Sized,
    F: Fn(&A, &A) -> Ordering,
{
    #[inline]
    fn compare(&self, first: &A, second: &A) -> Ordering {
        if std::ptr::eq(first, second) {
            Ordering::Equal
        } else {
            (self.0)(first, second)
        }
    }
}

/// Creates an order from a comparison function.
///
/// A value compared with itself (the same reference) is `Equal` without
/// calling the function.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
/// use std::cmp::Ordering;
///
/// let by_length = order::make(|first: &String, second: &String| first.len().cmp(&second.len()));
/// assert_eq!(by_length.compare(&"ab".to_string(), &"c".to_string()), Ordering::Greater);
/// ```
#[inline]
pub const fn make<A, F>(compare: F) -> FnOrder<F>
where
    A: ?Sized,
    F: Fn(&A, &A) -> Ordering,
{
    FnOrder(compare)
}

impl<A, O> Order<A> for Reverse<O>
where
    A: ?Sized,
    O: Order<A>,
{
    #[inline]
    fn compare(&self, first: &A, second: &A) -> Ordering {
        self.0.compare(second, first)
    }
}

/// Reverses `order`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let descending = order::reverse(NumberOrder);
/// let mut values = vec![1, 3, 2];
/// values.sort_by(|a, b| descending.compare(a, b));
/// assert_eq!(values, vec![3, 2, 1]);
/// ```
#[inline]
pub const fn reverse<O>(order: O) -> Reverse<O> {
    Reverse(order)
}

/// An order on `B` obtained by projecting to `A`, built by [`contramap`].
pub struct Contramap<O, F, A> {
    order: O,
    function: F,
    marker: PhantomData<fn() -> A>,
}

impl<A, B, O, F> Order<B> for Contramap<O, F, A>
where
    B: ?Sized,
    O: Order<A>,
    F: Fn(&B) -> A,
{
    #[inline]
    fn compare(&self, first: &B, second: &B) -> Ordering {
        self.order
            .compare(&(self.function)(first), &(self.function)(second))
    }
}

/// Orders `B`s by the `A` that `function` projects out of them.
#[inline]
pub const fn contramap<A, B, O, F>(order: O, function: F) -> Contramap<O, F, A>
where
    B: ?Sized,
    O: Order<A>,
    F: Fn(&B) -> A,
{
    Contramap {
        order,
        function,
        marker: PhantomData,
    }
}

/// Two orders applied in sequence, built by [`combine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combine<O1, O2> {
    first: O1,
    second: O2,
}

impl<A, O1, O2> Order<A> for Combine<O1, O2>
where
    A: ?Sized,
    O1: Order<A>,
    O2: Order<A>,
{
    #[inline]
    fn compare(&self, first: &A, second: &A) -> Ordering {
        self.first
            .compare(first, second)
            .then_with(|| self.second.compare(first, second))
    }
}

/// Compares with `first`, falling back to `second` on ties.
#[inline]
pub const fn combine<O1, O2>(first: O1, second: O2) -> Combine<O1, O2> {
    Combine { first, second }
}

/// Compares tuples position by position, see [`Tuple`].
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
/// use std::cmp::Ordering;
///
/// let order = order::tuple((StringOrder, NumberOrder));
/// assert_eq!(order.compare(&("a", 1), &("a", 2)), Ordering::Less);
/// assert_eq!(order.compare(&("b", 1), &("a", 2)), Ordering::Greater);
/// ```
#[inline]
pub const fn tuple<T>(instances: T) -> Tuple<T> {
    Tuple(instances)
}

macro_rules! impl_tuple_order {
    ($(($($instance:ident : $value:ident : $index:tt),*)),+ $(,)?) => {
        $(
            impl<$($instance, $value),*> Order<($($value,)*)> for Tuple<($($instance,)*)>
            where
                $($instance: Order<$value>,)*
            {
                #[inline]
                #[allow(unused_variables)]
                fn compare(&self, first: &($($value,)*), second: &($($value,)*)) -> Ordering {
                    $(
                        match self.0.$index.compare(&first.$index, &second.$index) {
                            Ordering::Equal => {}
                            ordering => return ordering,
                        }
                    )*
                    Ordering::Equal
                }
            }
        )+
    };
}

impl_tuple_order!(
    (),
    (O0: A0: 0),
    (O0: A0: 0, O1: A1: 1),
    (O0: A0: 0, O1: A1: 1, O2: A2: 2),
    (O0: A0: 0, O1: A1: 1, O2: A2: 2, O3: A3: 3),
    (O0: A0: 0, O1: A1: 1, O2: A2: 2, O3: A3: 3, O4: A4: 4),
    (O0: A0: 0, O1: A1: 1, O2: A2: 2, O3: A3: 3, O4: A4: 4, O5: A5: 5),
    (O0: A0: 0, O1: A1: 1, O2: A2: 2, O3: A3: 3, O4: A4: 4, O5: A5: 5, O6: A6: 6),
    (O0: A0: 0, O1: A1: 1, O2: A2: 2, O3: A3: 3, O4: A4: 4, O5: A5: 5, O6: A6: 6, O7: A7: 7),
);

/// The lexicographic order on sequences, built by [`array`].
///
/// Elements are compared pairwise; when one sequence is a prefix of the
/// other, the shorter one is less.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArrayOrder<O>(O);

impl<A, O> Order<[A]> for ArrayOrder<O>
where
    O: Order<A>,
{
    fn compare(&self, first: &[A], second: &[A]) -> Ordering {
        for (a, b) in first.iter().zip(second) {
            match self.0.compare(a, b) {
                Ordering::Equal => {}
                ordering => return ordering,
            }
        }
        first.len().cmp(&second.len())
    }
}

impl<A, O> Order<Vec<A>> for ArrayOrder<O>
where
    O: Order<A>,
{
    #[inline]
    fn compare(&self, first: &Vec<A>, second: &Vec<A>) -> Ordering {
        Order::<[A]>::compare(self, first.as_slice(), second.as_slice())
    }
}

/// Lifts an element order to the lexicographic order on slices and vectors.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
/// use std::cmp::Ordering;
///
/// let order = order::array(NumberOrder);
/// assert_eq!(order.compare(&vec![1, 2], &vec![1, 2, 0]), Ordering::Less);
/// assert_eq!(order.compare(&vec![2], &vec![1, 9]), Ordering::Greater);
/// ```
#[inline]
pub const fn array<O>(order: O) -> ArrayOrder<O> {
    ArrayOrder(order)
}

/// Compares vectors position by position with one order per position.
///
/// Only positions present in both vectors and covered by an order are
/// compared; when all of them tie the vectors are equal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct All<O> {
    instances: Vec<O>,
}

impl<A, O> Order<Vec<A>> for All<O>
where
    O: Order<A>,
{
    fn compare(&self, first: &Vec<A>, second: &Vec<A>) -> Ordering {
        self.instances
            .iter()
            .zip(first.iter().zip(second))
            .map(|(order, (a, b))| order.compare(a, b))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

/// Builds the position-wise order over vectors from a collection of orders.
#[inline]
pub fn all<O, I>(instances: I) -> All<O>
where
    I: IntoIterator<Item = O>,
{
    All {
        instances: instances.into_iter().collect(),
    }
}

/// The semigroup and monoid of boxed orders.
///
/// `combine` chains two orders with [`combine`]; the identity is the order
/// that considers everything equal.
pub struct OrderInstances<A> {
    marker: PhantomData<fn() -> A>,
}

impl<A> Clone for OrderInstances<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for OrderInstances<A> {}

impl<A: 'static> Semigroup<DynOrder<A>> for OrderInstances<A> {
    #[inline]
    fn combine(&self, first: DynOrder<A>, second: DynOrder<A>) -> DynOrder<A> {
        Box::new(combine(first, second))
    }
}

impl<A: 'static> Monoid<DynOrder<A>> for OrderInstances<A> {
    #[inline]
    fn empty(&self) -> DynOrder<A> {
        Box::new(Trivial)
    }
}

/// Returns the semigroup that chains orders.
#[inline]
pub const fn get_semigroup<A: 'static>() -> OrderInstances<A> {
    OrderInstances {
        marker: PhantomData,
    }
}

/// Returns the monoid that chains orders.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
/// use std::cmp::Ordering;
///
/// let monoid = order::get_monoid::<(i32, i32)>();
/// let by_second_then_first = monoid.combine_all(vec![
///     Box::new(order::contramap(NumberOrder, |pair: &(i32, i32)| pair.1)) as DynOrder<(i32, i32)>,
///     Box::new(order::contramap(NumberOrder, |pair: &(i32, i32)| pair.0)),
/// ]);
/// assert_eq!(by_second_then_first.compare(&(2, 1), &(1, 1)), Ordering::Greater);
///
/// let nothing = monoid.combine_all(Vec::new());
/// assert_eq!(nothing.compare(&(2, 1), &(1, 1)), Ordering::Equal);
/// ```
#[inline]
pub const fn get_monoid<A: 'static>() -> OrderInstances<A> {
    get_semigroup()
}

/// Derives an order for a struct, comparing the listed fields in order.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
/// use kinded::order_struct;
/// use std::cmp::Ordering;
///
/// struct Version {
///     major: u32,
///     minor: u32,
/// }
///
/// let order = order_struct!(Version { major: NumberOrder, minor: NumberOrder });
/// let old = Version { major: 1, minor: 9 };
/// let new = Version { major: 2, minor: 0 };
/// assert_eq!(order.compare(&old, &new), Ordering::Less);
/// ```
#[macro_export]
macro_rules! order_struct {
    ($name:ident { $($field:ident : $instance:expr),+ $(,)? }) => {{
        $(let $field = $instance;)+
        $crate::typeclass::order::make::<$name, _>(move |first: &$name, second: &$name| {
            $(
                match $crate::typeclass::Order::compare(&$field, &first.$field, &second.$field) {
                    ::std::cmp::Ordering::Equal => {}
                    ordering => return ordering,
                }
            )+
            ::std::cmp::Ordering::Equal
        })
    }};
}

// =============================================================================
// OrderTypeLambda
// =============================================================================

/// A boxed order.
pub type DynOrder<A> = Box<dyn Order<A>>;

/// The type lambda of orders, `Out1 => DynOrder<Out1>`.
///
/// Orders consume their parameter, so the lambda is [`Contravariant`].
/// `of` ignores its argument and yields the trivial order, and `product`
/// compares pairs component-wise.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
/// use std::cmp::Ordering;
///
/// let numbers: DynOrder<i32> = Box::new(NumberOrder);
/// let words: DynOrder<String> = Box::new(StringOrder);
/// let pairs = OrderTypeLambda::product::<(), (), _, _>(numbers, words);
/// assert_eq!(pairs.compare(&(1, "b".to_string()), &(1, "a".to_string())), Ordering::Greater);
/// ```
pub enum OrderTypeLambda {}

impl TypeLambda for OrderTypeLambda {
    type Type<In, Out2, Out1> = DynOrder<Out1>;
}

impl Invariant for OrderTypeLambda {
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

impl Contravariant for OrderTypeLambda {
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

impl Of for OrderTypeLambda {
    #[inline]
    fn of<R, E, A>(_a: A) -> Kind<Self, R, E, A>
    where
        R: 'static,
        E: 'static,
        A: 'static,
    {
        Box::new(Trivial)
    }
}

impl SemiProduct for OrderTypeLambda {
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

impl Product for OrderTypeLambda {
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
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_reverse_is_antisymmetric(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(reverse(Natural).compare(&a, &b), Natural.compare(&b, &a));
        }

        #[test]
        fn prop_array_agrees_with_vec_ord(a in prop::collection::vec(any::<u8>(), 0..6), b in prop::collection::vec(any::<u8>(), 0..6)) {
            prop_assert_eq!(array(Natural).compare(&a, &b), a.cmp(&b));
        }

        #[test]
        fn prop_clamp_stays_between(value in any::<i32>(), x in any::<i32>(), y in any::<i32>()) {
            let (low, high) = if x <= y { (x, y) } else { (y, x) };
            let clamped = Natural.clamp(value, low, high);
            prop_assert!(Natural.between(&clamped, &low, &high));
        }
    }
}
