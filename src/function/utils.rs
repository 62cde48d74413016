//! Small combinators on plain functions.
//!
//! - [`identity`]: returns its argument (I combinator)
//! - [`constant`]: ignores its argument (K combinator)
//! - [`flip`]: swaps the arguments of a binary function (C combinator)
//! - [`tupled`] / [`untupled`]: convert between two arguments and a pair
//! - [`absurd`]: eliminates the uninhabited [`Infallible`]

use std::convert::Infallible;

/// Returns the value unchanged.
///
/// # Examples
///
/// ```rust
/// use kinded::function::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(kinded::flow!(identity, |n: i32| n + 1)(1), 2);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns a clone of `value`.
///
/// # Examples
///
/// ```rust
/// use kinded::function::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function: `flip(f)(b, a) == f(a, b)`.
///
/// # Examples
///
/// ```rust
/// use kinded::function::flip;
///
/// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Turns a binary function into a function of a pair.
///
/// # Examples
///
/// ```rust
/// use kinded::function::tupled;
///
/// let pairs = vec![(1, 2), (3, 4)];
/// let sums: Vec<i32> = pairs.into_iter().map(tupled(|a: i32, b: i32| a + b)).collect();
/// assert_eq!(sums, vec![3, 7]);
/// ```
#[inline]
pub fn tupled<A, B, C, F>(function: F) -> impl Fn((A, B)) -> C
where
    F: Fn(A, B) -> C,
{
    move |(a, b)| function(a, b)
}

/// Turns a function of a pair into a binary function.
#[inline]
pub fn untupled<A, B, C, F>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn((A, B)) -> C,
{
    move |a, b| function((a, b))
}

/// Converts an impossible value into any type.
///
/// # Examples
///
/// ```rust
/// use kinded::function::absurd;
/// use std::convert::Infallible;
///
/// let always: Result<i32, Infallible> = Ok(3);
/// let value: i32 = always.unwrap_or_else(absurd);
/// assert_eq!(value, 3);
/// ```
#[inline]
pub fn absurd<A>(never: Infallible) -> A {
    match never {}
}
