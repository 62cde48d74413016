//! Covariant type class - mapping over the value slot.
//!
//! This module provides the `Covariant` trait, the lambda-level functor: a
//! function `A -> B` is lifted to `F<A> -> F<B>` while the structure of `F`
//! is preserved. The free functions derive the rest of the covariant algebra
//! from `map` alone.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! map(map(fa, f), g) == map(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kinded::prelude::*;
//!
//! let some_value: Option<i32> = Some(5);
//! let transformed = OptionTypeLambda::map::<(), (), _, _, _>(some_value, |n| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::append::Append;
use super::higher::Kind;
use super::invariant::Invariant;

/// A type class for type lambdas whose value slot can be mapped.
///
/// The mapping function is `FnMut` so that multi-element containers can
/// apply it once per element.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// map(fa, |x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// map(map(fa, f), g) == map(fa, |x| g(f(x)))
/// ```
pub trait Covariant: Invariant {
    /// Applies `function` to the value(s) inside `fa`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::prelude::*;
    ///
    /// let doubled = VecTypeLambda::map::<(), (), _, _, _>(vec![1, 2, 3], |n| n * 2);
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    fn map<R, E, A, B, F>(fa: Kind<Self, R, E, A>, function: F) -> Kind<Self, R, E, B>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static;
}

/// Derives `imap` from `map`; the reverse conversion is not needed.
///
/// Covariant instances implement [`Invariant`] by delegating to this function.
#[inline]
pub fn imap<F, R, E, A, B, To, From>(
    fa: Kind<F, R, E, A>,
    to: To,
    _from: From,
) -> Kind<F, R, E, B>
where
    F: Covariant,
    R: 'static,
    E: 'static,
    A: 'static,
    B: 'static,
    To: Fn(A) -> B + 'static,
    From: Fn(&B) -> A + 'static,
{
    F::map::<R, E, A, B, To>(fa, to)
}

/// Maps through two nested covariant layers, `F<G<A>>` to `F<G<B>>`.
///
/// The outer `map` visits each inner value and the inner `map` is applied
/// one level down. The function is shared across all inner calls.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let nested = vec![Some(1), None, Some(3)];
/// let mapped = covariant::map_composition::<VecTypeLambda, OptionTypeLambda, (), (), _, _, _>(
///     nested,
///     |n: i32| n + 1,
/// );
/// assert_eq!(mapped, vec![Some(2), None, Some(4)]);
/// ```
pub fn map_composition<F, G, R, E, A, B, Func>(
    fga: Kind<F, R, E, Kind<G, R, E, A>>,
    function: Func,
) -> Kind<F, R, E, Kind<G, R, E, B>>
where
    F: Covariant,
    G: Covariant,
    R: 'static,
    E: 'static,
    A: 'static,
    B: 'static,
    Func: FnMut(A) -> B + 'static,
{
    let shared = Rc::new(RefCell::new(function));
    F::map::<R, E, Kind<G, R, E, A>, Kind<G, R, E, B>, _>(fga, move |ga| {
        let shared = Rc::clone(&shared);
        G::map::<R, E, A, B, _>(ga, move |a| {
            let mut function = shared.borrow_mut();
            (*function)(a)
        })
    })
}

/// Applies every function inside `fab` to the same argument.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let functions: Vec<fn(i32) -> i32> = vec![|n| n + 1, |n| n * 10];
/// let results = covariant::flap::<VecTypeLambda, (), (), _, _, _>(functions, 3);
/// assert_eq!(results, vec![4, 30]);
/// ```
#[inline]
pub fn flap<F, R, E, A, B, Func>(fab: Kind<F, R, E, Func>, a: A) -> Kind<F, R, E, B>
where
    F: Covariant,
    R: 'static,
    E: 'static,
    A: Clone + 'static,
    B: 'static,
    Func: FnOnce(A) -> B + 'static,
{
    F::map::<R, E, Func, B, _>(fab, move |function| function(a.clone()))
}

/// Replaces the value(s) inside `fa` with `value`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// assert_eq!(covariant::replace::<OptionTypeLambda, (), (), _, _>(Some(5), "replaced"), Some("replaced"));
/// assert_eq!(covariant::replace::<OptionTypeLambda, (), (), i32, _>(None, "replaced"), None);
/// ```
#[inline]
pub fn replace<F, R, E, A, B>(fa: Kind<F, R, E, A>, value: B) -> Kind<F, R, E, B>
where
    F: Covariant,
    R: 'static,
    E: 'static,
    A: 'static,
    B: Clone + 'static,
{
    F::map::<R, E, A, B, _>(fa, move |_| value.clone())
}

/// Discards the value(s) inside `fa`, keeping only the structure.
#[inline]
pub fn void<F, R, E, A>(fa: Kind<F, R, E, A>) -> Kind<F, R, E, ()>
where
    F: Covariant,
    R: 'static,
    E: 'static,
    A: 'static,
{
    F::map::<R, E, A, (), _>(fa, |_| ())
}

/// Starts do-notation by placing the value into a one-element record.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let record = covariant::bind_to::<OptionTypeLambda, (), (), _>(Some(1));
/// assert_eq!(record, Some((1,)));
/// ```
#[inline]
pub fn bind_to<F, R, E, A>(fa: Kind<F, R, E, A>) -> Kind<F, R, E, (A,)>
where
    F: Covariant,
    R: 'static,
    E: 'static,
    A: 'static,
{
    F::map::<R, E, A, (A,), _>(fa, |a| (a,))
}

/// Appends a pure value computed from the record accumulated so far.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let record = covariant::let_::<OptionTypeLambda, (), (), _, _, _>(Some((2,)), |(n,): &(i32,)| n * 10);
/// assert_eq!(record, Some((2, 20)));
/// ```
#[inline]
pub fn let_<F, R, E, S, B, Func>(fa: Kind<F, R, E, S>, mut function: Func) -> Kind<F, R, E, S::Output>
where
    F: Covariant,
    R: 'static,
    E: 'static,
    S: Append<B> + 'static,
    S::Output: 'static,
    B: 'static,
    Func: FnMut(&S) -> B + 'static,
{
    F::map::<R, E, S, S::Output, _>(fa, move |record| {
        let value = function(&record);
        record.append(value)
    })
}
