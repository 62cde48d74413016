//! `FlatMap` type class - sequencing dependent computations.
//!
//! `flat_map` runs a computation and feeds its value into a function that
//! chooses the next computation. Both steps share the `In` and `Out2` slots.
//!
//! # Laws
//!
//! ## Associativity Law
//!
//! ```text
//! flat_map(flat_map(fa, f), g) == flat_map(fa, |x| flat_map(f(x), g))
//! ```
//!
//! Together with [`Of`](super::Of) an instance must also satisfy left and
//! right identity (see [`Monad`](super::Monad)).
//!
//! # Examples
//!
//! ```rust
//! use kinded::prelude::*;
//!
//! fn parse_positive(text: &str) -> Option<i32> {
//!     text.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = OptionTypeLambda::flat_map::<(), (), _, _, _>(Some("42"), parse_positive);
//! assert_eq!(result, Some(42));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::higher::{Kind, TypeLambda};

/// A type class for type lambdas that can sequence dependent computations.
pub trait FlatMap: TypeLambda {
    /// Applies `function` to the value(s) inside `fa` and flattens the
    /// result.
    fn flat_map<R, E, A, B, F>(fa: Kind<Self, R, E, A>, function: F) -> Kind<Self, R, E, B>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Kind<Self, R, E, B> + 'static;
}

/// Removes one layer of nesting.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// assert_eq!(flat_map::flatten::<OptionTypeLambda, (), (), _>(Some(Some(1))), Some(1));
/// assert_eq!(flat_map::flatten::<VecTypeLambda, (), (), _>(vec![vec![1], vec![2, 3]]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn flatten<F, R, E, A>(ffa: Kind<F, R, E, Kind<F, R, E, A>>) -> Kind<F, R, E, A>
where
    F: FlatMap,
    R: 'static,
    E: 'static,
    A: 'static,
{
    F::flat_map::<R, E, Kind<F, R, E, A>, A, _>(ffa, |fa| fa)
}

/// Runs `fa`, then `fb`, keeping the result of `fb`.
///
/// Unlike [`semi_applicative::and_then`](super::semi_applicative::and_then)
/// this is sequential: `fb` is only used once `fa` has produced a value.
#[inline]
pub fn and_then<F, R, E, A, B>(fa: Kind<F, R, E, A>, fb: Kind<F, R, E, B>) -> Kind<F, R, E, B>
where
    F: FlatMap,
    R: 'static,
    E: 'static,
    A: 'static,
    B: 'static,
    Kind<F, R, E, B>: Clone,
{
    F::flat_map::<R, E, A, B, _>(fa, move |_| fb.clone())
}

/// Composes two Kleisli arrows, `A -> F<B>` and `B -> F<C>`, into `A -> F<C>`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let parse = |text: String| text.parse::<i32>().ok();
/// let half = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
/// let mut parse_then_half = flat_map::compose_kleisli::<OptionTypeLambda, (), (), _, _, _, _, _>(parse, half);
///
/// assert_eq!(parse_then_half("10".to_string()), Some(5));
/// assert_eq!(parse_then_half("7".to_string()), None);
/// assert_eq!(parse_then_half("x".to_string()), None);
/// ```
pub fn compose_kleisli<F, R, E, A, B, C, First, Second>(
    mut first: First,
    second: Second,
) -> impl FnMut(A) -> Kind<F, R, E, C>
where
    F: FlatMap,
    R: 'static,
    E: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    First: FnMut(A) -> Kind<F, R, E, B>,
    Second: FnMut(B) -> Kind<F, R, E, C> + 'static,
{
    let second = Rc::new(RefCell::new(second));
    move |a| {
        let second = Rc::clone(&second);
        F::flat_map::<R, E, B, C, _>(first(a), move |b| {
            let mut function = second.borrow_mut();
            (*function)(b)
        })
    }
}
