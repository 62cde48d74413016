//! Contravariant type class - mapping over a consumed parameter.
//!
//! A contravariant type lambda consumes its `Out1` slot rather than producing
//! it: an `Order<A>` compares `A`s, an `Equivalence<A>` tests them. Given a
//! function `B -> A`, such a consumer of `A` becomes a consumer of `B`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! contramap(fa, |a| a.clone()) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! contramap(contramap(fa, f), g) == contramap(fa, |c| f(&g(c)))
//! ```

use super::higher::Kind;
use super::invariant::Invariant;

/// A type class for type lambdas that consume their value slot.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
/// use std::cmp::Ordering;
///
/// let by_length = OrderTypeLambda::contramap::<(), (), _, _, _>(
///     Box::new(NumberOrder) as DynOrder<usize>,
///     |text: &String| text.len(),
/// );
/// assert_eq!(by_length.compare(&"aaa".to_string(), &"b".to_string()), Ordering::Greater);
/// ```
pub trait Contravariant: Invariant {
    /// Adapts `fa` to consume `B` by converting each `B` to an `A` first.
    fn contramap<R, E, A, B, F>(fa: Kind<Self, R, E, A>, function: F) -> Kind<Self, R, E, B>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
        F: Fn(&B) -> A + 'static;
}

/// Derives `imap` from `contramap`; the forward conversion is not needed.
///
/// Contravariant instances implement [`Invariant`] by delegating to this
/// function.
#[inline]
pub fn imap<F, R, E, A, B, To, From>(
    fa: Kind<F, R, E, A>,
    _to: To,
    from: From,
) -> Kind<F, R, E, B>
where
    F: Contravariant,
    R: 'static,
    E: 'static,
    A: 'static,
    B: 'static,
    To: Fn(A) -> B + 'static,
    From: Fn(&B) -> A + 'static,
{
    F::contramap::<R, E, A, B, From>(fa, from)
}
