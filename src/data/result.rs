//! Instances for [`Result`].
//!
//! [`ResultTypeLambda`] maps `(Out2, Out1)` to `Result<Out1, Out2>`: the
//! success value sits in `Out1` so that every covariant operation maps it,
//! and the error type travels in `Out2`. Products fail fast on the first
//! `Err`; `coproduct` recovers from an `Err` with the second computation,
//! whose error type becomes the result's.

use crate::typeclass::{
    Applicative, Covariant, FlatMap, Foldable, Invariant, Kind, Of, Product, SemiCoproduct,
    SemiProduct, Traversable, TypeLambda, covariant,
};

/// The type lambda of `Result`: `(Out2, Out1) => Result<Out1, Out2>`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let parsed: Result<i32, String> = Ok(20);
/// let doubled = ResultTypeLambda::map::<(), String, _, _, _>(parsed, |n: i32| n * 2);
/// assert_eq!(doubled, Ok(40));
/// ```
pub enum ResultTypeLambda {}

impl TypeLambda for ResultTypeLambda {
    type Type<In, Out2, Out1> = Result<Out1, Out2>;
}

impl Invariant for ResultTypeLambda {
    #[inline]
    fn imap<R, E, A, B, To, From>(fa: Result<A, E>, to: To, from: From) -> Result<B, E>
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

impl Covariant for ResultTypeLambda {
    #[inline]
    fn map<R, E, A, B, F>(fa: Result<A, E>, function: F) -> Result<B, E>
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

impl Of for ResultTypeLambda {
    #[inline]
    fn of<R, E, A>(a: A) -> Result<A, E>
    where
        R: 'static,
        E: 'static,
        A: 'static,
    {
        Ok(a)
    }
}

impl SemiProduct for ResultTypeLambda {
    #[inline]
    fn product<R, E, A, B>(fa: Result<A, E>, fb: Result<B, E>) -> Result<(A, B), E>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
    {
        Ok((fa?, fb?))
    }

    fn product_many<R, E, A, I>(first: Result<A, E>, rest: I) -> Result<Vec<A>, E>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Result<A, E>>,
    {
        std::iter::once(first).chain(rest).collect()
    }
}

impl Product for ResultTypeLambda {
    fn product_all<R, E, A, I>(collection: I) -> Result<Vec<A>, E>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Result<A, E>>,
    {
        collection.into_iter().collect()
    }
}

impl FlatMap for ResultTypeLambda {
    #[inline]
    fn flat_map<R, E, A, B, F>(fa: Result<A, E>, function: F) -> Result<B, E>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Result<B, E> + 'static,
    {
        fa.and_then(function)
    }
}

impl Foldable for ResultTypeLambda {
    #[inline]
    fn reduce<R, E, A, B, F>(fa: Result<A, E>, initial: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match fa {
            Ok(a) => function(initial, a),
            Err(_) => initial,
        }
    }

    #[inline]
    fn reduce_right<R, E, A, B, F>(fa: Result<A, E>, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        Self::reduce::<R, E, A, B, F>(fa, initial, function)
    }
}

impl Traversable for ResultTypeLambda {
    fn traverse<G, R, E, GR, GE, A, B, Func>(
        fa: Result<A, E>,
        mut function: Func,
    ) -> Kind<G, GR, GE, Result<B, E>>
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
            Ok(a) => G::map::<GR, GE, B, Result<B, E>, _>(function(a), Ok),
            Err(error) => G::of::<GR, GE, Result<B, E>>(Err(error)),
        }
    }
}

impl SemiCoproduct for ResultTypeLambda {
    #[inline]
    fn coproduct<R, E1, E2, A>(fa: Result<A, E1>, fb: Result<A, E2>) -> Result<A, E2>
    where
        R: 'static,
        E1: 'static,
        E2: 'static,
        A: 'static,
    {
        fa.or(fb)
    }

    /// Returns the first `Ok`, or the last `Err` when every computation fails.
    fn coproduct_many<R, E, A, I>(first: Result<A, E>, rest: I) -> Result<A, E>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Result<A, E>>,
    {
        let mut current = first;
        for next in rest {
            if current.is_ok() {
                break;
            }
            current = next;
        }
        current
    }
}
