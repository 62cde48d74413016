//! Instances for [`Identity`].
//!
//! [`IdentityTypeLambda`] adds no effect: mapping applies the function,
//! `product` pairs, `flat_map` unwraps. It is the effect to traverse with
//! when only the mapping is wanted, and the reference point for the
//! identity laws.

use crate::typeclass::{
    Applicative, Covariant, FlatMap, Foldable, Identity, Invariant, Kind, Of, Product,
    SemiCoproduct, SemiProduct, Traversable, TypeLambda, covariant,
};

/// The type lambda of [`Identity`]: `Out1 => Identity<Out1>`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let wrapped = IdentityTypeLambda::of::<(), (), _>(20);
/// let doubled = IdentityTypeLambda::map::<(), (), _, _, _>(wrapped, |n: i32| n * 2);
/// assert_eq!(doubled, Identity::new(40));
/// ```
pub enum IdentityTypeLambda {}

impl TypeLambda for IdentityTypeLambda {
    type Type<In, Out2, Out1> = Identity<Out1>;
}

impl Invariant for IdentityTypeLambda {
    #[inline]
    fn imap<R, E, A, B, To, From>(fa: Identity<A>, to: To, from: From) -> Identity<B>
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

impl Covariant for IdentityTypeLambda {
    #[inline]
    fn map<R, E, A, B, F>(fa: Identity<A>, mut function: F) -> Identity<B>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        Identity(function(fa.0))
    }
}

impl Of for IdentityTypeLambda {
    #[inline]
    fn of<R, E, A>(a: A) -> Identity<A>
    where
        R: 'static,
        E: 'static,
        A: 'static,
    {
        Identity(a)
    }
}

impl SemiProduct for IdentityTypeLambda {
    #[inline]
    fn product<R, E, A, B>(fa: Identity<A>, fb: Identity<B>) -> Identity<(A, B)>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
    {
        Identity((fa.0, fb.0))
    }

    fn product_many<R, E, A, I>(first: Identity<A>, rest: I) -> Identity<Vec<A>>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Identity<A>>,
    {
        Identity(
            std::iter::once(first)
                .chain(rest)
                .map(Identity::into_inner)
                .collect(),
        )
    }
}

impl Product for IdentityTypeLambda {
    fn product_all<R, E, A, I>(collection: I) -> Identity<Vec<A>>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Identity<A>>,
    {
        Identity(collection.into_iter().map(Identity::into_inner).collect())
    }
}

impl FlatMap for IdentityTypeLambda {
    #[inline]
    fn flat_map<R, E, A, B, F>(fa: Identity<A>, mut function: F) -> Identity<B>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Identity<B> + 'static,
    {
        function(fa.0)
    }
}

impl Foldable for IdentityTypeLambda {
    #[inline]
    fn reduce<R, E, A, B, F>(fa: Identity<A>, initial: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(initial, fa.0)
    }

    #[inline]
    fn reduce_right<R, E, A, B, F>(fa: Identity<A>, initial: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(initial, fa.0)
    }
}

impl Traversable for IdentityTypeLambda {
    #[inline]
    fn traverse<G, R, E, GR, GE, A, B, Func>(
        fa: Identity<A>,
        mut function: Func,
    ) -> Kind<G, GR, GE, Identity<B>>
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
        G::map::<GR, GE, B, Identity<B>, _>(function(fa.0), Identity)
    }
}

/// An identity always succeeds, so `coproduct` keeps the first.
impl SemiCoproduct for IdentityTypeLambda {
    #[inline]
    fn coproduct<R, E1, E2, A>(fa: Identity<A>, _fb: Identity<A>) -> Identity<A>
    where
        R: 'static,
        E1: 'static,
        E2: 'static,
        A: 'static,
    {
        fa
    }

    #[inline]
    fn coproduct_many<R, E, A, I>(first: Identity<A>, _rest: I) -> Identity<A>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Identity<A>>,
    {
        first
    }
}
