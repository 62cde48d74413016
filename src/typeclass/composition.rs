//! Composition of two type lambdas.
//!
//! [`Composition<F, G>`] is the type lambda of `F<G<_>>`, with both layers
//! sharing the `In` and `Out2` slots. Its instances are derived from the
//! instances of `F` and `G` by the composition combinators of each class
//! module, so a nested structure can be handled as one effect without
//! writing a new instance by hand.
//!
//! # Examples
//!
//! ```rust
//! use kinded::prelude::*;
//!
//! type VecOfOption = Composition<VecTypeLambda, OptionTypeLambda>;
//!
//! let nested = vec![Some(1), None, Some(3)];
//! let doubled = VecOfOption::map::<(), (), _, _, _>(nested, |n: i32| n * 2);
//! assert_eq!(doubled, vec![Some(2), None, Some(6)]);
//!
//! let sum = VecOfOption::reduce::<(), (), _, _, _>(doubled, 0, |accumulator, n| accumulator + n);
//! assert_eq!(sum, 8);
//! ```

use std::marker::PhantomData;

use super::applicative::Applicative;
use super::covariant::{self, Covariant};
use super::foldable::{self, Foldable};
use super::higher::{Kind, TypeLambda};
use super::invariant::Invariant;
use super::of::{self, Of};
use super::product::{self, Product};
use super::semi_applicative::SemiApplicative;
use super::semi_product::{self, SemiProduct};
use super::traversable::{self, Traversable};

/// The type lambda of `F` applied to `G`: `Kind<F, In, Out2, Kind<G, In, Out2, Out1>>`.
pub struct Composition<F, G> {
    marker: PhantomData<fn() -> (F, G)>,
}

impl<F, G> TypeLambda for Composition<F, G>
where
    F: TypeLambda,
    G: TypeLambda,
{
    type Type<In, Out2, Out1> = F::Type<In, Out2, G::Type<In, Out2, Out1>>;
}

impl<F, G> Invariant for Composition<F, G>
where
    F: Covariant,
    G: Covariant,
{
    #[inline]
    fn imap<R, E, A, B, To, From>(
        fa: Kind<Self, R, E, A>,
        to: To,
        from: From,
    ) -> Kind<Self, R, E, B>
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

impl<F, G> Covariant for Composition<F, G>
where
    F: Covariant,
    G: Covariant,
{
    #[inline]
    fn map<R, E, A, B, Func>(fa: Kind<Self, R, E, A>, function: Func) -> Kind<Self, R, E, B>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> B + 'static,
    {
        covariant::map_composition::<F, G, R, E, A, B, Func>(fa, function)
    }
}

impl<F, G> Of for Composition<F, G>
where
    F: Of,
    G: Of,
{
    #[inline]
    fn of<R, E, A>(a: A) -> Kind<Self, R, E, A>
    where
        R: 'static,
        E: 'static,
        A: 'static,
    {
        of::of_composition::<F, G, R, E, A>(a)
    }
}

impl<F, G> SemiProduct for Composition<F, G>
where
    F: SemiApplicative,
    G: SemiApplicative,
{
    #[inline]
    fn product<R, E, A, B>(
        fa: Kind<Self, R, E, A>,
        fb: Kind<Self, R, E, B>,
    ) -> Kind<Self, R, E, (A, B)>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
    {
        semi_product::product_composition::<F, G, R, E, A, B>(fa, fb)
    }

    #[inline]
    fn product_many<R, E, A, I>(first: Kind<Self, R, E, A>, rest: I) -> Kind<Self, R, E, Vec<A>>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Kind<Self, R, E, A>>,
    {
        semi_product::product_many_composition::<F, G, R, E, A, I>(first, rest)
    }
}

impl<F, G> Product for Composition<F, G>
where
    F: Applicative,
    G: Applicative,
{
    #[inline]
    fn product_all<R, E, A, I>(collection: I) -> Kind<Self, R, E, Vec<A>>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Kind<Self, R, E, A>>,
    {
        product::product_all_composition::<F, G, R, E, A, I>(collection)
    }
}

impl<F, G> Foldable for Composition<F, G>
where
    F: Foldable,
    G: Foldable,
{
    #[inline]
    fn reduce<R, E, A, B, Func>(fa: Kind<Self, R, E, A>, initial: B, function: Func) -> B
    where
        Func: FnMut(B, A) -> B,
    {
        foldable::reduce_composition::<F, G, R, E, A, B, Func>(fa, initial, function)
    }

    fn reduce_right<R, E, A, B, Func>(fa: Kind<Self, R, E, A>, initial: B, mut function: Func) -> B
    where
        Func: FnMut(B, A) -> B,
    {
        F::reduce_right::<R, E, Kind<G, R, E, A>, B, _>(fa, initial, |accumulator, ga| {
            G::reduce_right::<R, E, A, B, _>(ga, accumulator, &mut function)
        })
    }
}

impl<F, G> Traversable for Composition<F, G>
where
    F: Traversable,
    G: Traversable,
{
    #[inline]
    fn traverse<H, R, E, HR, HE, A, B, Func>(
        fa: Kind<Self, R, E, A>,
        function: Func,
    ) -> Kind<H, HR, HE, Kind<Self, R, E, B>>
    where
        H: Applicative,
        R: 'static,
        E: 'static,
        HR: 'static,
        HE: 'static,
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> Kind<H, HR, HE, B> + 'static,
    {
        traversable::traverse_composition::<F, G, H, R, E, HR, HE, A, B, Func>(fa, function)
    }
}

#[cfg(all(test, feature = "data"))]
mod tests {
    use super::*;
    use crate::data::{OptionTypeLambda, ResultTypeLambda, VecTypeLambda};
    use crate::typeclass::semi_applicative::lift2;
    use rstest::rstest;
    use static_assertions::assert_type_eq_all;

    type OptionOfResult = Composition<OptionTypeLambda, ResultTypeLambda>;
    type VecOfOption = Composition<VecTypeLambda, OptionTypeLambda>;

    assert_type_eq_all!(Kind<OptionOfResult, (), String, i32>, Option<Result<i32, String>>);
    assert_type_eq_all!(Kind<VecOfOption, (), (), u8>, Vec<Option<u8>>);

    #[rstest]
    fn of_nests_both_layers() {
        assert_eq!(OptionOfResult::of::<(), String, _>(1), Some(Ok(1)));
    }

    #[rstest]
    fn composed_lambda_is_semi_applicative() {
        let add = lift2::<OptionOfResult, (), String, _, _, _, _>(|a: i32, b: i32| a + b);
        assert_eq!(add(Some(Ok(1)), Some(Ok(2))), Some(Ok(3)));
        assert_eq!(add(Some(Ok(1)), None), None);
        assert_eq!(add(Some(Err("e".to_string())), Some(Ok(2))), Some(Err("e".to_string())));
    }

    #[rstest]
    fn product_all_of_nothing_is_of_empty() {
        let empty: Vec<Option<Result<i32, String>>> = Vec::new();
        assert_eq!(OptionOfResult::product_all::<(), String, _, _>(empty), Some(Ok(Vec::new())));
    }

    #[rstest]
    fn reduce_right_visits_inner_values_from_the_right() {
        let nested = vec![Some("a"), None, Some("b")];
        let text = VecOfOption::reduce_right::<(), (), _, _, _>(nested, String::new(), |accumulator, element| {
            accumulator + element
        });
        assert_eq!(text, "ba");
    }

    #[rstest]
    fn traverse_composed_with_option() {
        let nested = vec![Some(1), None, Some(3)];
        let result = VecOfOption::traverse::<OptionTypeLambda, (), (), (), (), _, _, _>(nested, |n: i32| {
            if n > 0 { Some(n * 10) } else { None }
        });
        assert_eq!(result, Some(vec![Some(10), None, Some(30)]));
    }
}
