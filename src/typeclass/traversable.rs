//! Traversable type class - mapping with effects and collecting results.
//!
//! This module provides the `Traversable` trait, for type lambdas that can
//! have an effectful function applied to each value while collecting the
//! results inside the effect.
//!
//! # Motivation
//!
//! Consider a `Vec<&str>` where each string should be parsed as an integer.
//! The parsing function returns `Option<i32>`. The desired result is:
//! - If all parses succeed: `Some(Vec<i32>)` containing all results
//! - If any parse fails: `None`
//!
//! This is exactly what `traverse` does, for any applicative effect `G`.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! traverse::<Identity>(fa, Identity::new) == Identity::new(fa)
//! ```
//!
//! ## Composition
//!
//! ```text
//! traverse::<Compose<G, H>>(fa, |a| map(f(a), g)) == map(traverse(fa, f), |fb| traverse(fb, g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kinded::prelude::*;
//!
//! let parse = |text: &str| text.parse::<i32>().ok();
//!
//! let numbers = VecTypeLambda::traverse::<OptionTypeLambda, (), (), (), (), _, _, _>(vec!["1", "2", "3"], parse);
//! assert_eq!(numbers, Some(vec![1, 2, 3]));
//!
//! let with_error = VecTypeLambda::traverse::<OptionTypeLambda, (), (), (), (), _, _, _>(vec!["1", "x", "3"], parse);
//! assert_eq!(with_error, None);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::applicative::Applicative;
use super::covariant::Covariant;
use super::foldable::Foldable;
use super::higher::Kind;

/// A type class for type lambdas that can be traversed with effects.
///
/// The effect `G` carries its own `In` and `Out2` slots (`GR`, `GE`),
/// independent of the slots of the traversed structure.
pub trait Traversable: Covariant + Foldable {
    /// Applies an effectful function to each value and collects the results
    /// inside `G`.
    fn traverse<G, R, E, GR, GE, A, B, Func>(
        fa: Kind<Self, R, E, A>,
        function: Func,
    ) -> Kind<G, GR, GE, Kind<Self, R, E, B>>
    where
        G: Applicative,
        R: 'static,
        E: 'static,
        GR: 'static,
        GE: 'static,
        A: 'static,
        B: 'static,
        Func: FnMut(A) -> Kind<G, GR, GE, B> + 'static;
}

/// Turns `F<G<A>>` inside out into `G<F<A>>`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let all_ok: Vec<Result<i32, String>> = vec![Ok(1), Ok(2)];
/// assert_eq!(
///     traversable::sequence::<VecTypeLambda, ResultTypeLambda, (), (), (), String, _>(all_ok),
///     Ok(vec![1, 2])
/// );
///
/// let one_failed: Vec<Result<i32, String>> = vec![Ok(1), Err("bad".to_string())];
/// assert_eq!(
///     traversable::sequence::<VecTypeLambda, ResultTypeLambda, (), (), (), String, _>(one_failed),
///     Err("bad".to_string())
/// );
/// ```
#[inline]
pub fn sequence<F, G, R, E, GR, GE, A>(
    fga: Kind<F, R, E, Kind<G, GR, GE, A>>,
) -> Kind<G, GR, GE, Kind<F, R, E, A>>
where
    F: Traversable,
    G: Applicative,
    R: 'static,
    E: 'static,
    GR: 'static,
    GE: 'static,
    A: 'static,
{
    F::traverse::<G, R, E, GR, GE, Kind<G, GR, GE, A>, A, _>(fga, |ga| ga)
}

/// Runs an effectful function on each value, keeping the original values.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let validate = |n: i32| if n > 0 { Ok(()) } else { Err(format!("{n} is not positive")) };
///
/// assert_eq!(
///     traversable::traverse_tap::<VecTypeLambda, ResultTypeLambda, (), (), (), String, _, _, _>(vec![1, 2], validate),
///     Ok(vec![1, 2])
/// );
/// assert_eq!(
///     traversable::traverse_tap::<VecTypeLambda, ResultTypeLambda, (), (), (), String, _, _, _>(vec![1, -2], validate),
///     Err("-2 is not positive".to_string())
/// );
/// ```
pub fn traverse_tap<F, G, R, E, GR, GE, A, B, Func>(
    fa: Kind<F, R, E, A>,
    mut function: Func,
) -> Kind<G, GR, GE, Kind<F, R, E, A>>
where
    F: Traversable,
    G: Applicative,
    R: 'static,
    E: 'static,
    GR: 'static,
    GE: 'static,
    A: Clone + 'static,
    B: 'static,
    Func: FnMut(A) -> Kind<G, GR, GE, B> + 'static,
{
    F::traverse::<G, R, E, GR, GE, A, A, _>(fa, move |a| {
        let effect = function(a.clone());
        G::map::<GR, GE, B, A, _>(effect, move |_| a.clone())
    })
}

/// Traverses through two nested traversable layers, `F<G<A>>`, with an
/// effect `H`, producing `H<F<G<B>>>`.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let nested = vec![Some("1"), None, Some("3")];
/// let parsed = traversable::traverse_composition::<
///     VecTypeLambda,
///     OptionTypeLambda,
///     ResultTypeLambda,
///     (),
///     (),
///     (),
///     String,
///     _,
///     _,
///     _,
/// >(nested, |text: &str| text.parse::<i32>().map_err(|error| error.to_string()));
/// assert_eq!(parsed, Ok(vec![Some(1), None, Some(3)]));
/// ```
pub fn traverse_composition<F, G, H, R, E, HR, HE, A, B, Func>(
    fga: Kind<F, R, E, Kind<G, R, E, A>>,
    function: Func,
) -> Kind<H, HR, HE, Kind<F, R, E, Kind<G, R, E, B>>>
where
    F: Traversable,
    G: Traversable,
    H: Applicative,
    R: 'static,
    E: 'static,
    HR: 'static,
    HE: 'static,
    A: 'static,
    B: 'static,
    Func: FnMut(A) -> Kind<H, HR, HE, B> + 'static,
{
    let shared = Rc::new(RefCell::new(function));
    F::traverse::<H, R, E, HR, HE, Kind<G, R, E, A>, Kind<G, R, E, B>, _>(fga, move |ga| {
        let shared = Rc::clone(&shared);
        G::traverse::<H, R, E, HR, HE, A, B, _>(ga, move |a| {
            let mut function = shared.borrow_mut();
            (*function)(a)
        })
    })
}

#[cfg(all(test, feature = "data"))]
mod tests {
    use super::*;
    use crate::data::{IdentityTypeLambda, OptionTypeLambda, ResultTypeLambda, VecTypeLambda};
    use crate::typeclass::Identity;
    use rstest::rstest;

    #[rstest]
    fn traverse_empty_vec_is_of_empty() {
        let empty: Vec<i32> = Vec::new();
        let result = VecTypeLambda::traverse::<OptionTypeLambda, (), (), (), (), _, _, _>(empty, |n: i32| {
            Some(n)
        });
        assert_eq!(result, Some(Vec::new()));
    }

    #[rstest]
    fn traverse_option_none_is_of_none() {
        let result = OptionTypeLambda::traverse::<ResultTypeLambda, (), (), (), String, i32, i32, _>(
            None,
            |_: i32| Err("never called".to_string()),
        );
        assert_eq!(result, Ok(None));
    }

    #[rstest]
    fn traverse_result_err_is_kept_inside() {
        let failed: Result<i32, String> = Err("inner".to_string());
        let result = ResultTypeLambda::traverse::<OptionTypeLambda, (), String, (), (), _, _, _>(
            failed,
            |n: i32| Some(n + 1),
        );
        assert_eq!(result, Some(Err("inner".to_string())));
    }

    #[rstest]
    fn traverse_with_identity_is_map() {
        let result = VecTypeLambda::traverse::<IdentityTypeLambda, (), (), (), (), _, _, _>(
            vec![1, 2, 3],
            |n: i32| Identity::new(n * 2),
        );
        assert_eq!(result, Identity::new(vec![2, 4, 6]));
    }

    #[rstest]
    fn sequence_option_of_vec_preserves_order() {
        let result = sequence::<VecTypeLambda, OptionTypeLambda, (), (), (), (), _>(vec![
            Some(3),
            Some(1),
            Some(2),
        ]);
        assert_eq!(result, Some(vec![3, 1, 2]));
    }

    #[rstest]
    fn traverse_composition_fails_on_first_inner_error() {
        let nested: Option<Vec<&str>> = Some(vec!["1", "x"]);
        let parsed = traverse_composition::<
            OptionTypeLambda,
            VecTypeLambda,
            OptionTypeLambda,
            (),
            (),
            (),
            (),
            _,
            _,
            _,
        >(nested, |text: &str| text.parse::<i32>().ok());
        assert_eq!(parsed, None);
    }
}
