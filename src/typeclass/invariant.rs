//! Invariant type class - mapping with a pair of conversions.
//!
//! An invariant functor can change its type parameter when given conversions
//! in both directions. It is the common root of [`Covariant`](super::Covariant)
//! (which only needs `to`) and [`Contravariant`](super::Contravariant) (which
//! only needs `from`), and the only mapping available for types that both
//! consume and produce their parameter, such as semigroups.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! imap(fa, |a| a, |a| a.clone()) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! imap(imap(fa, f1, g1), f2, g2) == imap(fa, |a| f2(f1(a)), |c| g1(&g2(c)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kinded::prelude::*;
//!
//! let semigroup: DynSemigroup<i32> = Box::new(NumberSum);
//! let lengths = SemigroupTypeLambda::imap::<(), (), _, _, _, _>(
//!     semigroup,
//!     |count: i32| "x".repeat(count as usize),
//!     |text: &String| text.len() as i32,
//! );
//! assert_eq!(lengths.combine("ab".to_string(), "c".to_string()), "xxx");
//! ```

use super::higher::{Kind, TypeLambda};

/// A type class for type lambdas that can be mapped with two conversions.
///
/// `from` borrows its argument: instances that consume values (comparisons,
/// predicates) receive them by reference.
pub trait Invariant: TypeLambda {
    /// Maps `fa` to a new parameter type using `to` and `from`.
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
        From: Fn(&B) -> A + 'static;
}
