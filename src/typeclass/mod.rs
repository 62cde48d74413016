//! Type class traits and derivation combinators.
//!
//! This module provides the Kind encoding and the type classes built on it:
//!
//! - [`TypeLambda`] / [`Kind`]: Higher-kinded type emulation
//! - [`Invariant`], [`Covariant`], [`Contravariant`]: Mapping over a type lambda
//! - [`Of`], [`Pointed`]: Lifting plain values
//! - [`SemiProduct`], [`Product`]: Conjoining independent computations
//! - [`SemiApplicative`], [`Applicative`]: Product plus mapping
//! - [`SemiCoproduct`], [`Coproduct`]: Choosing between computations
//! - [`SemiAlternative`], [`Alternative`]: Coproduct plus mapping
//! - [`FlatMap`], [`Chainable`], [`Monad`]: Sequencing dependent computations
//! - [`Foldable`], [`Traversable`]: Folding and effectful traversal
//!
//! Value-level classes are dictionaries implemented by instance values:
//!
//! - [`Semigroup`], [`Monoid`]: Associative combination
//! - [`Order`], [`Equivalence`], [`Bounded`]: Comparison
//!
//! Each type class module also hosts the derivation combinators that build
//! richer operations from that class (for example [`semi_applicative::lift2`]).
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types. A type
//! constructor is represented by an uninhabited marker type implementing
//! [`TypeLambda`], whose generic associated type is applied to three slot
//! arguments. Type classes are traits on those markers with associated
//! functions, so an instance is the marker type itself.
//!
//! # Examples
//!
//! ## Using Semigroup
//!
//! ```rust
//! use kinded::prelude::*;
//!
//! let combined = semigroup::tuple((StringConcat, NumberSum))
//!     .combine(("a".to_string(), 1), ("b".to_string(), 2));
//! assert_eq!(combined, ("ab".to_string(), 3));
//! ```
//!
//! ## Using Order
//!
//! ```rust
//! use kinded::prelude::*;
//! use std::cmp::Ordering;
//!
//! let order = order::tuple((StringOrder, NumberOrder));
//! assert_eq!(order.compare(&("a", 1), &("a", 2)), Ordering::Less);
//! ```
//!
//! ## Deriving from a minimal instance
//!
//! ```rust
//! use kinded::prelude::*;
//!
//! let sum = semi_applicative::zip_with::<OptionTypeLambda, (), (), _, _, _, _>(
//!     Some(1),
//!     Some(2),
//!     |a: i32, b: i32| a + b,
//! );
//! assert_eq!(sum, Some(3));
//! ```

mod append;
mod composition;
mod higher;
mod identity;
mod tuple;

pub mod alternative;
pub mod applicative;
pub mod bounded;
pub mod chainable;
pub mod contravariant;
pub mod coproduct;
pub mod covariant;
pub mod equivalence;
pub mod flat_map;
pub mod foldable;
pub mod invariant;
pub mod monad;
pub mod monoid;
pub mod of;
pub mod order;
pub mod pointed;
pub mod product;
pub mod semi_applicative;
pub mod semi_coproduct;
pub mod semi_product;
pub mod semigroup;
pub mod traversable;

pub use alternative::{Alternative, SemiAlternative};
pub use append::Append;
pub use applicative::Applicative;
pub use bounded::Bounded;
pub use chainable::Chainable;
pub use composition::Composition;
pub use contravariant::Contravariant;
pub use coproduct::Coproduct;
pub use covariant::Covariant;
pub use equivalence::{DynEquivalence, Equivalence, EquivalenceTypeLambda, Strict};
pub use flat_map::FlatMap;
pub use foldable::Foldable;
pub use higher::{Kind, TypeLambda};
pub use identity::Identity;
pub use invariant::Invariant;
pub use monad::Monad;
pub use monoid::{DynMonoid, Monoid, MonoidTypeLambda};
pub use of::Of;
pub use order::{DynOrder, Natural, Order, OrderTypeLambda};
pub use pointed::Pointed;
pub use product::Product;
pub use semi_applicative::SemiApplicative;
pub use semi_coproduct::SemiCoproduct;
pub use semi_product::SemiProduct;
pub use semigroup::{DynSemigroup, Semigroup, SemigroupTypeLambda};
pub use traversable::Traversable;
pub use tuple::Tuple;
