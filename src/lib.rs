//! # kinded
//!
//! Type lambdas, type classes and derivation combinators for functional
//! programming in Rust.
//!
//! ## Overview
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! This library encodes type constructors as *type lambdas*: uninhabited marker
//! types with a generic associated type that is applied to concrete slot
//! arguments. Type classes are traits over those lambdas, and derivation
//! combinators build the rest of an algebra from a minimal instance.
//!
//! - **Kind encoding**: [`TypeLambda`](typeclass::TypeLambda), [`Kind`](typeclass::Kind)
//! - **Type classes**: Covariant, Contravariant, Invariant, SemiProduct, Product,
//!   SemiCoproduct, Coproduct, FlatMap, Foldable, Traversable
//! - **Value-level classes**: Semigroup, Monoid, Order, Equivalence, Bounded
//! - **Derivations**: `lift2`, `lift3`, `ap`, `zip_with`, `lift_semigroup`,
//!   do-notation helpers, composition instances
//! - **Concrete instances**: Option, Result, Vec, Identity, numbers, strings, booleans
//! - **Function utilities**: `dual`, `pipe!`, `flow!`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Kind encoding, type classes and derivation combinators
//! - `data`: Instances for standard library types and primitives
//! - `function`: Function utilities
//! - `serde`: Serialization support for [`Identity`](typeclass::Identity)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use kinded::prelude::*;
//!
//! let add = semi_applicative::lift2::<OptionTypeLambda, (), (), _, _, _, _>(|a: i32, b: i32| a + b);
//! assert_eq!(add(Some(1), Some(2)), Some(3));
//! assert_eq!(add(Some(1), None), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and combinator modules.
///
/// # Usage
///
/// ```rust
/// use kinded::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "data")]
    pub use crate::data::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "data")]
pub mod data;

#[cfg(feature = "function")]
pub mod function;
