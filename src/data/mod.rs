//! Instances for standard library types and primitives.
//!
//! - Type lambdas: [`OptionTypeLambda`], [`ResultTypeLambda`],
//!   [`VecTypeLambda`], [`IdentityTypeLambda`]
//! - Numbers: [`NumberSum`], [`NumberMultiply`], [`NumberMin`], [`NumberMax`],
//!   [`NumberOrder`]
//! - Strings: [`StringConcat`], [`StringOrder`]
//! - Booleans: [`BooleanAll`], [`BooleanAny`], [`BooleanXor`], [`BooleanEqv`],
//!   [`BooleanOrder`]
//!
//! The `option` and `vec` modules also hold the instances that lift an
//! instance for `A` to `Option<A>` and `Vec<A>`.
//!
//! # Examples
//!
//! ```rust
//! use kinded::prelude::*;
//!
//! let sum = semi_applicative::lift2::<ResultTypeLambda, (), String, _, _, _, _>(|a: i32, b: i32| a + b);
//! assert_eq!(sum(Ok(1), Ok(2)), Ok(3));
//!
//! let scores = option::get_monoid(NumberSum);
//! assert_eq!(scores.combine_all(vec![Some(3), None, Some(4)]), Some(7));
//! ```

pub mod boolean;
pub mod identity;
pub mod number;
pub mod option;
pub mod result;
pub mod string;
pub mod vec;

pub use boolean::{BooleanAll, BooleanAny, BooleanEqv, BooleanOrder, BooleanXor};
pub use identity::IdentityTypeLambda;
pub use number::{Number, NumberMax, NumberMin, NumberMultiply, NumberOrder, NumberSum};
pub use option::OptionTypeLambda;
pub use result::ResultTypeLambda;
pub use string::{StringConcat, StringOrder};
pub use vec::VecTypeLambda;
