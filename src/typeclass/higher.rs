//! Higher-kinded type emulation through type lambdas.
//!
//! Rust does not natively support higher-kinded types: a trait cannot be
//! written over `Option<_>` and `Vec<_>` as type constructors. This module
//! encodes a type constructor as a *type lambda*, a marker type whose generic
//! associated type [`TypeLambda::Type`] is the constructor's body, written in
//! terms of three named parameter slots:
//!
//! - `In`: the requirement (environment) a computation consumes
//! - `Out2`: the secondary output, usually the error channel
//! - `Out1`: the value the computation produces
//!
//! [`Kind`] applies a type lambda to one concrete type per slot.
//!
//! # Slot policy
//!
//! The encoding itself never reconciles slots. Each combinator states how two
//! kinds with different slot arguments are joined. Operations that conjoin
//! two kinds (`product`, `flat_map`) require identical `In` and `Out2`
//! arguments; `coproduct` takes the `Out2` argument of its second operand.
//!
//! # Example
//!
//! ```rust
//! use kinded::typeclass::{Kind, TypeLambda};
//!
//! enum PairTypeLambda {}
//!
//! impl TypeLambda for PairTypeLambda {
//!     type Type<In, Out2, Out1> = (Out2, Out1);
//! }
//!
//! let value: Kind<PairTypeLambda, (), &str, i32> = ("label", 42);
//! assert_eq!(value.1, 42);
//! ```

/// A type lambda: a nominal stand-in for a type constructor.
///
/// Implementors are marker types, conventionally uninhabited enums. The body
/// of the lambda is the generic associated type `Type`; it may only mention
/// the slots it declares, which the compiler enforces.
///
/// # Laws
///
/// Kind application must be injective in the slots the lambda uses: two
/// different arguments for a used slot yield different types. Slots a lambda
/// ignores (for example `In` for `Option`) are phantom.
///
/// # Example
///
/// ```rust
/// use kinded::typeclass::{Kind, TypeLambda};
///
/// enum BoxTypeLambda {}
///
/// impl TypeLambda for BoxTypeLambda {
///     type Type<In, Out2, Out1> = Box<Out1>;
/// }
///
/// let boxed: Kind<BoxTypeLambda, (), (), i32> = Box::new(1);
/// assert_eq!(*boxed, 1);
/// ```
pub trait TypeLambda: 'static {
    /// The type this lambda denotes once every slot is substituted.
    type Type<In, Out2, Out1>;
}

/// Kind application: the concrete type `F` denotes for the given slot arguments.
pub type Kind<F, In, Out2, Out1> = <F as TypeLambda>::Type<In, Out2, Out1>;
