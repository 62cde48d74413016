//! A type lambda body naming a slot it does not declare is rejected.

use kinded::typeclass::TypeLambda;

enum BrokenTypeLambda {}

impl TypeLambda for BrokenTypeLambda {
    type Type<In, Out2, Out1> = Result<Out1, Extra>;
}

fn main() {}
