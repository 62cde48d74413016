//! Pointed type class - `Of` together with `Covariant`.

use super::covariant::Covariant;
use super::of::Of;

/// A covariant type lambda that can also lift plain values.
///
/// Implemented automatically for every type lambda that is both [`Of`] and
/// [`Covariant`].
///
/// # Laws
///
/// ```text
/// map(of(a), f) == of(f(a))
/// ```
pub trait Pointed: Of + Covariant {}

impl<F> Pointed for F where F: Of + Covariant {}
