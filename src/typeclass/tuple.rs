//! Tuples of instances.
//!
//! A [`Tuple`] wraps a tuple of instance values and is itself an instance for
//! the tuple of their element types. The same wrapper serves every
//! value-level class: `Tuple((StringConcat, NumberSum))` is a
//! `Semigroup<(String, i32)>` and a `Monoid<(String, i32)>`, while
//! `Tuple((StringOrder, NumberOrder))` is an `Order<(String, i32)>`.
//!
//! Components are combined or compared position by position; for `Order`
//! the first non-equal position decides.

/// A tuple of instances acting as the instance for a tuple of values.
///
/// Built with [`semigroup::tuple`](super::semigroup::tuple),
/// [`monoid::tuple`](super::monoid::tuple), [`order::tuple`](super::order::tuple)
/// or [`equivalence::tuple`](super::equivalence::tuple). Implementations exist
/// for tuples of zero through eight instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tuple<T>(pub T);

impl<T> Tuple<T> {
    /// Creates a new `Tuple` from a tuple of instances.
    #[inline]
    pub const fn new(instances: T) -> Self {
        Self(instances)
    }

    /// Returns the wrapped tuple of instances.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}
