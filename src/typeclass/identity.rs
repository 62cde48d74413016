//! The identity wrapper.
//!
//! [`Identity`] holds exactly one value and adds no effect. It is the value
//! type of `IdentityTypeLambda` (in the `data` module): mapping applies the
//! function, `product` pairs, and traversing with it is plain mapping.

/// A wrapper that adds no behavior to the value it holds.
///
/// # Examples
///
/// ```rust
/// use kinded::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Borrows the wrapped value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(i32::MIN)]
    #[case(i32::MAX)]
    fn into_inner_returns_wrapped_value(#[case] value: i32) {
        assert_eq!(Identity::new(value).into_inner(), value);
    }

    #[rstest]
    fn as_inner_borrows() {
        let wrapped = Identity::new(vec![1, 2, 3]);
        assert_eq!(wrapped.as_inner(), &vec![1, 2, 3]);
    }

    #[rstest]
    fn from_value_wraps() {
        let wrapped: Identity<String> = String::from("hello").into();
        assert_eq!(wrapped, Identity("hello".to_string()));
    }

    #[rstest]
    fn ordering_follows_inner_value() {
        assert!(Identity::new(1) < Identity::new(2));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serializes_as_the_inner_value() {
        let json = serde_json::to_string(&Identity::new(vec![1, 2])).unwrap();
        assert_eq!(json, "[1,2]");
        let restored: Identity<Vec<i32>> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, Identity::new(vec![1, 2]));
    }
}
