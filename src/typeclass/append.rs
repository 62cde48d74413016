//! Positional records for do-notation.
//!
//! Do-notation accumulates every bound value into a tuple. Binding starts
//! from `()` (see [`of::do_`](super::of::do_)) or from a one-element tuple
//! (see [`covariant::bind_to`](super::covariant::bind_to)), and each step
//! appends one element through [`Append`]. A value's position is its name,
//! so two bindings can never collide.

/// Appends one element to the end of a tuple.
///
/// Implemented for tuples of up to eleven elements, producing tuples of up
/// to twelve.
///
/// # Examples
///
/// ```rust
/// use kinded::typeclass::Append;
///
/// let record = ().append(1).append("two").append(3.0);
/// assert_eq!(record, (1, "two", 3.0));
/// ```
pub trait Append<T> {
    /// The tuple with `T` added as its last element.
    type Output;

    /// Appends `element` after the existing elements.
    fn append(self, element: T) -> Self::Output;
}

macro_rules! impl_append {
    ($(($($name:ident),*)),+ $(,)?) => {
        $(
            impl<$($name,)* T> Append<T> for ($($name,)*) {
                type Output = ($($name,)* T,);

                #[inline]
                #[allow(non_snake_case)]
                fn append(self, element: T) -> Self::Output {
                    let ($($name,)*) = self;
                    ($($name,)* element,)
                }
            }
        )+
    };
}

impl_append!(
    (),
    (A0),
    (A0, A1),
    (A0, A1, A2),
    (A0, A1, A2, A3),
    (A0, A1, A2, A3, A4),
    (A0, A1, A2, A3, A4, A5),
    (A0, A1, A2, A3, A4, A5, A6),
    (A0, A1, A2, A3, A4, A5, A6, A7),
    (A0, A1, A2, A3, A4, A5, A6, A7, A8),
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9),
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10),
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn append_to_unit_creates_singleton() {
        assert_eq!(().append(1), (1,));
    }

    #[rstest]
    fn append_keeps_existing_positions() {
        let record = (1, "a").append(true);
        assert_eq!(record, (1, "a", true));
    }

    #[rstest]
    fn append_chains_into_larger_tuples() {
        let record = ()
            .append(1)
            .append(2)
            .append(3)
            .append(4)
            .append(5)
            .append(6);
        assert_eq!(record, (1, 2, 3, 4, 5, 6));
    }
}
