//! Functions callable in data-first and data-last style.
//!
//! A binary operation such as `combine(subject, that)` is convenient to call
//! directly, while pipelines want the data-last form `combine(that)(subject)`
//! that waits for its subject. [`dual`] wraps one implementation and exposes
//! both call styles under explicit names, so the two can never disagree.

/// A binary function offered in both call styles, built by [`dual`].
#[derive(Debug, Clone, Copy)]
pub struct Dual<F> {
    function: F,
}

/// Wraps a binary function whose first argument is the subject.
///
/// # Examples
///
/// ```rust
/// use kinded::function::dual;
///
/// let subtract = dual(|a: i32, b: i32| a - b);
/// assert_eq!(subtract.data_first(3, 2), 1);
/// assert_eq!(subtract.data_last(2)(3), 1);
/// ```
#[inline]
pub const fn dual<F>(function: F) -> Dual<F> {
    Dual { function }
}

impl<F> Dual<F> {
    /// Calls the function with the subject first.
    #[inline]
    pub fn data_first<S, T, R>(&self, subject: S, that: T) -> R
    where
        F: Fn(S, T) -> R,
    {
        (self.function)(subject, that)
    }

    /// Fixes the second argument and returns a function awaiting the subject.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinded::function::dual;
    /// use kinded::pipe;
    ///
    /// let append = dual(|mut text: String, suffix: &str| {
    ///     text.push_str(suffix);
    ///     text
    /// });
    /// let result = pipe!(String::from("a"), append.data_last("b"), append.data_last("c"));
    /// assert_eq!(result, "abc");
    /// ```
    #[inline]
    pub fn data_last<S, T, R>(&self, that: T) -> impl FnOnce(S) -> R
    where
        F: Fn(S, T) -> R,
    {
        move |subject| (self.function)(subject, that)
    }

    /// Returns the wrapped function.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

/// A ternary function offered in both call styles, built by [`dual3`].
#[derive(Debug, Clone, Copy)]
pub struct Dual3<F> {
    function: F,
}

/// Wraps a ternary function whose first argument is the subject.
///
/// # Examples
///
/// ```rust
/// use kinded::function::dual3;
///
/// let clamp = dual3(|value: i32, low: i32, high: i32| value.max(low).min(high));
/// assert_eq!(clamp.data_first(15, 0, 10), 10);
/// assert_eq!(clamp.data_last(0, 10)(15), 10);
/// ```
#[inline]
pub const fn dual3<F>(function: F) -> Dual3<F> {
    Dual3 { function }
}

impl<F> Dual3<F> {
    /// Calls the function with the subject first.
    #[inline]
    pub fn data_first<S, T, U, R>(&self, subject: S, first: T, second: U) -> R
    where
        F: Fn(S, T, U) -> R,
    {
        (self.function)(subject, first, second)
    }

    /// Fixes the trailing arguments and returns a function awaiting the
    /// subject.
    #[inline]
    pub fn data_last<S, T, U, R>(&self, first: T, second: U) -> impl FnOnce(S) -> R
    where
        F: Fn(S, T, U) -> R,
    {
        move |subject| (self.function)(subject, first, second)
    }

    /// Returns the wrapped function.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}
