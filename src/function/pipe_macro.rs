//! The `pipe!` macro.

/// Threads a value through functions from left to right.
///
/// `pipe!(x, f, g, h)` evaluates `h(g(f(x)))`. With no functions the value is
/// returned unchanged. Every function is applied exactly once, in order.
///
/// # Examples
///
/// ```rust
/// use kinded::pipe;
///
/// let add_one = |n: i32| n + 1;
/// let double = |n: i32| n * 2;
///
/// assert_eq!(pipe!(5), 5);
/// assert_eq!(pipe!(5, add_one, double), 12);
/// assert_eq!(pipe!(5, double, add_one), 11);
/// ```
///
/// Data-last functions from [`dual`](crate::function::dual) read naturally:
///
/// ```rust
/// use kinded::function::dual;
/// use kinded::pipe;
///
/// let minus = dual(|a: i32, b: i32| a - b);
/// assert_eq!(pipe!(10, minus.data_last(3), minus.data_last(2)), 5);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $function:expr $(,)?) => {
        ($function)($value)
    };
    ($value:expr, $function:expr, $($rest:expr),+ $(,)?) => {
        $crate::pipe!(($function)($value), $($rest),+)
    };
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    fn pipe_changes_type_along_the_way() {
        let length = |text: &str| text.len();
        let is_even = |n: usize| n % 2 == 0;
        assert!(pipe!("four", length, is_even));
    }

    #[rstest]
    fn pipe_accepts_trailing_comma() {
        let negate = |n: i32| -n;
        assert_eq!(pipe!(3, negate,), -3);
    }

    #[rstest]
    fn pipe_applies_each_function_once() {
        let calls = std::cell::Cell::new(0);
        let count = |n: i32| {
            calls.set(calls.get() + 1);
            n
        };
        let _ = pipe!(0, count, count, count);
        assert_eq!(calls.get(), 3);
    }
}
