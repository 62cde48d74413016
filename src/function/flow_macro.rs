//! The `flow!` macro.

/// Composes functions from left to right into a single closure.
///
/// `flow!(f, g, h)` is `move |x| h(g(f(x)))`. A single function is returned
/// as is. The result is the data-free counterpart of [`pipe!`](crate::pipe).
///
/// # Examples
///
/// ```rust
/// use kinded::flow;
///
/// let parse_then_double = flow!(|text: &str| text.len(), |n: usize| n * 2);
/// assert_eq!(parse_then_double("abc"), 6);
///
/// let shout = flow!(str::to_uppercase, |text: String| text + "!");
/// assert_eq!(shout("hi"), "HI!");
/// ```
#[macro_export]
macro_rules! flow {
    ($function:expr $(,)?) => {
        $function
    };
    ($first:expr, $second:expr $(,)?) => {{
        let first = $first;
        let second = $second;
        move |input| second(first(input))
    }};
    ($first:expr, $second:expr, $($rest:expr),+ $(,)?) => {
        $crate::flow!($crate::flow!($first, $second), $($rest),+)
    };
}

#[cfg(test)]
mod tests {
    use crate::function::identity;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(41)]
    #[case(-8)]
    fn flow_agrees_with_pipe(#[case] value: i32) {
        let add_one = |n: i32| n + 1;
        let square = |n: i32| n * n;
        let to_text = |n: i32| n.to_string();
        let composed = flow!(add_one, square, to_text);
        assert_eq!(composed(value), crate::pipe!(value, add_one, square, to_text));
    }

    #[rstest]
    fn identity_is_neutral_on_both_sides() {
        let increment = |n: i32| n + 1;
        assert_eq!(flow!(identity, increment)(1), increment(1));
        assert_eq!(flow!(increment, identity)(1), increment(1));
    }

    #[rstest]
    fn composed_closure_is_reusable() {
        let halve = flow!(|n: u32| n / 2, |n: u32| n.to_string());
        assert_eq!(halve(8), "4");
        assert_eq!(halve(9), "4");
    }
}
