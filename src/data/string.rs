//! Instances for strings.

use std::cmp::Ordering;

use crate::typeclass::{Monoid, Order, Semigroup};

/// Concatenation of owned strings; the identity is the empty string.
///
/// # Examples
///
/// ```rust
/// use kinded::prelude::*;
///
/// let greeting = StringConcat.combine("hello, ".to_string(), "world".to_string());
/// assert_eq!(greeting, "hello, world");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StringConcat;

impl Semigroup<String> for StringConcat {
    #[inline]
    fn combine(&self, mut first: String, second: String) -> String {
        first.push_str(&second);
        first
    }

    fn combine_many<I>(&self, mut start: String, collection: I) -> String
    where
        I: IntoIterator<Item = String>,
    {
        for text in collection {
            start.push_str(&text);
        }
        start
    }
}

impl Monoid<String> for StringConcat {
    #[inline]
    fn empty(&self) -> String {
        String::new()
    }
}

/// Lexicographic order by bytes, for `str`, `&str` and `String`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StringOrder;

impl Order<str> for StringOrder {
    #[inline]
    fn compare(&self, first: &str, second: &str) -> Ordering {
        first.cmp(second)
    }
}

impl Order<&str> for StringOrder {
    #[inline]
    fn compare(&self, first: &&str, second: &&str) -> Ordering {
        (*first).cmp(*second)
    }
}

impl Order<String> for StringOrder {
    #[inline]
    fn compare(&self, first: &String, second: &String) -> Ordering {
        first.as_str().cmp(second.as_str())
    }
}
