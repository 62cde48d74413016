//! A type lambda that uses all three slots, defined outside the library.
//!
//! `ReaderTypeLambda` reads an environment from `In`, fails with `Out2` and
//! produces `Out1`. Deriving combinators for it exercises the slot policy:
//! products share the environment and the error type, while `coproduct`
//! takes the error type of its second operand.

#![cfg(all(feature = "typeclass", feature = "data"))]

use std::cell::RefCell;

use kinded::typeclass::{
    Covariant, FlatMap, Invariant, Kind, SemiCoproduct, SemiProduct, TypeLambda, covariant,
    semi_applicative,
};
use rstest::rstest;
use static_assertions::assert_type_eq_all;

enum ReaderTypeLambda {}

impl TypeLambda for ReaderTypeLambda {
    type Type<In, Out2, Out1> = Box<dyn Fn(&In) -> Result<Out1, Out2>>;
}

impl Invariant for ReaderTypeLambda {
    fn imap<R, E, A, B, To, From>(fa: Kind<Self, R, E, A>, to: To, from: From) -> Kind<Self, R, E, B>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
        To: Fn(A) -> B + 'static,
        From: Fn(&B) -> A + 'static,
    {
        covariant::imap::<Self, R, E, A, B, To, From>(fa, to, from)
    }
}

impl Covariant for ReaderTypeLambda {
    fn map<R, E, A, B, F>(fa: Kind<Self, R, E, A>, function: F) -> Kind<Self, R, E, B>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        let function = RefCell::new(function);
        Box::new(move |environment: &R| fa(environment).map(|a| (function.borrow_mut())(a)))
    }
}

impl SemiProduct for ReaderTypeLambda {
    fn product<R, E, A, B>(fa: Kind<Self, R, E, A>, fb: Kind<Self, R, E, B>) -> Kind<Self, R, E, (A, B)>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
    {
        Box::new(move |environment: &R| -> Result<(A, B), E> {
            Ok((fa(environment)?, fb(environment)?))
        })
    }

    fn product_many<R, E, A, I>(first: Kind<Self, R, E, A>, rest: I) -> Kind<Self, R, E, Vec<A>>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Kind<Self, R, E, A>>,
    {
        let readers: Vec<Kind<Self, R, E, A>> = std::iter::once(first).chain(rest).collect();
        Box::new(move |environment: &R| readers.iter().map(|reader| reader(environment)).collect())
    }
}

impl FlatMap for ReaderTypeLambda {
    fn flat_map<R, E, A, B, F>(fa: Kind<Self, R, E, A>, function: F) -> Kind<Self, R, E, B>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Kind<Self, R, E, B> + 'static,
    {
        let function = RefCell::new(function);
        Box::new(move |environment: &R| -> Result<B, E> {
            let next = (function.borrow_mut())(fa(environment)?);
            next(environment)
        })
    }
}

impl SemiCoproduct for ReaderTypeLambda {
    fn coproduct<R, E1, E2, A>(fa: Kind<Self, R, E1, A>, fb: Kind<Self, R, E2, A>) -> Kind<Self, R, E2, A>
    where
        R: 'static,
        E1: 'static,
        E2: 'static,
        A: 'static,
    {
        Box::new(move |environment: &R| fa(environment).or_else(|_| fb(environment)))
    }

    fn coproduct_many<R, E, A, I>(first: Kind<Self, R, E, A>, rest: I) -> Kind<Self, R, E, A>
    where
        R: 'static,
        E: 'static,
        A: 'static,
        I: IntoIterator<Item = Kind<Self, R, E, A>>,
    {
        rest.into_iter().fold(first, Self::coproduct::<R, E, E, A>)
    }
}

assert_type_eq_all!(
    Kind<ReaderTypeLambda, Config, String, i32>,
    Box<dyn Fn(&Config) -> Result<i32, String>>
);

struct Config {
    base: i32,
    name: String,
}

fn base() -> Kind<ReaderTypeLambda, Config, String, i32> {
    Box::new(|config: &Config| Ok(config.base))
}

fn name() -> Kind<ReaderTypeLambda, Config, String, String> {
    Box::new(|config: &Config| {
        if config.name.is_empty() {
            Err("missing name".to_string())
        } else {
            Ok(config.name.clone())
        }
    })
}

fn config(base: i32, name: &str) -> Config {
    Config {
        base,
        name: name.to_string(),
    }
}

#[rstest]
fn map_reads_environment_once() {
    let doubled = ReaderTypeLambda::map::<Config, String, _, _, _>(base(), |n: i32| n * 2);
    assert_eq!(doubled(&config(21, "x")), Ok(42));
}

#[rstest]
#[case(config(2, "ab"), Ok("ab:2".to_string()))]
#[case(config(2, ""), Err("missing name".to_string()))]
fn lift2_shares_environment_and_error(#[case] environment: Config, #[case] expected: Result<String, String>) {
    let label = semi_applicative::lift2::<ReaderTypeLambda, Config, String, _, _, _, _>(
        |text: String, n: i32| format!("{text}:{n}"),
    );
    assert_eq!(label(name(), base())(&environment), expected);
}

#[rstest]
fn product_many_collects_every_reader() {
    let all = ReaderTypeLambda::product_many::<Config, String, _, _>(base(), vec![base(), base()]);
    assert_eq!(all(&config(3, "x")), Ok(vec![3, 3, 3]));
}

#[rstest]
fn flat_map_chooses_next_reader_from_value() {
    let chosen = ReaderTypeLambda::flat_map::<Config, String, _, _, _>(base(), |n: i32| -> Kind<ReaderTypeLambda, Config, String, String> {
        if n > 0 {
            name()
        } else {
            Box::new(|_: &Config| Ok("non-positive".to_string()))
        }
    });
    assert_eq!(chosen(&config(1, "named")), Ok("named".to_string()));
    assert_eq!(chosen(&config(-1, "named")), Ok("non-positive".to_string()));
}

#[rstest]
fn coproduct_takes_error_type_of_second_operand() {
    let fallback: Kind<ReaderTypeLambda, Config, u8, String> = Box::new(|_: &Config| Err(7));
    let either = ReaderTypeLambda::coproduct::<Config, String, u8, _>(name(), fallback);
    assert_eq!(either(&config(0, "kept")), Ok("kept".to_string()));
    assert_eq!(either(&config(0, "")), Err(7));
}

#[rstest]
fn imap_derived_from_map() {
    let text = ReaderTypeLambda::imap::<Config, String, i32, String, _, _>(
        base(),
        |n: i32| n.to_string(),
        |text: &String| text.parse().unwrap_or_default(),
    );
    assert_eq!(text(&config(12, "x")), Ok("12".to_string()));
}
