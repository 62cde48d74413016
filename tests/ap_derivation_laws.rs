//! Property-based tests pinning the derived applicative combinators to their
//! definitions.
//!
//! - **ap**: `ap(fab, fa) == map(product(fab, fa), |(f, a)| f(a))`
//! - **lift2**: `lift2(f)(fa, fb) == map(product(fa, fb), |(a, b)| f(a, b))`
//! - **zip_with** agrees with `lift2`
//! - **lift_semigroup** combines the second value first

#![cfg(all(feature = "typeclass", feature = "data"))]

use kinded::data::{IdentityTypeLambda, NumberSum, OptionTypeLambda, ResultTypeLambda, StringConcat};
use kinded::typeclass::{Covariant, Identity, Semigroup, SemiProduct, semi_applicative};
use proptest::prelude::*;

fn error_or_number() -> impl Strategy<Value = Result<i32, String>> {
    prop::result::maybe_ok(any::<i32>(), "[a-z]{1,4}")
}

proptest! {
    #[test]
    fn prop_option_ap_is_product_then_map(offset in any::<i32>(), fa in any::<Option<i32>>(), present in any::<bool>()) {
        let adder = move |n: i32| n.wrapping_add(offset);
        let fab = present.then_some(adder);

        let derived = OptionTypeLambda::map::<(), (), _, _, _>(
            OptionTypeLambda::product::<(), (), _, _>(fab, fa),
            |(function, a): (_, i32)| function(a),
        );
        let applied = semi_applicative::ap::<OptionTypeLambda, (), (), _, i32, _>(fab, fa);
        prop_assert_eq!(applied, derived);
    }

    #[test]
    fn prop_result_ap_is_product_then_map(offset in any::<i32>(), fa in error_or_number(), failure in prop::option::of("[a-z]{1,4}")) {
        let adder = move |n: i32| n.wrapping_mul(offset);
        let fab: Result<_, String> = failure.map_or(Ok(adder), Err);

        let derived = ResultTypeLambda::map::<(), String, _, _, _>(
            ResultTypeLambda::product::<(), String, _, _>(fab.clone(), fa.clone()),
            |(function, a): (_, i32)| function(a),
        );
        let applied = semi_applicative::ap::<ResultTypeLambda, (), String, _, i32, _>(fab, fa);
        prop_assert_eq!(applied, derived);
    }

    #[test]
    fn prop_identity_ap_applies_function(offset in any::<i64>(), value in any::<i64>()) {
        let fab = Identity(move |n: i64| n.wrapping_sub(offset));
        let applied = semi_applicative::ap::<IdentityTypeLambda, (), (), _, i64, _>(fab, Identity(value));
        prop_assert_eq!(applied, Identity(value.wrapping_sub(offset)));
    }

    #[test]
    fn prop_lift2_is_product_then_map(fa in error_or_number(), fb in error_or_number()) {
        let subtract = |a: i32, b: i32| a.wrapping_sub(b);
        let lifted = semi_applicative::lift2::<ResultTypeLambda, (), String, _, _, _, _>(subtract);
        let derived = ResultTypeLambda::map::<(), String, _, _, _>(
            ResultTypeLambda::product::<(), String, _, _>(fa.clone(), fb.clone()),
            move |(a, b)| subtract(a, b),
        );
        prop_assert_eq!(lifted(fa.clone(), fb.clone()), derived);
        prop_assert_eq!(
            semi_applicative::zip_with::<ResultTypeLambda, (), String, _, _, _, _>(fa.clone(), fb.clone(), subtract),
            lifted(fa, fb)
        );
    }

    #[test]
    fn prop_lift_semigroup_combines_second_first(a in "[a-z]{0,4}", b in "[a-z]{0,4}") {
        let lifted = semi_applicative::lift_semigroup::<OptionTypeLambda, (), (), String, _>(StringConcat);
        prop_assert_eq!(
            lifted.combine(Some(a.clone()), Some(b.clone())),
            Some(StringConcat.combine(b, a))
        );
    }

    #[test]
    fn prop_lift_semigroup_is_associative(
        a in any::<Option<i32>>(),
        b in any::<Option<i32>>(),
        c in any::<Option<i32>>(),
    ) {
        let lifted = semi_applicative::lift_semigroup::<OptionTypeLambda, (), (), i32, _>(NumberSum);
        prop_assert_eq!(
            lifted.combine(lifted.combine(a, b), c),
            lifted.combine(a, lifted.combine(b, c))
        );
    }
}
