//! Property-based tests for the Order and Equivalence laws.
//!
//! - **Reflexivity**: `compare(a, a) == Equal`
//! - **Antisymmetry**: `compare(b, a) == compare(a, b).reverse()`
//! - **Transitivity**: `a <= b` and `b <= c` imply `a <= c`
//! - **Consistency**: `min`, `max`, `clamp` and `between` agree with `compare`
//!
//! Derived orders (`reverse`, `contramap`, `tuple`, `array`, option) are
//! checked alongside the primitive ones.

#![cfg(all(feature = "typeclass", feature = "data"))]

use std::cmp::Ordering;

use kinded::data::{BooleanOrder, NumberOrder, StringOrder, option, vec as vec_instances};
use kinded::typeclass::{Equivalence, Natural, Order, equivalence, order};
use proptest::prelude::*;

fn assert_total<A, O>(instance: &O, a: &A, b: &A) -> Result<(), TestCaseError>
where
    A: ?Sized,
    O: Order<A>,
{
    prop_assert_eq!(instance.compare(a, a), Ordering::Equal);
    prop_assert_eq!(instance.compare(b, a), instance.compare(a, b).reverse());
    let relations = [
        instance.less_than(a, b),
        instance.compare(a, b) == Ordering::Equal,
        instance.greater_than(a, b),
    ];
    prop_assert_eq!(relations.iter().filter(|holds| **holds).count(), 1);
    Ok(())
}

fn assert_transitive<A, O>(instance: &O, a: &A, b: &A, c: &A) -> Result<(), TestCaseError>
where
    O: Order<A>,
{
    if instance.less_than_or_equal_to(a, b) && instance.less_than_or_equal_to(b, c) {
        prop_assert!(instance.less_than_or_equal_to(a, c));
    }
    Ok(())
}

// =============================================================================
// Totality and antisymmetry
// =============================================================================

proptest! {
    #[test]
    fn prop_primitive_orders_are_total(a in any::<i64>(), b in any::<i64>(), x in any::<bool>(), y in any::<bool>()) {
        assert_total(&NumberOrder, &a, &b)?;
        assert_total(&Natural, &a, &b)?;
        assert_total(&BooleanOrder, &x, &y)?;
    }

    #[test]
    fn prop_float_order_is_total(a in any::<f64>(), b in any::<f64>()) {
        assert_total(&NumberOrder, &a, &b)?;
    }

    #[test]
    fn prop_string_order_is_total(a in ".{0,8}", b in ".{0,8}") {
        assert_total(&StringOrder, &a, &b)?;
        assert_total(&StringOrder, a.as_str(), b.as_str())?;
    }

    #[test]
    fn prop_derived_orders_are_total(
        a in (".{0,3}", any::<i8>()),
        b in (".{0,3}", any::<i8>()),
    ) {
        let pair = order::tuple((StringOrder, NumberOrder));
        assert_total(&pair, &a, &b)?;
        assert_total(&order::reverse(&pair), &a, &b)?;
        assert_total(&order::contramap(NumberOrder, |pair: &(String, i8)| pair.1), &a, &b)?;
    }

    #[test]
    fn prop_container_orders_are_total(
        a in prop::collection::vec(any::<i16>(), 0..6),
        b in prop::collection::vec(any::<i16>(), 0..6),
        x in any::<Option<u8>>(),
        y in any::<Option<u8>>(),
    ) {
        assert_total(&vec_instances::get_order(NumberOrder), &a, &b)?;
        assert_total(&order::array(NumberOrder), a.as_slice(), b.as_slice())?;
        assert_total(&option::get_order(NumberOrder), &x, &y)?;
    }
}

// =============================================================================
// Transitivity and consistency
// =============================================================================

proptest! {
    #[test]
    fn prop_orders_are_transitive(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        assert_transitive(&NumberOrder, &a, &b, &c)?;
        assert_transitive(&order::reverse(NumberOrder), &a, &b, &c)?;
    }

    #[test]
    fn prop_lexicographic_order_is_transitive(
        a in prop::collection::vec(0_u8..3, 0..4),
        b in prop::collection::vec(0_u8..3, 0..4),
        c in prop::collection::vec(0_u8..3, 0..4),
    ) {
        assert_transitive(&vec_instances::get_order(NumberOrder), &a, &b, &c)?;
    }

    #[test]
    fn prop_order_matches_ord(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(NumberOrder.compare(&a, &b), a.cmp(&b));
        prop_assert_eq!(NumberOrder.min(a, b), a.min(b));
        prop_assert_eq!(NumberOrder.max(a, b), a.max(b));
    }

    #[test]
    fn prop_clamp_stays_between_bounds(value in any::<i32>(), x in any::<i32>(), y in any::<i32>()) {
        let (low, high) = if x <= y { (x, y) } else { (y, x) };
        let clamped = NumberOrder.clamp(value, low, high);
        prop_assert!(NumberOrder.between(&clamped, &low, &high));
        prop_assert_eq!(NumberOrder.between(&value, &low, &high), clamped == value);
    }
}

// =============================================================================
// Equivalence
// =============================================================================

proptest! {
    #[test]
    fn prop_equivalence_from_order_agrees_with_compare(a in any::<i32>(), b in any::<i32>()) {
        let same = equivalence::from_order(NumberOrder);
        prop_assert_eq!(same.equals(&a, &b), NumberOrder.compare(&a, &b) == Ordering::Equal);
        prop_assert!(same.equals(&a, &a));
        prop_assert_eq!(same.equals(&a, &b), same.equals(&b, &a));
    }

    #[test]
    fn prop_option_equivalence_is_symmetric(x in any::<Option<u8>>(), y in any::<Option<u8>>()) {
        let same = option::get_equivalence(equivalence::Strict);
        prop_assert_eq!(same.equals(&x, &y), x == y);
        prop_assert_eq!(same.equals(&x, &y), same.equals(&y, &x));
    }
}
