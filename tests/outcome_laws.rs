//! Property-based tests for Outcome.
//!
//! These tests verify the functor and applicative laws, and that error
//! accumulation never loses or reorders an error.

use proptest::prelude::*;
use sumtypes::control::{ErrorList, Outcome};
use sumtypes::persistent::PersistentList;

// =============================================================================
// Strategy for generating Outcome
// =============================================================================

fn error_list_strategy() -> impl Strategy<Value = PersistentList<u8>> {
    prop::collection::vec(any::<u8>(), 1..5).prop_map(PersistentList::copy)
}

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, u8>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::<i32, u8>::success),
        error_list_strategy().prop_map(|errors| {
            Outcome::<i32, u8>::failure_many(errors).unwrap_or_else(|_| Outcome::failure(0))
        }),
    ]
}

fn error_count(outcome: &Outcome<i32, u8>) -> usize {
    outcome.errors().map_or(0, |errors| errors.len())
}

proptest! {
    // =========================================================================
    // Functor Laws
    // =========================================================================

    #[test]
    fn prop_map_identity(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().map(|x| x), outcome);
    }

    #[test]
    fn prop_map_composition(outcome in outcome_strategy()) {
        let first = |x: i32| x.wrapping_add(3);
        let second = |x: i32| x.wrapping_mul(5);
        prop_assert_eq!(
            outcome.clone().map(first).map(second),
            outcome.map(|x| second(first(x)))
        );
    }

    // =========================================================================
    // Applicative Laws
    // =========================================================================

    #[test]
    fn prop_apply_identity(outcome in outcome_strategy()) {
        let identity: Outcome<fn(i32) -> i32, u8> = Outcome::success(|x| x);
        prop_assert_eq!(outcome.clone().apply(identity), outcome);
    }

    #[test]
    fn prop_apply_homomorphism(value: i32) {
        let function: Outcome<fn(i32) -> i32, u8> = Outcome::success(|x| x.wrapping_sub(1));
        prop_assert_eq!(
            Outcome::<i32, u8>::success(value).apply(function),
            Outcome::success(value.wrapping_sub(1))
        );
    }

    #[test]
    fn prop_apply_accumulates_all_errors(
        function_errors in error_list_strategy(),
        value_errors in error_list_strategy(),
    ) {
        let function: Outcome<fn(i32) -> i32, u8> =
            Outcome::<fn(i32) -> i32, u8>::failure_many(function_errors.clone())
                .unwrap_or_else(|_| Outcome::failure(0));
        let value: Outcome<i32, u8> =
            Outcome::<i32, u8>::failure_many(value_errors.clone()).unwrap_or_else(|_| Outcome::failure(0));
        let applied = value.apply(function);
        let expected = function_errors.add(&value_errors);
        prop_assert_eq!(applied.errors().map(ErrorList::to_list), Some(expected));
    }

    // =========================================================================
    // Accumulation
    // =========================================================================

    #[test]
    fn prop_map2_error_count_is_sum(left in outcome_strategy(), right in outcome_strategy()) {
        let expected = error_count(&left) + error_count(&right);
        let combined = left.map2(right, i32::wrapping_add);
        prop_assert_eq!(error_count(&combined), expected);
    }

    #[test]
    fn prop_combine_errors_on_success_is_noop(value: i32, errors in error_list_strategy()) {
        let outcome: Outcome<i32, u8> = Outcome::success(value);
        prop_assert_eq!(outcome.combine_errors(&errors), Outcome::success(value));
    }

    #[test]
    fn prop_sequence_keeps_every_error(outcomes in prop::collection::vec(outcome_strategy(), 0..8)) {
        let total: usize = outcomes.iter().map(error_count).sum();
        let sequenced = Outcome::sequence(&PersistentList::copy(outcomes.clone()));
        match sequenced {
            Outcome::Success(values) => {
                prop_assert_eq!(total, 0);
                prop_assert_eq!(values.len(), outcomes.len());
            }
            Outcome::Failure(errors) => {
                prop_assert_eq!(errors.len(), total);
            }
        }
    }
}
