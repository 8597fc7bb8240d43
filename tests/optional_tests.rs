//! Integration tests for Optional.

use rstest::rstest;
use std::cell::Cell;
use sumtypes::control::{Optional, Outcome};
use sumtypes::{AdtError, DEFAULT_ABSENT_MESSAGE};

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
#[case(Optional::present(3), 3)]
#[case(Optional::absent(), 0)]
fn test_get_or_else(#[case] optional: Optional<i32>, #[case] expected: i32) {
    assert_eq!(optional.get_or_else(0), expected);
}

#[rstest]
fn test_get_or_else_with_is_lazy() {
    let calls = Cell::new(0);
    let value = Optional::present(1).get_or_else_with(|| {
        calls.set(calls.get() + 1);
        0
    });
    assert_eq!(value, 1);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn test_get_or_fail_uses_default_message() {
    let error = Optional::<i32>::absent().get_or_fail().unwrap_err();
    assert_eq!(error.to_string(), DEFAULT_ABSENT_MESSAGE);
}

#[rstest]
fn test_get_or_fail_with_message() {
    let error = Optional::<i32>::absent()
        .get_or_fail_with_message("no user")
        .unwrap_err();
    assert_eq!(
        error,
        AdtError::ValueAbsent {
            message: String::from("no user")
        }
    );
}

#[rstest]
fn test_get_or_throw_with_caller_error() {
    #[derive(Debug, PartialEq)]
    struct NotFound;

    assert_eq!(Optional::<i32>::absent().get_or_throw(|| NotFound), Err(NotFound));
    assert_eq!(Optional::present(5).get_or_throw(|| NotFound), Ok(5));
}

#[rstest]
fn test_try_get_or_throw_distinguishes_missing_error() {
    let result = Optional::<i32>::absent().try_get_or_throw(|| None::<String>);
    assert!(matches!(result, Err(AdtError::UnacceptableResult { .. })));

    let present = Optional::present(2).try_get_or_throw(|| None::<String>);
    assert_eq!(present, Ok(Ok(2)));
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn test_map_and_bind() {
    let parsed = Optional::present("42")
        .map(str::len)
        .bind(|length| if length > 1 { Optional::present(length) } else { Optional::absent() });
    assert_eq!(parsed, Optional::present(2));
}

#[rstest]
fn test_bind_may_return_absent() {
    let result = Optional::present(1).bind(|_| Optional::<i32>::absent());
    assert!(result.is_absent());
}

#[rstest]
fn test_try_map_rejects_missing_value() {
    let result = Optional::present(1).try_map(|_| None::<i32>);
    assert!(matches!(result, Err(AdtError::UnacceptableResult { .. })));
}

#[rstest]
fn test_try_bind_rejects_missing_optional() {
    let result = Optional::present(1).try_bind(|_| None::<Optional<i32>>);
    assert!(matches!(result, Err(AdtError::UnacceptableResult { .. })));

    let absent = Optional::<i32>::absent().try_bind(|_| None::<Optional<i32>>);
    assert_eq!(absent, Ok(Optional::absent()));
}

#[rstest]
fn test_filter() {
    assert_eq!(Optional::present(4).filter(|x| x % 2 == 0), Optional::present(4));
    assert_eq!(Optional::present(3).filter(|x| x % 2 == 0), Optional::absent());
}

#[rstest]
fn test_side_effects_run_on_matching_case_only() {
    let present_calls = Cell::new(0);
    let absent_calls = Cell::new(0);

    Optional::present(1)
        .do_if_present(|_| present_calls.set(present_calls.get() + 1))
        .do_if_absent(|| absent_calls.set(absent_calls.get() + 1));

    assert_eq!(present_calls.get(), 1);
    assert_eq!(absent_calls.get(), 0);
}

// =============================================================================
// Applicative
// =============================================================================

#[rstest]
fn test_lift() {
    let double = Optional::lift(|x: i32| x * 2);
    assert_eq!(double(Optional::present(4)), Optional::present(8));
    assert_eq!(double(Optional::absent()), Optional::absent());
}

fn increment(x: i32) -> i32 {
    x + 1
}

#[rstest]
#[case(Optional::present(1), Optional::present(increment as fn(i32) -> i32), Optional::present(2))]
#[case(Optional::absent(), Optional::present(increment as fn(i32) -> i32), Optional::absent())]
#[case(Optional::present(1), Optional::absent(), Optional::absent())]
fn test_apply(
    #[case] value: Optional<i32>,
    #[case] function: Optional<fn(i32) -> i32>,
    #[case] expected: Optional<i32>,
) {
    assert_eq!(value.apply(function), expected);
}

// =============================================================================
// Conversion and Rendering
// =============================================================================

#[rstest]
fn test_to_outcome() {
    assert_eq!(Optional::present(1).to_outcome("missing"), Outcome::success(1));
    assert_eq!(
        Optional::<i32>::absent().to_outcome("missing"),
        Outcome::failure("missing")
    );
}

#[rstest]
fn test_option_round_trip() {
    let optional: Optional<i32> = Some(3).into();
    let option: Option<i32> = optional.into();
    assert_eq!(option, Some(3));
}

#[rstest]
fn test_display() {
    assert_eq!(Optional::present(7).to_string(), "Present[7]");
    assert_eq!(Optional::<i32>::absent().to_string(), "Absent[i32]");
}
