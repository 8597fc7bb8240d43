//! Integration tests for Outcome.
//!
//! Covers the validation use case: independent checks whose failures are
//! accumulated instead of stopping at the first one.

use rstest::rstest;
use sumtypes::control::{ErrorList, Optional, Outcome};
use sumtypes::persistent::PersistentList;
use sumtypes::{AdtError, plist};

#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldError {
    EmptyName,
    NegativeAge(i32),
    MissingEmail,
}

#[derive(Debug, PartialEq, Eq)]
struct User {
    name: String,
    age: i32,
    email: String,
}

fn validate_name(name: &str) -> Outcome<String, FieldError> {
    if name.is_empty() {
        Outcome::failure(FieldError::EmptyName)
    } else {
        Outcome::success(name.to_owned())
    }
}

fn validate_age(age: i32) -> Outcome<i32, FieldError> {
    if age < 0 {
        Outcome::failure(FieldError::NegativeAge(age))
    } else {
        Outcome::success(age)
    }
}

fn validate_email(email: Optional<&str>) -> Outcome<String, FieldError> {
    email.map(str::to_owned).to_outcome(FieldError::MissingEmail)
}

fn validate_user(name: &str, age: i32, email: Optional<&str>) -> Outcome<User, FieldError> {
    validate_name(name)
        .map2(validate_age(age), |name, age| (name, age))
        .map2(validate_email(email), |(name, age), email| User { name, age, email })
}

// =============================================================================
// Validation
// =============================================================================

#[rstest]
fn test_valid_user() {
    let user = validate_user("alice", 30, Optional::present("alice@example.com"));
    assert_eq!(
        user,
        Outcome::success(User {
            name: String::from("alice"),
            age: 30,
            email: String::from("alice@example.com"),
        })
    );
}

#[rstest]
fn test_every_error_is_reported_in_order() {
    let user = validate_user("", -3, Optional::absent());
    let errors = user.errors().map(ErrorList::to_list);
    assert_eq!(
        errors,
        Some(plist![
            FieldError::EmptyName,
            FieldError::NegativeAge(-3),
            FieldError::MissingEmail,
        ])
    );
}

#[rstest]
fn test_sequence_of_validations() {
    let ages = plist![validate_age(1), validate_age(-1), validate_age(2), validate_age(-2)];
    let sequenced = Outcome::sequence(&ages);
    assert_eq!(
        sequenced,
        Outcome::failure_many(plist![FieldError::NegativeAge(-1), FieldError::NegativeAge(-2)])
            .unwrap()
    );
}

#[rstest]
fn test_sequence_of_successes() {
    let ages = plist![validate_age(1), validate_age(2)];
    assert_eq!(Outcome::sequence(&ages), Outcome::success(plist![1, 2]));
}

#[rstest]
fn test_sequence_of_empty_list_is_empty_success() {
    let empty: PersistentList<Outcome<i32, FieldError>> = PersistentList::new();
    assert_eq!(Outcome::sequence(&empty), Outcome::success(PersistentList::new()));
}

// =============================================================================
// Applicative Combination
// =============================================================================

#[rstest]
fn test_apply_failure_on_failure_puts_function_errors_first() {
    let function: Outcome<fn(i32) -> i32, &str> = Outcome::failure("f-err");
    let value: Outcome<i32, &str> = Outcome::failure("v-err");
    let applied = value.apply(function);
    assert_eq!(
        applied.errors().map(ErrorList::len),
        Some(2)
    );
    assert_eq!(applied, Outcome::failure_many(plist!["f-err", "v-err"]).unwrap());
}

#[rstest]
fn test_lift() {
    let negate = Outcome::<i32, &str>::lift(|x| -x);
    assert_eq!(negate(Outcome::success(3)), Outcome::success(-3));
    assert_eq!(negate(Outcome::failure("e")), Outcome::failure("e"));
}

#[rstest]
fn test_combine_error_keeps_existing_first() {
    let outcome: Outcome<i32, &str> = Outcome::failure("a").combine_error("b").combine_error("c");
    assert_eq!(outcome.to_string(), "Failure[a; b; c; ]");
}

// =============================================================================
// Extraction and Conversion
// =============================================================================

#[rstest]
fn test_get_or_throw_reports_every_error() {
    let outcome: Outcome<i32, &str> = Outcome::failure("first").combine_error("second");
    let error = outcome.get_or_throw().unwrap_err();
    assert_eq!(error.errors(), &plist!["first", "second"]);
    assert_eq!(error.to_string(), "outcome is a failure: first; second; ");
}

#[rstest]
fn test_get_or_else_with_receives_errors() {
    let outcome: Outcome<usize, &str> = Outcome::failure("a").combine_error("b");
    assert_eq!(outcome.get_or_else_with(|errors| errors.len()), 2);
}

#[rstest]
fn test_catch_converts_errors() {
    let parse = Outcome::catch(|text: &str| text.parse::<u8>());
    assert_eq!(parse("7"), Outcome::success(7));
    let failed = parse("700");
    assert!(failed.is_failure());
    assert_eq!(failed.errors().map(ErrorList::len), Some(1));
}

#[rstest]
fn test_into_result_keeps_all_errors() {
    let outcome: Outcome<i32, &str> = Outcome::failure("x").combine_error("y");
    let result: Result<i32, ErrorList<&str>> = outcome.into();
    assert_eq!(result.map_err(ErrorList::into_list), Err(plist!["x", "y"]));
}

#[rstest]
fn test_map_failure_errors() {
    let outcome: Outcome<i32, &str> = Outcome::failure("x");
    assert!(matches!(
        outcome.clone().map_failure(|_| PersistentList::<String>::new()),
        Err(AdtError::InvalidOperation { .. })
    ));
    assert!(matches!(
        outcome.try_map_failure(|_| None::<PersistentList<String>>),
        Err(AdtError::UnacceptableResult { .. })
    ));
}

#[rstest]
fn test_map_errors_rewrites_each_error() {
    let outcome: Outcome<i32, &str> = Outcome::failure("ab").combine_error("cde");
    assert_eq!(
        outcome.map_errors(|error| error.len()),
        Outcome::failure_many(plist![2, 3]).unwrap()
    );
}
