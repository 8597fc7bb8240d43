//! Outcome type - success, or a non-empty list of accumulated errors.
//!
//! [`Outcome<S, E>`] is either `Success(value)` or `Failure(errors)`, where
//! `errors` is an [`ErrorList`] that always holds at least one error.
//!
//! Unlike `std::result::Result`, independent failures can be merged instead
//! of keeping only the first one:
//!
//! - [`combine_error`](Outcome::combine_error) and friends append errors to
//!   an existing failure
//! - [`apply`](Outcome::apply) and [`map2`](Outcome::map2) keep the errors of
//!   both sides when both sides failed
//! - [`sequence`](Outcome::sequence) collects every failure of a list
//!
//! [`bind`](Outcome::bind), by contrast, short-circuits: the second step
//! never runs after a failure.
//!
//! # Examples
//!
//! ```rust
//! use sumtypes::control::{ErrorList, Outcome};
//! use sumtypes::plist;
//!
//! fn positive(value: i32) -> Outcome<i32, String> {
//!     if value > 0 {
//!         Outcome::success(value)
//!     } else {
//!         Outcome::failure(format!("{value} is not positive"))
//!     }
//! }
//!
//! let both = positive(-1).map2(positive(-2), |a, b| a + b);
//! assert_eq!(
//!     both.errors().map(ErrorList::to_list),
//!     Some(plist![String::from("-1 is not positive"), String::from("-2 is not positive")])
//! );
//! ```

use std::fmt;

use super::{ErrorList, Optional};
use crate::error::{AdtError, FailureError};
use crate::matcher::Matcher;
use crate::persistent::PersistentList;

/// Either a success value or a non-empty list of errors.
///
/// # Examples
///
/// ```rust
/// use sumtypes::control::Outcome;
///
/// let outcome: Outcome<i32, &str> = Outcome::failure("error_a").combine_error("error_b");
/// assert_eq!(outcome.to_string(), "Failure[error_a; error_b; ]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome<S, E> {
    /// The computation succeeded.
    Success(S),
    /// The computation failed with at least one error.
    Failure(ErrorList<E>),
}

impl<S, E> Outcome<S, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a success value.
    #[inline]
    pub const fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// Creates a failure holding a single error.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(ErrorList::single(error))
    }

    /// Creates a failure holding every error of `errors`.
    ///
    /// # Errors
    ///
    /// Returns [`AdtError::InvalidArgument`] if `errors` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::control::Outcome;
    /// use sumtypes::plist;
    ///
    /// let outcome = Outcome::<i32, _>::failure_many(plist!["a", "b"]).unwrap();
    /// assert!(outcome.is_failure());
    /// assert!(Outcome::<i32, &str>::failure_many(plist![]).is_err());
    /// ```
    pub fn failure_many(errors: PersistentList<E>) -> Result<Self, AdtError> {
        ErrorList::from_list(&errors)
            .map(Self::Failure)
            .ok_or_else(|| AdtError::invalid_argument("Outcome::failure_many", "errors"))
    }

    /// Creates a failure from an already validated error list.
    #[inline]
    pub const fn from_errors(errors: ErrorList<E>) -> Self {
        Self::Failure(errors)
    }

    /// Converts into a standard `Result`, keeping every error.
    ///
    /// # Errors
    ///
    /// Returns the accumulated errors when this is a failure.
    pub fn into_result(self) -> Result<S, ErrorList<E>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(errors),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the success value, if any.
    #[inline]
    pub const fn success_value(&self) -> Option<&S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the accumulated errors, if any.
    #[inline]
    pub const fn errors(&self) -> Option<&ErrorList<E>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the success value, or `alternative` on failure.
    #[inline]
    pub fn get_or_else(self, alternative: S) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => alternative,
        }
    }

    /// Returns the success value, or computes one from the errors.
    #[inline]
    pub fn get_or_else_with<F>(self, provider: F) -> S
    where
        F: FnOnce(ErrorList<E>) -> S,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(errors) => provider(errors),
        }
    }

    /// Returns the success value, or a [`FailureError`] carrying every error.
    ///
    /// # Errors
    ///
    /// Returns [`FailureError`] when this is a failure.
    pub fn get_or_throw(self) -> Result<S, FailureError<E>> {
        self.get_or_throw_with(|errors| FailureError::new(errors.into_list()))
    }

    /// Returns the success value, or the error built from the accumulated errors.
    ///
    /// # Errors
    ///
    /// Returns `Err(error_provider(errors))` when this is a failure.
    pub fn get_or_throw_with<X, F>(self, error_provider: F) -> Result<S, X>
    where
        F: FnOnce(ErrorList<E>) -> X,
    {
        self.into_result().map_err(error_provider)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the success value; failures pass through untouched.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(S) -> B,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Applies `function` to the success value, rejecting a callback that
    /// yields no value.
    ///
    /// # Errors
    ///
    /// Returns [`AdtError::UnacceptableResult`] if this is a success and
    /// `function` returns `None`.
    pub fn try_map<B, F>(self, function: F) -> Result<Outcome<B, E>, AdtError>
    where
        F: FnOnce(S) -> Option<B>,
    {
        match self {
            Self::Success(value) => function(value)
                .map(Outcome::Success)
                .ok_or_else(|| AdtError::unacceptable_result("Outcome::try_map")),
            Self::Failure(errors) => Ok(Outcome::Failure(errors)),
        }
    }

    /// Chains a computation that itself may fail. Short-circuits on failure.
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(S) -> Outcome<B, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Like [`bind`](Self::bind), but `function` may return no outcome at all.
    ///
    /// # Errors
    ///
    /// Returns [`AdtError::UnacceptableResult`] if this is a success and
    /// `function` returns `None`.
    pub fn try_bind<B, F>(self, function: F) -> Result<Outcome<B, E>, AdtError>
    where
        F: FnOnce(S) -> Option<Outcome<B, E>>,
    {
        match self {
            Self::Success(value) => {
                function(value).ok_or_else(|| AdtError::unacceptable_result("Outcome::try_bind"))
            }
            Self::Failure(errors) => Ok(Outcome::Failure(errors)),
        }
    }

    /// Transforms the whole error list of a failure.
    ///
    /// A success passes through unchanged and `function` does not run.
    ///
    /// # Errors
    ///
    /// Returns [`AdtError::InvalidOperation`] if `function` returns an empty
    /// list, because a failure must keep at least one error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::control::Outcome;
    /// use sumtypes::persistent::PersistentList;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::failure("disk full");
    /// let lengths = outcome.clone().map_failure(|errors| errors.map(|e| e.len())).unwrap();
    /// assert_eq!(lengths, Outcome::failure(9));
    ///
    /// assert!(outcome.map_failure(|_| PersistentList::<usize>::new()).is_err());
    /// ```
    pub fn map_failure<F2, F>(self, function: F) -> Result<Outcome<S, F2>, AdtError>
    where
        F: FnOnce(PersistentList<E>) -> PersistentList<F2>,
    {
        self.replace_errors("Outcome::map_failure", |errors| Some(function(errors)))
    }

    /// Like [`map_failure`](Self::map_failure), but `function` may return no
    /// list at all.
    ///
    /// # Errors
    ///
    /// Returns [`AdtError::UnacceptableResult`] if `function` returns `None`,
    /// and [`AdtError::InvalidOperation`] if it returns an empty list.
    pub fn try_map_failure<F2, F>(self, function: F) -> Result<Outcome<S, F2>, AdtError>
    where
        F: FnOnce(PersistentList<E>) -> Option<PersistentList<F2>>,
    {
        self.replace_errors("Outcome::try_map_failure", function)
    }

    fn replace_errors<F2, F>(
        self,
        operation: &'static str,
        function: F,
    ) -> Result<Outcome<S, F2>, AdtError>
    where
        F: FnOnce(PersistentList<E>) -> Option<PersistentList<F2>>,
    {
        match self {
            Self::Success(value) => Ok(Outcome::Success(value)),
            Self::Failure(errors) => {
                let mapped = function(errors.into_list())
                    .ok_or_else(|| AdtError::unacceptable_result(operation))?;
                ErrorList::from_list(&mapped).map(Outcome::Failure).ok_or_else(|| {
                    AdtError::invalid_operation(operation, "a failure must keep at least one error")
                })
            }
        }
    }

    /// Applies `function` to every error of a failure.
    pub fn map_errors<F2, F>(self, function: F) -> Outcome<S, F2>
    where
        F: FnMut(&E) -> F2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(errors) => Outcome::Failure(errors.map(function)),
        }
    }

    /// Runs `action` on the success value, then returns `self`.
    pub fn do_if_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&S),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on the errors of a failure, then returns `self`.
    pub fn do_if_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&ErrorList<E>),
    {
        if let Self::Failure(errors) = &self {
            action(errors);
        }
        self
    }

    /// Discards the errors: `Success(v)` becomes `Present(v)`, any failure `Absent`.
    #[inline]
    pub fn to_option(self) -> Optional<S> {
        match self {
            Self::Success(value) => Optional::Present(value),
            Self::Failure(_) => Optional::Absent,
        }
    }

    /// Case analysis in one step.
    pub fn fold<R, P, Q>(self, on_success: P, on_failure: Q) -> R
    where
        P: FnOnce(S) -> R,
        Q: FnOnce(ErrorList<E>) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(errors) => on_failure(errors),
        }
    }

    // =========================================================================
    // Lifting and Catching
    // =========================================================================

    /// Lifts a plain function into one over outcomes.
    pub fn lift<B, F>(function: F) -> impl Fn(Self) -> Outcome<B, E>
    where
        F: Fn(S) -> B,
    {
        move |outcome: Self| outcome.map(&function)
    }

    /// Wraps a fallible function so that its error becomes a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::control::Outcome;
    ///
    /// let parse = Outcome::catch(|text: &str| text.parse::<i32>());
    /// assert_eq!(parse("12"), Outcome::success(12));
    /// assert!(parse("twelve").is_failure());
    /// ```
    pub fn catch<A, F>(function: F) -> impl Fn(A) -> Self
    where
        F: Fn(A) -> Result<S, E>,
    {
        move |argument| Self::attempt(|| function(argument))
    }

    /// Runs a fallible computation once, turning its error into a `Failure`.
    pub fn attempt<F>(function: F) -> Self
    where
        F: FnOnce() -> Result<S, E>,
    {
        match function() {
            Ok(value) => Self::Success(value),
            Err(error) => {
                tracing::trace!("converted a caught error into a failure");
                Self::failure(error)
            }
        }
    }

    /// Like [`attempt`](Self::attempt), but a successful computation may
    /// produce no value.
    ///
    /// A caught error is a normal `Failure`; a missing success value is a
    /// contract violation reported separately.
    ///
    /// # Errors
    ///
    /// Returns [`AdtError::UnacceptableResult`] if `function` returns `Ok(None)`.
    pub fn try_attempt<F>(function: F) -> Result<Self, AdtError>
    where
        F: FnOnce() -> Result<Option<S>, E>,
    {
        match function() {
            Ok(Some(value)) => Ok(Self::Success(value)),
            Ok(None) => Err(AdtError::unacceptable_result("Outcome::try_attempt")),
            Err(error) => {
                tracing::trace!("converted a caught error into a failure");
                Ok(Self::failure(error))
            }
        }
    }

    // =========================================================================
    // Matching
    // =========================================================================

    /// Starts a two-stage match by handling the `Success` case.
    pub fn match_success<R, F>(self, handler: F) -> Matcher<FailureCase<E>, R>
    where
        F: FnOnce(S) -> R,
    {
        match self {
            Self::Success(value) => Matcher::Resolved(handler(value)),
            Self::Failure(errors) => Matcher::Pending(FailureCase(errors)),
        }
    }

    /// Starts a two-stage match by handling the `Failure` case.
    pub fn match_failure<R, F>(self, handler: F) -> Matcher<SuccessCase<S>, R>
    where
        F: FnOnce(ErrorList<E>) -> R,
    {
        match self {
            Self::Success(value) => Matcher::Pending(SuccessCase(value)),
            Self::Failure(errors) => Matcher::Resolved(handler(errors)),
        }
    }
}

impl<S, E: Clone> Outcome<S, E> {
    // =========================================================================
    // Error Accumulation
    // =========================================================================

    /// Appends `error` to a failure. A success is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::control::Outcome;
    /// use sumtypes::plist;
    ///
    /// let outcome: Outcome<(), _> = Outcome::failure("error_a").combine_error("error_b");
    /// assert_eq!(outcome, Outcome::failure_many(plist!["error_a", "error_b"]).unwrap());
    ///
    /// let success: Outcome<i32, &str> = Outcome::success(1);
    /// assert_eq!(success.combine_error("ignored"), Outcome::success(1));
    /// ```
    #[must_use]
    pub fn combine_error(self, error: E) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(errors) => Self::Failure(errors.append_error(error)),
        }
    }

    /// Appends every error of `errors` to a failure. A success is returned unchanged.
    #[must_use]
    pub fn combine_errors(self, errors: &PersistentList<E>) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(existing) => Self::Failure(existing.append_list(errors)),
        }
    }

    /// Appends the errors of `other`, if it failed, to a failure.
    ///
    /// A success receiver, or a successful `other`, leaves `self` unchanged.
    #[must_use]
    pub fn combine_outcome<B>(self, other: &Outcome<B, E>) -> Self {
        match (self, other) {
            (Self::Failure(existing), Outcome::Failure(errors)) => {
                Self::Failure(existing.append(errors))
            }
            (unchanged, _) => unchanged,
        }
    }

    // =========================================================================
    // Applicative
    // =========================================================================

    /// Applies an outcome of a function to this outcome of a value.
    ///
    /// | function      | value         | result                        |
    /// |---------------|---------------|-------------------------------|
    /// | `Success(f)`  | `Success(v)`  | `Success(f(v))`               |
    /// | `Success(f)`  | `Failure(ve)` | `Failure(ve)`                 |
    /// | `Failure(fe)` | `Success(v)`  | `Failure(fe)`                 |
    /// | `Failure(fe)` | `Failure(ve)` | `Failure(fe ++ ve)`           |
    ///
    /// Function-side errors come before value-side errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::control::Outcome;
    /// use sumtypes::plist;
    ///
    /// let function: Outcome<fn(i32) -> i32, &str> = Outcome::failure("f-err");
    /// let value: Outcome<i32, &str> = Outcome::failure("v-err");
    /// assert_eq!(
    ///     value.apply(function),
    ///     Outcome::failure_many(plist!["f-err", "v-err"]).unwrap()
    /// );
    /// ```
    pub fn apply<B, F>(self, function: Outcome<F, E>) -> Outcome<B, E>
    where
        F: FnOnce(S) -> B,
    {
        match (function, self) {
            (Outcome::Success(function), Self::Success(value)) => Outcome::Success(function(value)),
            (Outcome::Success(_), Self::Failure(errors))
            | (Outcome::Failure(errors), Self::Success(_)) => Outcome::Failure(errors),
            (Outcome::Failure(function_errors), Self::Failure(value_errors)) => {
                Outcome::Failure(function_errors.append(&value_errors))
            }
        }
    }

    /// Like [`apply`](Self::apply), but the applied function may produce no value.
    ///
    /// # Errors
    ///
    /// Returns [`AdtError::UnacceptableResult`] if both sides succeeded and
    /// the function returned `None`.
    pub fn try_apply<B, F>(self, function: Outcome<F, E>) -> Result<Outcome<B, E>, AdtError>
    where
        F: FnOnce(S) -> Option<B>,
    {
        match self.apply(function) {
            Outcome::Success(Some(value)) => Ok(Outcome::Success(value)),
            Outcome::Success(None) => Err(AdtError::unacceptable_result("Outcome::try_apply")),
            Outcome::Failure(errors) => Ok(Outcome::Failure(errors)),
        }
    }

    /// Combines two independent outcomes, accumulating the errors of both.
    ///
    /// Errors of `self` come before errors of `other`.
    pub fn map2<T, B, F>(self, other: Outcome<T, E>, function: F) -> Outcome<B, E>
    where
        F: FnOnce(S, T) -> B,
    {
        other.apply(self.map(|first| move |second| function(first, second)))
    }
}

impl<S: Clone, E: Clone> Outcome<S, E> {
    /// Turns a list of outcomes into an outcome of a list.
    ///
    /// Succeeds only if every element succeeded; otherwise every error of
    /// every failed element is kept, in list order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::control::Outcome;
    /// use sumtypes::plist;
    ///
    /// let all_good: Outcome<_, &str> =
    ///     Outcome::sequence(&plist![Outcome::success(1), Outcome::success(2)]);
    /// assert_eq!(all_good, Outcome::success(plist![1, 2]));
    ///
    /// let some_bad = Outcome::sequence(&plist![
    ///     Outcome::failure("a"),
    ///     Outcome::success(2),
    ///     Outcome::failure("b"),
    /// ]);
    /// assert_eq!(some_bad, Outcome::failure_many(plist!["a", "b"]).unwrap());
    /// ```
    pub fn sequence(outcomes: &PersistentList<Self>) -> Outcome<PersistentList<S>, E> {
        let mut values = Vec::with_capacity(outcomes.len());
        let mut errors = Vec::new();

        for outcome in outcomes {
            match outcome {
                Self::Success(value) if errors.is_empty() => values.push(value.clone()),
                Self::Success(_) => {}
                Self::Failure(failure) => errors.extend(failure.iter().cloned()),
            }
        }

        match ErrorList::from_list(&PersistentList::copy(errors)) {
            None => Outcome::Success(PersistentList::copy(values)),
            Some(errors) => Outcome::Failure(errors),
        }
    }
}

// =============================================================================
// Matcher Payloads
// =============================================================================

/// The pending payload of an outcome match whose `Success` case is unhandled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessCase<S>(S);

/// The pending payload of an outcome match whose `Failure` case is unhandled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureCase<E>(ErrorList<E>);

impl<S, R> Matcher<SuccessCase<S>, R> {
    /// Completes the match with the `Success` handler.
    pub fn match_success<F>(self, handler: F) -> R
    where
        F: FnOnce(S) -> R,
    {
        match self {
            Self::Resolved(output) => output,
            Self::Pending(SuccessCase(value)) => handler(value),
        }
    }
}

impl<E, R> Matcher<FailureCase<E>, R> {
    /// Completes the match with the `Failure` handler.
    pub fn match_failure<F>(self, handler: F) -> R
    where
        F: FnOnce(ErrorList<E>) -> R,
    {
        match self {
            Self::Resolved(output) => output,
            Self::Pending(FailureCase(errors)) => handler(errors),
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<S, E> From<Result<S, E>> for Outcome<S, E> {
    fn from(result: Result<S, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<S, E> From<Outcome<S, E>> for Result<S, ErrorList<E>> {
    fn from(outcome: Outcome<S, E>) -> Self {
        outcome.into_result()
    }
}

/// Renders `Success[value]` or `Failure[e1; e2; ]`.
impl<S: fmt::Display, E: fmt::Display> fmt::Display for Outcome<S, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success[{value}]"),
            Self::Failure(errors) => write!(formatter, "Failure[{errors}]"),
        }
    }
}
