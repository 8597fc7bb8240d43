//! Error types reported by the sum types in this crate.
//!
//! Every contract violation is returned to the immediate caller as a
//! [`Result`]; nothing in this crate panics on bad input. The taxonomy is:
//!
//! - [`AdtError::InvalidArgument`]: an argument that must carry data is empty
//! - [`AdtError::UnacceptableResult`]: a callback produced no value where a
//!   checked combinator requires one
//! - [`AdtError::InvalidOperation`]: a transform would break a structural
//!   invariant (an empty `Failure` error list)
//! - [`AdtError::ValueAbsent`]: a value was demanded from `Absent`
//!
//! [`FailureError`] is the value-absent error of `Outcome`: it carries
//! every accumulated error of the failure it was extracted from.

use std::fmt;

use thiserror::Error;

use crate::persistent::PersistentList;

/// Default message used when a value is demanded from an absent optional.
pub const DEFAULT_ABSENT_MESSAGE: &str = "value is absent";

/// Errors reported by the combinators of this crate.
///
/// # Examples
///
/// ```rust
/// use sumtypes::AdtError;
///
/// let error = AdtError::unacceptable_result("Optional::try_map");
/// assert_eq!(
///     error.to_string(),
///     "Optional::try_map: the callback produced no value where one is required"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdtError {
    /// A required argument was empty.
    #[error("{operation}: invalid argument `{argument}`")]
    InvalidArgument {
        /// The operation that received the argument.
        operation: &'static str,
        /// The name of the rejected argument.
        argument: &'static str,
    },
    /// A callback yielded no value where the combinator contract requires one.
    #[error("{operation}: the callback produced no value where one is required")]
    UnacceptableResult {
        /// The combinator whose callback misbehaved.
        operation: &'static str,
    },
    /// The requested transform would violate a structural invariant.
    #[error("{operation}: invalid operation ({reason})")]
    InvalidOperation {
        /// The operation that was refused.
        operation: &'static str,
        /// The invariant that would have been violated.
        reason: &'static str,
    },
    /// A value was demanded from an absent optional.
    #[error("{message}")]
    ValueAbsent {
        /// The caller-supplied or default message.
        message: String,
    },
}

impl AdtError {
    /// Creates an [`AdtError::InvalidArgument`].
    #[must_use]
    pub fn invalid_argument(operation: &'static str, argument: &'static str) -> Self {
        tracing::debug!(operation, argument, "rejected invalid argument");
        Self::InvalidArgument {
            operation,
            argument,
        }
    }

    /// Creates an [`AdtError::UnacceptableResult`].
    #[must_use]
    pub fn unacceptable_result(operation: &'static str) -> Self {
        tracing::debug!(operation, "callback produced no value");
        Self::UnacceptableResult { operation }
    }

    /// Creates an [`AdtError::InvalidOperation`].
    #[must_use]
    pub fn invalid_operation(operation: &'static str, reason: &'static str) -> Self {
        tracing::debug!(operation, reason, "refused invalid operation");
        Self::InvalidOperation { operation, reason }
    }

    /// Creates an [`AdtError::ValueAbsent`] with the given message.
    #[must_use]
    pub fn value_absent(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(%message, "value demanded from absent optional");
        Self::ValueAbsent { message }
    }

    /// Returns the name of the operation that reported this error, if any.
    #[must_use]
    pub const fn operation(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { operation, .. }
            | Self::UnacceptableResult { operation }
            | Self::InvalidOperation { operation, .. } => Some(*operation),
            Self::ValueAbsent { .. } => None,
        }
    }
}

/// The error returned when a success value is demanded from a failure.
///
/// Carries every error the failure had accumulated, in order.
///
/// # Examples
///
/// ```rust
/// use sumtypes::control::Outcome;
///
/// let outcome: Outcome<i32, &str> = Outcome::failure("first").combine_error("second");
/// let error = outcome.get_or_throw().unwrap_err();
/// assert_eq!(error.errors().len(), 2);
/// assert_eq!(error.to_string(), "outcome is a failure: first; second; ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureError<E> {
    errors: PersistentList<E>,
}

impl<E> FailureError<E> {
    pub(crate) const fn new(errors: PersistentList<E>) -> Self {
        Self { errors }
    }

    /// Returns the accumulated errors.
    #[must_use]
    pub const fn errors(&self) -> &PersistentList<E> {
        &self.errors
    }

    /// Consumes the error, returning the accumulated errors.
    #[must_use]
    pub fn into_errors(self) -> PersistentList<E> {
        self.errors
    }
}

impl<E: fmt::Display> fmt::Display for FailureError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "outcome is a failure: {}", self.errors)
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for FailureError<E> {}
