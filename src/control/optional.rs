//! Optional type - a value that may be absent.
//!
//! [`Optional<T>`] is either `Present(value)` or `Absent`. It converts to and
//! from `std::option::Option`, and to and from [`Outcome`]:
//!
//! - `Present(v).to_outcome(e)` is `Success(v)`
//! - `Absent.to_outcome(e)` is `Failure([e])`
//!
//! # Examples
//!
//! ```rust
//! use sumtypes::control::Optional;
//!
//! let name = Optional::from(Some("ada"));
//! let greeting = name.map(|n| format!("hello, {n}"));
//! assert_eq!(greeting.get_or_else(String::from("nobody")), "hello, ada");
//!
//! let missing: Optional<&str> = Optional::from(None);
//! assert!(missing.is_absent());
//! ```

use std::any::type_name;
use std::fmt;

use super::Outcome;
use crate::error::{AdtError, DEFAULT_ABSENT_MESSAGE};
use crate::matcher::Matcher;

#[cfg(feature = "typeclass")]
use crate::typeclass::{Monoid, Semigroup};

/// A value that is either present or absent.
///
/// # Examples
///
/// ```rust
/// use sumtypes::control::Optional;
///
/// let present = Optional::present(5);
/// assert_eq!(present.map(|x| x * 2), Optional::present(10));
///
/// let absent: Optional<i32> = Optional::absent();
/// assert_eq!(absent.map(|x| x * 2), Optional::absent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// No value.
    Absent,
    /// A value.
    Present(T),
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps `value`.
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns `Absent`.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Converts a source that may hold no value: `None` becomes `Absent`.
    #[inline]
    pub fn of(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }

    /// Converts back into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Absent => None,
            Self::Present(value) => Some(value),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the value, if any.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Absent => Optional::Absent,
            Self::Present(value) => Optional::Present(value),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the value, or `alternative` if absent.
    #[inline]
    pub fn get_or_else(self, alternative: T) -> T {
        match self {
            Self::Absent => alternative,
            Self::Present(value) => value,
        }
    }

    /// Returns the value, or the result of `provider` if absent.
    ///
    /// `provider` only runs when the value is absent.
    #[inline]
    pub fn get_or_else_with<F>(self, provider: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Absent => provider(),
            Self::Present(value) => value,
        }
    }

    /// Returns the value, or the error built by `error_provider` if absent.
    ///
    /// # Errors
    ///
    /// Returns `Err(error_provider())` when the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::control::Optional;
    ///
    /// let absent: Optional<u8> = Optional::absent();
    /// assert_eq!(absent.get_or_throw(|| "no byte"), Err("no byte"));
    /// ```
    pub fn get_or_throw<X, F>(self, error_provider: F) -> Result<T, X>
    where
        F: FnOnce() -> X,
    {
        match self {
            Self::Absent => Err(error_provider()),
            Self::Present(value) => Ok(value),
        }
    }

    /// Like [`get_or_throw`](Self::get_or_throw), but the provider may fail
    /// to produce an error.
    ///
    /// The outer `Result` reports a provider that produced nothing; the
    /// inner one is the extraction itself.
    ///
    /// # Errors
    ///
    /// Returns [`AdtError::UnacceptableResult`] if the value is absent and
    /// `error_provider` returns `None`.
    pub fn try_get_or_throw<X, F>(self, error_provider: F) -> Result<Result<T, X>, AdtError>
    where
        F: FnOnce() -> Option<X>,
    {
        match self {
            Self::Present(value) => Ok(Ok(value)),
            Self::Absent => error_provider()
                .map(Err)
                .ok_or_else(|| AdtError::unacceptable_result("Optional::try_get_or_throw")),
        }
    }

    /// Returns the value or the generic value-absent error.
    ///
    /// # Errors
    ///
    /// Returns [`AdtError::ValueAbsent`] with the default message when absent.
    pub fn get_or_fail(self) -> Result<T, AdtError> {
        self.get_or_fail_with_message(DEFAULT_ABSENT_MESSAGE)
    }

    /// Returns the value or a value-absent error carrying `message`.
    ///
    /// # Errors
    ///
    /// Returns [`AdtError::ValueAbsent`] with `message` when absent.
    pub fn get_or_fail_with_message(self, message: impl Into<String>) -> Result<T, AdtError> {
        self.get_or_throw(|| AdtError::value_absent(message))
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the value, if present.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Absent => Optional::Absent,
            Self::Present(value) => Optional::Present(function(value)),
        }
    }

    /// Applies `function` to the value, if present, rejecting a callback
    /// that yields no value.
    ///
    /// # Errors
    ///
    /// Returns [`AdtError::UnacceptableResult`] if the value is present and
    /// `function` returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::AdtError;
    /// use sumtypes::control::Optional;
    ///
    /// let result = Optional::present("x").try_map(|s| s.parse::<i32>().ok());
    /// assert!(matches!(result, Err(AdtError::UnacceptableResult { .. })));
    /// ```
    pub fn try_map<B, F>(self, function: F) -> Result<Optional<B>, AdtError>
    where
        F: FnOnce(T) -> Option<B>,
    {
        match self {
            Self::Absent => Ok(Optional::Absent),
            Self::Present(value) => function(value)
                .map(Optional::Present)
                .ok_or_else(|| AdtError::unacceptable_result("Optional::try_map")),
        }
    }

    /// Chains a computation that itself returns an `Optional`.
    ///
    /// `Absent` returned by `function` is passed through as a legitimate result.
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(T) -> Optional<B>,
    {
        match self {
            Self::Absent => Optional::Absent,
            Self::Present(value) => function(value),
        }
    }

    /// Like [`bind`](Self::bind), but `function` may return no optional at all.
    ///
    /// # Errors
    ///
    /// Returns [`AdtError::UnacceptableResult`] if the value is present and
    /// `function` returns `None`. `Some(Optional::Absent)` is accepted.
    pub fn try_bind<B, F>(self, function: F) -> Result<Optional<B>, AdtError>
    where
        F: FnOnce(T) -> Option<Optional<B>>,
    {
        match self {
            Self::Absent => Ok(Optional::Absent),
            Self::Present(value) => {
                function(value).ok_or_else(|| AdtError::unacceptable_result("Optional::try_bind"))
            }
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    /// Runs `action` on the value if present, then returns `self`.
    pub fn do_if_present<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` if absent, then returns `self`.
    pub fn do_if_absent<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_absent() {
            action();
        }
        self
    }

    /// Case analysis in one step.
    pub fn fold<R, A, P>(self, on_absent: A, on_present: P) -> R
    where
        A: FnOnce() -> R,
        P: FnOnce(T) -> R,
    {
        match self {
            Self::Absent => on_absent(),
            Self::Present(value) => on_present(value),
        }
    }

    // =========================================================================
    // Conversion to Outcome
    // =========================================================================

    /// Converts to an [`Outcome`], using `error` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::control::{Optional, Outcome};
    ///
    /// assert_eq!(Optional::present(1).to_outcome("e"), Outcome::success(1));
    /// assert_eq!(Optional::<i32>::absent().to_outcome("e"), Outcome::failure("e"));
    /// ```
    pub fn to_outcome<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Absent => Outcome::failure(error),
            Self::Present(value) => Outcome::success(value),
        }
    }

    /// Converts to an [`Outcome`], building the error only when absent.
    pub fn to_outcome_with<E, F>(self, error_provider: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Absent => Outcome::failure(error_provider()),
            Self::Present(value) => Outcome::success(value),
        }
    }

    // =========================================================================
    // Applicative
    // =========================================================================

    /// Lifts a plain function into one over optionals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::control::Optional;
    ///
    /// let length = Optional::lift(|s: &str| s.len());
    /// assert_eq!(length(Optional::present("four")), Optional::present(4));
    /// assert_eq!(length(Optional::absent()), Optional::absent());
    /// ```
    pub fn lift<B, F>(function: F) -> impl Fn(Self) -> Optional<B>
    where
        F: Fn(T) -> B,
    {
        move |optional: Self| optional.map(&function)
    }

    /// Applies an optional function to this optional value.
    ///
    /// The result is `Absent` if either side is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::control::Optional;
    ///
    /// let add_one = Optional::present(|x: i32| x + 1);
    /// assert_eq!(Optional::present(1).apply(add_one), Optional::present(2));
    /// assert_eq!(Optional::absent().apply(add_one), Optional::absent());
    /// ```
    pub fn apply<B, F>(self, function: Optional<F>) -> Optional<B>
    where
        F: FnOnce(T) -> B,
    {
        match (function, self) {
            (Optional::Present(function), Self::Present(value)) => Optional::Present(function(value)),
            _ => Optional::Absent,
        }
    }

    // =========================================================================
    // Matching
    // =========================================================================

    /// Starts a two-stage match by handling the `Present` case.
    ///
    /// `handler` runs now if a value is present; otherwise the returned
    /// matcher waits for [`Matcher::match_absent`].
    pub fn match_present<R, F>(self, handler: F) -> Matcher<AbsentCase, R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Absent => Matcher::Pending(AbsentCase),
            Self::Present(value) => Matcher::Resolved(handler(value)),
        }
    }

    /// Starts a two-stage match by handling the `Absent` case.
    pub fn match_absent<R, F>(self, handler: F) -> Matcher<PresentCase<T>, R>
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Absent => Matcher::Resolved(handler()),
            Self::Present(value) => Matcher::Pending(PresentCase(value)),
        }
    }
}

// =============================================================================
// Matcher Payloads
// =============================================================================

/// The pending payload of an optional match whose `Present` case is unhandled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentCase<T>(T);

/// The pending payload of an optional match whose `Absent` case is unhandled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsentCase;

impl<T, R> Matcher<PresentCase<T>, R> {
    /// Completes the match with the `Present` handler.
    pub fn match_present<F>(self, handler: F) -> R
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Resolved(output) => output,
            Self::Pending(PresentCase(value)) => handler(value),
        }
    }
}

impl<R> Matcher<AbsentCase, R> {
    /// Completes the match with the `Absent` handler.
    pub fn match_absent<F>(self, handler: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Resolved(output) => output,
            Self::Pending(AbsentCase) => handler(),
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

/// Renders `Present[value]` or `Absent[type name]`.
impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(formatter, "Absent[{}]", type_name::<T>()),
            Self::Present(value) => write!(formatter, "Present[{value}]"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

/// Present values combine; `Absent` is the identity.
#[cfg(feature = "typeclass")]
impl<T: Semigroup> Semigroup for Optional<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(left), Self::Present(right)) => Self::Present(left.combine(right)),
            (Self::Present(value), Self::Absent) | (Self::Absent, Self::Present(value)) => {
                Self::Present(value)
            }
            (Self::Absent, Self::Absent) => Self::Absent,
        }
    }
}

#[cfg(feature = "typeclass")]
impl<T: Semigroup> Monoid for Optional<T> {
    fn empty() -> Self {
        Self::Absent
    }
}
