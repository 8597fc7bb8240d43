//! Two-stage, order-independent case analysis over two-case sum types.
//!
//! Native `match` (or the `fold` method each sum type provides) is the
//! preferred single-step form. The matcher protocol exists for call sites
//! that want to name each case with a method and supply the handlers in
//! whichever order reads best:
//!
//! ```rust
//! use sumtypes::control::Optional;
//!
//! let value = Optional::present(5);
//!
//! let first = value.match_present(|x| x * 2).match_absent(|| 0);
//! let second = value.match_absent(|| 0).match_present(|x| x * 2);
//! assert_eq!(first, second);
//! ```
//!
//! # Evaluation
//!
//! The first stage runs its handler immediately when the value is in the
//! named case and remembers the output ([`Matcher::Resolved`]). Otherwise
//! it carries the payload of the remaining case forward untouched
//! ([`Matcher::Pending`]). The second stage either returns the remembered
//! output or runs its own handler on the payload. Exactly one user handler
//! runs per match.
//!
//! Handlers are closure parameters, so a missing handler is a compile
//! error on every stage, including the one whose branch is not taken.
//!
//! Each sum type defines the payload types of its cases next to the type
//! itself and adds the second-stage method to the matching
//! `Matcher<Payload, _>`.

/// The intermediate state of a two-stage match expression.
///
/// `Pending` is the payload of the case that has not been handled yet;
/// `Output` is the type every handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a matcher does nothing until its remaining case is handled"]
pub enum Matcher<Pending, Output> {
    /// The value matched the first handler, which already ran.
    Resolved(Output),
    /// The value is in the remaining case; its payload is kept unevaluated.
    Pending(Pending),
}

impl<Pending, Output> Matcher<Pending, Output> {
    /// Returns `true` if the first handler already produced the output.
    #[inline]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Returns the remembered output, discarding a pending payload.
    #[inline]
    pub fn into_resolved(self) -> Option<Output> {
        match self {
            Self::Resolved(output) => Some(output),
            Self::Pending(_) => None,
        }
    }

    /// Completes the match with a catch-all handler for the remaining case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::control::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::failure("boom");
    /// let value = outcome.match_success(|x| x + 1).match_any(|| -1);
    /// assert_eq!(value, -1);
    /// ```
    pub fn match_any<F>(self, handler: F) -> Output
    where
        F: FnOnce() -> Output,
    {
        match self {
            Self::Resolved(output) => output,
            Self::Pending(_) => handler(),
        }
    }
}
