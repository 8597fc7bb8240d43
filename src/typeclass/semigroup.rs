//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sumtypes::plist;
//! use sumtypes::typeclass::Semigroup;
//!
//! // List concatenation
//! assert_eq!(plist![1, 2].combine(plist![3]), plist![1, 2, 3]);
//! ```

/// A type class for types with an associative binary operation.
///
/// Non-empty error lists are semigroups but not monoids: there is no
/// empty element to start from.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }
}
