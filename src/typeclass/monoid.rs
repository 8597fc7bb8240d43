//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ```text
//! T::empty().combine(a) == a   // left identity
//! a.combine(T::empty()) == a   // right identity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sumtypes::persistent::PersistentList;
//! use sumtypes::typeclass::{Monoid, Semigroup};
//!
//! let list = PersistentList::construct([1, 2]);
//! assert_eq!(<PersistentList<i32> as Monoid>::empty().combine(list.clone()), list);
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;
}
