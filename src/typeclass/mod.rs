//! Algebraic type classes shared by the data types of this crate.
//!
//! - [`Semigroup`]: associative combination (`combine`)
//! - [`Monoid`]: a semigroup with an identity element (`empty`)
//!
//! `PersistentList` is a monoid under concatenation with `Empty` as the
//! identity. `ErrorList` (the error payload of `Outcome::Failure`) is only
//! a semigroup, because it can never be empty. `Optional<T>` is a monoid
//! whenever `T` is a semigroup, with `Absent` as the identity.

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
