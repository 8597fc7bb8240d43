//! # sumtypes
//!
//! Small algebraic data types with a uniform, exhaustive matching protocol.
//!
//! ## Overview
//!
//! - **Persistent List**: [`PersistentList`](persistent::PersistentList), an
//!   immutable singly-linked list with structural sharing
//! - **Optional**: [`Optional`](control::Optional), a value that may be absent
//! - **Outcome**: [`Outcome`](control::Outcome), a success or a non-empty list
//!   of accumulated errors
//! - **Matcher**: [`Matcher`], the two-stage case analysis every type above
//!   supports
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Semigroup` and `Monoid` instances
//! - `control`: `Optional`, `Outcome` and `ErrorList`
//! - `arc`: share list cells through `Arc` instead of `Rc`, making lists
//!   `Send + Sync`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use sumtypes::prelude::*;
//!
//! let total = plist![1, 2, 3].fold(0, |sum, x| sum + x);
//! let described = Optional::present(total)
//!     .match_absent(|| String::from("nothing"))
//!     .match_present(|value| format!("total {value}"));
//! assert_eq!(described, "total 6");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use sumtypes::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{AdtError, FailureError};
    pub use crate::matcher::Matcher;
    pub use crate::persistent::PersistentList;
    pub use crate::plist;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

pub mod error;
pub mod matcher;
pub mod persistent;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

pub use error::{AdtError, DEFAULT_ABSENT_MESSAGE, FailureError};
pub use matcher::Matcher;
