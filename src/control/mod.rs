//! Sum types for optional values and accumulating failures.
//!
//! - [`Optional`]: a value that may be absent
//! - [`Outcome`]: a success, or a failure carrying one or more errors
//! - [`ErrorList`]: the non-empty error payload of [`Outcome::Failure`]
//!
//! Every type here supports the two-stage [`Matcher`](crate::Matcher)
//! protocol: handle one case first, then the other, in either order.
//!
//! # Examples
//!
//! ```rust
//! use sumtypes::control::{Optional, Outcome};
//!
//! let port = Optional::of("8080".parse::<u16>().ok());
//! let outcome: Outcome<u16, &str> = port.to_outcome("port is missing");
//! assert_eq!(outcome, Outcome::success(8080));
//! ```

mod error_list;
mod optional;
mod outcome;

pub use error_list::{ErrorList, ErrorListIterator};
pub use optional::{AbsentCase, Optional, PresentCase};
pub use outcome::{FailureCase, Outcome, SuccessCase};

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync);
