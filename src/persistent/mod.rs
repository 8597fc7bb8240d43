//! Persistent (immutable) data structures.
//!
//! This module provides [`PersistentList`], an immutable singly-linked
//! list whose cells are shared between every list built from them:
//!
//! ```text
//! list1:                1 -> 2 -> 3 -> Empty
//! list2 = list1.cons(0): 0 -> [1 -> 2 -> 3 -> Empty]  // shares [1, 2, 3]
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sumtypes::persistent::PersistentList;
//! use sumtypes::plist;
//!
//! let list = plist![1, 2, 3];
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4); // New list
//!
//! let joined = list.add(&plist![4, 5]);
//! assert_eq!(joined, plist![1, 2, 3, 4, 5]);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod list;
mod list_macro;

pub use list::CellCase;
pub use list::EmptyCase;
pub use list::ListCell;
pub use list::PersistentList;
pub use list::PersistentListIntoIterator;
pub use list::PersistentListIterator;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentList<i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentList<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
