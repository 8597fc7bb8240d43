//! The `plist!` macro for building a [`PersistentList`](crate::persistent::PersistentList) literal.

/// Builds a [`PersistentList`](crate::persistent::PersistentList) from its elements.
///
/// # Syntax
///
/// - `plist![]` - The empty list
/// - `plist![a, b, c]` - A list holding `a`, `b` and `c` in that order
/// - `plist![value; count]` - A list holding `count` clones of `value`
///
/// # Examples
///
/// ```
/// use sumtypes::persistent::PersistentList;
/// use sumtypes::plist;
///
/// let empty: PersistentList<i32> = plist![];
/// assert!(empty.is_empty());
///
/// let list = plist![1, 2, 3];
/// assert_eq!(list.head(), Some(&1));
/// assert_eq!(list.len(), 3);
///
/// let zeros = plist![0; 4];
/// assert_eq!(zeros, plist![0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! plist {
    () => {
        $crate::persistent::PersistentList::new()
    };

    ($value:expr; $count:expr) => {
        $crate::persistent::PersistentList::copy(::std::iter::repeat_n($value, $count))
    };

    ($($element:expr),+ $(,)?) => {
        $crate::persistent::PersistentList::construct([$($element),+])
    };
}
