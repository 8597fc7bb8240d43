//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`PersistentList`], a two-case sum type:
//!
//! - [`PersistentList::Empty`]: the list with no elements
//! - [`PersistentList::Cell`]: a head element followed by a complete tail list
//!
//! Cells are never mutated after construction, so lists freely share
//! suffixes. Every operation returns a new list and leaves its receiver
//! untouched.
//!
//! # Overview
//!
//! - O(1) prepend (`cons`), head, tail and length
//! - O(n) concatenation (`add`) in the length of the left operand, with the
//!   right operand reused by reference
//! - O(n) `map`, `flat_map`, `fold` and `fold_back`
//!
//! # Examples
//!
//! ```rust
//! use sumtypes::persistent::PersistentList;
//!
//! let list = PersistentList::construct([1, 2, 3]);
//! let incremented = list.map(|element| element + 1);
//! assert_eq!(incremented, PersistentList::construct([2, 3, 4]));
//!
//! let sum = list.fold(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 6);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::ReferenceCounter;
use crate::error::AdtError;
use crate::matcher::Matcher;

#[cfg(feature = "typeclass")]
use crate::typeclass::{Monoid, Semigroup};

/// A single cell of a [`PersistentList`].
///
/// Holds the head element, the (shared) tail list and the cached length
/// of the list starting at this cell.
pub struct ListCell<T> {
    head: T,
    tail: PersistentList<T>,
    length: usize,
}

impl<T> ListCell<T> {
    pub(crate) fn new(head: T, tail: PersistentList<T>) -> Self {
        let length = tail.len() + 1;
        Self { head, tail, length }
    }

    /// Returns the element stored in this cell.
    #[inline]
    #[must_use]
    pub const fn head(&self) -> &T {
        &self.head
    }

    /// Returns the list that follows this cell.
    #[inline]
    #[must_use]
    pub const fn tail(&self) -> &PersistentList<T> {
        &self.tail
    }

    /// Returns the length of the list starting at this cell; never zero.
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }
}

/// A persistent (immutable) singly-linked list.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `new`      | O(1)       |
/// | `cons`     | O(1)       |
/// | `head`     | O(1)       |
/// | `tail`     | O(1)       |
/// | `len`      | O(1)       |
/// | `get`      | O(n)       |
/// | `add`      | O(n)       |
/// | `reverse`  | O(n)       |
///
/// # Examples
///
/// ```rust
/// use sumtypes::persistent::PersistentList;
///
/// let list = PersistentList::singleton(42);
/// match &list {
///     PersistentList::Cell(cell) => assert_eq!(cell.head(), &42),
///     PersistentList::Empty => unreachable!(),
/// }
/// ```
pub enum PersistentList<T> {
    /// The list with no elements.
    Empty,
    /// A head element followed by a tail list.
    Cell(ReferenceCounter<ListCell<T>>),
}

impl<T> PersistentList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = PersistentList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::Empty
    }

    /// Returns the empty list. Alias of [`PersistentList::new`].
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Creates a list containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::persistent::PersistentList;
    ///
    /// let list = PersistentList::singleton(42);
    /// assert_eq!(list.head(), Some(&42));
    /// assert_eq!(list.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::Empty.cons(element)
    }

    /// Creates a list holding the given items in order.
    ///
    /// The [`plist!`](crate::plist) macro expands to this function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::persistent::PersistentList;
    ///
    /// let list = PersistentList::construct(["a", "b"]);
    /// assert_eq!(list.get(1), Some(&"b"));
    /// ```
    #[must_use]
    pub fn construct<const N: usize>(items: [T; N]) -> Self {
        Self::build_from_vec(Vec::from(items))
    }

    /// Creates a list holding every item of `items` in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::persistent::PersistentList;
    ///
    /// let list = PersistentList::copy(vec![1, 2, 3]);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[must_use]
    pub fn copy<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::build_from_vec(items.into_iter().collect())
    }

    /// Builds a list from a Vec, consuming elements from the end with
    /// `Vec::pop()` so no reverse pass is needed.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let mut result = Self::Empty;
        while let Some(element) = elements.pop() {
            result = result.cons(element);
        }
        result
    }

    /// Prepends an element to the front of the list.
    ///
    /// The new list shares every cell of `self`.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::persistent::PersistentList;
    ///
    /// let list = PersistentList::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self::Cell(ReferenceCounter::new(ListCell::new(element, self.clone())))
    }

    /// Returns a reference to the first element, or `None` for `Empty`.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Cell(cell) => Some(&cell.head),
        }
    }

    /// Returns the list without its first element.
    ///
    /// The tail of `Empty` is `Empty`. The result shares structure with `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::persistent::PersistentList;
    ///
    /// let list = PersistentList::construct([1, 2, 3]);
    /// assert_eq!(list.tail(), PersistentList::construct([2, 3]));
    /// ```
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Cell(cell) => cell.tail.clone(),
        }
    }

    /// Decomposes the list into its head and tail.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        match self {
            Self::Empty => None,
            Self::Cell(cell) => Some((&cell.head, cell.tail.clone())),
        }
    }

    /// Returns a reference to the element at the given index.
    ///
    /// # Complexity
    ///
    /// O(n) where n = index
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::persistent::PersistentList;
    ///
    /// let list = PersistentList::construct([1, 2, 3]);
    /// assert_eq!(list.get(2), Some(&3));
    /// assert_eq!(list.get(10), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached in every cell
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Cell(cell) => cell.length,
        }
    }

    /// Returns `true` if the list is `Empty`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns a lazy iterator over references to the elements, front to back.
    ///
    /// Each call starts a fresh traversal; iterating never modifies the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::persistent::PersistentList;
    ///
    /// let list = PersistentList::construct([1, 2, 3]);
    /// let collected: Vec<&i32> = list.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> PersistentListIterator<'_, T> {
        PersistentListIterator { current: self }
    }

    /// Applies `function` to every element in order and collects the results.
    ///
    /// The resulting list has the same length as `self`, and its i-th
    /// element is `function(self[i])`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::persistent::PersistentList;
    ///
    /// let list = PersistentList::construct([1, 2, 3]);
    /// assert_eq!(list.map(|x| x + 1), PersistentList::construct([2, 3, 4]));
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> PersistentList<B>
    where
        F: FnMut(&T) -> B,
    {
        PersistentList::build_from_vec(self.iter().map(function).collect())
    }

    /// Like [`map`](Self::map), but `function` may report that it has no
    /// value for an element.
    ///
    /// Elements are never silently dropped: the first `None` fails the
    /// whole operation.
    ///
    /// # Errors
    ///
    /// Returns [`AdtError::UnacceptableResult`] if `function` returns `None`
    /// for any element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::AdtError;
    /// use sumtypes::persistent::PersistentList;
    ///
    /// let list = PersistentList::construct([1, 2, 3]);
    /// let halves = list.try_map(|x| (x % 2 == 1).then_some(x / 2));
    /// assert!(matches!(halves, Err(AdtError::UnacceptableResult { .. })));
    /// ```
    pub fn try_map<B, F>(&self, function: F) -> Result<PersistentList<B>, AdtError>
    where
        F: FnMut(&T) -> Option<B>,
    {
        self.iter()
            .map(function)
            .collect::<Option<Vec<B>>>()
            .map(PersistentList::build_from_vec)
            .ok_or_else(|| AdtError::unacceptable_result("PersistentList::try_map"))
    }

    /// Applies a side-effecting `action` to each element, front to back.
    ///
    /// Returns `self` for chaining.
    pub fn for_each<F>(&self, action: F) -> &Self
    where
        F: FnMut(&T),
    {
        self.iter().for_each(action);
        self
    }

    /// Left fold: combines the elements head to tail, starting from `seed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::persistent::PersistentList;
    ///
    /// let list = PersistentList::construct([1, 2, 3]);
    /// let digits = list.fold(String::new(), |accumulator, x| format!("{accumulator}{x}"));
    /// assert_eq!(digits, "123");
    /// ```
    pub fn fold<A, F>(&self, seed: A, function: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iter().fold(seed, function)
    }

    /// Right fold: the rightmost element is combined with `seed` first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::persistent::PersistentList;
    ///
    /// let list = PersistentList::construct([1, 2, 3]);
    /// let digits = list.fold_back(String::new(), |x, accumulator| format!("{accumulator}{x}"));
    /// assert_eq!(digits, "321");
    /// ```
    pub fn fold_back<A, F>(&self, seed: A, mut function: F) -> A
    where
        F: FnMut(&T, A) -> A,
    {
        let elements: Vec<&T> = self.iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(seed, |accumulator, element| function(element, accumulator))
    }

    /// Starts a two-stage match by handling the `Cell` case.
    ///
    /// `handler` runs now if the list is a cell; otherwise the returned
    /// matcher waits for [`Matcher::match_empty`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::persistent::PersistentList;
    ///
    /// let list = PersistentList::construct([7, 8]);
    /// let described = list
    ///     .match_cell(|head, tail| format!("{head} and {} more", tail.len()))
    ///     .match_empty(|| String::from("nothing"));
    /// assert_eq!(described, "7 and 1 more");
    /// ```
    pub fn match_cell<R, F>(&self, handler: F) -> Matcher<EmptyCase, R>
    where
        F: FnOnce(&T, &Self) -> R,
    {
        match self {
            Self::Empty => Matcher::Pending(EmptyCase),
            Self::Cell(cell) => Matcher::Resolved(handler(&cell.head, &cell.tail)),
        }
    }

    /// Starts a two-stage match by handling the `Empty` case.
    pub fn match_empty<R, F>(&self, handler: F) -> Matcher<CellCase<'_, T>, R>
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Empty => Matcher::Resolved(handler()),
            Self::Cell(cell) => Matcher::Pending(CellCase(cell)),
        }
    }
}

impl<T: Clone> PersistentList<T> {
    /// Concatenates `other` after `self`.
    ///
    /// Returns `other` itself (sharing all of its cells) when `self` is
    /// empty. Otherwise the cells of `self` are rebuilt in front of
    /// `other`, which becomes the shared suffix of the result.
    ///
    /// `add` is associative and `Empty` is its identity.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::persistent::PersistentList;
    ///
    /// let left = PersistentList::construct([1, 2]);
    /// let right = PersistentList::construct([3, 4]);
    /// assert_eq!(left.add(&right), PersistentList::construct([1, 2, 3, 4]));
    /// ```
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut elements: Vec<T> = self.iter().cloned().collect();
        let mut result = other.clone();
        while let Some(element) = elements.pop() {
            result = result.cons(element);
        }
        result
    }

    /// Maps every element to a sublist and concatenates the sublists in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::persistent::PersistentList;
    ///
    /// let list = PersistentList::construct([1, 2]);
    /// let doubled = list.flat_map(|x| PersistentList::construct([*x, *x * 10]));
    /// assert_eq!(doubled, PersistentList::construct([1, 10, 2, 20]));
    /// ```
    #[must_use]
    pub fn flat_map<B, F>(&self, function: F) -> PersistentList<B>
    where
        B: Clone,
        F: FnMut(&T) -> PersistentList<B>,
    {
        let sublists: Vec<PersistentList<B>> = self.iter().map(function).collect();
        concatenate(sublists)
    }

    /// Alias of [`flat_map`](Self::flat_map).
    #[inline]
    #[must_use]
    pub fn bind<B, F>(&self, function: F) -> PersistentList<B>
    where
        B: Clone,
        F: FnMut(&T) -> PersistentList<B>,
    {
        self.flat_map(function)
    }

    /// Like [`flat_map`](Self::flat_map), but `function` may report that it
    /// has no sublist for an element.
    ///
    /// An empty sublist is a legitimate result; only `None` is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AdtError::UnacceptableResult`] if `function` returns `None`
    /// for any element.
    pub fn try_flat_map<B, F>(&self, function: F) -> Result<PersistentList<B>, AdtError>
    where
        B: Clone,
        F: FnMut(&T) -> Option<PersistentList<B>>,
    {
        self.iter()
            .map(function)
            .collect::<Option<Vec<PersistentList<B>>>>()
            .map(concatenate)
            .ok_or_else(|| AdtError::unacceptable_result("PersistentList::try_flat_map"))
    }

    /// Returns a new list with the elements in reverse order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::persistent::PersistentList;
    ///
    /// let list = PersistentList::construct([1, 2, 3]);
    /// assert_eq!(list.reverse(), PersistentList::construct([3, 2, 1]));
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.fold(Self::Empty, |accumulator, element| {
            accumulator.cons(element.clone())
        })
    }

    /// Creates a list from a slice, keeping the slice order.
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        let mut result = Self::Empty;
        for element in slice.iter().rev() {
            result = result.cons(element.clone());
        }
        result
    }
}

/// Concatenates sublists from the last one backwards, so each cell of the
/// result is built exactly once and the last sublist is shared as-is.
fn concatenate<B: Clone>(sublists: Vec<PersistentList<B>>) -> PersistentList<B> {
    sublists
        .into_iter()
        .rev()
        .fold(PersistentList::Empty, |accumulator, sublist| {
            sublist.add(&accumulator)
        })
}

// =============================================================================
// Matcher Payloads
// =============================================================================

/// The pending payload of a list match whose `Cell` case is still unhandled.
pub struct CellCase<'a, T>(&'a ListCell<T>);

/// The pending payload of a list match whose `Empty` case is still unhandled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCase;

impl<'a, T, R> Matcher<CellCase<'a, T>, R> {
    /// Completes the match with the `Cell` handler.
    ///
    /// Returns the remembered result if the `Empty` handler already ran.
    pub fn match_cell<F>(self, handler: F) -> R
    where
        F: FnOnce(&'a T, &'a PersistentList<T>) -> R,
    {
        match self {
            Self::Resolved(output) => output,
            Self::Pending(CellCase(cell)) => handler(&cell.head, &cell.tail),
        }
    }
}

impl<R> Matcher<EmptyCase, R> {
    /// Completes the match with the `Empty` handler.
    ///
    /// Returns the remembered result if the `Cell` handler already ran.
    pub fn match_empty<F>(self, handler: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Resolved(output) => output,
            Self::Pending(EmptyCase) => handler(),
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`PersistentList`].
pub struct PersistentListIterator<'a, T> {
    current: &'a PersistentList<T>,
}

impl<'a, T> Iterator for PersistentListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current {
            PersistentList::Empty => None,
            PersistentList::Cell(cell) => {
                self.current = &cell.tail;
                Some(&cell.head)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.current.len();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for PersistentListIterator<'_, T> {}

/// An owning iterator over elements of a [`PersistentList`].
pub struct PersistentListIntoIterator<T> {
    list: PersistentList<T>,
}

impl<T: Clone> Iterator for PersistentListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (element, tail) = match self.list.uncons() {
            Some((head, tail)) => (head.clone(), tail),
            None => return None,
        };
        self.list = tail;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T: Clone> ExactSizeIterator for PersistentListIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for PersistentList<T> {
    #[inline]
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Cell(cell) => Self::Cell(ReferenceCounter::clone(cell)),
        }
    }
}

/// Unlinks uniquely owned cells one at a time, so dropping a long list
/// never recurses once per cell.
impl<T> Drop for PersistentList<T> {
    fn drop(&mut self) {
        let Self::Cell(reference) = self else {
            return;
        };
        let Some(cell) = ReferenceCounter::get_mut(reference) else {
            return;
        };
        // Each detached tail is dropped with an empty tail of its own.
        let mut rest = std::mem::take(&mut cell.tail);
        while let Self::Cell(next_reference) = &mut rest {
            let Some(next_cell) = ReferenceCounter::get_mut(next_reference) else {
                break;
            };
            let next = std::mem::take(&mut next_cell.tail);
            rest = next;
        }
    }
}

impl<T> Default for PersistentList<T> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<T> for PersistentList<T> {
    #[inline]
    fn from(element: T) -> Self {
        Self::singleton(element)
    }
}

impl<T> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::copy(iter)
    }
}

impl<T: Clone> IntoIterator for PersistentList<T> {
    type Item = T;
    type IntoIter = PersistentListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        PersistentListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = PersistentListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

/// Hashes the length first, then each element in order, so `Empty`
/// always hashes to the same value and equal lists hash equally.
impl<T: Hash> Hash for PersistentList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Renders every element followed by `"; "`, e.g. `"1; 2; 3; "`.
impl<T: fmt::Display> fmt::Display for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in self {
            write!(formatter, "{element}; ")?;
        }
        Ok(())
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
impl<T: Clone> Semigroup for PersistentList<T> {
    fn combine(self, other: Self) -> Self {
        self.add(&other)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.add(other)
    }
}

#[cfg(feature = "typeclass")]
impl<T: Clone> Monoid for PersistentList<T> {
    fn empty() -> Self {
        Self::Empty
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_display_empty_list() {
        let list: PersistentList<i32> = PersistentList::new();
        assert_eq!(format!("{list}"), "");
    }

    #[rstest]
    fn test_display_multiple_elements_list() {
        let list = PersistentList::construct([1, 2, 3]);
        assert_eq!(format!("{list}"), "1; 2; 3; ");
    }

    #[rstest]
    fn test_debug() {
        let list = PersistentList::construct([1, 2, 3]);
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }

    #[rstest]
    fn test_new_creates_empty() {
        let list: PersistentList<i32> = PersistentList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.head(), None);
    }

    #[rstest]
    fn test_cons_caches_length() {
        let list = PersistentList::new().cons(1).cons(2).cons(3);
        assert_eq!(list.head(), Some(&3));
        assert_eq!(list.len(), 3);
        assert_eq!(list.tail().len(), 2);
    }

    #[rstest]
    fn test_tail_of_empty_is_empty() {
        let list: PersistentList<i32> = PersistentList::new();
        assert!(list.tail().is_empty());
    }

    #[rstest]
    fn test_uncons() {
        let list = PersistentList::construct([1, 2]);
        let (head, tail) = list.uncons().unwrap();
        assert_eq!(*head, 1);
        assert_eq!(tail, PersistentList::singleton(2));
    }

    #[rstest]
    fn test_from_element() {
        let list = PersistentList::from("only");
        assert_eq!(list, PersistentList::singleton("only"));
    }

    #[rstest]
    fn test_add_shares_right_operand() {
        let left = PersistentList::construct([1, 2]);
        let right = PersistentList::construct([3, 4]);
        let combined = left.add(&right);

        let PersistentList::Cell(right_cell) = &right else {
            panic!("right operand should be a cell");
        };
        let shared_suffix = combined.tail().tail();
        let PersistentList::Cell(suffix_cell) = &shared_suffix else {
            panic!("suffix should be a cell");
        };
        assert!(ReferenceCounter::ptr_eq(right_cell, suffix_cell));
    }

    #[rstest]
    fn test_add_empty_left_returns_right() {
        let right = PersistentList::construct([3, 4]);
        let combined = PersistentList::new().add(&right);
        assert_eq!(combined, right);
    }

    #[rstest]
    fn test_map_preserves_order() {
        let list = PersistentList::construct([1, 2, 3]);
        assert_eq!(list.map(|x| x + 1), PersistentList::construct([2, 3, 4]));
    }

    #[rstest]
    fn test_try_map_rejects_missing_value() {
        let list = PersistentList::construct([1, 2, 3]);
        let result = list.try_map(|x| if *x == 2 { None } else { Some(*x) });
        assert_eq!(
            result,
            Err(AdtError::UnacceptableResult {
                operation: "PersistentList::try_map"
            })
        );
    }

    #[rstest]
    fn test_try_map_stops_at_first_missing_value() {
        let calls = Cell::new(0);
        let list = PersistentList::construct([1, 2, 3]);
        let _ = list.try_map(|x| {
            calls.set(calls.get() + 1);
            (*x != 1).then_some(*x)
        });
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_flat_map_concatenates_in_order() {
        let list = PersistentList::construct([1, 2, 3]);
        let result = list.flat_map(|x| PersistentList::construct([*x; 2]));
        assert_eq!(result, PersistentList::construct([1, 1, 2, 2, 3, 3]));
    }

    #[rstest]
    fn test_try_flat_map_accepts_empty_sublists() {
        let list = PersistentList::construct([1, 2, 3]);
        let result = list.try_flat_map(|x| {
            Some(if x % 2 == 0 {
                PersistentList::new()
            } else {
                PersistentList::singleton(*x)
            })
        });
        assert_eq!(result, Ok(PersistentList::construct([1, 3])));
    }

    #[rstest]
    fn test_try_flat_map_rejects_missing_sublist() {
        let list = PersistentList::construct([1, 2]);
        let result = list.try_flat_map(|_| None::<PersistentList<i32>>);
        assert!(matches!(result, Err(AdtError::UnacceptableResult { .. })));
    }

    #[rstest]
    fn test_for_each_visits_in_order_and_returns_self() {
        let list = PersistentList::construct([1, 2, 3]);
        let mut visited = Vec::new();
        let returned = list.for_each(|x| visited.push(*x));
        assert_eq!(visited, vec![1, 2, 3]);
        assert_eq!(returned, &list);
    }

    #[rstest]
    fn test_fold_and_fold_back_direction() {
        let list = PersistentList::construct([1, 2, 3]);
        let left = list.fold(Vec::new(), |mut accumulator, x| {
            accumulator.push(*x);
            accumulator
        });
        let right = list.fold_back(Vec::new(), |x, mut accumulator| {
            accumulator.push(*x);
            accumulator
        });
        assert_eq!(left, vec![1, 2, 3]);
        assert_eq!(right, vec![3, 2, 1]);
    }

    #[rstest]
    fn test_fold_accepts_absent_seed() {
        let list = PersistentList::construct([4, 9, 2]);
        let maximum = list.fold(None, |accumulator: Option<i32>, x| {
            Some(accumulator.map_or(*x, |current| current.max(*x)))
        });
        assert_eq!(maximum, Some(9));
    }

    #[rstest]
    fn test_iter_is_restartable() {
        let list = PersistentList::construct([1, 2, 3]);
        let first: Vec<&i32> = list.iter().collect();
        let second: Vec<&i32> = list.iter().collect();
        assert_eq!(first, second);
        assert_eq!(list.iter().len(), 3);
    }

    #[rstest]
    fn test_into_iter() {
        let list = PersistentList::construct([1, 2, 3]);
        let collected: Vec<i32> = list.into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_eq_is_order_sensitive() {
        assert_eq!(
            PersistentList::construct([1, 2, 3]),
            PersistentList::construct([1, 2, 3])
        );
        assert_ne!(
            PersistentList::construct([1, 2, 3]),
            PersistentList::construct([3, 2, 1])
        );
        assert_ne!(
            PersistentList::construct([1, 2]),
            PersistentList::construct([1, 2, 3])
        );
    }

    #[rstest]
    fn test_match_cell_then_empty_on_cell() {
        let list = PersistentList::construct([5, 6]);
        let result = list
            .match_cell(|head, tail| head + tail.len())
            .match_empty(|| 0);
        assert_eq!(result, 6);
    }

    #[rstest]
    fn test_match_empty_then_cell_on_empty() {
        let list: PersistentList<usize> = PersistentList::new();
        let result = list
            .match_empty(|| 0)
            .match_cell(|head, tail| head + tail.len());
        assert_eq!(result, 0);
    }

    #[rstest]
    fn test_drop_long_list_does_not_overflow() {
        let list: PersistentList<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    #[rstest]
    fn test_drop_keeps_shared_suffix_alive() {
        let suffix = PersistentList::construct([2, 3]);
        let list = suffix.cons(1);
        drop(list);
        assert_eq!(suffix, PersistentList::construct([2, 3]));
    }

    #[cfg(feature = "typeclass")]
    #[rstest]
    fn test_semigroup_combine() {
        let left = PersistentList::construct([1, 2]);
        let right = PersistentList::construct([3]);
        assert_eq!(left.combine(right), PersistentList::construct([1, 2, 3]));
    }

    #[cfg(feature = "typeclass")]
    #[rstest]
    fn test_monoid_empty() {
        let empty: PersistentList<i32> = <PersistentList<i32> as Monoid>::empty();
        assert!(empty.is_empty());
    }
}
