//! A persistent list of errors that is never empty.
//!
//! [`ErrorList`] is the payload of [`Outcome::Failure`](super::Outcome::Failure).
//! It holds the first cell of a [`PersistentList`] rather than the list
//! itself, so a failure can never carry zero errors.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{Chain, Once};

use crate::error::AdtError;
use crate::persistent::{ListCell, PersistentList, PersistentListIterator, ReferenceCounter};

#[cfg(feature = "typeclass")]
use crate::typeclass::Semigroup;

/// Iterator over the errors of an [`ErrorList`], earliest first.
pub type ErrorListIterator<'a, E> = Chain<Once<&'a E>, PersistentListIterator<'a, E>>;

/// A non-empty, order-preserving list of accumulated errors.
///
/// # Examples
///
/// ```rust
/// use sumtypes::control::ErrorList;
///
/// let errors = ErrorList::single("missing name").append_error("missing age");
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first(), &"missing name");
/// ```
pub struct ErrorList<E> {
    cell: ReferenceCounter<ListCell<E>>,
}

#[allow(clippy::len_without_is_empty)]
impl<E> ErrorList<E> {
    /// Creates a list holding exactly one error.
    #[inline]
    #[must_use]
    pub fn single(error: E) -> Self {
        Self::prepend(error, PersistentList::new())
    }

    fn prepend(error: E, rest: PersistentList<E>) -> Self {
        Self {
            cell: ReferenceCounter::new(ListCell::new(error, rest)),
        }
    }

    /// Wraps `errors` without reporting anything; `None` if it is empty.
    pub(crate) fn from_list(errors: &PersistentList<E>) -> Option<Self> {
        match errors {
            PersistentList::Empty => None,
            PersistentList::Cell(cell) => Some(Self {
                cell: ReferenceCounter::clone(cell),
            }),
        }
    }

    /// Wraps `errors`, refusing an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AdtError::InvalidArgument`] if `errors` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::control::ErrorList;
    /// use sumtypes::persistent::PersistentList;
    ///
    /// assert!(ErrorList::try_from_list(PersistentList::<&str>::new()).is_err());
    /// assert!(ErrorList::try_from_list(PersistentList::singleton("e")).is_ok());
    /// ```
    pub fn try_from_list(errors: PersistentList<E>) -> Result<Self, AdtError> {
        Self::from_list(&errors)
            .ok_or_else(|| AdtError::invalid_argument("ErrorList::try_from_list", "errors"))
    }

    /// Returns the errors as a plain list sharing this list's cells.
    #[inline]
    #[must_use]
    pub fn to_list(&self) -> PersistentList<E> {
        PersistentList::Cell(ReferenceCounter::clone(&self.cell))
    }

    /// Consumes the wrapper, returning the errors as a plain list.
    #[inline]
    #[must_use]
    pub fn into_list(self) -> PersistentList<E> {
        PersistentList::Cell(self.cell)
    }

    /// Returns the number of errors; always at least one.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cell.length()
    }

    /// Returns the earliest recorded error.
    #[inline]
    #[must_use]
    pub fn first(&self) -> &E {
        self.cell.head()
    }

    /// Returns an iterator over the errors in the order they were recorded.
    pub fn iter(&self) -> ErrorListIterator<'_, E> {
        std::iter::once(self.cell.head()).chain(self.cell.tail().iter())
    }

    /// Applies `function` to every error, earliest first.
    ///
    /// Mapping element by element cannot empty the list, so this is the
    /// infallible counterpart of `Outcome::map_failure`.
    #[must_use]
    pub fn map<F2, F>(&self, mut function: F) -> ErrorList<F2>
    where
        F: FnMut(&E) -> F2,
    {
        let first = function(self.cell.head());
        ErrorList::prepend(first, self.cell.tail().map(function))
    }
}

impl<E: Clone> ErrorList<E> {
    /// Returns a new list with `error` recorded after the existing errors.
    #[must_use]
    pub fn append_error(&self, error: E) -> Self {
        self.append_list(&PersistentList::singleton(error))
    }

    /// Returns a new list with the errors of `other` after the errors of `self`.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        self.append_list(&other.to_list())
    }

    /// Returns a new list with `errors` after the existing errors.
    ///
    /// Appending an empty list leaves the errors unchanged.
    #[must_use]
    pub fn append_list(&self, errors: &PersistentList<E>) -> Self {
        if errors.is_empty() {
            return self.clone();
        }
        Self::prepend(self.cell.head().clone(), self.cell.tail().add(errors))
    }
}

impl<E> Clone for ErrorList<E> {
    fn clone(&self) -> Self {
        Self {
            cell: ReferenceCounter::clone(&self.cell),
        }
    }
}

impl<E: PartialEq> PartialEq for ErrorList<E> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<E: Eq> Eq for ErrorList<E> {}

/// Hashes exactly like the equivalent [`PersistentList`].
impl<E: Hash> Hash for ErrorList<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for error in self {
            error.hash(state);
        }
    }
}

impl<E> TryFrom<PersistentList<E>> for ErrorList<E> {
    type Error = AdtError;

    fn try_from(errors: PersistentList<E>) -> Result<Self, Self::Error> {
        Self::try_from_list(errors)
    }
}

impl<E> From<ErrorList<E>> for PersistentList<E> {
    fn from(errors: ErrorList<E>) -> Self {
        errors.into_list()
    }
}

impl<'a, E> IntoIterator for &'a ErrorList<E> {
    type Item = &'a E;
    type IntoIter = ErrorListIterator<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: fmt::Debug> fmt::Debug for ErrorList<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Renders every error followed by `"; "`, like [`PersistentList`].
impl<E: fmt::Display> fmt::Display for ErrorList<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}; {}", self.cell.head(), self.cell.tail())
    }
}

#[cfg(feature = "typeclass")]
impl<E: Clone> Semigroup for ErrorList<E> {
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }
}
