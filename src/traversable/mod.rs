//! The traversal algebra over persistent sequences.
//!
//! This module defines [`Sequence`], the minimal capability every sequence
//! shape provides (emptiness, head, tail and forward iteration), and the
//! engines built on top of it:
//!
//! - [`numeric`]: numeric reductions dispatched on the element's family
//! - [`windowing`]: fixed-size and sliding windows
//! - [`combinatorial`]: zipping and unzipping
//! - [`flatten`]: splicing nested sequences
//! - [`facade`]: the rest of the operation surface
//! - [`conversion`]: native collections and stream output
//!
//! Engines that only need traversal are written against [`Sequence`]; the
//! operations that build new lists are inherent methods of
//! [`PersistentList`].
//!
//! # Examples
//!
//! ```rust
//! use traversa::list;
//! use traversa::traversable::Sequence;
//!
//! fn describe<S: Sequence>(sequence: &S) -> String
//! where
//!     S::Element: std::fmt::Display,
//! {
//!     match sequence.head() {
//!         Ok(head) => format!("{} element(s), starting with {head}", sequence.length()),
//!         Err(_) => "nothing".to_string(),
//!     }
//! }
//!
//! assert_eq!(describe(&list![7, 8, 9]), "3 element(s), starting with 7");
//! ```

pub mod combinatorial;
pub mod conversion;
pub mod facade;
pub mod flatten;
pub mod numeric;
pub mod windowing;

pub use flatten::{Dynamic, Flattenable, dynamic};
pub use numeric::NumericFamily;

use crate::error::Result;
use crate::persistent::{PersistentList, PersistentListIterator};

/// A persistent, finite, ordered sequence.
///
/// A sequence is either empty, or a head element followed by a tail that is
/// itself a sequence. Implementations never mutate: `tail` returns a new
/// logical sequence that may share structure with the receiver.
pub trait Sequence: Sized {
    /// The type of the elements.
    type Element;

    /// Forward iterator over borrowed elements.
    type Iter<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a;

    /// Returns `true` if the sequence has no elements.
    fn is_empty(&self) -> bool;

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`TraversableError::EmptySequence`](crate::error::TraversableError::EmptySequence)
    /// if the sequence is empty.
    fn head(&self) -> Result<&Self::Element>;

    /// Returns every element but the first.
    ///
    /// # Errors
    ///
    /// Returns [`TraversableError::EmptySequence`](crate::error::TraversableError::EmptySequence)
    /// if the sequence is empty.
    fn tail(&self) -> Result<Self>;

    /// Iterates the elements from head to last.
    fn iter(&self) -> Self::Iter<'_>;

    /// Counts the elements.
    ///
    /// # Complexity
    ///
    /// O(n) unless the implementation caches it.
    fn length(&self) -> usize {
        self.iter().count()
    }
}

impl<T> Sequence for PersistentList<T> {
    type Element = T;

    type Iter<'a>
        = PersistentListIterator<'a, T>
    where
        Self: 'a;

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn head(&self) -> Result<&T> {
        Self::head(self)
    }

    #[inline]
    fn tail(&self) -> Result<Self> {
        Self::tail(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    fn length(&self) -> usize {
        self.len()
    }
}
