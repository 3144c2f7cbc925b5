//! Persistent (immutable) data structures.
//!
//! This module provides [`PersistentList`], a persistent singly-linked list
//! that uses structural sharing to minimize copying. Every derived list
//! reuses the unchanged part of its source instead of copying it.
//!
//! # Examples
//!
//! ```rust
//! use traversa::list;
//! use traversa::persistent::PersistentList;
//!
//! let list = list![3, 4];
//! let extended = list.prepend(2).prepend(1);
//! assert_eq!(extended, PersistentList::of([1, 2, 3, 4]));
//!
//! // The original list is untouched
//! assert_eq!(list.len(), 2);
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

pub use list::PersistentList;
pub use list::PersistentListIntoIterator;
pub use list::PersistentListIterator;

/// Builds a [`PersistentList`] from its elements, first element at the head.
///
/// `list![]` is the canonical empty list.
///
/// # Examples
///
/// ```rust
/// use traversa::list;
/// use traversa::persistent::PersistentList;
///
/// let nested = list![list![1, 2], list![3]];
/// assert_eq!(nested.len(), 2);
///
/// let empty: PersistentList<i32> = list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::persistent::PersistentList::empty()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::persistent::PersistentList::of([$($element),+])
    };
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentList<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentList<String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentList<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
