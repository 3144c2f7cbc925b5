//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`PersistentList`], an immutable singly-linked list
//! that uses structural sharing for efficient operations.
//!
//! # Overview
//!
//! `PersistentList` is a cons-list with two shapes: the empty list, and a
//! non-empty list made of a head element and a shared tail. It provides:
//!
//! - O(1) prepend (`prepend`)
//! - O(1) head access
//! - O(1) tail access
//! - O(n) length, index access, append and reverse
//!
//! All operations return new lists without modifying the original,
//! and structural sharing ensures memory efficiency.
//!
//! # Examples
//!
//! ```rust
//! use traversa::persistent::PersistentList;
//!
//! let list = PersistentList::of([1, 2, 3]);
//! assert_eq!(list.head().ok(), Some(&1));
//! assert_eq!(list.len(), 3);
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.prepend(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//! assert!(PersistentList::ptr_eq(&extended.tail().unwrap(), &list));
//! ```
//!
//! # Structural Sharing
//!
//! When you create a new list by prepending an element, the new list shares
//! all nodes with the original list:
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.prepend(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list1
//! ```
//!
//! # The Empty List
//!
//! The empty list carries no allocation, so every empty list is the same
//! value: [`PersistentList::ptr_eq`] holds between any two of them, including
//! one produced by deserialization.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::ReferenceCounter;
use crate::error::{Result, TraversableError};

/// Internal node structure for the persistent list.
///
/// Each node owns its element and shares the rest of the list.
struct Node<T> {
    /// The element stored in this node.
    element: T,
    /// Reference to the next node (if any).
    next: Option<ReferenceCounter<Self>>,
}

/// A persistent (immutable) singly-linked list.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `empty`   | O(1)       |
/// | `prepend` | O(1)       |
/// | `head`    | O(1)       |
/// | `tail`    | O(1)       |
/// | `len`     | O(n)       |
/// | `get`     | O(n)       |
/// | `append`  | O(n)       |
/// | `reverse` | O(n)       |
///
/// # Examples
///
/// ```rust
/// use traversa::persistent::PersistentList;
///
/// let list = PersistentList::singleton(42);
/// assert_eq!(list.head().ok(), Some(&42));
/// ```
pub struct PersistentList<T> {
    /// Reference to the head node, `None` for the empty list.
    head: Option<ReferenceCounter<Node<T>>>,
}

impl<T> PersistentList<T> {
    /// Returns the canonical empty list.
    ///
    /// The empty list holds no allocation, so all empty lists are identical
    /// in the sense of [`PersistentList::ptr_eq`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::persistent::PersistentList;
    ///
    /// let first: PersistentList<i32> = PersistentList::empty();
    /// let second: PersistentList<i32> = PersistentList::empty();
    /// assert!(first.is_empty());
    /// assert!(PersistentList::ptr_eq(&first, &second));
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { head: None }
    }

    /// Creates a list from the given elements.
    ///
    /// The first element supplied becomes the head of the list. Supplying no
    /// elements yields [`PersistentList::empty`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::persistent::PersistentList;
    ///
    /// let list = PersistentList::of(vec!["a", "b"]);
    /// assert_eq!(list.head().ok(), Some(&"a"));
    /// assert_eq!(list.len(), 2);
    /// ```
    #[must_use]
    pub fn of<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Self::from_vec(elements.into_iter().collect())
    }

    /// Creates a list containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::persistent::PersistentList;
    ///
    /// let list = PersistentList::singleton(42);
    /// assert_eq!(list.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::empty().prepend(element)
    }

    /// Builds a list from a Vec, consuming it from the end so the first
    /// element of the Vec becomes the head.
    pub(crate) fn from_vec(elements: Vec<T>) -> Self {
        Self::from_vec_onto(elements, Self::empty())
    }

    /// Prepends every element of `prefix` to `suffix`, keeping their order.
    ///
    /// `suffix` is shared, not copied.
    pub(crate) fn from_vec_onto(mut prefix: Vec<T>, mut suffix: Self) -> Self {
        let mut head = suffix.head.take();
        while let Some(element) = prefix.pop() {
            head = Some(ReferenceCounter::new(Node {
                element,
                next: head,
            }));
        }
        Self { head }
    }

    /// Prepends an element to the front of the list.
    ///
    /// The returned list's tail is the receiver itself, not a copy of it.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::persistent::PersistentList;
    ///
    /// let list = PersistentList::empty().prepend(3).prepend(2).prepend(1);
    /// assert_eq!(list, PersistentList::of([1, 2, 3]));
    /// ```
    #[inline]
    #[must_use]
    pub fn prepend(&self, element: T) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                element,
                next: self.head.clone(),
            })),
        }
    }

    /// Returns a reference to the first element of the list.
    ///
    /// # Errors
    ///
    /// Returns [`TraversableError::EmptySequence`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::persistent::PersistentList;
    ///
    /// let list = PersistentList::of([1, 2]);
    /// assert_eq!(list.head().ok(), Some(&1));
    ///
    /// let empty: PersistentList<i32> = PersistentList::empty();
    /// assert!(empty.head().is_err());
    /// ```
    #[inline]
    pub fn head(&self) -> Result<&T> {
        self.head_option().ok_or_else(|| TraversableError::empty("head"))
    }

    /// Returns a reference to the first element, or `None` if the list is empty.
    #[inline]
    #[must_use]
    pub fn head_option(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the list without its first element.
    ///
    /// This operation shares structure with the original list.
    ///
    /// # Errors
    ///
    /// Returns [`TraversableError::EmptySequence`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::persistent::PersistentList;
    ///
    /// let list = PersistentList::of([1, 2, 3]);
    /// assert_eq!(list.tail().unwrap(), PersistentList::of([2, 3]));
    /// ```
    #[inline]
    pub fn tail(&self) -> Result<Self> {
        self.uncons()
            .map(|(_, tail)| tail)
            .ok_or_else(|| TraversableError::empty("tail"))
    }

    /// Decomposes the list into its head and tail.
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::persistent::PersistentList;
    ///
    /// let list = PersistentList::of([1, 2]);
    /// if let Some((head, tail)) = list.uncons() {
    ///     assert_eq!(*head, 1);
    ///     assert_eq!(tail.head().ok(), Some(&2));
    /// }
    /// ```
    #[inline]
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|node| {
            let tail = Self {
                head: node.next.clone(),
            };
            (&node.element, tail)
        })
    }

    /// Returns a reference to the element at the given index.
    ///
    /// Returns `None` if the index is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(n) where n = index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Returns the number of elements in the list.
    ///
    /// The length is not cached.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::persistent::PersistentList;
    ///
    /// assert_eq!(PersistentList::of([1, 2, 3]).len(), 3);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns `true` if both lists are the same instance.
    ///
    /// Two empty lists are always the same instance. Two non-empty lists are
    /// the same instance when they start at the same node, which is the case
    /// for clones and for tails obtained from a common prepend.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::persistent::PersistentList;
    ///
    /// let list = PersistentList::of([1, 2, 3]);
    /// assert!(PersistentList::ptr_eq(&list, &list.clone()));
    /// assert!(!PersistentList::ptr_eq(&list, &PersistentList::of([1, 2, 3])));
    /// ```
    #[must_use]
    pub fn ptr_eq(first: &Self, second: &Self) -> bool {
        match (&first.head, &second.head) {
            (None, None) => true,
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Returns an iterator over references to the elements, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::persistent::PersistentList;
    ///
    /// let list = PersistentList::of([1, 2, 3]);
    /// let collected: Vec<&i32> = list.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> PersistentListIterator<'_, T> {
        PersistentListIterator {
            current: self.head.as_deref(),
        }
    }
}

impl<T: Clone> PersistentList<T> {
    /// Appends another list to this list.
    ///
    /// The nodes of `other` are shared by the result; the nodes of `self`
    /// are copied.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::persistent::PersistentList;
    ///
    /// let combined = PersistentList::of([1, 2]).append(&PersistentList::of([3, 4]));
    /// assert_eq!(combined, PersistentList::of([1, 2, 3, 4]));
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        Self::from_vec_onto(self.iter().cloned().collect(), other.clone())
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`PersistentList`].
pub struct PersistentListIterator<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for PersistentListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            &node.element
        })
    }
}

impl<T> Clone for PersistentListIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
        }
    }
}

/// An owning iterator over elements of a [`PersistentList`].
///
/// Nodes that are not shared with another list are moved out; shared nodes
/// have their element cloned.
pub struct PersistentListIntoIterator<T> {
    list: PersistentList<T>,
}

impl<T: Clone> Iterator for PersistentListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.head.take()?;
        match ReferenceCounter::try_unwrap(node) {
            Ok(mut owned) => {
                self.list.head = owned.next.take();
                Some(owned.element)
            }
            Err(shared) => {
                self.list.head.clone_from(&shared.next);
                Some(shared.element.clone())
            }
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for PersistentList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for PersistentList<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

/// Drops the chain iteratively so that very long lists cannot overflow the
/// stack. Unlinking stops at the first node still shared with another list.
impl<T> Drop for PersistentList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            match ReferenceCounter::try_unwrap(node) {
                Ok(mut owned) => current = owned.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
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
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

impl<T: PartialOrd> PartialOrd for PersistentList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

/// Computes a hash value for this list.
///
/// Each element is hashed in order, followed by the element count, so equal
/// lists always produce equal hashes.
///
/// # Examples
///
/// ```rust
/// use traversa::persistent::PersistentList;
/// use std::collections::HashMap;
///
/// let mut map: HashMap<PersistentList<i32>, &str> = HashMap::new();
/// map.insert(PersistentList::of([1, 2, 3]), "value");
/// assert_eq!(map.get(&PersistentList::of([1, 2, 3])), Some(&"value"));
/// ```
impl<T: Hash> Hash for PersistentList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut length = 0_usize;
        for element in self {
            element.hash(state);
            length += 1;
        }
        length.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Implementations
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentList<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct PersistentListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> PersistentListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PersistentListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = PersistentList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        if elements.is_empty() {
            return Ok(PersistentList::empty());
        }
        Ok(PersistentList::from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
