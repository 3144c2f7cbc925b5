//! Splicing nested sequences into one.
//!
//! A list is flattened by asking each element whether it can be viewed as a
//! list ([`Flattenable`]) and splicing the items of that view in place. For a
//! `PersistentList<PersistentList<U>>` every element qualifies, so the check
//! is static. For heterogeneous lists built from [`Dynamic`] values the check
//! happens per element, and the first element that is not a list stops the
//! flatten with [`TraversableError::NotASequence`], naming its position.
//!
//! # Examples
//!
//! ```rust
//! use traversa::list;
//! use traversa::persistent::PersistentList;
//! use traversa::traversable::dynamic;
//!
//! let nested = list![list![1, 2], list![], list![3]];
//! assert_eq!(nested.flatten().unwrap(), list![1, 2, 3]);
//!
//! let mixed = list![dynamic(list![1, 2]), dynamic(3)];
//! let flattened: traversa::error::Result<PersistentList<i32>> = mixed.flatten();
//! assert!(flattened.is_err());
//! ```

use std::any::{Any, type_name};

use crate::error::{Result, TraversableError};
use crate::persistent::PersistentList;

/// A type-erased, shareable value for heterogeneous lists.
#[cfg(not(feature = "arc"))]
pub type Dynamic = std::rc::Rc<dyn Any>;

/// A type-erased, shareable value for heterogeneous lists.
#[cfg(feature = "arc")]
pub type Dynamic = std::sync::Arc<dyn Any + Send + Sync>;

/// Wraps a value as a [`Dynamic`].
#[cfg(not(feature = "arc"))]
pub fn dynamic<V: Any>(value: V) -> Dynamic {
    std::rc::Rc::new(value)
}

/// Wraps a value as a [`Dynamic`].
#[cfg(feature = "arc")]
pub fn dynamic<V: Any + Send + Sync>(value: V) -> Dynamic {
    std::sync::Arc::new(value)
}

/// Elements that may be viewed as a list of `U`.
pub trait Flattenable<U> {
    /// Returns the list this element stands for, or `None` if it is not one.
    fn as_list(&self) -> Option<PersistentList<U>>;
}

impl<U> Flattenable<U> for PersistentList<U> {
    fn as_list(&self) -> Option<Self> {
        Some(self.clone())
    }
}

impl<U: 'static> Flattenable<U> for Dynamic {
    fn as_list(&self) -> Option<PersistentList<U>> {
        (**self).downcast_ref::<PersistentList<U>>().cloned()
    }
}

impl<T> PersistentList<T> {
    /// Splices the elements of every inner list, in order.
    ///
    /// The last inner list is shared, not copied.
    ///
    /// # Errors
    ///
    /// Returns [`TraversableError::NotASequence`] with the index of the first
    /// element that cannot be viewed as a list. Elements after it are never
    /// inspected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    /// use traversa::persistent::PersistentList;
    ///
    /// let nested = list![list![1], list![2, 3]];
    /// assert_eq!(nested.flatten().unwrap(), list![1, 2, 3]);
    ///
    /// let empty: PersistentList<PersistentList<i32>> = PersistentList::empty();
    /// assert!(empty.flatten().unwrap().is_empty());
    /// ```
    pub fn flatten<U: Clone>(&self) -> Result<PersistentList<U>>
    where
        T: Flattenable<U>,
    {
        let inner_lists = self
            .iter()
            .enumerate()
            .map(|(index, element)| {
                element.as_list().ok_or_else(|| {
                    tracing::debug!(index, element_type = type_name::<T>(), "element is not a list");
                    TraversableError::NotASequence {
                        operation: "flatten",
                        index,
                        expected: type_name::<PersistentList<U>>(),
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(concatenate(inner_lists))
    }

    /// Replaces every element by the list `mapper` returns for it and splices
    /// the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// let list = list![1, 2, 3];
    /// assert_eq!(list.flat_map(|&n| (0..n).map(|_| n).collect()), list![1, 2, 2, 3, 3, 3]);
    /// ```
    #[must_use]
    pub fn flat_map<U: Clone, F>(&self, mapper: F) -> PersistentList<U>
    where
        F: FnMut(&T) -> PersistentList<U>,
    {
        concatenate(self.iter().map(mapper).collect())
    }

    /// Flattens one level with a caller-supplied view of each element.
    ///
    /// Unlike [`flatten`](Self::flatten) this never fails: `unwrap` decides
    /// how every element, list or not, becomes a list. Applying it again
    /// flattens the next level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    /// use traversa::persistent::PersistentList;
    /// use traversa::traversable::{Dynamic, dynamic};
    ///
    /// let mixed = list![dynamic(1), dynamic(list![2, 3])];
    /// let flattened = mixed.flatten_with(|element: &Dynamic| {
    ///     match element.downcast_ref::<PersistentList<i32>>() {
    ///         Some(inner) => inner.clone(),
    ///         None => list![*element.downcast_ref::<i32>().unwrap()],
    ///     }
    /// });
    /// assert_eq!(flattened, list![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn flatten_with<U: Clone, F>(&self, unwrap: F) -> PersistentList<U>
    where
        F: FnMut(&T) -> PersistentList<U>,
    {
        self.flat_map(unwrap)
    }
}

fn concatenate<U: Clone>(mut inner_lists: Vec<PersistentList<U>>) -> PersistentList<U> {
    let last = inner_lists.pop().unwrap_or_default();
    let prefix = inner_lists
        .iter()
        .flat_map(|inner| inner.iter().cloned())
        .collect();
    PersistentList::from_vec_onto(prefix, last)
}
