//! The general operation surface of [`PersistentList`].
//!
//! Slicing, searching, folding, joining and editing operations. Results
//! reuse the receiver's nodes wherever the tail of the result is a tail of
//! the receiver: `drop_first`, `drop_while`, `take_right`, the suffix of
//! `span`, and everything after the edited position in `replace` and
//! `remove`.
//!
//! # Examples
//!
//! ```rust
//! use traversa::list;
//!
//! let list = list![1, 2, 3, 4, 5];
//! let (small, large) = list.span(|&n| n < 3);
//! assert_eq!(small, list![1, 2]);
//! assert_eq!(large, list![3, 4, 5]);
//!
//! assert_eq!(list.replace(&3, 30), list![1, 2, 30, 4, 5]);
//! assert_eq!(list.fold_left(0, |total, n| total + n), 15);
//! ```

use std::borrow::Borrow;
use std::fmt::Display;
use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::error::{Result, TraversableError};
use crate::persistent::PersistentList;
use crate::typeclass::Monoid;

// =============================================================================
// Operations Without Clone
// =============================================================================

impl<T> PersistentList<T> {
    /// Returns the empty list, whatever the receiver holds.
    #[inline]
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn clear(&self) -> Self {
        Self::empty()
    }

    /// Returns `true` if some element equals `element`.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == element)
    }

    /// Returns `true` if every one of `elements` occurs in the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    /// use traversa::persistent::PersistentList;
    ///
    /// assert!(list![1, 2, 3].contains_all([3, 1]));
    /// assert!(!list![1, 2, 3].contains_all([2, 4]));
    /// assert!(!PersistentList::<i32>::empty().contains_all([1]));
    /// ```
    pub fn contains_all<I>(&self, elements: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
        T: PartialEq,
    {
        elements
            .into_iter()
            .all(|element| self.contains(element.borrow()))
    }

    /// Returns `true` if some element satisfies `predicate`.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Returns `true` if exactly one element satisfies `predicate`.
    ///
    /// Stops at the second match.
    pub fn exists_unique<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut matches = self.iter().filter(|element| predicate(element));
        matches.next().is_some() && matches.next().is_none()
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// The empty list satisfies any predicate.
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Returns the first element satisfying `predicate`.
    pub fn find_first<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|element| predicate(element))
    }

    /// Returns the last element satisfying `predicate`.
    pub fn find_last<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|element| predicate(element)).last()
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`TraversableError::EmptySequence`] if the list is empty.
    pub fn last(&self) -> Result<&T> {
        self.iter().last().ok_or_else(|| TraversableError::empty("last"))
    }

    /// Returns the list without its first `count` elements.
    ///
    /// The result is a tail of the receiver, so nothing is copied. Dropping
    /// more elements than the list holds yields the empty list.
    ///
    /// # Complexity
    ///
    /// O(min(n, count))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// let list = list![1, 2, 3, 4, 5];
    /// assert_eq!(list.drop_first(2), list![3, 4, 5]);
    /// assert!(list.drop_first(10).is_empty());
    /// ```
    #[must_use]
    pub fn drop_first(&self, count: usize) -> Self {
        let mut remaining = self.clone();
        for _ in 0..count {
            let Some((_, tail)) = remaining.uncons() else {
                break;
            };
            remaining = tail;
        }
        remaining
    }

    /// Returns the list from the first element that fails `predicate` on.
    ///
    /// The result is a tail of the receiver.
    #[must_use]
    pub fn drop_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut remaining = self.clone();
        while let Some((head, tail)) = remaining.uncons() {
            if !predicate(head) {
                break;
            }
            remaining = tail;
        }
        remaining
    }

    /// Returns the last `count` elements.
    ///
    /// The result is a tail of the receiver.
    #[must_use]
    pub fn take_right(&self, count: usize) -> Self {
        self.drop_first(self.len().saturating_sub(count))
    }

    /// Applies `function` to every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// assert_eq!(list![1, 2, 3].map(|n| n * 2), list![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> PersistentList<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(function).collect()
    }

    /// Runs `action` on the head, if there is one, and returns the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// let mut seen = Vec::new();
    /// let list = list![1, 2, 3].peek(|&head| seen.push(head));
    /// assert_eq!(seen, vec![1]);
    /// assert_eq!(list, list![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn peek<F>(&self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(head) = self.head_option() {
            action(head);
        }
        self.clone()
    }

    /// Combines the elements from the left, starting from `zero`.
    ///
    /// Unlike [`reduce`](Self::reduce) the result is defined for the empty
    /// list, where it is `zero`.
    pub fn fold<F>(&self, zero: T, operator: F) -> T
    where
        F: FnMut(T, &T) -> T,
    {
        self.fold_left(zero, operator)
    }

    /// Combines the elements from the left into an accumulator.
    pub fn fold_left<U, F>(&self, zero: U, operator: F) -> U
    where
        F: FnMut(U, &T) -> U,
    {
        self.iter().fold(zero, operator)
    }

    /// Combines the elements from the right into an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// let list = list!["a", "b", "c"];
    /// let joined = list.fold_right(String::new(), |element, acc| acc + *element);
    /// assert_eq!(joined, "cba");
    /// ```
    pub fn fold_right<U, F>(&self, zero: U, mut operator: F) -> U
    where
        F: FnMut(&T, U) -> U,
    {
        let elements: Vec<&T> = self.iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(zero, |accumulator, element| operator(element, accumulator))
    }

    /// Maps every element into a monoid and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    /// use traversa::typeclass::Sum;
    ///
    /// let words = list!["one", "three"];
    /// assert_eq!(words.fold_map(|word| Sum(word.len())), Sum(8));
    /// ```
    pub fn fold_map<M, F>(&self, mut mapper: F) -> M
    where
        M: Monoid,
        F: FnMut(&T) -> M,
    {
        self.iter()
            .fold(M::empty(), |accumulator, element| {
                accumulator.combine(mapper(element))
            })
    }

    /// Concatenates the elements' `Display` output.
    #[must_use]
    pub fn join(&self) -> String
    where
        T: Display,
    {
        self.join_with_bounds("", "", "")
    }

    /// Concatenates the elements' `Display` output, separated by `delimiter`.
    #[must_use]
    pub fn join_with(&self, delimiter: &str) -> String
    where
        T: Display,
    {
        self.join_with_bounds(delimiter, "", "")
    }

    /// Like [`join_with`](Self::join_with), enclosed in `prefix` and `suffix`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    /// use traversa::persistent::PersistentList;
    ///
    /// assert_eq!(list!['a', 'b', 'c'].join_with_bounds(", ", "{", "}"), "{a, b, c}");
    /// assert_eq!(PersistentList::<char>::empty().join_with_bounds(", ", "{", "}"), "{}");
    /// ```
    #[must_use]
    pub fn join_with_bounds(&self, delimiter: &str, prefix: &str, suffix: &str) -> String
    where
        T: Display,
    {
        let mut joined = String::from(prefix);
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                joined.push_str(delimiter);
            }
            joined.push_str(&element.to_string());
        }
        joined.push_str(suffix);
        joined
    }
}

// =============================================================================
// Operations Producing Copies
// =============================================================================

impl<T: Clone> PersistentList<T> {
    /// Returns the first `count` elements.
    ///
    /// If `count` covers the whole list, the receiver itself is returned.
    ///
    /// # Complexity
    ///
    /// O(min(n, count))
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        if self.drop_first(count).is_empty() {
            return self.clone();
        }
        self.iter().take(count).cloned().collect()
    }

    /// Returns the longest prefix whose elements all satisfy `predicate`.
    #[must_use]
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.span(predicate).0
    }

    /// Splits the list where `predicate` first fails.
    ///
    /// Returns `(take_while(predicate), drop_while(predicate))`, evaluating
    /// `predicate` once per element of the prefix plus once for the element
    /// that ends it. The second list is a tail of the receiver.
    #[must_use]
    pub fn span<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&T) -> bool,
    {
        let mut prefix = Vec::new();
        let mut remaining = self.clone();
        while let Some((head, tail)) = remaining.uncons() {
            if !predicate(head) {
                break;
            }
            prefix.push(head.clone());
            remaining = tail;
        }
        if remaining.is_empty() {
            return (self.clone(), remaining);
        }
        (Self::of(prefix), remaining)
    }

    /// Returns the list without its last `count` elements.
    #[must_use]
    pub fn drop_right(&self, count: usize) -> Self {
        self.take(self.len().saturating_sub(count))
    }

    /// Returns every element but the last.
    ///
    /// # Errors
    ///
    /// Returns [`TraversableError::EmptySequence`] if the list is empty.
    pub fn init(&self) -> Result<Self> {
        if self.is_empty() {
            return Err(TraversableError::empty("init"));
        }
        Ok(self.drop_right(1))
    }

    /// Keeps the elements satisfying `predicate`.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// Collects every element satisfying `predicate`. Same as
    /// [`filter`](Self::filter).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// assert_eq!(list![1, 2, 3, 4].find_all(|n| n % 2 == 0), list![2, 4]);
    /// ```
    #[must_use]
    pub fn find_all<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.filter(predicate)
    }

    /// Keeps the first occurrence of every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// assert_eq!(list![1, 2, 1, 3, 2].distinct(), list![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn distinct(&self) -> Self
    where
        T: Eq + Hash,
    {
        let mut seen = FxHashSet::default();
        self.iter()
            .filter(|element| seen.insert(*element))
            .cloned()
            .collect()
    }

    /// Replaces the first occurrence of `current` with `replacement`.
    ///
    /// Everything after the replaced element is shared with the receiver.
    /// Without an occurrence, the receiver itself is returned.
    #[must_use]
    pub fn replace(&self, current: &T, replacement: T) -> Self
    where
        T: PartialEq,
    {
        let Some(position) = self.iter().position(|element| element == current) else {
            return self.clone();
        };
        let prefix = self.iter().take(position).cloned().collect();
        Self::from_vec_onto(prefix, self.drop_first(position + 1).prepend(replacement))
    }

    /// Replaces every occurrence of `current` with `replacement`.
    #[must_use]
    pub fn replace_all(&self, current: &T, replacement: T) -> Self
    where
        T: PartialEq,
    {
        if !self.contains(current) {
            return self.clone();
        }
        self.map(|element| {
            if element == current {
                replacement.clone()
            } else {
                element.clone()
            }
        })
    }

    /// Replaces every element with the result of `operator`.
    #[must_use]
    pub fn replace_all_with<F>(&self, operator: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        self.map(operator)
    }

    /// Removes the first occurrence of `element`.
    ///
    /// Everything after the removed element is shared with the receiver.
    #[must_use]
    pub fn remove(&self, element: &T) -> Self
    where
        T: PartialEq,
    {
        let Some(position) = self.iter().position(|candidate| candidate == element) else {
            return self.clone();
        };
        let prefix = self.iter().take(position).cloned().collect();
        Self::from_vec_onto(prefix, self.drop_first(position + 1))
    }

    /// Removes every occurrence of `element`.
    #[must_use]
    pub fn remove_every(&self, element: &T) -> Self
    where
        T: PartialEq,
    {
        self.filter(|candidate| candidate != element)
    }

    /// Removes every element that occurs in `elements`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// let list = list![1, 2, 3, 1, 2, 3];
    /// assert_eq!(list.remove_all([1, 2]), list![3, 3]);
    /// ```
    #[must_use]
    pub fn remove_all<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Eq + Hash,
    {
        let removed: FxHashSet<T> = elements.into_iter().collect();
        if removed.is_empty() {
            return self.clone();
        }
        self.filter(|element| !removed.contains(element))
    }

    /// Keeps only the elements that occur in `elements`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// let list = list![1, 2, 3, 1, 2, 3];
    /// assert_eq!(list.retain_all([1, 2]), list![1, 2, 1, 2]);
    /// ```
    #[must_use]
    pub fn retain_all<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Eq + Hash,
    {
        let retained: FxHashSet<T> = elements.into_iter().collect();
        self.filter(|element| retained.contains(element))
    }

    /// Combines the elements from the left, starting with the head.
    ///
    /// # Errors
    ///
    /// Returns [`TraversableError::EmptySequence`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// assert_eq!(list![1, 2, 3].reduce(|a, b| a - b).unwrap(), -4);
    /// ```
    pub fn reduce<F>(&self, operator: F) -> Result<T>
    where
        F: FnMut(T, &T) -> T,
    {
        self.reduce_from("reduce", operator)
    }

    /// Same as [`reduce`](Self::reduce).
    ///
    /// # Errors
    ///
    /// Returns [`TraversableError::EmptySequence`] if the list is empty.
    pub fn reduce_left<F>(&self, operator: F) -> Result<T>
    where
        F: FnMut(T, &T) -> T,
    {
        self.reduce_from("reduce_left", operator)
    }

    /// Combines the elements from the right, starting with the last.
    ///
    /// # Errors
    ///
    /// Returns [`TraversableError::EmptySequence`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// assert_eq!(list![1, 2, 3].reduce_right(|a, b| a - b).unwrap(), 2);
    /// ```
    pub fn reduce_right<F>(&self, mut operator: F) -> Result<T>
    where
        F: FnMut(&T, T) -> T,
    {
        let elements: Vec<&T> = self.iter().collect();
        let mut reversed = elements.into_iter().rev();
        let last = reversed
            .next()
            .ok_or_else(|| TraversableError::empty("reduce_right"))?;
        Ok(reversed.fold(last.clone(), |accumulator, element| {
            operator(element, accumulator)
        }))
    }

    fn reduce_from<F>(&self, operation: &'static str, operator: F) -> Result<T>
    where
        F: FnMut(T, &T) -> T,
    {
        let (head, tail) = self.uncons().ok_or_else(|| TraversableError::empty(operation))?;
        Ok(tail.iter().fold(head.clone(), operator))
    }

    /// Returns a new list with `separator` between every two elements.
    ///
    /// # Complexity
    ///
    /// O(n) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::list;
    ///
    /// assert_eq!(list![1, 2, 3].intersperse(0), list![1, 0, 2, 0, 3]);
    /// ```
    #[must_use]
    pub fn intersperse(&self, separator: T) -> Self {
        let mut elements = self.iter();
        let Some(first) = elements.next() else {
            return Self::empty();
        };

        let mut result = vec![first.clone()];
        for element in elements {
            result.push(separator.clone());
            result.push(element.clone());
        }
        Self::of(result)
    }

    /// Returns a new list with the elements in reverse order.
    ///
    /// # Complexity
    ///
    /// O(n) time and space
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter()
            .fold(Self::empty(), |reversed, element| reversed.prepend(element.clone()))
    }
}
