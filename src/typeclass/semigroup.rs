//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use traversa::list;
//! use traversa::typeclass::Semigroup;
//!
//! assert_eq!(String::from("foo").combine(String::from("bar")), "foobar");
//! assert_eq!(list![1, 2].combine(list![3]), list![1, 2, 3]);
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Product, Sum};
use crate::persistent::PersistentList;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::typeclass::Semigroup;
    ///
    /// let strings = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::reduce_all(strings), Some(String::from("ab")));
    /// assert_eq!(String::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// Option forms a semigroup when its inner type is a semigroup.
///
/// `None` is absorbed: `Some(a).combine(None)` is `Some(a)`.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

/// The unit type forms a trivial semigroup.
impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

// =============================================================================
// PersistentList Implementation
// =============================================================================

/// Lists combine by concatenation; the right operand is shared.
impl<T: Clone> Semigroup for PersistentList<T> {
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }
}

// =============================================================================
// Numeric Wrapper Implementations
// =============================================================================

/// Sum forms a semigroup under addition.
impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

/// Product forms a semigroup under multiplication.
impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;
    use rstest::rstest;

    #[rstest]
    fn string_combine() {
        assert_eq!(String::from("a").combine(String::from("b")), "ab");
    }

    #[rstest]
    fn vec_combine() {
        assert_eq!(vec![1].combine(vec![2, 3]), vec![1, 2, 3]);
    }

    #[rstest]
    #[case(Some(String::from("a")), Some(String::from("b")), Some(String::from("ab")))]
    #[case(Some(String::from("a")), None, Some(String::from("a")))]
    #[case(None, Some(String::from("b")), Some(String::from("b")))]
    #[case(None, None, None)]
    fn option_combine(
        #[case] left: Option<String>,
        #[case] right: Option<String>,
        #[case] expected: Option<String>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn list_combine_shares_right_operand() {
        let right = list![3, 4];
        let combined = list![1, 2].combine(right.clone());
        assert_eq!(combined, list![1, 2, 3, 4]);
        assert!(PersistentList::ptr_eq(&combined.drop_first(2), &right));
    }

    #[rstest]
    fn list_combine_is_associative() {
        let (a, b, c) = (list![1], list![2, 3], list![4]);
        assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }

    #[rstest]
    fn numeric_wrappers_combine() {
        assert_eq!(Sum(2).combine(Sum(3)), Sum(5));
        assert_eq!(Product(2).combine(Product(3)), Product(6));
    }
}
