//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Product, Sum};
use crate::persistent::PersistentList;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use traversa::typeclass::{Monoid, Semigroup};
///
/// let s = String::from("hello");
/// assert_eq!(String::empty().combine(s.clone()), s);
/// assert_eq!(s.clone().combine(String::empty()), s);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::typeclass::Monoid;
    ///
    /// let strings = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::combine_all(strings), "ab");
    /// assert_eq!(String::combine_all(Vec::new()), "");
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// Option forms a monoid when its inner type is a semigroup.
/// The identity element is `None`.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

/// The unit type forms a trivial monoid with `()` as the identity.
impl Monoid for () {
    fn empty() -> Self {}
}

impl<T: Clone> Monoid for PersistentList<T> {
    fn empty() -> Self {
        Self::empty()
    }
}

// =============================================================================
// Numeric Wrapper Implementations
// =============================================================================

/// Sum forms a monoid under addition with 0 as the identity.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_monoid {
    ($one:literal => $($numeric:ty),+ $(,)?) => {
        $(
            /// Product forms a monoid under multiplication with 1 as the identity.
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )+
    };
}

product_monoid!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
product_monoid!(1.0 => f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;
    use rstest::rstest;

    #[rstest]
    fn string_identity() {
        let value = String::from("hello");
        assert_eq!(String::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(String::empty()), value);
    }

    #[rstest]
    fn vec_identity() {
        let value = vec![1, 2, 3];
        assert_eq!(Vec::<i32>::empty().combine(value.clone()), value);
    }

    #[rstest]
    fn list_identity_is_canonical_empty() {
        let empty = <PersistentList<i32> as Monoid>::empty();
        assert!(PersistentList::ptr_eq(&empty, &PersistentList::empty()));
        assert_eq!(empty.combine(list![1, 2]), list![1, 2]);
    }

    #[rstest]
    fn combine_all_lists() {
        let lists = vec![list![1], list![], list![2, 3]];
        assert_eq!(PersistentList::combine_all(lists), list![1, 2, 3]);
    }

    #[rstest]
    fn numeric_identities() {
        assert_eq!(Sum::<i64>::empty(), Sum(0));
        assert_eq!(Product::<u8>::empty(), Product(1));
        assert_eq!(Product::<f64>::empty(), Product(1.0));
        assert_eq!(Sum::combine_all([Sum(1), Sum(2), Sum(3)]), Sum(6));
    }
}
