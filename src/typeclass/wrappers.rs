//! Numeric wrapper types for different algebraic operations.
//!
//! The same number can be combined by addition or by multiplication. These
//! newtypes pick one, so that `fold_map` knows which:
//!
//! - [`Sum`]: addition, identity 0
//! - [`Product`]: multiplication, identity 1

// =============================================================================
// Sum Wrapper
// =============================================================================

/// A newtype wrapper that represents the additive monoid.
///
/// `Sum(a).combine(Sum(b))` equals `Sum(a + b)` and the identity is `Sum(0)`.
///
/// # Examples
///
/// ```rust
/// use traversa::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Sum` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

// =============================================================================
// Product Wrapper
// =============================================================================

/// A newtype wrapper that represents the multiplicative monoid.
///
/// `Product(a).combine(Product(b))` equals `Product(a * b)` and the identity
/// is `Product(1)`.
///
/// # Examples
///
/// ```rust
/// use traversa::typeclass::{Monoid, Product, Semigroup};
///
/// assert_eq!(Product(3).combine(Product(5)), Product(15));
/// assert_eq!(Product::<i32>::empty(), Product(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

// Note: Default is not derived for Product because the default value should be 1

impl<A> Product<A> {
    /// Creates a new `Product` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Product` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}
