//! Algebraic type classes used by the sequence operations.
//!
//! - [`Semigroup`]: types with an associative binary operation (`combine`)
//! - [`Monoid`]: semigroups with an identity element (`empty`)
//! - [`Sum`], [`Product`]: numeric wrappers selecting addition or
//!   multiplication
//!
//! [`PersistentList::fold_map`](crate::persistent::PersistentList::fold_map)
//! maps every element into a monoid and combines the results.
//!
//! # Examples
//!
//! ```rust
//! use traversa::list;
//! use traversa::typeclass::{Product, Sum};
//!
//! let list = list![1, 2, 3, 4];
//! assert_eq!(list.fold_map(|&n| Sum(n)), Sum(10));
//! assert_eq!(list.fold_map(|&n| Product(n)), Product(24));
//! ```

mod monoid;
mod semigroup;
mod wrappers;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};
