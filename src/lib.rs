//! # traversa
//!
//! Persistent, immutable sequences for Rust with a complete traversal algebra.
//!
//! ## Overview
//!
//! The crate is built around [`persistent::PersistentList`], a singly-linked
//! list that never mutates in place: every operation returns a new list and
//! shares the unchanged part of its input. On top of it sits the traversal
//! algebra:
//!
//! - **Numeric reductions**: `sum`, `product`, `average`, `min`, `max` with
//!   dispatch over boolean, integral, floating, arbitrary-precision and
//!   character elements
//! - **Windowing**: `grouped`, `sliding`, `sliding_with_step`
//! - **Combinators**: `zip`, `zip_all`, `zip_with_index`, `unzip`
//! - **Flattening**: `flatten`, `flatten_with`, `flat_map`
//! - **Everything else**: filtering, slicing, folding, joining, replacing,
//!   removing and converting
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `PersistentList`
//! - `arc`: use `Arc` instead of `Rc`, making lists `Send + Sync`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use traversa::prelude::*;
//!
//! let list = list![1, 2, 3, 4, 5];
//!
//! assert_eq!(list.sum().unwrap(), 15);
//! assert_eq!(list.grouped(2).unwrap(), list![list![1, 2], list![3, 4], list![5]]);
//! assert_eq!(list.join_with(", "), "1, 2, 3, 4, 5");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use traversa::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ErrorKind, Result, TraversableError};
    pub use crate::list;
    pub use crate::persistent::PersistentList;
    pub use crate::traversable::{Dynamic, Flattenable, NumericFamily, Sequence, dynamic};
    pub use crate::typeclass::{Monoid, Product, Semigroup, Sum};
}

pub mod error;
pub mod persistent;
pub mod traversable;
pub mod typeclass;
