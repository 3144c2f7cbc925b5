//! Error types for sequence operations.
//!
//! Every fallible operation in this crate returns [`TraversableError`].
//! The variants are grouped into coarse categories by [`ErrorKind`], which
//! is what most callers want to match on:
//!
//! - [`ErrorKind::UnsupportedOperation`]: the operation is undefined for this
//!   receiver (an empty sequence, or an element type with no numeric family)
//! - [`ErrorKind::InvalidArgument`]: a precondition on an argument failed
//! - [`ErrorKind::TypeMismatch`]: an element did not have the shape the
//!   operation required
//! - [`ErrorKind::Arithmetic`]: a numeric result could not be represented
//! - [`ErrorKind::Io`]: writing the sequence to an output stream failed
//!
//! # Examples
//!
//! ```rust
//! use traversa::error::ErrorKind;
//! use traversa::persistent::PersistentList;
//!
//! let empty: PersistentList<i32> = PersistentList::empty();
//! let error = empty.head().unwrap_err();
//! assert_eq!(error.kind(), ErrorKind::UnsupportedOperation);
//! assert_eq!(error.to_string(), "head of empty sequence");
//! ```

use std::io;

use thiserror::Error;

/// Coarse classification of a [`TraversableError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The operation is not defined for the receiver.
    UnsupportedOperation,
    /// An argument violated the operation's precondition.
    InvalidArgument,
    /// An element had an unexpected shape.
    TypeMismatch,
    /// A numeric result is not representable in its family.
    Arithmetic,
    /// An output stream reported a failure.
    Io,
}

/// Errors reported by sequence operations.
///
/// No error is recovered internally: each one is raised at the call that
/// violated the operation's contract, and no partial result is produced.
#[derive(Debug, Error)]
pub enum TraversableError {
    /// The operation has no result on an empty sequence.
    #[error("{operation} of empty sequence")]
    EmptySequence {
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// The element type has no numeric family (or no natural order).
    #[error("{operation} is not supported for elements of type {element_type}")]
    UnsupportedElementType {
        /// The operation that was attempted.
        operation: &'static str,
        /// The Rust type name of the elements.
        element_type: &'static str,
    },

    /// A size or step argument was not positive.
    #[error("{operation}: {argument} must be positive, got {value}")]
    InvalidArgument {
        /// The operation that was attempted.
        operation: &'static str,
        /// The name of the offending argument.
        argument: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// An element could not be viewed in the shape the operation needs.
    #[error("{operation}: expected {expected}, found element of type {found}")]
    TypeMismatch {
        /// The operation that was attempted.
        operation: &'static str,
        /// A description of the expected shape.
        expected: &'static str,
        /// The Rust type name of the offending element.
        found: &'static str,
    },

    /// An element reached by `flatten` could not be viewed as a sequence.
    #[error("{operation}: element at index {index} is not a {expected}")]
    NotASequence {
        /// The operation that was attempted.
        operation: &'static str,
        /// Position of the offending element in the receiver.
        index: usize,
        /// The sequence type the element was expected to be.
        expected: &'static str,
    },

    /// A fixed-capacity numeric family overflowed.
    #[error("{operation}: {family} arithmetic overflowed")]
    ArithmeticOverflow {
        /// The operation that was attempted.
        operation: &'static str,
        /// The numeric family that overflowed.
        family: &'static str,
    },

    /// Character arithmetic produced a value that is not a Unicode scalar.
    #[error("{operation}: {code_point:#x} is not a valid character")]
    InvalidCodePoint {
        /// The operation that was attempted.
        operation: &'static str,
        /// The computed code point.
        code_point: u32,
    },

    /// Writing the sequence to an output stream failed.
    #[error("failed to write sequence to output stream")]
    Output(#[source] io::Error),
}

impl TraversableError {
    /// Returns the category this error belongs to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use traversa::error::{ErrorKind, TraversableError};
    ///
    /// let error = TraversableError::EmptySequence { operation: "reduce" };
    /// assert_eq!(error.kind(), ErrorKind::UnsupportedOperation);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptySequence { .. } | Self::UnsupportedElementType { .. } => {
                ErrorKind::UnsupportedOperation
            }
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::TypeMismatch { .. } | Self::NotASequence { .. } => ErrorKind::TypeMismatch,
            Self::ArithmeticOverflow { .. } | Self::InvalidCodePoint { .. } => {
                ErrorKind::Arithmetic
            }
            Self::Output(_) => ErrorKind::Io,
        }
    }

    pub(crate) const fn empty(operation: &'static str) -> Self {
        Self::EmptySequence { operation }
    }
}

/// Alias for results produced by sequence operations.
pub type Result<T> = std::result::Result<T, TraversableError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error as _;

    #[rstest]
    fn test_empty_sequence_display() {
        let error = TraversableError::EmptySequence { operation: "head" };
        assert_eq!(format!("{error}"), "head of empty sequence");
    }

    #[rstest]
    fn test_invalid_argument_display() {
        let error = TraversableError::InvalidArgument {
            operation: "grouped",
            argument: "size",
            value: 0,
        };
        assert_eq!(format!("{error}"), "grouped: size must be positive, got 0");
    }

    #[rstest]
    fn test_invalid_code_point_display() {
        let error = TraversableError::InvalidCodePoint {
            operation: "sum",
            code_point: 0xD800,
        };
        assert_eq!(format!("{error}"), "sum: 0xd800 is not a valid character");
    }

    #[rstest]
    fn test_not_a_sequence_display_names_position() {
        let error = TraversableError::NotASequence {
            operation: "flatten",
            index: 2,
            expected: "PersistentList<i32>",
        };
        assert_eq!(
            format!("{error}"),
            "flatten: element at index 2 is not a PersistentList<i32>"
        );
    }

    #[rstest]
    #[case(TraversableError::EmptySequence { operation: "max" }, ErrorKind::UnsupportedOperation)]
    #[case(
        TraversableError::UnsupportedElementType { operation: "sum", element_type: "String" },
        ErrorKind::UnsupportedOperation
    )]
    #[case(
        TraversableError::InvalidArgument { operation: "sliding", argument: "step", value: 0 },
        ErrorKind::InvalidArgument
    )]
    #[case(
        TraversableError::TypeMismatch { operation: "flatten", expected: "a sequence", found: "i32" },
        ErrorKind::TypeMismatch
    )]
    #[case(
        TraversableError::NotASequence { operation: "flatten", index: 1, expected: "list" },
        ErrorKind::TypeMismatch
    )]
    #[case(
        TraversableError::ArithmeticOverflow { operation: "product", family: "decimal" },
        ErrorKind::Arithmetic
    )]
    fn test_kind_classification(#[case] error: TraversableError, #[case] expected: ErrorKind) {
        assert_eq!(error.kind(), expected);
    }

    #[rstest]
    fn test_output_error_keeps_source() {
        let error = TraversableError::Output(io::Error::other("closed"));
        assert_eq!(error.kind(), ErrorKind::Io);
        assert_eq!(error.source().map(ToString::to_string), Some("closed".to_string()));
    }
}
