//! Container-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during container operations.
///
/// Every failure is reported synchronously at the call site and leaves the
/// container unchanged — there are no partial-failure intermediate states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Construction was requested with a zero-slot buffer.
    ///
    /// Sizes are `usize`, so the only invalid size is zero — negative sizes
    /// are unrepresentable.
    InvalidSize {
        /// The rejected slot count.
        requested: usize,
    },
    /// An index was outside the addressable range.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Exclusive upper bound that was violated: the capacity for a fixed
        /// array, the logical length for a dynamic array.
        bound: usize,
    },
    /// `remove` was asked for a value absent from the logical range.
    ValueNotFound,
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { requested } => {
                write!(f, "array size must be greater than zero (requested {requested})")
            }
            Self::IndexOutOfRange { index, bound } => {
                write!(f, "index {index} out of range for length {bound}")
            }
            Self::ValueNotFound => write!(f, "value not found in array"),
        }
    }
}

impl Error for ArrayError {}
