//! Error types for the collection core.
//!
//! This module provides the single error type shared by all collections.
//! Only two conditions are reportable: the allocator refusing to grow a
//! heap buffer, and an index-addressed mutation with an invalid index.
//! Absence of a key or element is never an error; it is reported as
//! `Option`/`bool` results by the collections themselves.

use std::collections::TryReserveError;

/// Represents errors that can occur while mutating a collection.
///
/// Every fallible collection operation is strongly error-safe: when a
/// `CollectionError` is returned, the collection's observable state is
/// identical to before the call.
///
/// # Examples
///
/// ```rust
/// use smallord::collections::CollectionError;
///
/// let error = CollectionError::IndexOutOfBounds { index: 9, len: 3 };
/// assert_eq!(
///     format!("{}", error),
///     "index 9 out of bounds for collection of length 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The allocator could not provide memory for a growth or migration
    /// step. The operation was rolled back; nothing was moved or copied.
    Allocation(TryReserveError),
    /// An index-addressed operation was given an index outside the
    /// collection's current bounds. The collection is unchanged.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The collection's length at the time of the call.
        len: usize,
    },
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Allocation(error) => {
                write!(formatter, "allocation failed during collection growth: {error}")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(
                    formatter,
                    "index {index} out of bounds for collection of length {len}"
                )
            }
        }
    }
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Allocation(error) => Some(error),
            Self::IndexOutOfBounds { .. } => None,
        }
    }
}

impl From<TryReserveError> for CollectionError {
    fn from(error: TryReserveError) -> Self {
        Self::Allocation(error)
    }
}
