//! Error types for map operations.
//!
//! Most "absence" cases in this library are ordinary values: a missing key
//! is `None`, an empty reduction is the zero value. The only precondition
//! that is actively guarded is drawing a random element from an empty map.

use std::fmt;

/// Represents errors that can occur in map operations.
///
/// # Examples
///
/// ```rust
/// use mapops::error::MapOpsError;
///
/// let error = MapOpsError::EmptyContainer { operation: "sample" };
/// assert_eq!(format!("{error}"), "sample: container is empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapOpsError {
    /// The operation needs at least one entry, but the map was empty.
    EmptyContainer {
        /// The name of the operation that was refused.
        operation: &'static str,
    },
}

impl fmt::Display for MapOpsError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContainer { operation } => {
                write!(formatter, "{operation}: container is empty")
            }
        }
    }
}

impl std::error::Error for MapOpsError {}
