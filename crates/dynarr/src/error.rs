//! Error types for container operations and construction.

use std::error::Error;
use std::fmt;

/// Errors returned by [`DynamicArray`](crate::DynamicArray) operations.
///
/// Every error is deterministic given the container's state and the
/// call's arguments. Nothing is retried or recovered internally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The index violates the operation's bound: `index < len` for
    /// `get`/`set`, `index <= len` for `insert`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Logical length of the container at the time of the call.
        len: usize,
    },
    /// `pop` was called on a container with no elements.
    EmptyContainer,
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::EmptyContainer => write!(f, "pop from empty array"),
        }
    }
}

impl Error for ArrayError {}

/// Errors from validating an [`ArrayConfig`](crate::ArrayConfig).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The initial capacity was zero; a container always holds at least
    /// one slot.
    ZeroCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "initial capacity must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
