//! Container configuration parameters.

use crate::error::ConfigError;

/// Construction-time configuration for a [`DynamicArray`](crate::DynamicArray).
///
/// Only the starting capacity is tunable. The growth factor and shrink
/// divisor are fixed by the container's policy and exposed here as
/// constants for reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of slots allocated at construction.
    ///
    /// Default: 1. Must be at least 1.
    pub initial_capacity: usize,
}

impl ArrayConfig {
    /// Default starting capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 1;

    /// Capacity multiplier applied when a full container receives a new
    /// element.
    pub const GROWTH_FACTOR: usize = 2;

    /// A `pop` shrinks the buffer once the remaining element count would
    /// drop below `capacity / SHRINK_DIVISOR`.
    pub const SHRINK_DIVISOR: usize = 4;

    /// Create a config with the given starting capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
