//! The dynamic array container and its capacity policy.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::config::ArrayConfig;
use crate::error::{ArrayError, ConfigError};
use crate::raw::RawBuffer;

/// A resizable contiguous sequence backed by one owned buffer.
///
/// Elements occupy slots `[0, len)` of a buffer holding
/// [`capacity`](Self::capacity) slots. A full container doubles its buffer
/// before accepting another element; [`pop`](Self::pop) halves it once
/// occupancy would fall below a quarter. Capacity is always at least 1.
///
/// The buffer is never exposed. Accessors hand out borrows scoped to the
/// call.
///
/// ```
/// use dynarr::DynamicArray;
///
/// let mut arr = DynamicArray::new();
/// for v in 1..=5 {
///     arr.append(v);
/// }
/// arr.insert(2, 99).unwrap();
/// assert_eq!(arr.to_string(), "[1, 2, 99, 3, 4, 5]");
/// assert_eq!(arr.capacity(), 8);
/// ```
pub struct DynamicArray<T> {
    buf: RawBuffer<T>,
}

impl<T> DynamicArray<T> {
    /// Create an empty container with a single slot.
    pub fn new() -> Self {
        Self {
            buf: RawBuffer::new(ArrayConfig::DEFAULT_INITIAL_CAPACITY),
        }
    }

    /// Create an empty container from a validated config.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            buf: RawBuffer::new(config.initial_capacity),
        })
    }

    /// Create an empty container with `capacity` pre-allocated slots.
    ///
    /// Returns [`ConfigError::ZeroCapacity`] for a capacity of zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        Self::with_config(ArrayConfig::new(capacity))
    }

    /// Number of elements in the container.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` when the container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.buf.len() == 0
    }

    /// Number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Borrow the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len();
        self.buf
            .as_slice()
            .get(index)
            .ok_or(ArrayError::IndexOutOfRange { index, len })
    }

    /// Mutably borrow the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len();
        self.buf
            .as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfRange { index, len })
    }

    /// Overwrite the element at `index`, dropping the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Add `value` at the end, doubling the buffer first if it is full.
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity overflows `usize`.
    pub fn append(&mut self, value: T) {
        if self.buf.is_full() {
            self.resize(self.grown_capacity());
        }
        if self.buf.push(value).is_err() {
            unreachable!("buffer has a free slot after growth");
        }
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` appends. Costs O(len - index).
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity overflows `usize`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        let len = self.len();
        if index > len {
            return Err(ArrayError::IndexOutOfRange { index, len });
        }
        if self.buf.is_full() {
            self.resize(self.grown_capacity());
        }
        if self.buf.insert(index, value).is_err() {
            unreachable!("index is in bounds and the buffer has a free slot");
        }
        Ok(())
    }

    /// Remove and return the last element.
    ///
    /// Before the removal, the buffer is halved if the remaining `len - 1`
    /// elements would occupy less than a quarter of it.
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        let len = self.len();
        if len == 0 {
            return Err(ArrayError::EmptyContainer);
        }
        let capacity = self.capacity();
        if len - 1 < capacity / ArrayConfig::SHRINK_DIVISOR {
            tracing::trace!(len, capacity, "occupancy below quarter, shrinking");
            self.resize((capacity / 2).max(1));
        }
        self.buf.pop().ok_or(ArrayError::EmptyContainer)
    }

    /// Move every element into a freshly allocated buffer of
    /// `new_capacity` slots, releasing the old one.
    fn resize(&mut self, new_capacity: usize) {
        tracing::debug!(
            from = self.capacity(),
            to = new_capacity,
            len = self.len(),
            "resizing backing buffer"
        );
        self.buf.relocate(new_capacity);
    }

    fn grown_capacity(&self) -> usize {
        self.capacity()
            .checked_mul(ArrayConfig::GROWTH_FACTOR)
            .expect("capacity overflow")
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
        }
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Renders `[a, b, c]`. The alternate form (`{:#}`) prefixes the size and
/// capacity: `DynamicArray(size=3, capacity=4) [a, b, c]`.
impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(
                f,
                "DynamicArray(size={}, capacity={}) ",
                self.len(),
                self.capacity()
            )?;
        }
        f.write_str("[")?;
        for (i, value) in self.buf.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("items", &self.buf.as_slice())
            .finish()
    }
}
