//! Fixed-size slot storage behind [`DynamicArray`](crate::DynamicArray).
//!
//! [`RawBuffer`] is a boxed slice of `MaybeUninit<T>` slots plus the length
//! of its initialised prefix. It never reallocates on its own: pushes and
//! inserts into a full buffer hand the value back, and [`RawBuffer::relocate`]
//! is the only path that swaps in a new allocation. Growth and shrink policy
//! live one level up.
//!
//! This is the only module in the crate that may contain `unsafe` code.

#![allow(unsafe_code)]

use std::mem::{self, MaybeUninit};
use std::ptr;
use std::slice;

/// Owned block of `capacity` slots whose first `len` slots are initialised.
pub(crate) struct RawBuffer<T> {
    /// Backing storage. Slots `[len, capacity)` are uninitialised.
    slots: Box<[MaybeUninit<T>]>,
    /// Number of initialised slots at the front of `slots`.
    len: usize,
}

impl<T> RawBuffer<T> {
    /// Allocate `capacity` uninitialised slots.
    ///
    /// Allocation failure aborts the process.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            slots: Box::new_uninit_slice(capacity),
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Write `value` into the first free slot.
    ///
    /// Returns the value back if every slot is occupied.
    pub(crate) fn push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        self.slots[self.len].write(value);
        self.len += 1;
        Ok(())
    }

    /// Write `value` at `index`, moving `[index, len)` one slot to the right.
    ///
    /// Returns the value back if the buffer is full or `index > len`.
    pub(crate) fn insert(&mut self, index: usize, value: T) -> Result<(), T> {
        if self.is_full() || index > self.len {
            return Err(value);
        }
        // Walk down from the free slot at `len`, so each slot moves into a
        // position that has already been vacated.
        for j in (index + 1..=self.len).rev() {
            self.slots.swap(j, j - 1);
        }
        self.slots[index].write(value);
        self.len += 1;
        Ok(())
    }

    /// Move the last initialised value out of the buffer.
    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` sat inside the initialised prefix before the
        // decrement and is now outside it, so it is read out exactly once.
        Some(unsafe { self.slots[self.len].assume_init_read() })
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialised, and
        // `MaybeUninit<T>` is guaranteed to share `T`'s layout.
        unsafe { slice::from_raw_parts(self.slots.as_ptr().cast::<T>(), self.len) }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.slots.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Replace the backing allocation with one of `new_capacity` slots,
    /// moving the initialised prefix across in order.
    ///
    /// `new_capacity` is raised to `len` if smaller, so no live value is
    /// ever left behind in the released allocation.
    pub(crate) fn relocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len, "relocate below live length");
        let mut slots = Box::new_uninit_slice(new_capacity.max(self.len));
        for (dst, src) in slots.iter_mut().zip(self.slots[..self.len].iter_mut()) {
            mem::swap(dst, src);
        }
        // The old slots now hold only uninitialised values; dropping a
        // `MaybeUninit` box never runs `T`'s destructor.
        self.slots = slots;
    }
}

impl<T: Clone> Clone for RawBuffer<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new(self.capacity());
        for value in self.as_slice() {
            if copy.push(value.clone()).is_err() {
                unreachable!("clone has the same capacity as the source");
            }
        }
        copy
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        // SAFETY: `live` covers exactly the initialised prefix, which is
        // dropped here once and never touched again.
        unsafe { ptr::drop_in_place(live) };
    }
}
