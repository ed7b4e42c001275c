//! Test utilities and fixtures for dynarr development.
//!
//! Provides [`DropTracker`] and [`Tracked`] for asserting that every value
//! placed in a [`DynamicArray`] is dropped exactly once, plus small helpers
//! for building and reading back containers in tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use dynarr::DynamicArray;

/// Shared drop counter handed out to [`Tracked`] values.
///
/// Cloning the tracker shares the same counters.
#[derive(Clone, Default)]
pub struct DropTracker {
    created: Rc<Cell<usize>>,
    dropped: Rc<Cell<usize>>,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so its drop is counted by this tracker.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        self.created.set(self.created.get() + 1);
        Tracked {
            value,
            created: Rc::clone(&self.created),
            dropped: Rc::clone(&self.dropped),
        }
    }

    /// Number of tracked values created so far.
    pub fn created(&self) -> usize {
        self.created.get()
    }

    /// Number of tracked values dropped so far.
    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }

    /// Number of tracked values still alive.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }
}

/// A value whose drop is recorded by the [`DropTracker`] that created it.
pub struct Tracked<T> {
    value: T,
    created: Rc<Cell<usize>>,
    dropped: Rc<Cell<usize>>,
}

impl<T> Tracked<T> {
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display> fmt::Display for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}

/// Clones register with the same tracker, so each clone counts as created.
impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        self.created.set(self.created.get() + 1);
        Self {
            value: self.value.clone(),
            created: Rc::clone(&self.created),
            dropped: Rc::clone(&self.dropped),
        }
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.dropped.set(self.dropped.get() + 1);
    }
}

/// Build a container by appending `values` in order.
pub fn filled<T>(values: impl IntoIterator<Item = T>) -> DynamicArray<T> {
    let mut arr = DynamicArray::new();
    for value in values {
        arr.append(value);
    }
    arr
}

/// Read every element back by index into a `Vec` for assertions.
pub fn contents<T: Clone>(arr: &DynamicArray<T>) -> Vec<T> {
    (0..arr.len())
        .filter_map(|i| arr.get(i).ok().cloned())
        .collect()
}

/// Capacities observed while appending `n` values to an empty container,
/// recorded each time the capacity changes (starting value included).
pub fn growth_sequence(n: usize) -> Vec<usize> {
    let mut arr = DynamicArray::new();
    let mut seen = vec![arr.capacity()];
    for v in 0..n {
        arr.append(v);
        if seen.last() != Some(&arr.capacity()) {
            seen.push(arr.capacity());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_counts_creation_and_drop() {
        let tracker = DropTracker::new();
        let a = tracker.track(1);
        let b = tracker.track(2);
        assert_eq!(tracker.live(), 2);
        drop(a);
        assert_eq!(tracker.dropped(), 1);
        drop(b);
        assert_eq!(tracker.live(), 0);
    }

    #[test]
    fn clones_count_as_created() {
        let tracker = DropTracker::new();
        let a = tracker.track(String::from("x"));
        let b = a.clone();
        assert_eq!(tracker.created(), 2);
        assert_eq!(tracker.live(), 2);
        drop(a);
        drop(b);
        assert_eq!(tracker.live(), 0);
        assert_eq!(tracker.dropped(), tracker.created());
    }

    #[test]
    fn filled_and_contents_agree() {
        let arr = filled([3, 1, 2]);
        assert_eq!(contents(&arr), vec![3, 1, 2]);
    }

    #[test]
    fn growth_sequence_doubles() {
        assert_eq!(growth_sequence(5), vec![1, 2, 4, 8]);
        assert_eq!(growth_sequence(0), vec![1]);
    }
}
