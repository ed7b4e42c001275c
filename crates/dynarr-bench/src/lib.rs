//! Workload profiles for benchmarking [`DynamicArray`].
//!
//! - [`append_profile`]: N sequential appends from empty
//! - [`front_insert_profile`]: N inserts at index 0 (worst-case shifting)
//! - [`sawtooth_profile`]: repeated fill/drain cycles exercising both the
//!   grow and the shrink thresholds
//! - [`mixed_ops`]: deterministic random operation stream via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr::DynamicArray;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A single container operation in a generated workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Append the value.
    Append(u64),
    /// Insert the value at `index % (len + 1)`.
    Insert { index: usize, value: u64 },
    /// Overwrite `index % len`, skipped when empty.
    Set { index: usize, value: u64 },
    /// Pop the last element, skipped when empty.
    Pop,
}

/// Append `0..n` to an empty container.
pub fn append_profile(n: u64) -> DynamicArray<u64> {
    let mut arr = DynamicArray::new();
    for v in 0..n {
        arr.append(v);
    }
    arr
}

/// Insert `0..n` at the front of an empty container.
pub fn front_insert_profile(n: u64) -> DynamicArray<u64> {
    let mut arr = DynamicArray::new();
    for v in 0..n {
        if arr.insert(0, v).is_err() {
            unreachable!("index 0 is always within bounds");
        }
    }
    arr
}

/// Fill to `peak` elements and drain back to empty, `cycles` times.
///
/// Returns the total number of capacity changes observed.
pub fn sawtooth_profile(peak: u64, cycles: u32) -> usize {
    let mut arr = DynamicArray::new();
    let mut last_capacity = arr.capacity();
    let mut changes = 0;
    let mut observe = |arr: &DynamicArray<u64>| {
        if arr.capacity() != last_capacity {
            last_capacity = arr.capacity();
            changes += 1;
        }
    };
    for _ in 0..cycles {
        for v in 0..peak {
            arr.append(v);
            observe(&arr);
        }
        while arr.pop().is_ok() {
            observe(&arr);
        }
    }
    changes
}

/// Generate `count` operations deterministically from `seed`.
///
/// Roughly half the stream appends, so containers trend upward in size.
pub fn mixed_ops(seed: u64, count: usize) -> Vec<Op> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let roll = rng.next_u32() % 8;
            let index = rng.next_u32() as usize;
            let value = rng.next_u64();
            match roll {
                0..=3 => Op::Append(value),
                4 => Op::Insert { index, value },
                5 => Op::Set { index, value },
                _ => Op::Pop,
            }
        })
        .collect()
}

/// Apply `ops` to `arr`, wrapping indices into range.
pub fn apply_ops(arr: &mut DynamicArray<u64>, ops: &[Op]) {
    for op in ops {
        match *op {
            Op::Append(value) => arr.append(value),
            Op::Insert { index, value } => {
                if arr.insert(index % (arr.len() + 1), value).is_err() {
                    unreachable!("insert index wrapped into 0..=len");
                }
            }
            Op::Set { index, value } => {
                if !arr.is_empty() && arr.set(index % arr.len(), value).is_err() {
                    unreachable!("set index wrapped into 0..len");
                }
            }
            Op::Pop => {
                // An empty container rejects the pop; the op is skipped.
                let _ = arr.pop();
            }
        }
    }
}
