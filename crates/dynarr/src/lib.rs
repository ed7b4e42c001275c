//! A from-scratch resizable contiguous sequence container.
//!
//! [`DynamicArray`] owns a single fixed-size backing buffer and replaces it
//! whenever the element count crosses a capacity threshold. It is the
//! storage strategy that underlies vector-like containers, built without
//! leaning on `Vec<T>`.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<T> (bounds checks, grow/shrink policy, errors, tracing)
//! └── RawBuffer<T> (Box<[MaybeUninit<T>]> + initialised-prefix length)
//! ```
//!
//! # Capacity policy
//!
//! - **Grow:** a full buffer doubles before the next `append` or `insert`,
//!   so N appends cost O(N) copies in total.
//! - **Shrink:** `pop` halves the buffer only once occupancy would fall
//!   below a quarter of capacity. The gap between the two thresholds stops
//!   a grow/shrink cycle on every operation at a boundary.
//! - Capacity never drops below 1.
//!
//! # Safety
//!
//! The crate denies `unsafe` everywhere except `raw.rs`, which owns the
//! uninitialised slot storage. Every `unsafe` block there carries a
//! `// SAFETY:` comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
mod raw;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use config::ArrayConfig;
pub use error::{ArrayError, ConfigError};
