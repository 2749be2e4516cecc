//! Sample buffers for a reaction-time measurement device
//!
//! This crate provides two small in-memory containers for timing samples:
//!
//! - **[`EventQueue`]**: a doubly linked FIFO of integer samples; O(1) `add` at the tail and
//!   O(1) `pop` from the head
//! - **[`DistinctMinHeap`]**: an array-backed binary min-heap of distinct real-valued samples;
//!   O(log n) `insert` and `extract_min`, O(1) `min`, duplicates ignored
//!
//! [`ReactionLog`] pairs the two for the common case of feeding every incoming sample to both.
//!
//! Empty structures report `None` rather than a reserved sample value.
//!
//! # Features
//!
//! - `std` (default): link the standard library. Without it the crate is `no_std` + `alloc`.
//! - `membership-index`: O(1) duplicate detection in [`DistinctMinHeap`] through an auxiliary
//!   hash set.
//!
//! # Example
//!
//! ```rust
//! use reaction_buffers::{DistinctMinHeap, EventQueue};
//!
//! let mut queue = EventQueue::new();
//! let mut heap = DistinctMinHeap::new();
//!
//! for ms in [310, 275, 310, 290] {
//!     queue.add(ms);
//!     heap.insert(ms as f32);
//! }
//!
//! assert_eq!(queue.pop(), Some(310));
//! assert_eq!(heap.min(), Some(275.0));
//! assert_eq!(heap.len(), 3);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod distinct_heap;
pub mod error;
pub mod event_queue;
pub mod recorder;
mod storage;

pub use distinct_heap::DistinctMinHeap;
pub use error::SampleError;
pub use event_queue::EventQueue;
pub use recorder::ReactionLog;
