//! Deduplicating binary min-heap
//!
//! [`DistinctMinHeap`] keeps the set of distinct real-valued samples seen so
//! far, ordered as an array-backed binary min-heap: the parent of index `i`
//! is `(i - 1) / 2`, its children are `2i + 1` and `2i + 2`, and every parent
//! is `<=` its children. A sample already present is silently ignored.
//!
//! Duplicate detection is a linear scan by default. With the
//! `membership-index` feature an auxiliary hash set makes it O(1); extraction
//! order and duplicate rejection are identical either way.
//!
//! Samples compare with IEEE `==`, so `0.0` and `-0.0` are one sample. NaN is
//! never stored.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity                          |
//! |---------------|-------------------------------------|
//! | `insert`      | O(n) scan + O(log n), or O(log n) indexed |
//! | `extract_min` | O(log n)                            |
//! | `min`         | O(1)                                |
//!
//! # Example
//!
//! ```rust
//! use reaction_buffers::DistinctMinHeap;
//!
//! let mut heap = DistinctMinHeap::new();
//! heap.insert(3.0);
//! heap.insert(1.0);
//! heap.insert(1.0); // duplicate, ignored
//! heap.insert(2.0);
//!
//! assert_eq!(heap.len(), 3);
//! assert_eq!(heap.extract_min(), Some(1.0));
//! assert_eq!(heap.extract_min(), Some(2.0));
//! assert_eq!(heap.extract_min(), Some(3.0));
//! assert_eq!(heap.extract_min(), None);
//! ```

use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "membership-index")]
use rustc_hash::FxHashSet;

use crate::error::SampleError;

/// A binary min-heap over distinct `f32` samples
#[derive(Clone, Default)]
pub struct DistinctMinHeap {
    /// Heap-ordered samples
    data: Vec<f32>,
    /// Bit patterns of the samples in `data`, zero normalized to `+0.0`
    #[cfg(feature = "membership-index")]
    index: FxHashSet<u32>,
}

#[cfg(feature = "membership-index")]
#[inline]
fn membership_key(sample: f32) -> u32 {
    if sample == 0.0 {
        0.0f32.to_bits()
    } else {
        sample.to_bits()
    }
}

impl DistinctMinHeap {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap with room for `capacity` samples
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            #[cfg(feature = "membership-index")]
            index: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Inserts a sample unless an equal one is already present
    ///
    /// Returns whether the sample was added. Duplicates and NaN are ignored;
    /// use [`try_insert`](Self::try_insert) to tell them apart.
    pub fn insert(&mut self, sample: f32) -> bool {
        match self.try_insert(sample) {
            Ok(added) => added,
            Err(err) => {
                log::warn!("distinct heap: dropped sample: {}", err);
                false
            }
        }
    }

    /// Inserts a sample unless an equal one is already present
    ///
    /// Returns `Ok(false)` for a duplicate.
    ///
    /// # Errors
    /// Returns [`SampleError::NotANumber`] if `sample` is NaN.
    pub fn try_insert(&mut self, sample: f32) -> Result<bool, SampleError> {
        if sample.is_nan() {
            return Err(SampleError::NotANumber);
        }
        if self.contains(sample) {
            log::debug!("distinct heap: ignored duplicate {}", sample);
            return Ok(false);
        }

        #[cfg(feature = "membership-index")]
        self.index.insert(membership_key(sample));

        self.data.push(sample);
        self.sift_up(self.data.len() - 1);

        log::trace!("distinct heap: inserted {} (len {})", sample, self.data.len());
        Ok(true)
    }

    /// Returns true if a sample equal to `sample` is stored
    #[cfg(not(feature = "membership-index"))]
    pub fn contains(&self, sample: f32) -> bool {
        self.data.iter().any(|&v| v == sample)
    }

    /// Returns true if a sample equal to `sample` is stored
    #[cfg(feature = "membership-index")]
    pub fn contains(&self, sample: f32) -> bool {
        !sample.is_nan() && self.index.contains(&membership_key(sample))
    }

    /// Removes and returns the smallest sample
    ///
    /// The last element takes the root's place and is sifted down.
    pub fn extract_min(&mut self) -> Option<f32> {
        if self.data.is_empty() {
            return None;
        }

        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }

        #[cfg(feature = "membership-index")]
        self.index.remove(&membership_key(min));

        log::trace!("distinct heap: extracted {} (len {})", min, self.data.len());
        Some(min)
    }

    /// Returns the smallest sample without removing it
    pub fn min(&self) -> Option<f32> {
        self.data.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of distinct samples stored
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn clear(&mut self) {
        self.data.clear();
        #[cfg(feature = "membership-index")]
        self.index.clear();
    }

    /// Iterates samples in heap (array) order, which is not sorted
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, f32>> {
        self.data.iter().copied()
    }

    /// Consumes the heap, returning its samples in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<f32> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(sample) = self.extract_min() {
            sorted.push(sample);
        }
        sorted
    }

    /// Writes the contents in array order, space separated, followed by a newline
    pub fn dump<W: fmt::Write>(&self, sink: &mut W) -> fmt::Result {
        writeln!(sink, "{}", self)
    }

    /// Checks the min-heap property and sample uniqueness
    pub fn verify_heap_property(&self) -> bool {
        let ordered = (1..self.data.len()).all(|i| self.data[(i - 1) / 2] <= self.data[i]);
        let distinct = self
            .data
            .iter()
            .enumerate()
            .all(|(i, a)| self.data[i + 1..].iter().all(|b| a != b));

        #[cfg(feature = "membership-index")]
        let indexed = self.index.len() == self.data.len()
            && self
                .data
                .iter()
                .all(|&v| self.index.contains(&membership_key(v)));
        #[cfg(not(feature = "membership-index"))]
        let indexed = true;

        ordered && distinct && indexed
    }

    /// Move element at index up while its parent is strictly greater
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index] < self.data[parent] {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while a child is strictly smaller
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.data[left] < self.data[smallest] {
                smallest = left;
            }
            if right < len && self.data[right] < self.data[smallest] {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl fmt::Display for DistinctMinHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut samples = self.data.iter();
        if let Some(first) = samples.next() {
            write!(f, "{}", first)?;
            for sample in samples {
                write!(f, " {}", sample)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for DistinctMinHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl Extend<f32> for DistinctMinHeap {
    fn extend<I: IntoIterator<Item = f32>>(&mut self, iter: I) {
        for sample in iter {
            self.insert(sample);
        }
    }
}

impl FromIterator<f32> for DistinctMinHeap {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        let mut heap = DistinctMinHeap::new();
        heap.extend(iter);
        heap
    }
}
