//! Reaction log: one sample stream feeding both buffers
//!
//! A measurement loop records each reaction time once. The queue keeps the
//! arrival order for processing; the heap keeps the distinct values so the
//! best (smallest) time is available without re-scanning history.
//!
//! ```rust
//! use reaction_buffers::ReactionLog;
//!
//! let mut log = ReactionLog::new();
//! log.record(312);
//! log.record(250);
//! log.record(312);
//!
//! assert_eq!(log.best(), Some(250.0));
//! assert_eq!(log.pending(), 3);
//! assert_eq!(log.distinct(), 2);
//! assert_eq!(log.next_event(), Some(312));
//! ```

use crate::distinct_heap::DistinctMinHeap;
use crate::error::SampleError;
use crate::event_queue::EventQueue;

#[derive(Debug, Clone, Default)]
pub struct ReactionLog {
    queue: EventQueue,
    heap: DistinctMinHeap,
}

impl ReactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: EventQueue::with_capacity(capacity),
            heap: DistinctMinHeap::with_capacity(capacity),
        }
    }

    /// Records a reaction time in milliseconds
    ///
    /// A sample the heap cannot hold exactly is dropped from both buffers
    /// and logged; use [`try_record`](Self::try_record) to observe that.
    pub fn record(&mut self, ms: i32) {
        if let Err(err) = self.try_record(ms) {
            log::warn!("reaction log: dropped sample: {}", err);
        }
    }

    /// Records a reaction time in milliseconds
    ///
    /// # Errors
    /// Returns [`SampleError::Unrepresentable`] if `ms` does not convert to
    /// `f32` exactly. Neither buffer is touched in that case.
    pub fn try_record(&mut self, ms: i32) -> Result<(), SampleError> {
        let sample = ms as f32;
        // Widened so the saturating cast cannot map 2^31 back onto i32::MAX
        if sample as i64 != i64::from(ms) {
            return Err(SampleError::Unrepresentable(ms));
        }
        self.queue.add(ms);
        self.heap.insert(sample);
        Ok(())
    }

    /// Next unprocessed sample in arrival order
    pub fn next_event(&mut self) -> Option<i32> {
        self.queue.pop()
    }

    /// Smallest time recorded so far
    ///
    /// Processing events with [`next_event`](Self::next_event) does not
    /// forget them here.
    pub fn best(&self) -> Option<f32> {
        self.heap.min()
    }

    /// Samples not yet taken with [`next_event`](Self::next_event)
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Distinct times recorded
    pub fn distinct(&self) -> usize {
        self.heap.len()
    }

    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }

    pub fn heap(&self) -> &DistinctMinHeap {
        &self.heap
    }

    pub fn into_parts(self) -> (EventQueue, DistinctMinHeap) {
        (self.queue, self.heap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_feeds_both() {
        let mut log = ReactionLog::with_capacity(4);
        log.record(400);
        log.record(180);
        log.record(400);
        log.record(220);

        assert_eq!(log.pending(), 4);
        assert_eq!(log.distinct(), 3);
        assert_eq!(log.best(), Some(180.0));

        assert_eq!(log.next_event(), Some(400));
        assert_eq!(log.next_event(), Some(180));
        assert_eq!(log.best(), Some(180.0));
        assert_eq!(log.pending(), 2);
    }

    #[test]
    fn test_record_at_f32_precision_limit() {
        const LIMIT: i32 = 1 << 24;
        let mut log = ReactionLog::new();

        assert_eq!(log.try_record(LIMIT), Ok(()));
        assert_eq!(
            log.try_record(LIMIT + 1),
            Err(SampleError::Unrepresentable(LIMIT + 1))
        );
        assert_eq!(
            log.try_record(-LIMIT - 1),
            Err(SampleError::Unrepresentable(-LIMIT - 1))
        );
        // Above 2^24 only even values are exact
        assert_eq!(log.try_record(LIMIT + 2), Ok(()));

        assert_eq!(log.pending(), 2);
        assert_eq!(log.distinct(), 2);
        assert_eq!(log.best(), Some(LIMIT as f32));
        assert_eq!(log.next_event(), Some(LIMIT));
        assert_eq!(log.next_event(), Some(LIMIT + 2));
        assert_eq!(log.next_event(), None);
    }

    #[test]
    fn test_record_skips_unrepresentable_sample() {
        let mut log = ReactionLog::new();
        log.record(16_777_216);
        log.record(16_777_217);

        // Both buffers see the same samples
        assert_eq!(log.pending(), 1);
        assert_eq!(log.distinct(), 1);
        assert_eq!(log.best(), Some(16_777_216.0));
        assert_eq!(log.next_event(), Some(16_777_216));
        assert_eq!(log.next_event(), None);
    }

    #[test]
    fn test_record_extreme_values() {
        let mut log = ReactionLog::new();
        assert_eq!(log.try_record(i32::MIN), Ok(()));
        assert_eq!(
            log.try_record(i32::MAX),
            Err(SampleError::Unrepresentable(i32::MAX))
        );
        assert_eq!(log.best(), Some(i32::MIN as f32));
        assert_eq!(log.pending(), 1);
    }

    #[test]
    fn test_empty_log() {
        let mut log = ReactionLog::new();
        assert_eq!(log.next_event(), None);
        assert_eq!(log.best(), None);
        assert_eq!(log.pending(), 0);
        assert_eq!(log.distinct(), 0);
    }

    #[test]
    fn test_into_parts() {
        let mut log = ReactionLog::new();
        log.record(3);
        log.record(1);

        let (queue, heap) = log.into_parts();
        assert_eq!(queue.iter().collect::<alloc::vec::Vec<_>>(), [3, 1]);
        assert_eq!(heap.into_sorted_vec(), [1.0, 3.0]);
    }
}
