//! Ordered event queue
//!
//! A doubly linked FIFO of integer timing samples. Samples are appended at
//! the tail and removed from the head, both in O(1); there is no random
//! access and no removal of interior nodes.
//!
//! Nodes live in an arena owned by the queue. The `next`/`prev`
//! links are arena keys, so a popped node is freed exactly once and can
//! never be reached again through a stale link.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `add`     | O(1)       |
//! | `pop`     | O(1)       |
//! | `front`   | O(1)       |
//! | `clear`   | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use reaction_buffers::EventQueue;
//!
//! let mut queue = EventQueue::new();
//! queue.add(5);
//! queue.add(2);
//! queue.add(9);
//!
//! assert_eq!(queue.pop(), Some(5));
//! assert_eq!(queue.pop(), Some(2));
//! assert_eq!(queue.pop(), Some(9));
//! assert_eq!(queue.pop(), None);
//! ```

use core::fmt;
use core::iter::FusedIterator;

use crate::storage::{Node, NodeArena, NodeKey};

/// FIFO queue of reaction-time samples
#[derive(Clone, Default)]
pub struct EventQueue {
    nodes: NodeArena,
    head: Option<NodeKey>,
    tail: Option<NodeKey>,
    count: usize,
}

impl EventQueue {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue that can hold `capacity` samples without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: NodeArena::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Appends a sample at the tail
    pub fn add(&mut self, sample: i32) {
        let mut node = Node::new(sample);
        node.prev = self.tail;
        let key = self.nodes.insert(node);

        match self.tail {
            Some(old_tail) => {
                if let Some(old) = self.nodes.get_mut(old_tail) {
                    old.next = Some(key);
                }
            }
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        self.count += 1;

        log::trace!("event queue: added {} (len {})", sample, self.count);
    }

    /// Removes and returns the oldest sample
    ///
    /// Returns `None` when the queue is empty; the queue is left unchanged.
    pub fn pop(&mut self) -> Option<i32> {
        let head = self.head?;
        let node = self.nodes.remove(head)?;

        self.head = node.next;
        match self.head {
            Some(new_head) => {
                if let Some(next) = self.nodes.get_mut(new_head) {
                    next.prev = None;
                }
            }
            None => self.tail = None,
        }
        self.count -= 1;

        log::trace!("event queue: popped {} (len {})", node.value, self.count);
        Some(node.value)
    }

    /// Returns the oldest sample without removing it
    pub fn front(&self) -> Option<i32> {
        self.head.and_then(|k| self.nodes.get(k)).map(Node::value)
    }

    /// Returns the newest sample without removing it
    pub fn back(&self) -> Option<i32> {
        self.tail.and_then(|k| self.nodes.get(k)).map(Node::value)
    }

    /// Number of samples in the queue
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Drops every sample
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.count = 0;
    }

    /// Iterates samples from head (oldest) to tail (newest)
    ///
    /// Iterating from the back follows the `prev` links.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.count,
        }
    }

    /// Checks the link structure of the queue
    ///
    /// Returns true when:
    /// - `len() == 0` iff there is no head iff there is no tail
    /// - the head has no `prev` and the tail has no `next`
    /// - for adjacent nodes A→B, `A.next == B` iff `B.prev == A`
    /// - walking from the head reaches the tail after exactly `len()` nodes
    ///   and every live arena node is visited
    pub fn verify_links(&self) -> bool {
        match (self.head, self.tail) {
            (None, None) => return self.count == 0 && self.nodes.is_empty(),
            (Some(_), Some(_)) if self.count > 0 => {}
            _ => return false,
        }

        let mut prev: Option<NodeKey> = None;
        let mut cursor = self.head;
        let mut visited = 0usize;

        while let Some(key) = cursor {
            // More steps than nodes means a cycle
            if visited >= self.count {
                return false;
            }
            let Some(node) = self.nodes.get(key) else {
                return false;
            };
            if node.prev != prev {
                return false;
            }
            visited += 1;
            prev = Some(key);
            cursor = node.next;
        }

        visited == self.count && prev == self.tail && self.nodes.len() == self.count
    }
}

impl fmt::Debug for EventQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for EventQueue {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for EventQueue {}

impl Extend<i32> for EventQueue {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for sample in iter {
            self.add(sample);
        }
    }
}

impl FromIterator<i32> for EventQueue {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut queue = EventQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<'a> IntoIterator for &'a EventQueue {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for EventQueue {
    type Item = i32;
    type IntoIter = IntoIter;

    /// Consumes the queue, yielding samples in arrival order
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

/// Borrowing iterator over an [`EventQueue`], head to tail
#[derive(Clone)]
pub struct Iter<'a> {
    nodes: &'a NodeArena,
    front: Option<NodeKey>,
    back: Option<NodeKey>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<i32> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(node.value)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Owning iterator over an [`EventQueue`], popping from the head
pub struct IntoIter {
    queue: EventQueue,
}

impl Iterator for IntoIter {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}
