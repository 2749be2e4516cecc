//! Kani verification proofs for both buffers
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani --tests

#[cfg(kani)]
use reaction_buffers::{DistinctMinHeap, EventQueue};

/// Proof that add always increments the length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_add_increments_len() {
    let mut queue = EventQueue::new();
    queue.add(kani::any());
    let initial_len = queue.len();

    queue.add(kani::any());

    assert!(queue.len() == initial_len + 1);
    assert!(queue.verify_links());
}

/// Proof that samples come out in the order they went in
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_fifo_order() {
    let a: i32 = kani::any();
    let b: i32 = kani::any();
    let c: i32 = kani::any();

    let mut queue = EventQueue::new();
    queue.add(a);
    queue.add(b);
    queue.add(c);

    assert!(queue.pop() == Some(a));
    assert!(queue.pop() == Some(b));
    assert!(queue.pop() == Some(c));
    assert!(queue.pop().is_none());
    assert!(queue.len() == 0);
}

/// Proof that popping an empty queue changes nothing
#[cfg(kani)]
#[kani::proof]
fn verify_pop_empty_queue() {
    let mut queue = EventQueue::new();
    assert!(queue.pop().is_none());
    assert!(queue.len() == 0);
    assert!(queue.verify_links());
}

/// Proof that insert grows the heap by at most one
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_insert_grows_by_at_most_one() {
    let mut heap = DistinctMinHeap::new();
    heap.insert(kani::any());
    heap.insert(kani::any());
    let before = heap.len();

    let sample: f32 = kani::any();
    let added = heap.insert(sample);

    assert!(heap.len() == before + usize::from(added));
    assert!(heap.len() <= 3);
}

/// Proof that min returns the minimum of distinct inserts
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_min_is_minimum() {
    let a: f32 = kani::any();
    let b: f32 = kani::any();
    let c: f32 = kani::any();
    kani::assume(!a.is_nan() && !b.is_nan() && !c.is_nan());

    let mut heap = DistinctMinHeap::new();
    heap.insert(a);
    heap.insert(b);
    heap.insert(c);

    if let Some(min) = heap.min() {
        assert!(min <= a && min <= b && min <= c);
        assert!(heap.extract_min() == Some(min));
    }
}

/// Proof that an empty heap reports no minimum
#[cfg(kani)]
#[kani::proof]
fn verify_empty_heap_has_no_min() {
    let mut heap = DistinctMinHeap::new();
    assert!(heap.min().is_none());
    assert!(heap.extract_min().is_none());
    assert!(heap.is_empty());
}
