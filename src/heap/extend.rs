use log::debug;

use super::BinaryHeap;
use crate::error::{HeapError, Result};

impl <T, C> BinaryHeap<T, C> {
    pub fn set_allow_grow(&mut self, allow_grow: bool) {
        self.allow_grow = allow_grow;
    }

    /// Raises the capacity to `2 * capacity + 1`, keeping it (2^n)-1.
    ///
    /// Fails with [`HeapError::Full`], leaving the heap unchanged, when the
    /// new capacity does not fit in a `usize` or cannot be reserved.
    pub(crate) fn grow(&mut self) -> Result<()> {
        let capacity = self
            .capacity
            .checked_mul(2)
            .and_then(|c| c.checked_add(1))
            .ok_or(HeapError::Full { capacity: self.capacity })?;
        let additional = capacity - self.storage.len();
        self.storage
            .try_reserve_exact(additional)
            .map_err(|_| HeapError::Full { capacity: self.capacity })?;
        debug!("heap grown: capacity {} -> {}", self.capacity, capacity);
        self.capacity = capacity;
        Ok(())
    }
}

#[test]
fn grow_doubles_plus_one() {
    let mut heap: BinaryHeap<i32> = BinaryHeap::with_capacity(3).unwrap();
    heap.grow().unwrap();
    assert_eq!(heap.capacity(), 7);
    assert!(heap.storage.capacity() >= 7);
    heap.grow().unwrap();
    assert_eq!(heap.capacity(), 15);
    assert!(super::is_valid_capacity(heap.capacity()));
}

#[test]
fn grow_overflow() {
    let mut heap: BinaryHeap<()> = BinaryHeap::with_capacity(usize::MAX).unwrap();
    assert_eq!(heap.grow(), Err(HeapError::Full { capacity: usize::MAX }));
    assert_eq!(heap.capacity(), usize::MAX);
}

#[test]
fn toggle_grow() {
    let mut heap: BinaryHeap<i32> = BinaryHeap::with_capacity(1).unwrap();
    heap.insert(1).unwrap();
    assert!(heap.insert(2).is_err());
    heap.set_allow_grow(true);
    heap.insert(2).unwrap();
    assert_eq!(heap.capacity(), 3);
    assert_eq!(heap.get_size(), 2);
}

#[test]
fn grow_unreservable() {
    let capacity = usize::MAX >> 1;
    let mut heap: BinaryHeap<u64> = BinaryHeap {
        storage: vec![4, 9],
        capacity,
        comparator: crate::order::NaturalOrder,
        allow_grow: true,
    };
    assert_eq!(heap.grow(), Err(HeapError::Full { capacity }));
    assert_eq!(heap.capacity(), capacity);
    assert_eq!(heap.get_size(), 2);
    assert_eq!(heap.peek(), Some(&4));
}
