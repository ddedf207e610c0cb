use log::trace;

use super::{is_valid_capacity, BinaryHeap, DEFAULT_CAPACITY};
use crate::error::{HeapError, Result};
use crate::order::{Comparator, NaturalOrder};

impl <T: PartialOrd> BinaryHeap<T> {
    /// Heap of capacity [`DEFAULT_CAPACITY`] ordered smallest first.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl <T: PartialOrd> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl <T, C: Comparator<T>> BinaryHeap<T, C> {
    pub fn with_comparator(comparator: C) -> Self {
        trace!("new heap: capacity {}", DEFAULT_CAPACITY);
        BinaryHeap {
            storage: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
            comparator,
            allow_grow: false,
        }
    }

    /// Fails with [`HeapError::InvalidCapacity`] unless `capacity` is
    /// positive, of the form (2^n)-1 and small enough to be reserved.
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Result<Self> {
        if !is_valid_capacity(capacity) {
            return Err(HeapError::InvalidCapacity(capacity));
        }
        let mut storage = Vec::new();
        storage
            .try_reserve_exact(capacity)
            .map_err(|_| HeapError::InvalidCapacity(capacity))?;
        trace!("new heap: capacity {capacity}");
        Ok(BinaryHeap {
            storage,
            capacity,
            comparator,
            allow_grow: false,
        })
    }
}

#[test]
fn test_new() {
    let heap: BinaryHeap<i32> = BinaryHeap::new();
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.capacity(), DEFAULT_CAPACITY);
    assert!(!heap.allow_grow());
    assert!(heap.storage.capacity() >= DEFAULT_CAPACITY);
}

#[test]
fn test_with_capacity() {
    let heap: BinaryHeap<String> = BinaryHeap::with_capacity(31).unwrap();
    assert_eq!(heap.capacity(), 31);
    assert!(heap.is_empty());
}

#[test]
fn test_invalid_capacity() {
    for bad in [0, 2, 4, 10, 100] {
        let heap: Result<BinaryHeap<u8>> = BinaryHeap::with_capacity(bad);
        assert_eq!(heap.err(), Some(HeapError::InvalidCapacity(bad)));
    }
}

#[test]
fn test_with_comparator() {
    let heap: BinaryHeap<i32, _> = BinaryHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    assert_eq!(heap.capacity(), DEFAULT_CAPACITY);
    let heap: Result<BinaryHeap<i32, _>> =
        BinaryHeap::with_capacity_and_comparator(6, crate::order::ReverseOrder);
    assert!(matches!(heap, Err(HeapError::InvalidCapacity(6))));
}

#[test]
fn test_capacity_too_large_to_reserve() {
    let heap: Result<BinaryHeap<u64>> = BinaryHeap::with_capacity(usize::MAX);
    assert_eq!(heap.err(), Some(HeapError::InvalidCapacity(usize::MAX)));
    let half = usize::MAX >> 1;
    let heap: Result<BinaryHeap<u64>> = BinaryHeap::with_capacity(half);
    assert_eq!(heap.err(), Some(HeapError::InvalidCapacity(half)));
}

#[test]
fn test_zero_sized_huge_capacity() {
    let heap: BinaryHeap<()> = BinaryHeap::with_capacity(usize::MAX).unwrap();
    assert_eq!(heap.capacity(), usize::MAX);
}
