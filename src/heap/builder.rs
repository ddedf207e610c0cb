//! Configuration of a [`BinaryHeap`] before it is built.
//!
//! ```
//! use pqlib::{BinaryHeap, HeapBuilder};
//!
//! let mut heap: BinaryHeap<i32, _> = HeapBuilder::new()
//!     .capacity(3)
//!     .allow_grow(true)
//!     .comparator(|a: &i32, b: &i32| b.cmp(a))
//!     .build()
//!     .unwrap();
//! for i in 0..5 {
//!     heap.insert(i).unwrap();
//! }
//! assert_eq!(heap.capacity(), 7);
//! assert_eq!(heap.poll(), Some(4));
//! ```

use super::{BinaryHeap, DEFAULT_CAPACITY};
use crate::error::Result;
#[cfg(test)]
use crate::error::HeapError;
use crate::order::{Comparator, NaturalOrder};

#[derive(Debug, Clone)]
pub struct HeapBuilder <C = NaturalOrder> {
    capacity: usize,
    allow_grow: bool,
    comparator: C,
}

impl HeapBuilder {
    pub fn new() -> Self {
        HeapBuilder {
            capacity: DEFAULT_CAPACITY,
            allow_grow: false,
            comparator: NaturalOrder,
        }
    }
}

impl Default for HeapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl <C> HeapBuilder<C> {
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn allow_grow(mut self, allow_grow: bool) -> Self {
        self.allow_grow = allow_grow;
        self
    }

    pub fn comparator<C2>(self, comparator: C2) -> HeapBuilder<C2> {
        HeapBuilder {
            capacity: self.capacity,
            allow_grow: self.allow_grow,
            comparator,
        }
    }

    pub fn build<T>(self) -> Result<BinaryHeap<T, C>>
    where
        C: Comparator<T>,
    {
        let mut heap = BinaryHeap::with_capacity_and_comparator(self.capacity, self.comparator)?;
        heap.set_allow_grow(self.allow_grow);
        Ok(heap)
    }
}

#[test]
fn builder_defaults() {
    let heap: BinaryHeap<i32> = HeapBuilder::new().build().unwrap();
    assert_eq!(heap.capacity(), DEFAULT_CAPACITY);
    assert!(!heap.allow_grow());
}

#[test]
fn builder_rejects_capacity() {
    let heap: Result<BinaryHeap<i32>> = HeapBuilder::new().capacity(12).build();
    assert_eq!(heap.err(), Some(HeapError::InvalidCapacity(12)));
}

#[test]
fn builder_grows() {
    let mut heap: BinaryHeap<i32> = HeapBuilder::new().capacity(1).allow_grow(true).build().unwrap();
    heap.insert(2).unwrap();
    heap.insert(1).unwrap();
    assert_eq!(heap.capacity(), 3);
    assert_eq!(heap.poll(), Some(1));
}

#[test]
fn builder_rejects_unreservable_capacity() {
    let heap: Result<BinaryHeap<u32>> = HeapBuilder::new().capacity(usize::MAX).allow_grow(true).build();
    assert_eq!(heap.err(), Some(HeapError::InvalidCapacity(usize::MAX)));
}
