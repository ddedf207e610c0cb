use std::cmp::Ordering;

use log::debug;

use super::{parent, BinaryHeap};
use crate::error::{HeapError, Result};
use crate::order::Comparator;

impl <T, C: Comparator<T>> BinaryHeap<T, C> {
    /// Inserts `element`, growing first when the heap is full and allowed to.
    ///
    /// On [`HeapError::Full`] the heap is left untouched and `element` is
    /// dropped.
    pub fn insert(&mut self, element: T) -> Result<()> {
        if self.storage.len() == self.capacity {
            if !self.allow_grow {
                debug!("insert rejected, heap full at capacity {}", self.capacity);
                return Err(HeapError::Full { capacity: self.capacity });
            }
            self.grow()?;
        }
        self.storage.push(element);
        self.sift_up(self.storage.len() - 1);
        Ok(())
    }

    /// Moves the element at `index` toward the root while it has strictly
    /// higher priority than its parent.
    fn sift_up(&mut self, index: usize) {
        debug_assert!(index < self.storage.len());
        let slice = &mut self.storage[..];
        let mut index = index;
        while index != 0 {
            let pindex = parent(index);
            if self.comparator.compare(&slice[index], &slice[pindex]) != Ordering::Less {
                break;
            }
            slice.swap(index, pindex);
            index = pindex;
        }
    }
}

#[test]
fn insert_one() {
    let mut heap: BinaryHeap<&str> = BinaryHeap::with_capacity(31).unwrap();
    heap.insert("foo").unwrap();
    assert_eq!(heap.get_size(), 1);
    assert!(!heap.is_empty());
    assert_eq!(heap.peek(), Some(&"foo"));
}

#[test]
fn insert_larger_keeps_root() {
    let mut heap: BinaryHeap<&str> = BinaryHeap::with_capacity(15).unwrap();
    heap.insert("foo").unwrap();
    heap.insert("larger_than_foo").unwrap();
    assert_eq!(heap.get_size(), 2);
    assert_eq!(heap.peek(), Some(&"foo"));
}

#[test]
fn insert_smaller_becomes_root() {
    let mut heap: BinaryHeap<&str> = BinaryHeap::with_capacity(15).unwrap();
    heap.insert("foo").unwrap();
    heap.insert("before_foo").unwrap();
    assert_eq!(heap.get_size(), 2);
    assert_eq!(heap.peek(), Some(&"before_foo"));
}

#[test]
fn insert_tie_does_not_move() {
    let mut heap = BinaryHeap::with_capacity_and_comparator(7, |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0)).unwrap();
    heap.insert((1, 'a')).unwrap();
    heap.insert((1, 'b')).unwrap();
    assert_eq!(heap.peek(), Some(&(1, 'a')));
    assert!(heap.is_heap());
}

#[test]
fn insert_full() {
    let mut heap: BinaryHeap<i32> = BinaryHeap::with_capacity(3).unwrap();
    for i in 1..=3 {
        heap.insert(i).unwrap();
    }
    assert_eq!(heap.insert(4), Err(HeapError::Full { capacity: 3 }));
    assert_eq!(heap.get_size(), 3);
    assert_eq!(heap.capacity(), 3);
}
