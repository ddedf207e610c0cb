use std::cmp::Ordering;

use super::{left_child, BinaryHeap};
use crate::order::Comparator;

impl <T, C: Comparator<T>> BinaryHeap<T, C> {
    /// Removes and returns the highest priority element.
    pub fn poll(&mut self) -> Option<T> {
        let last = self.storage.pop()?;
        if self.storage.is_empty() {
            return Some(last);
        }
        let root = std::mem::replace(&mut self.storage[0], last);
        self.sift_down(0);
        Some(root)
    }

    /// Moves the element at `index` toward the leaves while its better child
    /// has strictly higher priority. On a tie between children the left one
    /// is taken; a tie with the better child stops the descent.
    fn sift_down(&mut self, index: usize) {
        let slice = &mut self.storage[..];
        let len = slice.len();
        let mut index = index;
        loop {
            let lindex = left_child(index);
            if lindex >= len {
                break;
            }
            let rindex = lindex + 1;
            let mut swap_index = lindex;
            if rindex < len
                && self.comparator.compare(&slice[rindex], &slice[lindex]) == Ordering::Less
            {
                swap_index = rindex;
            }
            if self.comparator.compare(&slice[index], &slice[swap_index]) != Ordering::Greater {
                break;
            }
            slice.swap(index, swap_index);
            index = swap_index;
        }
    }

    /// Drains the heap, returning the elements in the order `poll` yields them.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        while let Some(item) = self.poll() {
            vec.push(item);
        }
        vec
    }
}

#[test]
fn poll_empty() {
    let mut heap: BinaryHeap<i32> = BinaryHeap::with_capacity(31).unwrap();
    assert_eq!(heap.poll(), None);
    assert_eq!(heap.get_size(), 0);
}

#[test]
fn poll_only_element() {
    let mut heap: BinaryHeap<&str> = BinaryHeap::with_capacity(15).unwrap();
    heap.insert("foo").unwrap();
    assert_eq!(heap.poll(), Some("foo"));
    assert_eq!(heap.get_size(), 0);
    assert!(heap.is_empty());
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.poll(), None);
}

#[test]
fn poll_single_child() {
    let mut heap: BinaryHeap<i32> = BinaryHeap::with_capacity(3).unwrap();
    heap.insert(1).unwrap();
    heap.insert(3).unwrap();
    heap.insert(2).unwrap();
    assert_eq!(heap.poll(), Some(1));
    assert_eq!(heap.peek(), Some(&2));
    assert!(heap.is_heap());
    assert_eq!(heap.poll(), Some(2));
    assert_eq!(heap.poll(), Some(3));
    assert_eq!(heap.poll(), None);
}

#[test]
fn sorted_vec() {
    let mut heap: BinaryHeap<u32> = BinaryHeap::with_capacity(15).unwrap();
    for i in [5, 3, 9, 1, 7] {
        heap.insert(i).unwrap();
    }
    assert_eq!(heap.into_sorted_vec(), vec![1, 3, 5, 7, 9]);
}
