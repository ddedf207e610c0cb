use std::fmt;

use super::BinaryHeap;

impl <T, C> BinaryHeap<T, C> {
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    pub fn get_size(&self) -> usize {
        self.len()
    }
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn allow_grow(&self) -> bool {
        self.allow_grow
    }
}

impl <T, C> BinaryHeap<T, C> {
    /// The element that the next `poll` returns.
    pub fn peek(&self) -> Option<&T> {
        self.storage.first()
    }
    /// Occupied slots in storage order, not in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.iter()
    }
}

impl <'a, T, C> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl <T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("size", &self.len())
            .field("capacity", &self.capacity)
            .field("allow_grow", &self.allow_grow)
            .field("storage", &self.storage)
            .finish()
    }
}

#[test]
fn empty_properties() {
    let heap: BinaryHeap<i32> = BinaryHeap::with_capacity(31).unwrap();
    assert_eq!(heap.get_size(), 0);
    assert!(heap.is_empty());
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.iter().count(), 0);
}

#[test]
fn debug_output() {
    let mut heap: BinaryHeap<i32> = BinaryHeap::with_capacity(3).unwrap();
    heap.insert(2).unwrap();
    let text = format!("{heap:?}");
    assert!(text.contains("capacity: 3"));
    assert!(text.contains("storage: [2]"));
}
