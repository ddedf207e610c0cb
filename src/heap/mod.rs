use crate::order::{Comparator, NaturalOrder};

/// Capacity used when none is given. Of the form (2^n)-1.
pub const DEFAULT_CAPACITY: usize = 127;

/// Array backed binary min-heap.
///
/// The tree is laid out implicitly in `storage`: the root sits at index 0,
/// the children of `i` at `2i+1` and `2i+2`. Only the first `len()` slots
/// are occupied. `capacity` is always of the form (2^n)-1 and grows to
/// `2 * capacity + 1` when `allow_grow` is set.
pub struct BinaryHeap <T, C = NaturalOrder> {
    pub(crate) storage: Vec<T>,
    pub(crate) capacity: usize,
    pub(crate) comparator: C,
    pub(crate) allow_grow: bool,
}

mod construct;
mod property;
mod push;
mod pop;
mod extend;

pub mod builder;

#[cfg(test)]
mod tests;

#[inline]
pub(crate) const fn parent(index: usize) -> usize {
    (index - 1) >> 1
}

#[inline]
pub(crate) const fn left_child(index: usize) -> usize {
    (index << 1) + 1
}

/// Capacities accepted by the heap: positive and (2^n)-1.
#[inline]
pub const fn is_valid_capacity(capacity: usize) -> bool {
    capacity != 0 && (capacity & capacity.wrapping_add(1)) == 0
}

impl <T, C: Comparator<T>> BinaryHeap<T, C> {
    /// Checks the heap order over every occupied slot.
    pub fn is_heap(&self) -> bool {
        (1..self.storage.len()).all(|i| {
            self.comparator.compare(&self.storage[parent(i)], &self.storage[i])
                != std::cmp::Ordering::Greater
        })
    }
}

#[test]
fn index_arithmetic() {
    assert_eq!(left_child(0), 1);
    assert_eq!(left_child(1), 3);
    assert_eq!(left_child(2), 5);
    assert_eq!(parent(1), 0);
    assert_eq!(parent(2), 0);
    assert_eq!(parent(5), 2);
    assert_eq!(parent(6), 2);
}

#[test]
fn capacity_shape() {
    for ok in [1, 3, 7, 15, 31, 127, 1023, usize::MAX] {
        assert!(is_valid_capacity(ok), "{ok}");
    }
    for bad in [0, 2, 4, 5, 6, 10, 100, 128] {
        assert!(!is_valid_capacity(bad), "{bad}");
    }
}
