use super::*;
use crate::error::HeapError;
use crate::order::{by_sign, ReverseOrder};

mod pop_test;
mod random_test;
mod iter;

pub(crate) const SCENARIO: [i32; 9] = [10, 70, 30, 20, 80, 40, 50, 90, 60];

pub(crate) fn drain<T, C: crate::order::Comparator<T>>(heap: &mut BinaryHeap<T, C>) -> Vec<T> {
    let mut out = Vec::new();
    while !heap.is_empty() {
        out.extend(heap.poll());
    }
    out
}
