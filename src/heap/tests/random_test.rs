use std::cmp::Reverse;

use rand::random;

use super::*;

#[test]
fn random_against_std() {
    for _ in 0..200 {
        let mut pq: BinaryHeap<u16> = BinaryHeap::with_capacity(7).unwrap();
        pq.set_allow_grow(true);
        let mut reference = std::collections::BinaryHeap::new();
        for _ in 0..300 {
            if random::<u8>() % 3 == 0 {
                assert_eq!(pq.poll(), reference.pop().map(|Reverse(v)| v));
            } else {
                let v = random::<u16>() % 64;
                pq.insert(v).unwrap();
                reference.push(Reverse(v));
            }
            assert_eq!(pq.get_size(), reference.len());
            assert_eq!(pq.is_empty(), reference.is_empty());
            assert_eq!(pq.peek(), reference.peek().map(|Reverse(v)| v));
            assert!(pq.is_heap());
        }
    }
}

#[test]
fn random_fixed_capacity() {
    let capacity = 31;
    let mut pq: BinaryHeap<u32> = BinaryHeap::with_capacity(capacity).unwrap();
    let mut inserted = 0usize;
    let mut polled = 0usize;
    for _ in 0..10000 {
        if random::<bool>() {
            match pq.insert(random::<u32>()) {
                Ok(()) => inserted += 1,
                Err(err) => {
                    assert_eq!(err, HeapError::Full { capacity });
                    assert_eq!(pq.get_size(), capacity);
                }
            }
        } else if pq.poll().is_some() {
            polled += 1;
        }
        assert_eq!(pq.get_size(), inserted - polled);
        assert_eq!(pq.capacity(), capacity);
    }
}

#[test]
fn random_sorted_extraction_reversed() {
    let mut pq = BinaryHeap::with_capacity_and_comparator(1023, ReverseOrder).unwrap();
    let mut values: Vec<i64> = (0..1000).map(|_| random::<i64>()).collect();
    for v in &values {
        pq.insert(*v).unwrap();
    }
    values.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(pq.into_sorted_vec(), values);
}
