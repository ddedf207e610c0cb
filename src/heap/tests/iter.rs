use super::*;

#[test]
fn iter_visits_all() {
    let mut pq: BinaryHeap<i32> = BinaryHeap::with_capacity(127).unwrap();
    for i in 0..100 {
        pq.insert(i).unwrap();
    }
    for i in &pq {
        if !(0..100).contains(i) {
            panic!("Iterator returned invalid value: {}", i);
        }
    }
    assert_eq!(pq.iter().count(), 100);
}

#[test]
fn iter_root_first() {
    let mut pq: BinaryHeap<i32> = BinaryHeap::with_capacity(15).unwrap();
    for i in SCENARIO {
        pq.insert(i).unwrap();
    }
    assert_eq!(pq.iter().next(), Some(&10));
}
