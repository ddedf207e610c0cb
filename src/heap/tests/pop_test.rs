use super::*;

#[test]
fn fresh_heap() {
    let mut pq: BinaryHeap<i32> = BinaryHeap::with_capacity(31).unwrap();
    assert_eq!(pq.get_size(), 0);
    assert!(pq.is_empty());
    assert_eq!(pq.peek(), None);
    assert_eq!(pq.poll(), None);
}

fn two_elements() -> BinaryHeap<i32> {
    let mut pq = BinaryHeap::with_capacity(15).unwrap();
    pq.insert(100).unwrap();
    pq.insert(200).unwrap();
    pq
}

#[test]
fn third_larger_than_both() {
    let mut pq = two_elements();
    pq.insert(300).unwrap();
    assert_eq!(pq.get_size(), 3);
    assert_eq!(pq.peek(), Some(&100));
    assert_eq!(drain(&mut pq), vec![100, 200, 300]);
}

#[test]
fn third_less_than_both() {
    let mut pq = two_elements();
    pq.insert(50).unwrap();
    assert_eq!(pq.get_size(), 3);
    assert_eq!(pq.peek(), Some(&50));
    assert_eq!(drain(&mut pq), vec![50, 100, 200]);
}

#[test]
fn third_between_both() {
    let mut pq = two_elements();
    pq.insert(150).unwrap();
    assert_eq!(pq.peek(), Some(&100));
    assert_eq!(drain(&mut pq), vec![100, 150, 200]);
}

#[test]
fn several_elements() {
    let mut pq: BinaryHeap<i32> = BinaryHeap::with_capacity(15).unwrap();
    for i in SCENARIO {
        pq.insert(i).unwrap();
        assert!(pq.is_heap());
    }
    assert_eq!(drain(&mut pq), vec![10, 20, 30, 40, 50, 60, 70, 80, 90]);
}

#[test]
fn several_elements_sign_comparator() {
    let mut pq = BinaryHeap::with_capacity_and_comparator(15, by_sign(|a: &i32, b: &i32| b - a)).unwrap();
    for i in SCENARIO {
        pq.insert(i).unwrap();
    }
    assert_eq!(drain(&mut pq), vec![90, 80, 70, 60, 50, 40, 30, 20, 10]);
}

#[test]
fn several_elements_reversed() {
    let mut pq = BinaryHeap::with_capacity_and_comparator(15, ReverseOrder).unwrap();
    for i in SCENARIO {
        pq.insert(i).unwrap();
    }
    assert_eq!(pq.into_sorted_vec(), vec![90, 80, 70, 60, 50, 40, 30, 20, 10]);
}

#[test]
fn peek_then_poll() {
    let mut pq: BinaryHeap<i32> = BinaryHeap::with_capacity(15).unwrap();
    for i in SCENARIO {
        pq.insert(i).unwrap();
    }
    while let Some(&top) = pq.peek() {
        assert_eq!(pq.poll(), Some(top));
    }
}

#[test]
fn ties_are_kept() {
    let mut pq = BinaryHeap::with_capacity_and_comparator(7, |a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0)).unwrap();
    pq.insert((5, 'a')).unwrap();
    pq.insert((5, 'b')).unwrap();
    pq.insert((1, 'z')).unwrap();
    assert_eq!(pq.poll(), Some((1, 'z')));
    let mut rest: Vec<_> = drain(&mut pq).into_iter().map(|(_, tag)| tag).collect();
    rest.sort();
    assert_eq!(rest, vec!['a', 'b']);
}

#[test]
fn many_ties() {
    let mut pq: BinaryHeap<u8> = BinaryHeap::with_capacity(63).unwrap();
    for i in 0..60 {
        pq.insert(i % 3).unwrap();
    }
    let out = drain(&mut pq);
    assert_eq!(out.len(), 60);
    assert!(out.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn floats() {
    let mut pq: BinaryHeap<f64> = BinaryHeap::with_capacity(7).unwrap();
    for x in [0.5, -1.25, 3.0, 0.0] {
        pq.insert(x).unwrap();
    }
    assert_eq!(drain(&mut pq), vec![-1.25, 0.0, 0.5, 3.0]);
}
