//! Min-heap priority queue with a pluggable ordering.
//!
//! ```
//! use pqlib::BinaryHeap;
//!
//! let mut pq: BinaryHeap<i32> = BinaryHeap::with_capacity(15).unwrap();
//! for i in [10, 70, 30, 20] {
//!     pq.insert(i).unwrap();
//! }
//! assert_eq!(pq.peek(), Some(&10));
//! assert_eq!(pq.poll(), Some(10));
//! assert_eq!(pq.get_size(), 3);
//! ```

pub mod error;
pub mod heap;
pub mod order;

pub use error::{HeapError, Result};
pub use heap::builder::HeapBuilder;
pub use heap::{is_valid_capacity, BinaryHeap, DEFAULT_CAPACITY};
pub use order::{by_sign, BySign, Comparator, NaturalOrder, ReverseOrder};
