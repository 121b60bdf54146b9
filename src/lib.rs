//! A min-priority queue keyed by unique keys.
//!
//! [`MinPriorityQueue`] keeps its entries in a binary heap and a map from key
//! to heap slot, so the minimum is available in `O(1)`, insertion and removal
//! of the minimum take `O(log n)`, and a key's priority can be lowered in
//! place in `O(log n)`.
//!
//! A key's identity is its `Eq`/`Hash` implementation. To treat keys the way
//! a string-keyed table would, use `String` keys and convert with
//! `to_string()`; values that render the same are then the same key.
//!
//! ```
//! use priq::MinPriorityQueue;
//!
//! let mut pq = MinPriorityQueue::new();
//! pq.set("b", 2.0);
//! pq.set("a", 1.0);
//! assert_eq!(pq.min(), Ok(&"a"));
//! assert!(pq.set("b", 0.5));
//! assert_eq!(pq.remove_min(), Ok("b"));
//! ```

mod error;
mod min_priority_queue;

pub use error::{Error, Result};
pub use min_priority_queue::MinPriorityQueue;
