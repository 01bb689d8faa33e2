//! Thread-safe linked list, stack, queue and priority queue.
//!
//! Every collection here is shared by reference: all operations take `&self`
//! and synchronize internally, so a collection can sit behind an `Arc` and be
//! used from any number of threads without an outer lock.
//!
//! # Design
//!
//! ```text
//! List<T>          - doubly linked, arena-backed nodes, one RwLock
//!   ├── Stack<T>   - push/pop at the front
//!   └── Queue<T>   - enqueue at the back, dequeue at the front
//! PriorityQueue<T> - binary heap in a Vec, one RwLock, custom ordering
//! ```
//!
//! List nodes live in an index-addressed arena owned by the list. Insertion
//! returns a [`NodeKey`]; keys are stamped, so a key for a removed node never
//! resolves again, even after its slot is reused or the list is cleared.
//!
//! # Quick Start
//!
//! ```
//! use strand_collections::List;
//!
//! let list = List::new();
//! list.push_back(2);
//! list.push_front(1);
//! let key = list.push_back(3);
//!
//! assert_eq!(list.to_vec(), vec![1, 2, 3]);
//!
//! // O(1) removal through the key.
//! assert_eq!(list.remove(key), Some(3));
//! assert_eq!(list.len(), 2);
//! ```
//!
//! # Iteration
//!
//! [`List::for_each_forward`] and [`List::for_each_backward`] hold no lock
//! while the action runs, so the action may freely mutate the same list:
//!
//! ```
//! use strand_collections::List;
//!
//! let list: List<u32> = (1..=3).collect();
//! list.for_each_forward(|_, value| {
//!     if value == 3 {
//!         list.push_back(4);
//!     }
//! });
//! assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
//! ```
//!
//! # Empty Containers
//!
//! | Operation | Empty result |
//! |-----------|--------------|
//! | [`List::pop_front`] / [`List::pop_back`] | `None` |
//! | [`Stack::pop`] / [`Queue::dequeue`] | `Err(CollectionError::Empty(_))` |
//! | [`PriorityQueue::pop`] | `None` |
//! | [`PriorityQueue::pop_or_default`] | `T::default()` |
//!
//! # Logging
//!
//! The crate emits [`log`] records at `debug` for rejected insertions and at
//! `trace` for clears and iteration cut short by a concurrent removal. No
//! logger is installed by the crate.

#![warn(missing_docs)]

pub mod error;
pub mod key;
pub mod list;
pub mod priority_queue;
pub mod queue;
pub mod stack;

mod node;
mod storage;

pub use error::{CollectionError, Container};
pub use key::NodeKey;
pub use list::List;
pub use node::NodeRef;
pub use priority_queue::{Comparator, PriorityQueue};
pub use queue::Queue;
pub use stack::Stack;
