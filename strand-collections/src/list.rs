//! Thread-safe doubly-linked list.
//!
//! Nodes live in an arena owned by the list and link to each other by
//! [`NodeKey`]. The whole structure (head, tail, length and every node's
//! links) sits behind one reader/writer lock:
//!
//! - `push_*`, `pop_*`, `insert_at`, `remove` and `clear` take it exclusively
//! - `front`, `back`, `len`, `peek_*`, `to_vec` and [`NodeRef`] accessors
//!   take it shared
//!
//! There are no per-node locks. Splicing touches up to three nodes and one
//! lock covers all of them.
//!
//! # Example
//!
//! ```
//! use strand_collections::List;
//!
//! let list = List::new();
//! list.push_back(10);
//! list.push_back(30);
//! list.insert_at(1, 20).unwrap();
//!
//! assert_eq!(list.to_vec(), vec![10, 20, 30]);
//! assert_eq!(list.pop_front(), Some(10));
//! assert_eq!(list.len(), 2);
//! ```
//!
//! # Iterating without holding the lock
//!
//! [`List::for_each_forward`] and [`List::for_each_backward`] release the
//! lock before each call of the action, so the action may call back into the
//! list and a slow action never blocks other threads:
//!
//! ```
//! use strand_collections::List;
//!
//! let list: List<u32> = (1..=3).collect();
//!
//! list.for_each_forward(|_, value| {
//!     if value == 1 {
//!         list.push_back(4); // re-entrant write, no deadlock
//!     }
//! });
//!
//! assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
//! ```
//!
//! The price is that such an iteration is not a point-in-time snapshot.
//! Use [`List::to_vec`] when one is needed.

use core::fmt;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::node::{Node, NodeRef};
use crate::storage::Arena;
use crate::{CollectionError, NodeKey};

// =============================================================================
// Chain - the unsynchronized node graph
// =============================================================================

/// Head, tail, length and node arena of one list.
///
/// All structural changes go through [`link_between`](Self::link_between)
/// and [`unlink`](Self::unlink).
pub(crate) struct Chain<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) head: Option<NodeKey>,
    pub(crate) tail: Option<NodeKey>,
    pub(crate) len: usize,
}

impl<T> Chain<T> {
    const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Links a new node holding `element` between two adjacent positions.
    ///
    /// `prev == None` means "at the head", `next == None` means "at the
    /// tail". The caller guarantees `prev` and `next` are adjacent.
    fn link_between(
        &mut self,
        prev: Option<NodeKey>,
        next: Option<NodeKey>,
        element: T,
    ) -> NodeKey {
        debug_assert_eq!(
            prev.map_or(self.head, |p| self.nodes[p].next),
            next,
            "link_between on non-adjacent nodes"
        );

        let key = self.nodes.insert(Node::new(element, prev, next));

        match prev {
            Some(p) => self.nodes[p].next = Some(key),
            None => self.head = Some(key),
        }
        match next {
            Some(n) => self.nodes[n].prev = Some(key),
            None => self.tail = Some(key),
        }

        self.len += 1;
        key
    }

    /// Unlinks `key`, reconnecting its neighbours directly.
    ///
    /// Returns `None` if `key` is dead. The node leaves the arena, so its
    /// links are gone with it and `key` never resolves again.
    fn unlink(&mut self, key: NodeKey) -> Option<T> {
        let Node {
            element,
            prev,
            next,
        } = self.nodes.remove(key)?;

        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }

        self.len -= 1;
        Some(element)
    }

    #[inline]
    fn push_front(&mut self, element: T) -> NodeKey {
        self.link_between(None, self.head, element)
    }

    #[inline]
    fn push_back(&mut self, element: T) -> NodeKey {
        self.link_between(self.tail, None, element)
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        self.head.and_then(|key| self.unlink(key))
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        self.tail.and_then(|key| self.unlink(key))
    }

    /// Inserts so that `element` ends up at index `position`.
    ///
    /// Walks `position - 1` links from the head. Landing on the tail, or
    /// running off it on the very last step, appends. Running off earlier
    /// fails before anything is allocated.
    fn insert_at(&mut self, position: usize, element: T) -> Result<NodeKey, CollectionError> {
        if position == 0 {
            return Ok(self.push_front(element));
        }

        let mut current = self.head;
        for _ in 0..position - 1 {
            match current {
                Some(key) => current = self.nodes[key].next,
                None => {
                    return Err(CollectionError::OutOfBounds {
                        position,
                        len: self.len,
                    });
                }
            }
        }

        let Some(at) = current else {
            return Ok(self.push_back(element));
        };
        let next = self.nodes[at].next;
        Ok(match next {
            Some(next) => self.link_between(Some(at), Some(next), element),
            None => self.push_back(element),
        })
    }

    /// Resets to empty and hands back the old nodes for dropping elsewhere.
    fn clear(&mut self) -> Arena<Node<T>> {
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.nodes.take()
    }

    fn iter(&self) -> Elements<'_, T> {
        Elements {
            chain: self,
            cursor: self.head,
        }
    }

    /// Walks the chain and checks every structural invariant.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.head.is_none(), self.tail.is_none(), "head/tail presence");
        assert_eq!(self.head.is_none(), self.len == 0, "head presence vs len");
        assert_eq!(self.nodes.len(), self.len, "arena count vs len");
        assert_eq!(self.nodes.is_empty(), self.len == 0);

        let mut count = 0;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = &self.nodes[key];
            assert_eq!(node.prev, prev, "prev link of {key:?} is not symmetric");
            count += 1;
            assert!(count <= self.len, "chain is longer than len");
            prev = Some(key);
            cursor = node.next;
        }

        assert_eq!(prev, self.tail, "walk did not end at tail");
        assert_eq!(count, self.len, "walk count vs len");

        if self.len == 1 {
            assert_eq!(self.head, self.tail);
        }
    }
}

/// Borrowing iterator over a chain's elements, head to tail.
struct Elements<'a, T> {
    chain: &'a Chain<T>,
    cursor: Option<NodeKey>,
}

impl<'a, T> Iterator for Elements<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        let node = &self.chain.nodes[key];
        self.cursor = node.next;
        Some(&node.element)
    }
}

// =============================================================================
// List - the synchronized public type
// =============================================================================

/// A doubly-linked list safe to share between threads.
///
/// Every method takes `&self`; wrap the list in an `Arc` to share it.
/// See the [module docs](self) for the locking contract.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use strand_collections::List;
///
/// let list = Arc::new(List::new());
///
/// let handles: Vec<_> = (0..4)
///     .map(|t| {
///         let list = Arc::clone(&list);
///         thread::spawn(move || {
///             for i in 0..100 {
///                 list.push_back(t * 100 + i);
///             }
///         })
///     })
///     .collect();
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(list.len(), 400);
/// ```
pub struct List<T> {
    inner: RwLock<Chain<T>>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            inner: RwLock::new(Chain::new()),
        }
    }

    /// Creates an empty list with room for `capacity` nodes before its
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(Chain::with_capacity(capacity)),
        }
    }

    #[inline]
    pub(crate) fn chain(&self) -> RwLockReadGuard<'_, Chain<T>> {
        self.inner.read()
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.chain().len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns how many nodes fit before the arena reallocates.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.chain().nodes.capacity()
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Pushes `element` to the front. O(1).
    ///
    /// Returns the key of the new node.
    #[inline]
    pub fn push_front(&self, element: T) -> NodeKey {
        self.inner.write().push_front(element)
    }

    /// Pushes `element` to the back. O(1).
    ///
    /// Returns the key of the new node.
    #[inline]
    pub fn push_back(&self, element: T) -> NodeKey {
        self.inner.write().push_back(element)
    }

    /// Inserts `element` so that it becomes the element at index `position`.
    ///
    /// - `position == 0` is [`push_front`](Self::push_front)
    /// - `position == len` appends; so does `len + 1`
    /// - anything in between splices after the node at `position - 1`, O(position)
    ///
    /// # Errors
    ///
    /// - [`CollectionError::NegativePosition`] if `position < 0`
    /// - [`CollectionError::OutOfBounds`] if `position > len + 1`
    ///
    /// The list is unchanged when an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use strand_collections::{CollectionError, List};
    ///
    /// let list: List<u32> = [10, 20, 30].into_iter().collect();
    /// list.insert_at(1, 99).unwrap();
    /// assert_eq!(list.to_vec(), vec![10, 99, 20, 30]);
    ///
    /// assert_eq!(
    ///     list.insert_at(-1, 0),
    ///     Err(CollectionError::NegativePosition(-1))
    /// );
    /// ```
    pub fn insert_at(&self, position: isize, element: T) -> Result<NodeKey, CollectionError> {
        if position < 0 {
            log::debug!("insert_at rejected negative position {position}");
            return Err(CollectionError::NegativePosition(position));
        }

        let result = self.inner.write().insert_at(position.unsigned_abs(), element);
        if let Err(err) = &result {
            log::debug!("insert_at rejected: {err}");
        }
        result
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes and returns the front element. O(1).
    ///
    /// Returns `None` on an empty list; that is not an error at this level.
    #[inline]
    pub fn pop_front(&self) -> Option<T> {
        self.inner.write().pop_front()
    }

    /// Removes and returns the back element. O(1).
    ///
    /// Returns `None` on an empty list; that is not an error at this level.
    #[inline]
    pub fn pop_back(&self) -> Option<T> {
        self.inner.write().pop_back()
    }

    /// Removes the node named by `key` from anywhere in the list. O(1).
    ///
    /// Returns `None` if the node was already removed.
    #[inline]
    pub fn remove(&self, key: NodeKey) -> Option<T> {
        self.inner.write().unlink(key)
    }

    /// Removes every element. O(1) under the lock.
    ///
    /// The detached nodes are dropped after the lock is released. Keys and
    /// [`NodeRef`]s obtained before the call stop resolving. The list keeps
    /// its node capacity.
    pub fn clear(&self) {
        let retired = self.inner.write().clear();
        if !retired.is_empty() {
            log::trace!("clear retired {} nodes", retired.len());
        }
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a view of the head node, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<NodeRef<'_, T>> {
        let head = self.chain().head?;
        Some(NodeRef::new(self, head))
    }

    /// Returns a view of the tail node, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<NodeRef<'_, T>> {
        let tail = self.chain().tail?;
        Some(NodeRef::new(self, tail))
    }

    /// Returns a view of the node named by `key`, or `None` if it has been
    /// removed.
    pub fn node(&self, key: NodeKey) -> Option<NodeRef<'_, T>> {
        if self.chain().nodes.contains(key) {
            Some(NodeRef::new(self, key))
        } else {
            None
        }
    }

    /// Returns a clone of the front element.
    ///
    /// Unlike `front().and_then(|n| n.element())` this reads the head and
    /// its element under a single lock acquisition.
    pub fn peek_front(&self) -> Option<T>
    where
        T: Clone,
    {
        let chain = self.chain();
        chain.head.map(|key| chain.nodes[key].element.clone())
    }

    /// Returns a clone of the back element under a single lock acquisition.
    pub fn peek_back(&self) -> Option<T>
    where
        T: Clone,
    {
        let chain = self.chain();
        chain.tail.map(|key| chain.nodes[key].element.clone())
    }

    /// Returns a point-in-time copy of the elements, front to back.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let chain = self.chain();
        let mut out = Vec::with_capacity(chain.len);
        out.extend(chain.iter().cloned());
        out
    }

    // ========================================================================
    // Unlocked iteration
    // ========================================================================

    /// Calls `action(index, element)` for each element, front to back.
    ///
    /// Each step takes the read lock only long enough to clone the element
    /// and read the `next` link; `action` runs with no lock held and may
    /// call any method of this list. After the action the walk moves on
    /// from the node it just visited, following that node's current `next`
    /// link.
    ///
    /// Because the lock is dropped between steps this is **not** a snapshot:
    ///
    /// - elements inserted or removed during the walk may or may not be
    ///   visited; elements present throughout are visited exactly once
    /// - if the visited node itself was removed meanwhile, the walk goes on
    ///   from the `next` link read before the action, and ends only if that
    ///   node is gone too
    ///
    /// Indices count up from 0 in visiting order.
    pub fn for_each_forward<F>(&self, mut action: F)
    where
        T: Clone,
        F: FnMut(usize, T),
    {
        let mut cursor = self.chain().head;
        let mut index = 0;

        while let Some(key) = cursor {
            let Some((element, next)) = self.step(key, |node| node.next) else {
                break;
            };
            action(index, element);
            index += 1;
            cursor = self.advance(key, next, |node| node.next);
        }
    }

    /// Calls `action(index, element)` for each element, back to front.
    ///
    /// Indices count down from `len - 1`, with `len` read when the walk
    /// starts; the walk stops after index 0 even if elements were added in
    /// the meantime. Otherwise the same locking and consistency rules as
    /// [`for_each_forward`](Self::for_each_forward) apply.
    pub fn for_each_backward<F>(&self, mut action: F)
    where
        T: Clone,
        F: FnMut(usize, T),
    {
        let (mut cursor, mut remaining) = {
            let chain = self.chain();
            (chain.tail, chain.len)
        };

        while let Some(key) = cursor {
            let Some(index) = remaining.checked_sub(1) else {
                break;
            };
            let Some((element, prev)) = self.step(key, |node| node.prev) else {
                break;
            };
            action(index, element);
            remaining = index;
            cursor = self.advance(key, prev, |node| node.prev);
        }
    }

    /// Reads one node for an unlocked walk: its element and the link to
    /// follow. `None` if the node is gone.
    fn step(
        &self,
        key: NodeKey,
        follow: impl FnOnce(&Node<T>) -> Option<NodeKey>,
    ) -> Option<(T, Option<NodeKey>)>
    where
        T: Clone,
    {
        let chain = self.chain();
        match chain.nodes.get(key) {
            Some(node) => Some((node.element.clone(), follow(node))),
            None => {
                log::trace!("walk stopped: {key:?} was unlinked");
                None
            }
        }
    }

    /// Picks the key to visit after `key`: its live link if `key` is still
    /// linked, otherwise the link `step` read before the action ran.
    fn advance(
        &self,
        key: NodeKey,
        captured: Option<NodeKey>,
        follow: impl FnOnce(&Node<T>) -> Option<NodeKey>,
    ) -> Option<NodeKey> {
        let chain = self.chain();
        match chain.nodes.get(key) {
            Some(node) => follow(node),
            None => captured,
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    /// Builds a list by pushing each element to the back.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut chain = Chain::with_capacity(iter.size_hint().0);
        for element in iter {
            chain.push_back(element);
        }
        Self {
            inner: RwLock::new(chain),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain = self.chain();
        f.debug_list().entries(chain.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward(list: &List<u64>) -> Vec<(usize, u64)> {
        let mut seen = Vec::new();
        list.for_each_forward(|i, v| seen.push((i, v)));
        seen
    }

    fn backward(list: &List<u64>) -> Vec<(usize, u64)> {
        let mut seen = Vec::new();
        list.for_each_backward(|i, v| seen.push((i, v)));
        seen
    }

    #[test]
    fn new_list_is_empty() {
        let list: List<u64> = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.front().is_none());
        assert!(list.back().is_none());
        list.chain().assert_invariants();
    }

    #[test]
    fn push_front_twice() {
        let list = List::new();
        list.push_front(10u64);
        list.push_front(20);

        assert_eq!(list.front().unwrap().element(), Some(20));
        assert_eq!(list.back().unwrap().element(), Some(10));
        assert_eq!(list.len(), 2);
        list.chain().assert_invariants();
    }

    #[test]
    fn push_back_single_is_head_and_tail() {
        let list = List::new();
        let k = list.push_back(10u64);

        assert_eq!(list.front().unwrap().key(), k);
        assert_eq!(list.back().unwrap().key(), k);
        list.chain().assert_invariants();

        list.push_back(20);
        assert_eq!(list.peek_front(), Some(10));
        assert_eq!(list.peek_back(), Some(20));
        list.chain().assert_invariants();
    }

    #[test]
    fn pop_front_on_empty_is_noop() {
        let list: List<u64> = List::new();
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.len(), 0);
        list.chain().assert_invariants();
    }

    #[test]
    fn pop_back_on_empty_is_noop() {
        let list: List<u64> = List::new();
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.len(), 0);
        list.chain().assert_invariants();
    }

    #[test]
    fn pop_front_to_empty() {
        let list = List::new();
        list.push_front(10u64);
        assert_eq!(list.pop_front(), Some(10));
        assert!(list.front().is_none());
        assert!(list.back().is_none());
        list.chain().assert_invariants();

        list.push_front(10);
        list.push_front(20);
        assert_eq!(list.pop_front(), Some(20));
        assert_eq!(list.len(), 1);
        assert_eq!(list.peek_front(), Some(10));
        list.chain().assert_invariants();
    }

    #[test]
    fn pop_back_to_empty() {
        let list = List::new();
        list.push_front(10u64);
        list.push_front(20);

        assert_eq!(list.pop_back(), Some(10));
        assert_eq!(list.peek_back(), Some(20));
        list.chain().assert_invariants();

        assert_eq!(list.pop_back(), Some(20));
        assert!(list.is_empty());
        list.chain().assert_invariants();
    }

    #[test]
    fn remove_middle_relinks_neighbours() {
        let list = List::new();
        let _a = list.push_back(1u64);
        let b = list.push_back(2);
        let _c = list.push_back(3);

        assert_eq!(list.remove(b), Some(2));
        assert_eq!(list.remove(b), None);
        assert_eq!(list.to_vec(), vec![1, 3]);

        let head = list.front().unwrap();
        assert_eq!(head.next(), list.back());
        list.chain().assert_invariants();
    }

    #[test]
    fn insert_at_zero_on_empty() {
        let list = List::new();
        list.insert_at(0, 7u64).unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list.front(), list.back());
        assert_eq!(list.peek_front(), Some(7));
        list.chain().assert_invariants();
    }

    #[test]
    fn insert_at_negative_fails_without_mutation() {
        let list: List<u64> = [1, 2].into_iter().collect();
        assert_eq!(
            list.insert_at(-1, 10),
            Err(CollectionError::NegativePosition(-1))
        );
        assert_eq!(list.to_vec(), vec![1, 2]);
    }

    #[test]
    fn insert_at_far_out_of_bounds() {
        let list: List<u64> = [1, 2].into_iter().collect();
        assert_eq!(
            list.insert_at(5, 30),
            Err(CollectionError::OutOfBounds {
                position: 5,
                len: 2
            })
        );
        assert_eq!(list.len(), 2);
        list.chain().assert_invariants();
    }

    #[test]
    fn insert_at_middle() {
        let list: List<u64> = [10, 20, 30].into_iter().collect();
        list.insert_at(1, 99).unwrap();

        assert_eq!(list.to_vec(), vec![10, 99, 20, 30]);
        list.chain().assert_invariants();
    }

    #[test]
    fn insert_at_len_appends() {
        let list: List<u64> = [10, 20].into_iter().collect();
        list.insert_at(2, 30).unwrap();
        assert_eq!(list.to_vec(), vec![10, 20, 30]);
        list.chain().assert_invariants();
    }

    #[test]
    fn insert_at_one_past_len_appends() {
        let list: List<u64> = [10, 20].into_iter().collect();
        list.insert_at(3, 30).unwrap();
        assert_eq!(list.to_vec(), vec![10, 20, 30]);

        let empty: List<u64> = List::new();
        empty.insert_at(1, 5).unwrap();
        assert_eq!(empty.to_vec(), vec![5]);
        assert_eq!(
            empty.insert_at(3, 6),
            Err(CollectionError::OutOfBounds {
                position: 3,
                len: 1
            })
        );
    }

    #[test]
    fn insert_at_sequence_from_empty() {
        let list = List::new();
        assert_eq!(
            list.insert_at(-1, 10u64),
            Err(CollectionError::NegativePosition(-1))
        );
        list.insert_at(0, 10).unwrap();
        list.insert_at(1, 20).unwrap();
        assert_eq!(list.peek_back(), Some(20));
        assert!(list.insert_at(5, 30).is_err());
        list.insert_at(1, 25).unwrap();

        assert_eq!(list.len(), 3);
        assert_eq!(list.front().unwrap().next().unwrap().element(), Some(25));
        list.chain().assert_invariants();
    }

    #[test]
    fn forward_and_backward_round_trip() {
        let list: List<u64> = [10, 20, 30, 40].into_iter().collect();

        assert_eq!(forward(&list), vec![(0, 10), (1, 20), (2, 30), (3, 40)]);
        assert_eq!(backward(&list), vec![(3, 40), (2, 30), (1, 20), (0, 10)]);
    }

    #[test]
    fn iterate_empty_calls_nothing() {
        let list: List<u64> = List::new();
        assert!(forward(&list).is_empty());
        assert!(backward(&list).is_empty());
    }

    #[test]
    fn action_can_write_to_list() {
        let list: List<u64> = [1, 2, 3].into_iter().collect();

        list.for_each_forward(|_, v| {
            list.push_front(v * 100);
        });

        assert_eq!(list.len(), 6);
        assert_eq!(list.to_vec(), vec![300, 200, 100, 1, 2, 3]);
        list.chain().assert_invariants();
    }

    #[test]
    fn walk_skips_only_the_removed_neighbour() {
        let list = List::new();
        let keys: Vec<_> = (1..=5u64).map(|v| list.push_back(v)).collect();

        let mut seen = Vec::new();
        list.for_each_forward(|i, v| {
            seen.push((i, v));
            if v == 1 {
                list.remove(keys[1]);
            }
        });

        assert_eq!(seen, vec![(0, 1), (1, 3), (2, 4), (3, 5)]);
        assert_eq!(list.to_vec(), vec![1, 3, 4, 5]);
    }

    #[test]
    fn backward_walk_skips_only_the_removed_neighbour() {
        let list = List::new();
        let keys: Vec<_> = (1..=5u64).map(|v| list.push_back(v)).collect();

        let mut seen = Vec::new();
        list.for_each_backward(|i, v| {
            seen.push((i, v));
            if v == 5 {
                list.remove(keys[3]);
            }
        });

        // Indices count down from the length read at the start.
        assert_eq!(seen, vec![(4, 5), (3, 3), (2, 2), (1, 1)]);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 5]);
    }

    #[test]
    fn walk_continues_after_visited_node_is_removed() {
        let list = List::new();
        let keys: Vec<_> = (1..=3u64).map(|v| list.push_back(v)).collect();

        let mut seen = Vec::new();
        list.for_each_forward(|i, v| {
            seen.push((i, v));
            if v == 2 {
                list.remove(keys[1]);
            }
        });

        assert_eq!(seen, vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(list.to_vec(), vec![1, 3]);
    }

    #[test]
    fn walk_ends_when_visited_node_and_its_next_are_removed() {
        let list = List::new();
        let keys: Vec<_> = (1..=4u64).map(|v| list.push_back(v)).collect();

        let mut seen = Vec::new();
        list.for_each_forward(|i, v| {
            seen.push((i, v));
            if v == 2 {
                list.remove(keys[1]);
                list.remove(keys[2]);
            }
        });

        assert_eq!(seen, vec![(0, 1), (1, 2)]);
        assert_eq!(list.to_vec(), vec![1, 4]);
    }

    #[test]
    fn walk_visits_elements_appended_ahead_of_it() {
        let list: List<u64> = [1, 2].into_iter().collect();

        let mut seen = Vec::new();
        list.for_each_forward(|_, v| {
            seen.push(v);
            if v == 2 {
                list.push_back(3);
            }
        });

        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn backward_stops_at_index_zero() {
        let list: List<u64> = [1, 2, 3].into_iter().collect();

        let mut seen = Vec::new();
        list.for_each_backward(|i, v| {
            if v == 3 {
                // Lands ahead of the walk, after the start length was read.
                list.insert_at(1, 9).unwrap();
            }
            seen.push((i, v));
        });

        assert_eq!(seen, vec![(2, 3), (1, 2), (0, 9)]);
        assert_eq!(list.to_vec(), vec![1, 9, 2, 3]);
    }

    #[test]
    fn clear_is_idempotent() {
        let list: List<u64> = (0..10).collect();
        list.clear();
        assert_eq!(list.len(), 0);
        list.chain().assert_invariants();

        list.clear();
        assert_eq!(list.len(), 0);
        assert!(list.front().is_none());
        list.chain().assert_invariants();
    }

    #[test]
    fn clear_keeps_capacity() {
        let list: List<u64> = List::with_capacity(32);
        for i in 0..8 {
            list.push_back(i);
        }

        list.clear();
        assert!(list.is_empty());
        assert!(list.capacity() >= 32);
    }

    #[test]
    fn keys_from_before_clear_stay_dead() {
        let list = List::new();
        let old = list.push_back(1u64);
        let old_head = list.front().unwrap();

        list.clear();
        let new = list.push_back(2);

        assert_eq!(old.index(), new.index());
        assert!(list.node(old).is_none());
        assert!(old_head.element().is_none());
        assert_eq!(list.remove(old), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn mixed_operations_keep_invariants() {
        let list = List::with_capacity(8);
        for i in 0..50u64 {
            match i % 5 {
                0 => {
                    list.push_front(i);
                }
                1 | 2 => {
                    list.push_back(i);
                }
                3 => {
                    list.pop_front();
                }
                _ => {
                    let _ = list.insert_at((i % 7) as isize, i);
                }
            }
            list.chain().assert_invariants();
        }

        let mut walked = 0;
        list.for_each_forward(|_, _| walked += 1);
        assert_eq!(walked, list.len());
    }

    #[test]
    fn node_lookup_by_key() {
        let list = List::new();
        let a = list.push_back("a");
        let b = list.push_back("b");

        assert_eq!(list.node(b).unwrap().prev().unwrap().key(), a);
        list.pop_back();
        assert!(list.node(b).is_none());
    }

    #[test]
    fn debug_lists_elements() {
        let list: List<u64> = [1, 2, 3].into_iter().collect();
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }

    #[test]
    fn list_is_send_and_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<List<String>>();
    }
}
