//! List nodes and the read-only view handed out for them.

use core::fmt;

use crate::{List, NodeKey};

/// One element of a list plus its links.
///
/// Links are only written while the owning list's write lock is held.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) prev: Option<NodeKey>,
    pub(crate) next: Option<NodeKey>,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn new(element: T, prev: Option<NodeKey>, next: Option<NodeKey>) -> Self {
        Self {
            element,
            prev,
            next,
        }
    }
}

/// A read-only view of one node of a [`List`].
///
/// Returned by [`List::front`], [`List::back`] and [`List::node`]. The view
/// borrows the list, not the node: every accessor takes the list's read
/// lock for just that call. Once the node is removed from the list every
/// accessor returns `None`.
///
/// # Example
///
/// ```
/// use strand_collections::List;
///
/// let list = List::new();
/// list.push_back(1);
/// list.push_back(2);
///
/// let head = list.front().unwrap();
/// assert_eq!(head.element(), Some(1));
///
/// let second = head.next().unwrap();
/// assert_eq!(second.element(), Some(2));
/// assert!(second.next().is_none());
/// assert_eq!(second.prev(), Some(head));
/// ```
pub struct NodeRef<'a, T> {
    list: &'a List<T>,
    key: NodeKey,
}

impl<'a, T> NodeRef<'a, T> {
    #[inline]
    pub(crate) fn new(list: &'a List<T>, key: NodeKey) -> Self {
        Self { list, key }
    }

    /// Returns the key of this node.
    #[inline]
    pub fn key(&self) -> NodeKey {
        self.key
    }

    /// Returns `true` while the node is still in the list.
    pub fn is_linked(&self) -> bool {
        self.list.chain().nodes.contains(self.key)
    }

    /// Runs `f` on the element under the read lock.
    ///
    /// Returns `None` if the node has been removed. `f` must not call back
    /// into a write operation of the same list.
    pub fn with_element<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let chain = self.list.chain();
        chain.nodes.get(self.key).map(|node| f(&node.element))
    }

    /// Returns a clone of the element, or `None` if the node has been removed.
    pub fn element(&self) -> Option<T>
    where
        T: Clone,
    {
        self.with_element(T::clone)
    }

    /// Returns the following node, or `None` at the tail or if this node has
    /// been removed.
    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        let next = self.list.chain().nodes.get(self.key)?.next?;
        Some(NodeRef::new(self.list, next))
    }

    /// Returns the preceding node, or `None` at the head or if this node has
    /// been removed.
    pub fn prev(&self) -> Option<NodeRef<'a, T>> {
        let prev = self.list.chain().nodes.get(self.key)?.prev?;
        Some(NodeRef::new(self.list, prev))
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

/// Two views are equal when they name the same node of the same list.
impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.list, other.list) && self.key == other.key
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef").field("key", &self.key).finish()
    }
}
