//! FIFO queue over [`List`].

use core::fmt;

use crate::{CollectionError, Container, List};

/// A thread-safe FIFO queue.
///
/// Enqueues at the back and dequeues at the front of an inner [`List`].
/// Dequeuing an empty queue is an error.
///
/// # Example
///
/// ```
/// use strand_collections::Queue;
///
/// let queue: Queue<&str> = ["a", "b"].into_iter().collect();
/// queue.enqueue("c");
///
/// assert_eq!(queue.front(), Some("a"));
/// assert_eq!(queue.back(), Some("c"));
/// assert_eq!(queue.dequeue(), Ok("a"));
/// assert_eq!(queue.len(), 2);
/// ```
pub struct Queue<T> {
    list: List<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[inline]
    pub const fn new() -> Self {
        Self { list: List::new() }
    }

    /// Adds `value` at the back.
    #[inline]
    pub fn enqueue(&self, value: T) {
        self.list.push_back(value);
    }

    /// Removes and returns the front value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the queue is empty.
    #[inline]
    pub fn dequeue(&self) -> Result<T, CollectionError> {
        self.list
            .pop_front()
            .ok_or(CollectionError::Empty(Container::Queue))
    }

    /// Returns a clone of the front value, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<T>
    where
        T: Clone,
    {
        self.list.peek_front()
    }

    /// Returns a clone of the back value, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<T>
    where
        T: Clone,
    {
        self.list.peek_back()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the number of queued values.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Removes every value.
    #[inline]
    pub fn clear(&self) {
        self.list.clear();
    }
}

impl<T> FromIterator<T> for Queue<T> {
    /// Enqueues each value in order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("values", &self.list).finish()
    }
}
