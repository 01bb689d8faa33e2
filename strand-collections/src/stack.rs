//! LIFO stack over [`List`].

use core::fmt;

use crate::{CollectionError, Container, List};

/// A thread-safe LIFO stack.
///
/// Pushes and pops at the front of an inner [`List`]. Unlike the list,
/// popping an empty stack is an error.
///
/// # Example
///
/// ```
/// use strand_collections::{CollectionError, Container, Stack};
///
/// let stack: Stack<u32> = [1, 2, 3].into_iter().collect();
/// assert_eq!(stack.top(), Some(3));
///
/// assert_eq!(stack.pop(), Ok(3));
/// assert_eq!(stack.top(), Some(2));
///
/// stack.clear();
/// assert_eq!(stack.pop(), Err(CollectionError::Empty(Container::Stack)));
/// ```
pub struct Stack<T> {
    list: List<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[inline]
    pub const fn new() -> Self {
        Self { list: List::new() }
    }

    /// Pushes `value` on top.
    #[inline]
    pub fn push(&self, value: T) {
        self.list.push_front(value);
    }

    /// Removes and returns the top value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the stack is empty. The check
    /// and the removal happen under the same lock acquisition.
    #[inline]
    pub fn pop(&self) -> Result<T, CollectionError> {
        self.list
            .pop_front()
            .ok_or(CollectionError::Empty(Container::Stack))
    }

    /// Returns a clone of the top value, or `None` if the stack is empty.
    #[inline]
    pub fn top(&self) -> Option<T>
    where
        T: Clone,
    {
        self.list.peek_front()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the number of values on the stack.
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

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes each value in order, so the last one ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let stack = Stack::new();
        for value in iter {
            stack.push(value);
        }
        stack
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    /// Lists values top first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("values", &self.list).finish()
    }
}
