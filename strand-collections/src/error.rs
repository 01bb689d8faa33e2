//! Error types for list, stack and queue operations.

use core::fmt;

/// The adapter that reported an empty-container error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    /// [`Stack`](crate::Stack)
    Stack,
    /// [`Queue`](crate::Queue)
    Queue,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Stack => f.write_str("stack"),
            Container::Queue => f.write_str("queue"),
        }
    }
}

/// Errors reported by collection operations.
///
/// Every error is detected before the collection is touched: when one is
/// returned, nothing was inserted or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// [`List::insert_at`](crate::List::insert_at) was given a negative position.
    NegativePosition(isize),

    /// [`List::insert_at`](crate::List::insert_at) was given a position past
    /// the last valid append position.
    OutOfBounds {
        /// The requested position.
        position: usize,
        /// List length when the request was rejected.
        len: usize,
    },

    /// `pop`/`dequeue` on an empty stack or queue.
    Empty(Container),
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::NegativePosition(position) => {
                write!(f, "position must be non-negative, got {position}")
            }
            CollectionError::OutOfBounds { position, len } => {
                write!(f, "position {position} out of bounds for list of length {len}")
            }
            CollectionError::Empty(container) => {
                write!(f, "invalid operation: empty {container}")
            }
        }
    }
}

impl std::error::Error for CollectionError {}
