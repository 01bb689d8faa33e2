//! Binary-heap priority queue with a caller-supplied ordering.
//!
//! Unlike [`List`](crate::List) there is no node graph here: the heap is one
//! contiguous `Vec` in which the children of slot `i` live at `2i + 1` and
//! `2i + 2`. Ordering comes from a predicate `higher_priority(a, b)` that
//! returns `true` when `a` must come out before `b`.
//!
//! One reader/writer lock guards the vector: `push`, `pop` and `clear` take
//! it exclusively, `peek`, `len`, `is_empty` and `values` take it shared.
//! The predicate runs under the lock and must not call back into the same
//! queue.

use core::fmt;

use parking_lot::RwLock;

/// Predicate type used by [`PriorityQueue::min_heap`] and
/// [`PriorityQueue::max_heap`].
pub type Comparator<T> = fn(&T, &T) -> bool;

/// A thread-safe binary heap ordered by a predicate.
///
/// # Example
///
/// ```
/// use strand_collections::PriorityQueue;
///
/// // Custom ordering: longest string first.
/// let pq = PriorityQueue::new(|a: &String, b: &String| a.len() > b.len());
/// pq.push("ab".to_string());
/// pq.push("abcd".to_string());
/// pq.push("a".to_string());
///
/// assert_eq!(pq.pop().as_deref(), Some("abcd"));
/// assert_eq!(pq.pop().as_deref(), Some("ab"));
/// assert_eq!(pq.len(), 1);
/// ```
///
/// Ready-made orderings for any `PartialOrd` type:
///
/// ```
/// use strand_collections::PriorityQueue;
///
/// let pq = PriorityQueue::min_heap([4, 1, 3, 2]);
/// assert_eq!(pq.pop(), Some(1));
///
/// let pq = PriorityQueue::max_heap([0.5, 2.5, 1.5]);
/// assert_eq!(pq.peek(), Some(2.5));
/// ```
pub struct PriorityQueue<T, F = Comparator<T>> {
    table: RwLock<Vec<T>>,
    higher_priority: F,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty queue ordered by `higher_priority`.
    pub fn new(higher_priority: F) -> Self {
        Self {
            table: RwLock::new(Vec::new()),
            higher_priority,
        }
    }

    /// Creates a queue holding `elements`, heapified bottom-up in O(n).
    pub fn with_elements<I>(higher_priority: F, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut table: Vec<T> = elements.into_iter().collect();
        heapify(&mut table, &higher_priority);
        Self {
            table: RwLock::new(table),
            higher_priority,
        }
    }

    /// Inserts `value`, sifting it up past every parent it outranks.
    pub fn push(&self, value: T) {
        let mut table = self.table.write();
        table.push(value);
        let last = table.len() - 1;
        sift_up(&mut table, last, &self.higher_priority);
    }

    /// Removes and returns the highest-priority value.
    ///
    /// Returns `None` if the queue is empty; that is not an error.
    pub fn pop(&self) -> Option<T> {
        let mut table = self.table.write();
        if table.is_empty() {
            return None;
        }

        // Moves the last element into the root slot.
        let top = table.swap_remove(0);
        sift_down(&mut table, 0, &self.higher_priority);
        Some(top)
    }

    /// Like [`pop`](Self::pop), but returns `T::default()` when empty.
    pub fn pop_or_default(&self) -> T
    where
        T: Default,
    {
        self.pop().unwrap_or_default()
    }

    /// Returns a clone of the highest-priority value without removing it.
    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.table.read().first().cloned()
    }

    /// Runs `f` on the highest-priority value under the read lock.
    pub fn peek_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.table.read().first().map(f)
    }
}

impl<T, F> PriorityQueue<T, F> {
    /// Returns the number of queued values.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.read().is_empty()
    }

    /// Removes every value. The values are dropped after the lock is
    /// released.
    pub fn clear(&self) {
        // The write guard is a temporary of this statement.
        let retired = std::mem::take(&mut *self.table.write());
        drop(retired);
    }

    /// Returns a copy of the heap slots `start..=end` in heap-array order,
    /// not priority order.
    ///
    /// Returns an empty `Vec` if `start < 0`, `end >= len` or `start > end`.
    ///
    /// # Example
    ///
    /// ```
    /// use strand_collections::PriorityQueue;
    ///
    /// let pq = PriorityQueue::min_heap([10, 25, 12, 8, 41]);
    /// assert_eq!(pq.values(0, 2), vec![8, 10, 12]);
    /// assert!(pq.values(-1, 5).is_empty());
    /// ```
    pub fn values(&self, start: isize, end: isize) -> Vec<T>
    where
        T: Clone,
    {
        let table = self.table.read();
        if start < 0 || start > end || end >= table.len() as isize {
            return Vec::new();
        }
        table[start as usize..=end as usize].to_vec()
    }
}

impl<T: PartialOrd> PriorityQueue<T> {
    /// Creates a queue that pops the smallest value first.
    pub fn min_heap<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_elements(less::<T> as Comparator<T>, elements)
    }

    /// Creates a queue that pops the largest value first.
    pub fn max_heap<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_elements(greater::<T> as Comparator<T>, elements)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PriorityQueue<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("table", &*self.table.read())
            .finish_non_exhaustive()
    }
}

fn less<T: PartialOrd>(a: &T, b: &T) -> bool {
    a < b
}

fn greater<T: PartialOrd>(a: &T, b: &T) -> bool {
    a > b
}

// =============================================================================
// Heap repair
// =============================================================================

fn sift_up<T, F>(table: &mut [T], mut index: usize, higher_priority: &F)
where
    F: Fn(&T, &T) -> bool,
{
    while index > 0 {
        let parent = (index - 1) / 2;
        if !higher_priority(&table[index], &table[parent]) {
            break;
        }
        table.swap(index, parent);
        index = parent;
    }
}

/// Moves the value at `index` toward the leaves.
///
/// The left child is checked first; the right child only wins if it
/// strictly outranks the best found so far.
fn sift_down<T, F>(table: &mut [T], mut index: usize, higher_priority: &F)
where
    F: Fn(&T, &T) -> bool,
{
    let len = table.len();
    loop {
        let left = 2 * index + 1;
        let right = left + 1;
        let mut highest = index;

        if left < len && higher_priority(&table[left], &table[highest]) {
            highest = left;
        }
        if right < len && higher_priority(&table[right], &table[highest]) {
            highest = right;
        }
        if highest == index {
            break;
        }

        table.swap(index, highest);
        index = highest;
    }
}

fn heapify<T, F>(table: &mut [T], higher_priority: &F)
where
    F: Fn(&T, &T) -> bool,
{
    for index in (0..table.len() / 2).rev() {
        sift_down(table, index, higher_priority);
    }
}
