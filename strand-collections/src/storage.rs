//! Slot storage with stable, stamped keys.
//!
//! The arena owns every node of one list. Nodes refer to each other by
//! [`NodeKey`] instead of by pointer, so the prev/next graph never needs
//! shared ownership or `unsafe`. Removed slots go onto a free stack and are
//! handed out again by later inserts.
//!
//! Each insert takes the next value of one process-wide counter and records
//! it in the slot and in the returned key. A key only resolves while the
//! slot still carries the same stamp, so lookups through a key whose node
//! was removed fail with `None` instead of reaching a newer node. Since no
//! two arenas ever hand out the same stamp, a key from one list never
//! resolves in another.

use core::mem;
use core::ops::{Index, IndexMut};
use core::sync::atomic::{AtomicU64, Ordering};

use crate::NodeKey;

/// Largest slot count a `u32` index can address. `u32::MAX` itself is
/// left unused.
const MAX_SLOTS: usize = u32::MAX as usize;

/// Source of every stamp handed out by any arena. Starts at 1 and is never
/// reset.
static NEXT_STAMP: AtomicU64 = AtomicU64::new(1);

#[inline]
fn next_stamp() -> u64 {
    NEXT_STAMP.fetch_add(1, Ordering::Relaxed)
}

struct Slot<T> {
    stamp: u64,
    value: Option<T>,
}

/// Growable slot storage addressed by [`NodeKey`].
///
/// # Requirements met
///
/// - **Stable keys**: a key stays valid until its value is removed
/// - **O(1)** insert, remove, get
/// - **Slot reuse**: freed slots are reused LIFO
/// - **No resurrection**: a dead key never resolves again
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    /// Indices of vacant slots, most recently freed last.
    free: Vec<u32>,
    len: usize,
}

impl<T> Arena<T> {
    /// Creates an empty arena.
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty arena with room for `capacity` values before
    /// reallocating.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Returns the number of live values.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no values are live.
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots that can be filled without reallocating.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Inserts a value, returning its key.
    ///
    /// # Panics
    ///
    /// Panics if the arena would need more than `u32::MAX` slots.
    pub(crate) fn insert(&mut self, value: T) -> NodeKey {
        let stamp = next_stamp();
        self.len += 1;

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            debug_assert!(slot.value.is_none(), "free stack held an occupied slot");
            slot.stamp = stamp;
            slot.value = Some(value);
            return NodeKey::new(index, stamp);
        }

        let index = self.slots.len();
        assert!(index < MAX_SLOTS, "arena exceeds key index range");
        self.slots.push(Slot {
            stamp,
            value: Some(value),
        });
        NodeKey::new(index as u32, stamp)
    }

    /// Removes and returns the value at `key`, if it is live.
    pub(crate) fn remove(&mut self, key: NodeKey) -> Option<T> {
        let slot = self.slots.get_mut(key.slot())?;
        if slot.stamp != key.stamp {
            return None;
        }

        let value = slot.value.take()?;
        self.free.push(key.index);
        self.len -= 1;
        Some(value)
    }

    /// Returns a reference to the value at `key`, if it is live.
    #[inline]
    pub(crate) fn get(&self, key: NodeKey) -> Option<&T> {
        match self.slots.get(key.slot()) {
            Some(slot) if slot.stamp == key.stamp => slot.value.as_ref(),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value at `key`, if it is live.
    #[inline]
    pub(crate) fn get_mut(&mut self, key: NodeKey) -> Option<&mut T> {
        match self.slots.get_mut(key.slot()) {
            Some(slot) if slot.stamp == key.stamp => slot.value.as_mut(),
            _ => None,
        }
    }

    /// Returns `true` if `key` names a live value.
    #[inline]
    pub(crate) fn contains(&self, key: NodeKey) -> bool {
        self.get(key).is_some()
    }

    /// Moves every value out into a new arena, leaving `self` empty with
    /// the same slot capacity.
    ///
    /// O(1) apart from one allocation for the fresh slot vector. Keys issued
    /// before the call never match a slot filled after it, since stamps are
    /// not reused. Dropping the returned arena drops the values.
    pub(crate) fn take(&mut self) -> Arena<T> {
        let capacity = self.slots.capacity();
        let retired = Arena {
            slots: mem::replace(&mut self.slots, Vec::with_capacity(capacity)),
            free: mem::take(&mut self.free),
            len: self.len,
        };
        self.len = 0;
        retired
    }
}

impl<T> Index<NodeKey> for Arena<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `key` is dead.
    #[inline]
    fn index(&self, key: NodeKey) -> &T {
        match self.get(key) {
            Some(value) => value,
            None => panic!("dead key {key:?}"),
        }
    }
}

impl<T> IndexMut<NodeKey> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, key: NodeKey) -> &mut T {
        match self.get_mut(key) {
            Some(value) => value,
            None => panic!("dead key {key:?}"),
        }
    }
}
