//! Stable handles for list nodes.
//!
//! A [`NodeKey`] names one slot in a list's node arena together with the
//! stamp of the insertion that filled it. Slots are reused after removal,
//! stamps never are, so a key outlives its node only as a dead handle:
//! every lookup through it returns `None`.

use core::fmt;

/// Handle to a node of one [`List`](crate::List).
///
/// Keys are `Copy` and cheap to store. They stay valid until the node they
/// name is removed (by a pop, [`remove`](crate::List::remove) or
/// [`clear`](crate::List::clear)); after that they never resolve again,
/// even when the slot is reused. A key never resolves in any list other
/// than the one that issued it.
///
/// # Example
///
/// ```
/// use strand_collections::List;
///
/// let list = List::new();
/// let key = list.push_back(7);
/// assert_eq!(list.node(key).and_then(|n| n.element()), Some(7));
///
/// list.pop_back();
/// assert!(list.node(key).is_none());
///
/// // The slot is reused, the key still does not resolve.
/// let _ = list.push_back(8);
/// assert!(list.node(key).is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub(crate) index: u32,
    pub(crate) stamp: u64,
}

impl NodeKey {
    #[inline]
    pub(crate) const fn new(index: u32, stamp: u64) -> Self {
        Self { index, stamp }
    }

    /// Returns the raw slot index, for debugging or external maps.
    ///
    /// Two keys with the same index may name different nodes over time.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index as usize
    }

    #[inline]
    pub(crate) const fn slot(&self) -> usize {
        self.index as usize
    }
}

impl fmt::Debug for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeKey({}@{})", self.index, self.stamp)
    }
}
