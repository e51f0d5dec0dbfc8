//! Binary min-heap addressable by external identity.
//!
//! [`std::collections::BinaryHeap`] only supports pushing and popping. The
//! linkage engine also needs to change the key of an arbitrary queued entry,
//! in either direction, knowing only the entry's id. [`IndexedMinHeap`] keeps
//! a position/id bijection next to the key array so that lookups by id are
//! O(1) and key updates are O(log n).
//!
//! Keys are `f64` compared with [`f64::total_cmp`], so the heap order is total
//! and deterministic even when a key is infinite or NaN.

/// Marks ids that are no longer queued.
const VACANT: usize = usize::MAX;

/// Min-heap of `f64` keys, each tagged with a dense external id.
///
/// Ids are assigned by the heap: [`Self::from_keys`] numbers the initial keys
/// `0..keys.len()` and [`Self::push`] hands out the next unused id. Once an id
/// is extracted it is never reused.
///
/// # Examples
/// ```
/// use hclust1d_core::IndexedMinHeap;
///
/// let mut heap = IndexedMinHeap::from_keys(vec![4.0, 1.0, 3.0]);
/// assert_eq!(heap.peek_min(), Some((1.0, 1)));
///
/// // Raise the minimum; the next smallest key surfaces.
/// heap.update_key(1, 10.0);
/// assert_eq!(heap.extract_min(), Some((3.0, 2)));
/// assert_eq!(heap.extract_min(), Some((4.0, 0)));
/// assert_eq!(heap.extract_min(), Some((10.0, 1)));
/// assert!(heap.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct IndexedMinHeap {
    /// Keys in heap order.
    keys: Vec<f64>,
    /// `ids[pos]` is the id of the entry stored at heap position `pos`.
    ids: Vec<usize>,
    /// `positions[id]` is the heap position of `id`, or [`VACANT`].
    positions: Vec<usize>,
}

impl IndexedMinHeap {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a heap in O(n) from `keys`, assigning id `i` to `keys[i]`.
    #[must_use]
    pub fn from_keys(keys: Vec<f64>) -> Self {
        let len = keys.len();
        let mut heap = Self {
            keys,
            ids: (0..len).collect(),
            positions: (0..len).collect(),
        };
        for pos in (0..len / 2).rev() {
            heap.sift_down(pos);
        }
        heap
    }

    /// Number of queued entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns `true` when `id` is currently queued.
    #[must_use]
    pub fn contains(&self, id: usize) -> bool {
        self.positions.get(id).is_some_and(|&pos| pos != VACANT)
    }

    /// Returns the current key of `id`, or `None` when it is not queued.
    #[must_use]
    pub fn key_of(&self, id: usize) -> Option<f64> {
        let pos = *self.positions.get(id)?;
        self.keys.get(pos).copied()
    }

    /// Returns the smallest `(key, id)` without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<(f64, usize)> {
        Some((*self.keys.first()?, *self.ids.first()?))
    }

    /// Queues `key` under a fresh id and returns that id.
    pub fn push(&mut self, key: f64) -> usize {
        let id = self.positions.len();
        let pos = self.keys.len();
        self.keys.push(key);
        self.ids.push(id);
        self.positions.push(pos);
        self.sift_up(pos);
        id
    }

    /// Removes and returns the smallest `(key, id)`.
    pub fn extract_min(&mut self) -> Option<(f64, usize)> {
        let last = self.keys.len().checked_sub(1)?;
        self.swap(0, last);
        let key = self.keys.pop()?;
        let id = self.ids.pop()?;
        self.positions[id] = VACANT;
        if !self.keys.is_empty() {
            self.sift_down(0);
        }
        Some((key, id))
    }

    /// Replaces the key of `id` and restores heap order.
    ///
    /// Works whether the key grows or shrinks: a downward sift is attempted
    /// first, then an upward one, and at most one of them moves the entry.
    /// Returns the previous key, or `None` (leaving the heap untouched) when
    /// `id` is not queued.
    pub fn update_key(&mut self, id: usize, key: f64) -> Option<f64> {
        let pos = *self.positions.get(id)?;
        let slot = self.keys.get_mut(pos)?;
        let previous = std::mem::replace(slot, key);
        let settled = self.sift_down(pos);
        self.sift_up(settled);
        Some(previous)
    }

    /// Drops every queued entry. Ids handed out so far stay retired.
    pub fn clear(&mut self) {
        for &id in &self.ids {
            self.positions[id] = VACANT;
        }
        self.keys.clear();
        self.ids.clear();
    }

    fn less(&self, left: usize, right: usize) -> bool {
        self.keys[left].total_cmp(&self.keys[right]).is_lt()
    }

    fn swap(&mut self, left: usize, right: usize) {
        if left == right {
            return;
        }
        self.keys.swap(left, right);
        self.ids.swap(left, right);
        self.positions[self.ids[left]] = left;
        self.positions[self.ids[right]] = right;
    }

    /// Moves the entry at `pos` towards the root; returns its final position.
    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
        pos
    }

    /// Moves the entry at `pos` towards the leaves; returns its final position.
    fn sift_down(&mut self, mut pos: usize) -> usize {
        let len = self.keys.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == pos {
                return pos;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }
}
