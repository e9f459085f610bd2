//! An indexed minimum priority queue over a dense index range.
//!
//! Every queued element is identified by an index in `0..capacity`, which lets
//! callers look up, test and decrease the key of an element in place. This is
//! the queue Dijkstra's algorithm needs: vertices are indices and keys are
//! tentative distances.

use crate::error::{GraphError, Result};

/// A binary min-heap of indices ordered by their keys.
///
/// # Fields
/// - `heap`: heap-ordered indices; `heap[0]` holds the minimum key.
/// - `position`: for every index, its slot in `heap` if it is queued.
/// - `keys`: the current key of every queued index.
#[derive(Clone, Debug)]
pub struct IndexMinPQ<K> {
    heap: Vec<usize>,
    position: Vec<Option<usize>>,
    keys: Vec<Option<K>>,
}

impl<K: PartialOrd + Copy> IndexMinPQ<K> {
    /// Creates an empty queue accepting indices in `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            position: vec![None; capacity],
            keys: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.position.len()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `index` is currently queued. Out-of-range indices never are.
    pub fn contains(&self, index: usize) -> bool {
        self.position.get(index).is_some_and(|pos| pos.is_some())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.capacity() {
            Ok(())
        } else {
            Err(GraphError::InvalidArgument(format!(
                "index {index} outside queue range 0..{}",
                self.capacity()
            )))
        }
    }

    /// Queues `index` with `key`.
    pub fn insert(&mut self, index: usize, key: K) -> Result<()> {
        self.check_index(index)?;
        if self.contains(index) {
            return Err(GraphError::InvalidArgument(format!(
                "index {index} is already in the priority queue"
            )));
        }

        let slot = self.heap.len();
        self.heap.push(index);
        self.position[index] = Some(slot);
        self.keys[index] = Some(key);
        self.sift_up(slot);
        Ok(())
    }

    /// Lowers the key of a queued `index`.
    ///
    /// A `new_key` that is not smaller than the current key leaves the queue
    /// untouched.
    pub fn decrease_key(&mut self, index: usize, new_key: K) -> Result<()> {
        self.check_index(index)?;
        let (Some(slot), Some(current)) = (self.position[index], self.keys[index]) else {
            return Err(GraphError::InvalidArgument(format!(
                "index {index} is not in the priority queue"
            )));
        };

        if new_key < current {
            self.keys[index] = Some(new_key);
            self.sift_up(slot);
        }
        Ok(())
    }

    /// Removes the index with the smallest key and returns it.
    pub fn del_min(&mut self) -> Result<usize> {
        if self.heap.is_empty() {
            return Err(GraphError::EmptyQueue);
        }

        let last = self.heap.len() - 1;
        self.swap_slots(0, last);
        let min = self.heap.pop().ok_or(GraphError::EmptyQueue)?;
        self.position[min] = None;
        self.keys[min] = None;

        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// The index with the smallest key, if any.
    pub fn min_index(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    pub fn min_key(&self) -> Option<K> {
        self.min_index().and_then(|index| self.keys[index])
    }

    /// The key of `index` while it is queued.
    pub fn key_of(&self, index: usize) -> Option<K> {
        self.keys.get(index).copied().flatten()
    }

    fn key_at(&self, slot: usize) -> Option<K> {
        self.keys[self.heap[slot]]
    }

    fn less(&self, a: usize, b: usize) -> bool {
        match (self.key_at(a), self.key_at(b)) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }
}
