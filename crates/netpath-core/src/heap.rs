//! Binary min-heap of vertices keyed by tentative distance

use crate::model::VertexId;
use std::collections::HashMap;

/// A heap slot: a vertex and its current key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeapEntry {
    pub key: f64,
    pub item: VertexId,
}

/// A minimum priority queue backed by a binary heap.
///
/// Tracks the slot of every item so `decrease_key` can locate it in O(1).
/// Ties are broken by heap position, not by any property of the item.
#[derive(Debug, Default)]
pub struct MinHeap {
    data: Vec<HeapEntry>,
    pos: HashMap<VertexId, usize>,
}

impl MinHeap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a heap over `(item, key)` pairs in O(n).
    pub fn from_items(items: impl IntoIterator<Item = (VertexId, f64)>) -> Self {
        let data: Vec<HeapEntry> = items
            .into_iter()
            .map(|(item, key)| HeapEntry { key, item })
            .collect();
        let pos = data.iter().enumerate().map(|(i, e)| (e.item, i)).collect();
        let mut heap = MinHeap { data, pos };
        for idx in (0..heap.data.len() / 2).rev() {
            heap.sift_down(idx);
        }
        heap
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn contains(&self, item: VertexId) -> bool {
        self.pos.contains_key(&item)
    }

    /// Current key of an item still in the heap.
    pub fn key_of(&self, item: VertexId) -> Option<f64> {
        self.pos.get(&item).map(|&idx| self.data[idx].key)
    }

    /// Insert a new item with the given key.
    pub fn insert(&mut self, item: VertexId, key: f64) {
        let idx = self.data.len();
        self.data.push(HeapEntry { key, item });
        self.pos.insert(item, idx);
        self.sift_up(idx);
    }

    /// Remove and return the entry with the lowest key.
    ///
    /// The root is swapped with the last slot, the heap shrinks by one and
    /// the new root sifts down.
    pub fn extract_min(&mut self) -> Option<HeapEntry> {
        if self.data.is_empty() {
            return None;
        }

        let last = self.data.len() - 1;
        self.swap_entries(0, last);

        let entry = self.data.pop()?;
        self.pos.remove(&entry.item);

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Some(entry)
    }

    /// Lower the key of an item and restore heap order by sifting it up.
    ///
    /// Returns `false` if the item is not in the heap or `key` is not lower
    /// than its current key.
    pub fn decrease_key(&mut self, item: VertexId, key: f64) -> bool {
        let Some(&idx) = self.pos.get(&item) else {
            return false;
        };
        if !(key < self.data[idx].key) {
            return false;
        }
        self.data[idx].key = key;
        self.sift_up(idx);
        true
    }

    /// Check the min-heap property over every parent/child pair.
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[(i - 1) / 2].key <= self.data[i].key)
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.data[idx].key < self.data[parent].key {
                self.swap_entries(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;

            if left < len && self.data[left].key < self.data[smallest].key {
                smallest = left;
            }
            if right < len && self.data[right].key < self.data[smallest].key {
                smallest = right;
            }

            if smallest != idx {
                self.swap_entries(idx, smallest);
                idx = smallest;
            } else {
                break;
            }
        }
    }

    /// Swap two slots and update the position map.
    fn swap_entries(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.pos.insert(self.data[a].item, a);
        self.pos.insert(self.data[b].item, b);
    }
}
