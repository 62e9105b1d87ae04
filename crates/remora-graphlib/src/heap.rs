//! Indexable binary heap keyed by a named attribute.

use std::cmp::Ordering;

use crate::collections::{DataMap, IdMap};
use crate::{Error, Id, Node, Result};

/// Whether the root holds the smallest or the largest key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeapMode {
    Min,
    Max,
}

/// Array-backed binary heap over [`Node`] items, with O(log n)
/// arbitrary-key replace/delete/modify.
///
/// Items are compared by `data[label]`, fixed at construction; the key must
/// be a number or text ([`Value::is_heap_key`]), which is validated when an
/// item enters the heap so the internal sifts cannot fail. Items are
/// identified by uid: inserting a uid that is already present is a no-op,
/// and `indices` maps every uid to its current slot (the exact inverse of
/// the item array), which is what makes Dijkstra's decrease-key cheap.
///
/// Every mutating operation restores the heap-order invariant before
/// returning.
#[derive(Clone, Debug)]
pub struct Heap {
    label: String,
    mode: HeapMode,
    items: Vec<Node>,
    indices: IdMap<usize>,
}

impl Heap {
    pub fn new(label: impl Into<String>, mode: HeapMode) -> Self {
        Self {
            label: label.into(),
            mode,
            items: Vec::new(),
            indices: IdMap::default(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    /// Builds a heap from a batch of items in O(n), sifting down from the
    /// last parent slot.
    pub fn heapify(
        items: impl IntoIterator<Item = Node>,
        label: impl Into<String>,
        mode: HeapMode,
    ) -> Result<Heap> {
        let mut heap = Heap::new(label, mode);
        for item in items {
            if heap.indices.contains_key(item.uid()) {
                continue;
            }
            heap.validate(&item)?;
            heap.indices.insert(item.uid().clone(), heap.items.len());
            heap.items.push(item);
        }
        if heap.items.len() > 1 {
            let mut idx = (heap.items.len() - 2) / 2;
            loop {
                heap.bubble_down(idx);
                if idx == 0 {
                    break;
                }
                idx -= 1;
            }
        }
        Ok(heap)
    }

    /// Merges several heaps into one fresh heap.
    ///
    /// Item ids are disambiguated by tagging each uid with the index of its
    /// source heap ([`Id::tagged`]); tags nest on repeated merges, and the
    /// original uid is always recoverable through [`Id::root`].
    pub fn merge(heaps: &[Heap], label: impl Into<String>, mode: HeapMode) -> Result<Heap> {
        let mut pooled = Vec::new();
        for (i, heap) in heaps.iter().enumerate() {
            for item in &heap.items {
                pooled.push(Node::with_data(
                    item.uid().clone().tagged(i as u32),
                    item.data.clone(),
                ));
            }
        }
        Heap::heapify(pooled, label, mode)
    }

    /// The current root item, without removing it.
    pub fn root(&self) -> Option<&Node> {
        self.items.first()
    }

    /// Inserts an item in O(log n). No-op if its uid is already present;
    /// fails if the item lacks a comparable `label` value.
    pub fn insert(&mut self, item: Node) -> Result<()> {
        if self.indices.contains_key(item.uid()) {
            return Ok(());
        }
        self.validate(&item)?;
        self.indices.insert(item.uid().clone(), self.items.len());
        self.items.push(item);
        self.bubble_up(self.items.len() - 1);
        Ok(())
    }

    /// Removes and returns the root, or `None` when empty.
    pub fn extract(&mut self) -> Option<Node> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.swap(0, last);
        let root = self.items.pop()?;
        self.indices.remove(root.uid());
        if !self.items.is_empty() {
            self.bubble_down(0);
        }
        Some(root)
    }

    pub fn get_item(&self, uid: &Id) -> Option<&Node> {
        self.indices.get(uid).map(|&idx| &self.items[idx])
    }

    pub fn contains(&self, uid: &Id) -> bool {
        self.indices.contains_key(uid)
    }

    /// Replaces the root with `item`, returning the old root.
    ///
    /// Cheaper than a delete followed by an insert. No-op on an empty heap,
    /// which keeps the size invariant intact.
    pub fn replaceroot(&mut self, item: Node) -> Result<Option<Node>> {
        let Some(root) = self.items.first() else {
            return Ok(None);
        };
        let old = root.clone();
        let old_uid = old.uid().clone();
        self.replace(&old_uid, item)?;
        Ok(Some(old))
    }

    /// Swaps the item at `old`'s slot for `new` (which may change both key
    /// and uid), then restores heap order from that slot.
    ///
    /// No-op if `old` is absent, or if `new`'s uid already names a
    /// different item in the heap.
    pub fn replace(&mut self, old: &Id, new: Node) -> Result<()> {
        let Some(&idx) = self.indices.get(old) else {
            return Ok(());
        };
        if new.uid() != old && self.indices.contains_key(new.uid()) {
            return Ok(());
        }
        self.validate(&new)?;
        self.indices.remove(old);
        self.indices.insert(new.uid().clone(), idx);
        self.items[idx] = new;

        // The key moved in at most one direction, so exactly one of these
        // makes progress.
        self.bubble_up(idx);
        self.bubble_down(idx);
        Ok(())
    }

    /// Rebuilds the item at `uid` with new data and restores heap order.
    /// This is the decrease-key entry point.
    pub fn modify(&mut self, uid: &Id, data: DataMap) -> Result<()> {
        self.replace(uid, Node::with_data(uid.clone(), data))
    }

    /// Removes the item with the given uid, if present.
    pub fn delete(&mut self, uid: &Id) {
        let Some(&idx) = self.indices.get(uid) else {
            return;
        };
        let last = self.items.len() - 1;
        self.swap(idx, last);
        let removed = self.items.pop();
        if let Some(removed) = removed {
            self.indices.remove(removed.uid());
        }
        if idx < self.items.len() {
            self.bubble_up(idx);
            self.bubble_down(idx);
        }
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.indices.clear();
    }

    fn validate(&self, item: &Node) -> Result<()> {
        match item.get(&self.label) {
            Some(v) if v.is_heap_key() => Ok(()),
            _ => Err(Error::MissingAttribute {
                uid: item.uid().clone(),
                label: self.label.clone(),
            }),
        }
    }

    fn parent(idx: usize) -> Option<usize> {
        if idx == 0 { None } else { Some((idx - 1) / 2) }
    }

    fn left(&self, idx: usize) -> Option<usize> {
        let child = 2 * idx + 1;
        (child < self.items.len()).then_some(child)
    }

    fn right(&self, idx: usize) -> Option<usize> {
        let child = 2 * idx + 2;
        (child < self.items.len()).then_some(child)
    }

    /// The mode-directed comparator every invariant-restoring operation is
    /// defined in terms of: `x <= y` for min mode, `x >= y` for max mode.
    fn compare(&self, x: &Node, y: &Node) -> bool {
        let ord = match (x.get(&self.label), y.get(&self.label)) {
            (Some(a), Some(b)) => a.heap_ord(b),
            _ => return false,
        };
        match self.mode {
            HeapMode::Min => ord != Ordering::Greater,
            HeapMode::Max => ord != Ordering::Less,
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.items.swap(i, j);
        self.indices.insert(self.items[i].uid().clone(), i);
        self.indices.insert(self.items[j].uid().clone(), j);
    }

    fn bubble_up(&mut self, idx: usize) {
        let mut c = idx;
        while let Some(p) = Self::parent(c) {
            if self.compare(&self.items[c], &self.items[p]) {
                self.swap(c, p);
                c = p;
            } else {
                break;
            }
        }
    }

    fn bubble_down(&mut self, idx: usize) {
        let mut p = idx;
        while let Some(l) = self.left(p) {
            let favored = match self.right(p) {
                Some(r) if !self.compare(&self.items[l], &self.items[r]) => r,
                _ => l,
            };
            if self.compare(&self.items[favored], &self.items[p]) {
                self.swap(favored, p);
                p = favored;
            } else {
                break;
            }
        }
    }
}
