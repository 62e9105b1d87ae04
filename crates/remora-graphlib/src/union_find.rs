//! Disjoint-set structure with union-by-rank and path splitting.

use crate::collections::IdMap;
use crate::{Id, Node};

#[derive(Clone, Debug, Default)]
struct PartitionData {
    parent: Option<Id>,
    rank: u32,
}

/// Union-find over [`Node`] items.
///
/// With union-by-rank and path splitting, a sequence of m `find`/`union`
/// operations over n items costs O(m·α(n)) amortized. `find` takes
/// `&mut self` because path splitting rewrites parent pointers as it walks.
#[derive(Clone, Debug, Default)]
pub struct UnionFind {
    items: IdMap<Node>,
    datum: IdMap<PartitionData>,
}

impl UnionFind {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: impl IntoIterator<Item = Node>) -> Self {
        let mut uf = Self::new();
        for item in items {
            uf.add(item);
        }
        uf
    }

    /// Adds an item as its own singleton partition. No-op if present.
    pub fn add(&mut self, item: Node) {
        if self.items.contains_key(item.uid()) {
            return;
        }
        self.datum
            .insert(item.uid().clone(), PartitionData::default());
        self.items.insert(item.uid().clone(), item);
    }

    /// The representative id of `item`'s partition, or `None` if `item` was
    /// never added.
    ///
    /// Each visited id's parent is redirected to its grandparent on the way
    /// up (path splitting).
    pub fn find(&mut self, item: &Id) -> Option<Id> {
        if !self.items.contains_key(item) {
            return None;
        }
        let mut cid = item.clone();
        loop {
            let parent = self.datum.get(&cid).and_then(|d| d.parent.clone());
            let Some(parent) = parent else {
                return Some(cid);
            };
            let grandparent = self.datum.get(&parent).and_then(|d| d.parent.clone());
            if let Some(d) = self.datum.get_mut(&cid) {
                d.parent = grandparent;
            }
            cid = parent;
        }
    }

    /// Merges the partitions of `u` and `v`, attaching the lower-rank root
    /// under the higher-rank one. No-op if either is missing or they are
    /// already in the same partition.
    pub fn union(&mut self, u: &Id, v: &Id) {
        let (Some(uset), Some(vset)) = (self.find(u), self.find(v)) else {
            return;
        };
        if uset == vset {
            return;
        }

        let urank = self.datum.get(&uset).map_or(0, |d| d.rank);
        let vrank = self.datum.get(&vset).map_or(0, |d| d.rank);
        let (winner, loser) = if urank < vrank {
            (vset, uset)
        } else {
            (uset, vset)
        };

        if let Some(d) = self.datum.get_mut(&loser) {
            d.parent = Some(winner.clone());
        }
        if urank == vrank {
            if let Some(d) = self.datum.get_mut(&winner) {
                d.rank += 1;
            }
        }
    }

    pub fn get_item(&self, uid: &Id) -> Option<&Node> {
        self.items.get(uid)
    }

    pub fn contains(&self, uid: &Id) -> bool {
        self.items.contains_key(uid)
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct partitions (remaining roots).
    pub fn partition_count(&self) -> usize {
        self.datum.values().filter(|d| d.parent.is_none()).count()
    }
}
