//! Node and link entities.

use std::hash::{Hash, Hasher};

use crate::collections::DataMap;
use crate::{Id, Value};

/// An identified entity with an open attribute map.
///
/// Identity is immutable: `uid` is fixed at creation and equality/hash go
/// through it alone, so two nodes with the same uid are the same entity
/// regardless of their data. Traversal code relies on this for set and map
/// membership. `data` is freely mutable in place.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) uid: Id,
    pub data: DataMap,
}

impl Node {
    pub fn new(uid: impl Into<Id>) -> Self {
        Self {
            uid: uid.into(),
            data: DataMap::default(),
        }
    }

    pub fn with_data(uid: impl Into<Id>, data: DataMap) -> Self {
        Self {
            uid: uid.into(),
            data,
        }
    }

    pub fn uid(&self) -> &Id {
        &self.uid
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(key.into(), value.into());
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uid.hash(state);
    }
}

/// A directed arc from node `xid` to node `yid` with its own id and data.
///
/// Inside an undirected [`Graph`](crate::Graph) the stored direction is
/// incidental; the adjacency index covers both directions. Endpoints need
/// not be distinct (self-loops) and several links may share the same
/// endpoint pair (parallel links). Like [`Node`], identity is immutable and
/// equality/hash are by `uid` alone.
#[derive(Clone, Debug)]
pub struct Link {
    pub(crate) uid: Id,
    pub(crate) xid: Id,
    pub(crate) yid: Id,
    pub data: DataMap,
}

impl Link {
    pub fn new(uid: impl Into<Id>, xid: impl Into<Id>, yid: impl Into<Id>) -> Self {
        Self {
            uid: uid.into(),
            xid: xid.into(),
            yid: yid.into(),
            data: DataMap::default(),
        }
    }

    pub fn with_data(
        uid: impl Into<Id>,
        xid: impl Into<Id>,
        yid: impl Into<Id>,
        data: DataMap,
    ) -> Self {
        Self {
            uid: uid.into(),
            xid: xid.into(),
            yid: yid.into(),
            data,
        }
    }

    pub fn uid(&self) -> &Id {
        &self.uid
    }

    pub fn xid(&self) -> &Id {
        &self.xid
    }

    pub fn yid(&self) -> &Id {
        &self.yid
    }

    /// The endpoint opposite `x`, treating the link as undirected.
    pub fn other(&self, x: &Id) -> &Id {
        if *x == self.xid { &self.yid } else { &self.xid }
    }

    pub fn is_loop(&self) -> bool {
        self.xid == self.yid
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(key.into(), value.into());
    }
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for Link {}

impl Hash for Link {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uid.hash(state);
    }
}
