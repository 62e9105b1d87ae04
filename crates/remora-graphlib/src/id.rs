//! Identifiers for nodes and links.

use std::fmt;

/// Identifier naming a [`Node`](crate::Node) or [`Link`](crate::Link) within
/// its owning container.
///
/// Uniqueness is enforced by the owning container, not globally. Callers
/// should pick one representation (`Int` or `Text`) per graph instance;
/// `Tagged` and `Synthetic` are produced by the library itself:
///
/// - `Tagged(base, k)` disambiguates ids derived from `base`, e.g. the two
///   antiparallel copies emitted by `Graph::to_directed`, or items pooled by
///   `Heap::merge`. Tags nest on repeated derivation; [`Id::root`] recovers
///   the original id.
/// - `Synthetic` is reserved for algorithm-internal virtual nodes (such as
///   Johnson's super-source) and is guaranteed never to collide with a
///   caller-created id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Id {
    Int(i64),
    Text(String),
    Tagged(Box<Id>, u32),
    Synthetic,
}

impl Id {
    /// Tags this id with a disambiguating index.
    pub fn tagged(self, tag: u32) -> Id {
        Id::Tagged(Box::new(self), tag)
    }

    /// Unwraps any chain of tags, returning the original id.
    pub fn root(&self) -> &Id {
        let mut cur = self;
        while let Id::Tagged(base, _) = cur {
            cur = base;
        }
        cur
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Int(n) => write!(f, "{n}"),
            Id::Text(s) => write!(f, "{s}"),
            Id::Tagged(base, tag) => write!(f, "({base}, {tag})"),
            Id::Synthetic => write!(f, "<synthetic>"),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Int(n)
    }
}

impl From<i32> for Id {
    fn from(n: i32) -> Self {
        Id::Int(n as i64)
    }
}

impl From<usize> for Id {
    fn from(n: usize) -> Self {
        Id::Int(n as i64)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Text(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Text(s)
    }
}
