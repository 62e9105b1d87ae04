//! Map and set aliases shared across the crate.
//!
//! Everything keyed by [`Id`] goes through hashbrown with the Fx hasher,
//! matching the lookup-heavy access pattern of the adjacency indices.

use rustc_hash::FxBuildHasher;

use crate::Id;

pub type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
pub type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Map from an id to some value.
pub type IdMap<V> = HashMap<Id, V>;

/// Set of ids.
pub type IdSet = HashSet<Id>;

/// Open attribute map carried by every node and link.
pub type DataMap = HashMap<String, crate::Value>;
